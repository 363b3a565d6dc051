//! Status transition controller shared by sales and quotations.
//!
//! The allowed moves live in each entity's [`Lifecycle`] table. A transition
//! that the table refuses is a no-op and never reaches `dispatch`. A failed
//! dispatch leaves the caller's list untouched; a successful one yields the
//! single updated record, taken from the response body or, when the backend
//! answers without one, from the locally computed next status.

use crate::shared::api_utils::ApiError;
use contracts::domain::common::Lifecycle;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError {
    #[error("La acción no está permitida en el estado actual ({0})")]
    NotAllowed(String),
    #[error("El registro ya no está en la lista")]
    Missing,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Check the table only. Used before opening a confirmation dialog.
pub fn plan<T: Lifecycle>(
    items: &[T],
    id: &T::Id,
    action: T::Action,
) -> Result<(T, T::Status), TransitionError> {
    let current = items
        .iter()
        .find(|item| item.id() == id)
        .ok_or(TransitionError::Missing)?;
    let next = T::next_status(action, current.status())
        .ok_or_else(|| TransitionError::NotAllowed(format!("{:?}", current.status())))?;
    Ok((current.clone(), next))
}

/// Validate, dispatch, and build the reconciled record.
pub async fn run_transition<T, F, Fut>(
    items: &[T],
    id: &T::Id,
    action: T::Action,
    dispatch: F,
) -> Result<T, TransitionError>
where
    T: Lifecycle,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<Option<T>, ApiError>>,
{
    let (current, next) = plan(items, id, action)?;
    log::info!("transition {:?} on {:?}: {:?} -> {:?}", action, id, current.status(), next);

    let record = match dispatch(current.clone()).await? {
        Some(from_server) => from_server,
        None => {
            let mut local = current;
            local.set_status(next);
            local
        }
    };
    Ok(record)
}

/// Swap the record with the same id in place. Returns `false` if it is no
/// longer in the list (e.g. a re-fetch replaced the page meanwhile).
pub fn replace_record<T: Lifecycle>(items: &mut [T], record: T) -> bool {
    match items.iter_mut().find(|item| item.id() == record.id()) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a003_sale::{Sale, SaleAction, SaleOrigin, SaleStatus};
    use contracts::domain::a004_quotation::{Quotation, QuotationAction, QuotationStatus};
    use futures::executor::block_on;
    use std::cell::Cell;

    fn sale(id: i64, num: &str, estado: SaleStatus) -> Sale {
        Sale {
            id,
            num_venta: num.into(),
            origen_venta: SaleOrigin::Direct,
            estado,
            fecha_venta_creada: "2025-03-10T10:00:00".into(),
            nombre_cliente: "Cliente".into(),
        }
    }

    fn quotation(estado: QuotationStatus) -> Quotation {
        let fecha = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut q = Quotation::new_draft("Juan Pérez", fecha);
        q.estado = estado;
        q
    }

    #[test]
    fn test_cancel_draft_sale_dispatches_once_and_reconciles() {
        let mut items = vec![
            sale(6, "VENTA-006", SaleStatus::Confirmed),
            sale(7, "VENTA-007", SaleStatus::Draft),
        ];
        let calls = Cell::new(0);

        let updated = block_on(run_transition(&items, &7, SaleAction::Cancel, |s| {
            calls.set(calls.get() + 1);
            assert_eq!(s.id, 7);
            async { Ok(None) }
        }))
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(updated.estado, SaleStatus::Cancelled);
        assert_eq!(updated.estado.label(), "Cancelada");
        assert!(!updated.is_editable());

        assert!(replace_record(&mut items, updated));
        assert_eq!(items[0].estado, SaleStatus::Confirmed);
        assert_eq!(items[1].estado, SaleStatus::Cancelled);
    }

    #[test]
    fn test_server_body_wins_over_local_status() {
        let items = vec![sale(7, "VENTA-007", SaleStatus::Draft)];
        let updated = block_on(run_transition(&items, &7, SaleAction::Cancel, |mut s| {
            s.estado = SaleStatus::Cancelled;
            s.nombre_cliente = "Juan Pérez".into();
            async move { Ok(Some(s)) }
        }))
        .unwrap();
        assert_eq!(updated.nombre_cliente, "Juan Pérez");
    }

    #[test]
    fn test_disallowed_transition_never_dispatches() {
        let items = vec![sale(7, "VENTA-007", SaleStatus::Cancelled)];
        let calls = Cell::new(0);
        let result = block_on(run_transition(&items, &7, SaleAction::Cancel, |_| {
            calls.set(calls.get() + 1);
            async { Ok(None) }
        }));
        assert!(matches!(result, Err(TransitionError::NotAllowed(_))));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_send_is_idempotent_outside_draft() {
        for estado in [QuotationStatus::Sent, QuotationStatus::Accepted] {
            let q = quotation(estado);
            let id = q.id.clone();
            let items = vec![q];
            let calls = Cell::new(0);
            let result = block_on(run_transition(&items, &id, QuotationAction::Send, |_| {
                calls.set(calls.get() + 1);
                async { Ok(None) }
            }));
            assert!(result.is_err());
            assert_eq!(calls.get(), 0, "no duplicate notification for {:?}", estado);
            assert_eq!(items[0].estado, estado);
        }
    }

    #[test]
    fn test_accept_requires_sent() {
        let q = quotation(QuotationStatus::Sent);
        let id = q.id.clone();
        let (_, next) = plan(&[q], &id, QuotationAction::Accept).unwrap();
        assert_eq!(next, QuotationStatus::Accepted);

        let draft = quotation(QuotationStatus::Draft);
        let id = draft.id.clone();
        assert!(plan(&[draft], &id, QuotationAction::Accept).is_err());
    }

    #[test]
    fn test_failed_dispatch_reports_error() {
        let items = vec![sale(7, "VENTA-007", SaleStatus::Draft)];
        let result = block_on(run_transition(&items, &7, SaleAction::Cancel, |_| async {
            Err(ApiError::Http {
                status: 500,
                message: "Error al cancelar la venta (HTTP 500)".into(),
            })
        }));
        assert!(matches!(result, Err(TransitionError::Api(_))));
        assert_eq!(items[0].estado, SaleStatus::Draft);
    }

    #[test]
    fn test_missing_record() {
        let items = vec![sale(7, "VENTA-007", SaleStatus::Draft)];
        assert_eq!(
            plan(&items, &99, SaleAction::Cancel).unwrap_err(),
            TransitionError::Missing
        );
        let mut items = items;
        assert!(!replace_record(&mut items, sale(99, "VENTA-099", SaleStatus::Draft)));
    }
}
