use crate::domain::common::Lifecycle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleStatus {
    #[serde(rename = "BORRADOR")]
    Draft,
    #[serde(rename = "CONFIRMADA")]
    Confirmed,
    #[serde(rename = "CANCELADA")]
    Cancelled,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Draft,
        SaleStatus::Confirmed,
        SaleStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Draft => "Borrador",
            SaleStatus::Confirmed => "Confirmada",
            SaleStatus::Cancelled => "Cancelada",
        }
    }

    /// Wire spelling, also used as the value of the status filter dropdown.
    pub fn code(&self) -> &'static str {
        match self {
            SaleStatus::Draft => "BORRADOR",
            SaleStatus::Confirmed => "CONFIRMADA",
            SaleStatus::Cancelled => "CANCELADA",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SaleStatus::Draft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleOrigin {
    #[serde(rename = "DIRECTA")]
    Direct,
    #[serde(rename = "LEAD")]
    Lead,
    #[serde(rename = "COTIZACION")]
    Quotation,
}

impl SaleOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            SaleOrigin::Direct => "Directa",
            SaleOrigin::Lead => "Lead",
            SaleOrigin::Quotation => "Cotización",
        }
    }
}

/// Row of `GET /venta/paginadas`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,
    pub num_venta: String,
    pub origen_venta: SaleOrigin,
    pub estado: SaleStatus,
    /// ISO-8601 timestamp as sent by the backend (with or without offset).
    pub fecha_venta_creada: String,
    #[serde(default)]
    pub nombre_cliente: String,
}

impl Sale {
    /// Only drafts can be edited; confirmed and cancelled sales are final.
    pub fn is_editable(&self) -> bool {
        self.estado == SaleStatus::Draft
    }

    pub fn is_cancellable(&self) -> bool {
        self.allows(SaleAction::Cancel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleAction {
    Confirm,
    Cancel,
}

impl SaleAction {
    pub fn label(&self) -> &'static str {
        match self {
            SaleAction::Confirm => "Confirmar venta",
            SaleAction::Cancel => "Cancelar venta",
        }
    }
}

impl Lifecycle for Sale {
    type Id = i64;
    type Status = SaleStatus;
    type Action = SaleAction;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn status(&self) -> SaleStatus {
        self.estado
    }

    fn set_status(&mut self, status: SaleStatus) {
        self.estado = status;
    }

    fn next_status(action: SaleAction, from: SaleStatus) -> Option<SaleStatus> {
        match (action, from) {
            (SaleAction::Confirm, SaleStatus::Draft) => Some(SaleStatus::Confirmed),
            (SaleAction::Cancel, SaleStatus::Draft) => Some(SaleStatus::Cancelled),
            _ => None,
        }
    }
}

/// Body of `POST /venta/directa/borrador`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftSaleRequest {
    pub usuario_creador: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftSaleResponse {
    pub venta_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(estado: SaleStatus) -> Sale {
        Sale {
            id: 7,
            num_venta: "VENTA-007".into(),
            origen_venta: SaleOrigin::Direct,
            estado,
            fecha_venta_creada: "2025-03-10T14:22:00".into(),
            nombre_cliente: "Juan Pérez".into(),
        }
    }

    #[test]
    fn test_sale_decodes_spanish_wire() {
        let json = r#"{
            "id": 7,
            "numVenta": "VENTA-007",
            "origenVenta": "COTIZACION",
            "estado": "BORRADOR",
            "fechaVentaCreada": "2025-03-10T14:22:00",
            "nombreCliente": "Juan Pérez"
        }"#;
        let s: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(s.origen_venta, SaleOrigin::Quotation);
        assert_eq!(s.estado, SaleStatus::Draft);
        assert!(s.is_editable());
    }

    #[test]
    fn test_only_draft_transitions() {
        assert_eq!(
            Sale::next_status(SaleAction::Cancel, SaleStatus::Draft),
            Some(SaleStatus::Cancelled)
        );
        assert_eq!(
            Sale::next_status(SaleAction::Confirm, SaleStatus::Draft),
            Some(SaleStatus::Confirmed)
        );
        for from in [SaleStatus::Confirmed, SaleStatus::Cancelled] {
            assert_eq!(Sale::next_status(SaleAction::Cancel, from), None);
            assert_eq!(Sale::next_status(SaleAction::Confirm, from), None);
        }
    }

    #[test]
    fn test_terminal_sales_are_locked() {
        let cancelled = sale(SaleStatus::Cancelled);
        assert!(!cancelled.is_editable());
        assert!(!cancelled.is_cancellable());
        assert!(cancelled.estado.is_terminal());

        let confirmed = sale(SaleStatus::Confirmed);
        assert!(!confirmed.is_editable());
        assert!(!confirmed.is_cancellable());
    }

    #[test]
    fn test_create_draft_wire_names() {
        let body = serde_json::to_value(CreateDraftSaleRequest {
            usuario_creador: "vendedor".into(),
        })
        .unwrap();
        assert_eq!(body["usuarioCreador"], "vendedor");

        let resp: CreateDraftSaleResponse = serde_json::from_str(r#"{"ventaId":42}"#).unwrap();
        assert_eq!(resp.venta_id, 42);
    }
}
