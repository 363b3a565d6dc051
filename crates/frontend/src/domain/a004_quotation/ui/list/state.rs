use crate::shared::list_utils::{sort_list, Sortable, SortDirection};
use chrono::NaiveDate;
use contracts::domain::a004_quotation::{Quotation, QuotationStatus};
use leptos::prelude::*;
use std::cmp::Ordering;

pub const COL_CLIENTE: &str = "cliente";
pub const COL_EMISION: &str = "fechaEmision";
pub const COL_TOTAL: &str = "total";

#[derive(Clone, Debug)]
pub struct QuotationListState {
    pub items: Vec<Quotation>,
    pub sort_field: String,
    pub sort_dir: SortDirection,
}

impl Default for QuotationListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sort_field: COL_EMISION.to_string(),
            sort_dir: SortDirection::Desc,
        }
    }
}

impl QuotationListState {
    /// A new quotation goes to the top of the list; a saved existing one is
    /// replaced where it is.
    pub fn save(&mut self, quotation: Quotation) {
        match self.items.iter_mut().find(|q| q.id == quotation.id) {
            Some(slot) => *slot = quotation,
            None => self.items.insert(0, quotation),
        }
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_field = field.to_string();
            self.sort_dir = SortDirection::Desc;
        }
    }

    pub fn sorted(&self) -> Vec<Quotation> {
        let mut items = self.items.clone();
        sort_list(&mut items, &self.sort_field, self.sort_dir);
        items
    }
}

/// `<For>` key covering every field a row shows, so an edited quotation is
/// re-rendered instead of reusing the stale row.
pub type RowKey = (
    String,
    String,
    NaiveDate,
    NaiveDate,
    QuotationStatus,
    Vec<(String, String, u32, u64)>,
);

pub fn row_key(q: &Quotation) -> RowKey {
    let items = q
        .items
        .iter()
        .map(|i| {
            (
                i.id.clone(),
                i.descripcion.clone(),
                i.cantidad,
                i.precio_unitario.to_bits(),
            )
        })
        .collect();
    (
        q.id.clone(),
        q.cliente.clone(),
        q.fecha_emision,
        q.fecha_vencimiento,
        q.estado,
        items,
    )
}

pub fn create_state() -> RwSignal<QuotationListState> {
    RwSignal::new(QuotationListState::default())
}

impl Sortable for Quotation {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            COL_CLIENTE => self.cliente.to_lowercase().cmp(&other.cliente.to_lowercase()),
            COL_TOTAL => self.total().total_cmp(&other.total()),
            _ => self.fecha_emision.cmp(&other.fecha_emision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_quotation::CatalogProduct;

    fn draft(cliente: &str, day: u32) -> Quotation {
        Quotation::new_draft(cliente, NaiveDate::from_ymd_opt(2025, 3, day).unwrap())
    }

    #[test]
    fn test_saving_new_quotation_prepends_draft() {
        let mut state = QuotationListState::default();
        state.save(draft("Ana Torres", 1));

        let mut q = draft("Juan Pérez", 2);
        let plan = CatalogProduct {
            id: "plan-ilimitado".into(),
            nombre: "Plan Móvil Ilimitado".into(),
            precio: 65.0,
        };
        let item = q.add_item(&plan).unwrap();
        q.update_quantity(&item, 2).unwrap();
        state.save(q);

        assert_eq!(state.items.len(), 2);
        let first = &state.items[0];
        assert_eq!(first.cliente, "Juan Pérez");
        assert_eq!(first.estado, QuotationStatus::Draft);
        assert_eq!(first.subtotal(), 130.0);
        assert_eq!(first.igv(), 23.4);
        assert_eq!(first.total(), 153.4);
    }

    #[test]
    fn test_saving_existing_quotation_keeps_position() {
        let mut state = QuotationListState::default();
        let a = draft("Ana Torres", 1);
        state.save(a.clone());
        state.save(draft("Juan Pérez", 2));

        let mut edited = a;
        edited.cliente = "Ana María Torres".into();
        state.save(edited);

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].cliente, "Ana María Torres");
    }

    #[test]
    fn test_sorted_by_client() {
        let mut state = QuotationListState::default();
        state.save(draft("beatriz", 1));
        state.save(draft("Ana", 2));
        state.toggle_sort(COL_CLIENTE);
        state.toggle_sort(COL_CLIENTE);
        let names: Vec<String> = state.sorted().into_iter().map(|q| q.cliente).collect();
        assert_eq!(names, vec!["Ana", "beatriz"]);
    }

    #[test]
    fn test_row_key_changes_when_quantity_changes() {
        let mut q = draft("Juan Pérez", 2);
        let plan = CatalogProduct {
            id: "plan-ilimitado".into(),
            nombre: "Plan Móvil Ilimitado".into(),
            precio: 65.0,
        };
        let item = q.add_item(&plan).unwrap();
        q.update_quantity(&item, 2).unwrap();
        let before = row_key(&q);
        assert_eq!(before, row_key(&q.clone()));

        q.update_quantity(&item, 3).unwrap();
        assert_ne!(before, row_key(&q));
        assert_eq!(q.total(), 230.1);
    }

    #[test]
    fn test_row_key_changes_when_expiry_changes() {
        let mut q = draft("Ana Torres", 1);
        let before = row_key(&q);
        q.fecha_vencimiento = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        assert_ne!(before, row_key(&q));
    }
}
