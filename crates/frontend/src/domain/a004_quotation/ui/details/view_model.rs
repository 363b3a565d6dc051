use crate::domain::a004_quotation::catalog::find_product;
use contracts::domain::a004_quotation::Quotation;
use contracts::domain::common::FieldError;
use leptos::prelude::*;

/// Quantity typed in a line-item cell. Anything that is not a number reads
/// as 1; the aggregate clamps the rest.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(1)
}

/// ViewModel of the quotation editor. Totals are derived from the draft on
/// every read, never stored.
#[derive(Clone, Copy)]
pub struct QuotationEditorVm {
    pub draft: RwSignal<Quotation>,
    pub cliente: RwSignal<String>,
    pub product_id: RwSignal<String>,
    pub errors: RwSignal<Vec<FieldError>>,
}

impl QuotationEditorVm {
    pub fn new(quotation: Quotation) -> Self {
        Self {
            cliente: RwSignal::new(quotation.cliente.clone()),
            draft: RwSignal::new(quotation),
            product_id: RwSignal::new(String::new()),
            errors: RwSignal::new(Vec::new()),
        }
    }

    fn report<T>(&self, result: Result<T, impl std::fmt::Display>) {
        if let Err(e) = result {
            self.errors.set(vec![FieldError::new("items", e.to_string())]);
        }
    }

    pub fn add_selected(&self) {
        let Some(product) = find_product(&self.product_id.get_untracked()) else {
            self.errors.set(vec![FieldError::new("items", "Seleccione un producto")]);
            return;
        };
        self.errors.set(Vec::new());
        let result = self.draft.try_update(|q| q.add_item(&product));
        if let Some(result) = result {
            self.report(result);
        }
    }

    pub fn remove_item(&self, item_id: &str) {
        if let Some(result) = self.draft.try_update(|q| q.remove_item(item_id)) {
            self.report(result);
        }
    }

    pub fn update_quantity(&self, item_id: &str, raw: &str) {
        let cantidad = parse_quantity(raw);
        if let Some(result) = self.draft.try_update(|q| q.update_quantity(item_id, cantidad)) {
            self.report(result);
        }
    }

    /// Quantity shown in a line's input. Re-read on every draft change, so a
    /// clamped entry (0, negatives) is written back as the stored value.
    pub fn quantity_text(&self, item_id: String) -> Signal<String> {
        let draft = self.draft;
        Signal::derive(move || {
            draft.with(|q| {
                q.items
                    .iter()
                    .find(|i| i.id == item_id)
                    .map(|i| i.cantidad.to_string())
                    .unwrap_or_default()
            })
        })
    }

    pub fn line_total(&self, item_id: String) -> Signal<f64> {
        let draft = self.draft;
        Signal::derive(move || {
            draft.with(|q| {
                q.items
                    .iter()
                    .find(|i| i.id == item_id)
                    .map(|i| i.total())
                    .unwrap_or_default()
            })
        })
    }

    pub fn subtotal(&self) -> Signal<f64> {
        let draft = self.draft;
        Signal::derive(move || draft.with(Quotation::subtotal))
    }

    pub fn igv(&self) -> Signal<f64> {
        let draft = self.draft;
        Signal::derive(move || draft.with(Quotation::igv))
    }

    pub fn total(&self) -> Signal<f64> {
        let draft = self.draft;
        Signal::derive(move || draft.with(Quotation::total))
    }

    /// Validate and hand the quotation to `on_saved`. Saving never changes
    /// the status: a new quotation is stored as a draft.
    pub fn save_command(&self, on_saved: impl FnOnce(Quotation)) {
        let cliente = self.cliente.get_untracked().trim().to_string();
        self.draft.update(|q| q.cliente = cliente);
        let quotation = self.draft.get_untracked();
        let errors = quotation.validate_for_save();
        if errors.is_empty() {
            self.errors.set(Vec::new());
            log::info!("quotation {} saved ({} items)", quotation.id, quotation.items.len());
            on_saved(quotation);
        } else {
            self.errors.set(errors);
        }
    }
}
