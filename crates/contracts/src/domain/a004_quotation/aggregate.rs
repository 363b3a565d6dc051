use crate::domain::common::{round_currency, FieldError, Lifecycle};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// IGV, applied at a fixed rate to quotation subtotals.
pub const IGV_RATE: f64 = 0.18;

/// Default validity of a new quotation, in days.
pub const DEFAULT_VALIDITY_DAYS: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuotationStatus {
    #[serde(rename = "BORRADOR")]
    Draft,
    #[serde(rename = "ENVIADA")]
    Sent,
    #[serde(rename = "ACEPTADA")]
    Accepted,
}

impl QuotationStatus {
    pub const ALL: [QuotationStatus; 3] = [
        QuotationStatus::Draft,
        QuotationStatus::Sent,
        QuotationStatus::Accepted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "Borrador",
            QuotationStatus::Sent => "Enviada",
            QuotationStatus::Accepted => "Aceptada",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "BORRADOR",
            QuotationStatus::Sent => "ENVIADA",
            QuotationStatus::Accepted => "ACEPTADA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotationAction {
    /// "Enviar por email"; notifies the client.
    Send,
    /// Client accepted the offer. Needs explicit confirmation in the UI.
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuotationError {
    #[error("La cotización ya no es un borrador y no puede modificarse")]
    NotEditable,
    #[error("Ítem {0} no encontrado")]
    ItemNotFound(String),
}

/// Catalog entry that can be added to a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: String,
    pub nombre: String,
    pub precio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItem {
    pub id: String,
    pub descripcion: String,
    pub cantidad: u32,
    pub precio_unitario: f64,
}

impl QuotationItem {
    pub fn new(descripcion: impl Into<String>, cantidad: u32, precio_unitario: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            descripcion: descripcion.into(),
            cantidad: cantidad.max(1),
            precio_unitario,
        }
    }

    /// Always derived from quantity and unit price.
    pub fn total(&self) -> f64 {
        round_currency(self.cantidad as f64 * self.precio_unitario)
    }
}

/// Cotización. Line items are managed entirely on the client until the
/// quotation is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: String,
    pub cliente: String,
    pub fecha_emision: NaiveDate,
    pub fecha_vencimiento: NaiveDate,
    pub estado: QuotationStatus,
    #[serde(default)]
    pub items: Vec<QuotationItem>,
}

impl Quotation {
    /// Fresh draft with no items, expiring after the default validity period.
    pub fn new_draft(cliente: impl Into<String>, fecha_emision: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            cliente: cliente.into(),
            fecha_emision,
            fecha_vencimiento: fecha_emision + Duration::days(DEFAULT_VALIDITY_DAYS),
            estado: QuotationStatus::Draft,
            items: Vec::new(),
        }
    }

    pub fn is_editable(&self) -> bool {
        self.estado == QuotationStatus::Draft
    }

    /// Conversion to a sale happens outside the quotation's own lifecycle and
    /// is only offered once accepted.
    pub fn can_convert_to_sale(&self) -> bool {
        self.estado == QuotationStatus::Accepted
    }

    fn ensure_editable(&self) -> Result<(), QuotationError> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(QuotationError::NotEditable)
        }
    }

    /// Adds one unit of `product` as a new line. Adding the same product twice
    /// yields two separate lines.
    pub fn add_item(&mut self, product: &CatalogProduct) -> Result<String, QuotationError> {
        self.ensure_editable()?;
        let item = QuotationItem::new(product.nombre.clone(), 1, product.precio);
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    pub fn remove_item(&mut self, item_id: &str) -> Result<(), QuotationError> {
        self.ensure_editable()?;
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() == before {
            return Err(QuotationError::ItemNotFound(item_id.to_string()));
        }
        Ok(())
    }

    /// Sets the quantity of a line; anything below one is clamped to one.
    pub fn update_quantity(&mut self, item_id: &str, cantidad: i64) -> Result<u32, QuotationError> {
        self.ensure_editable()?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| QuotationError::ItemNotFound(item_id.to_string()))?;
        let clamped = cantidad.clamp(1, u32::MAX as i64) as u32;
        item.cantidad = clamped;
        Ok(clamped)
    }

    pub fn subtotal(&self) -> f64 {
        round_currency(self.items.iter().map(QuotationItem::total).sum())
    }

    pub fn igv(&self) -> f64 {
        round_currency(self.subtotal() * IGV_RATE)
    }

    pub fn total(&self) -> f64 {
        round_currency(self.subtotal() + self.igv())
    }

    pub fn validate_for_save(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.cliente.trim().is_empty() {
            errors.push(FieldError::new("cliente", "Ingrese el nombre del cliente"));
        }
        if self.items.is_empty() {
            errors.push(FieldError::new("items", "Agregue al menos un producto"));
        }
        if self.fecha_vencimiento < self.fecha_emision {
            errors.push(FieldError::new(
                "fechaVencimiento",
                "La fecha de vencimiento no puede ser anterior a la emisión",
            ));
        }
        errors
    }
}

impl Lifecycle for Quotation {
    type Id = String;
    type Status = QuotationStatus;
    type Action = QuotationAction;

    fn id(&self) -> &String {
        &self.id
    }

    fn status(&self) -> QuotationStatus {
        self.estado
    }

    fn set_status(&mut self, status: QuotationStatus) {
        self.estado = status;
    }

    fn next_status(action: QuotationAction, from: QuotationStatus) -> Option<QuotationStatus> {
        match (action, from) {
            (QuotationAction::Send, QuotationStatus::Draft) => Some(QuotationStatus::Sent),
            (QuotationAction::Accept, QuotationStatus::Sent) => Some(QuotationStatus::Accepted),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn plan() -> CatalogProduct {
        CatalogProduct {
            id: "plan-ilimitado".into(),
            nombre: "Plan Móvil Ilimitado".into(),
            precio: 65.0,
        }
    }

    #[test]
    fn test_new_draft_is_empty() {
        let q = Quotation::new_draft("Juan Pérez", date("2025-03-01"));
        assert_eq!(q.estado, QuotationStatus::Draft);
        assert!(q.items.is_empty());
        assert_eq!(q.fecha_vencimiento, date("2025-03-16"));
        assert_eq!(q.total(), 0.0);
    }

    #[test]
    fn test_single_item_totals() {
        let mut q = Quotation::new_draft("Juan Pérez", date("2025-03-01"));
        let id = q.add_item(&plan()).unwrap();
        q.update_quantity(&id, 2).unwrap();

        assert_eq!(q.items[0].total(), 130.0);
        assert_eq!(format!("{:.2}", q.subtotal()), "130.00");
        assert_eq!(format!("{:.2}", q.igv()), "23.40");
        assert_eq!(format!("{:.2}", q.total()), "153.40");
        assert!(q.validate_for_save().is_empty());
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut q = Quotation::new_draft("Ana", date("2025-03-01"));
        let a = q.add_item(&plan()).unwrap();
        let b = q.add_item(&CatalogProduct {
            id: "router".into(),
            nombre: "Router 5G".into(),
            precio: 249.9,
        })
        .unwrap();
        q.update_quantity(&b, 3).unwrap();
        q.remove_item(&a).unwrap();

        let expected = q.subtotal() + q.subtotal() * IGV_RATE;
        assert!((q.total() - expected).abs() < 0.005);
        assert_eq!(q.subtotal(), 749.7);
    }

    #[test]
    fn test_duplicate_products_are_separate_lines() {
        let mut q = Quotation::new_draft("Ana", date("2025-03-01"));
        let a = q.add_item(&plan()).unwrap();
        let b = q.add_item(&plan()).unwrap();
        assert_ne!(a, b);
        assert_eq!(q.items.len(), 2);
        assert_eq!(q.subtotal(), 130.0);
    }

    #[test]
    fn test_quantity_below_one_clamps() {
        let mut q = Quotation::new_draft("Ana", date("2025-03-01"));
        let id = q.add_item(&plan()).unwrap();
        assert_eq!(q.update_quantity(&id, 0).unwrap(), 1);
        assert_eq!(q.update_quantity(&id, -4).unwrap(), 1);
        assert_eq!(q.items[0].cantidad, 1);
        assert_eq!(q.subtotal(), 65.0);
    }

    #[test]
    fn test_unknown_item() {
        let mut q = Quotation::new_draft("Ana", date("2025-03-01"));
        assert_eq!(
            q.remove_item("nope"),
            Err(QuotationError::ItemNotFound("nope".into()))
        );
        assert!(q.update_quantity("nope", 2).is_err());
    }

    #[test]
    fn test_sent_quotation_is_frozen() {
        let mut q = Quotation::new_draft("Ana", date("2025-03-01"));
        q.add_item(&plan()).unwrap();
        q.estado = QuotationStatus::Sent;
        assert_eq!(q.add_item(&plan()), Err(QuotationError::NotEditable));
        assert_eq!(q.items.len(), 1);
    }

    #[test]
    fn test_transition_table() {
        use QuotationAction::*;
        use QuotationStatus::*;
        assert_eq!(Quotation::next_status(Send, Draft), Some(Sent));
        assert_eq!(Quotation::next_status(Send, Sent), None);
        assert_eq!(Quotation::next_status(Send, Accepted), None);
        assert_eq!(Quotation::next_status(Accept, Sent), Some(Accepted));
        assert_eq!(Quotation::next_status(Accept, Draft), None);
        assert_eq!(Quotation::next_status(Accept, Accepted), None);
    }

    #[test]
    fn test_save_requires_client_and_items() {
        let q = Quotation::new_draft("  ", date("2025-03-01"));
        let fields: Vec<_> = q.validate_for_save().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["cliente", "items"]);
    }
}
