use crate::shared::list_utils::ListQuery;
use chrono::NaiveDate;
use contracts::domain::a005_coupon::{CouponStatus, CuponResponse, DiscountType};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CouponListState {
    pub items: Vec<CuponResponse>,
    pub query: ListQuery,
    pub is_loaded: bool,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for CouponListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::new(10, "fechaExpiracion"),
            is_loaded: false,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<CouponListState> {
    RwSignal::new(CouponListState::default())
}

/// `<For>` key over every column, so an edited coupon re-renders its row.
pub type RowKey = (
    i64,
    String,
    DiscountType,
    u64,
    NaiveDate,
    Option<u32>,
    u32,
    u64,
    CouponStatus,
);

pub fn row_key(c: &CuponResponse) -> RowKey {
    (
        c.id,
        c.codigo.clone(),
        c.tipo_descuento,
        c.valor.to_bits(),
        c.fecha_expiracion,
        c.usos_maximos,
        c.usos_actuales,
        c.monto_minimo_requerido.to_bits(),
        c.estado,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon() -> CuponResponse {
        CuponResponse {
            id: 4,
            codigo: "VERANO10".into(),
            tipo_descuento: DiscountType::Porcentaje,
            valor: 10.0,
            fecha_expiracion: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            usos_maximos: Some(100),
            usos_actuales: 3,
            monto_minimo_requerido: 0.0,
            estado: CouponStatus::Activo,
        }
    }

    #[test]
    fn test_row_key_tracks_edited_discount() {
        let before = coupon();
        assert_eq!(row_key(&before), row_key(&before.clone()));

        let mut after = before.clone();
        after.tipo_descuento = DiscountType::MontoFijo;
        after.valor = 20.0;
        assert_ne!(row_key(&before), row_key(&after));
        assert_eq!(before.value_label(), "10%");
        assert_eq!(after.value_label(), "S/ 20.00");
    }

    #[test]
    fn test_row_key_tracks_expiry_minimum_and_status() {
        let base = coupon();

        let mut expiry = base.clone();
        expiry.fecha_expiracion = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_ne!(row_key(&base), row_key(&expiry));

        let mut minimum = base.clone();
        minimum.monto_minimo_requerido = 50.0;
        assert_ne!(row_key(&base), row_key(&minimum));

        let mut status = base.clone();
        status.estado = CouponStatus::Expirado;
        assert_ne!(row_key(&base), row_key(&status));
    }
}
