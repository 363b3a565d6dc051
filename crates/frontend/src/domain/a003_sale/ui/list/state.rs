use crate::shared::list_utils::{Filterable, FilterSet, ListQuery};
use contracts::domain::a003_sale::Sale;
use leptos::prelude::*;

pub const COL_NUM_VENTA: &str = "numVenta";
pub const COL_CLIENTE: &str = "nombreCliente";
pub const COL_ESTADO: &str = "estado";
pub const COL_FECHA: &str = "fechaVentaCreada";

#[derive(Clone, Debug)]
pub struct SaleListState {
    pub items: Vec<Sale>,
    pub query: ListQuery,
    pub filters: FilterSet,
    pub is_loaded: bool,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for SaleListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::new(10, COL_FECHA),
            filters: FilterSet::new(),
            is_loaded: false,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<SaleListState> {
    RwSignal::new(SaleListState::default())
}

impl Filterable for Sale {
    fn column_value(&self, column: &str) -> Option<String> {
        match column {
            COL_NUM_VENTA => Some(self.num_venta.clone()),
            COL_CLIENTE => Some(self.nombre_cliente.clone()),
            COL_ESTADO => Some(self.estado.code().to_string()),
            COL_FECHA => Some(self.fecha_venta_creada.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{apply_filters, ColumnFilter, DateFilter};
    use chrono::{FixedOffset, NaiveDate};
    use contracts::domain::a003_sale::{SaleOrigin, SaleStatus};

    fn sale(id: i64, cliente: &str, estado: SaleStatus, fecha: &str) -> Sale {
        Sale {
            id,
            num_venta: format!("VENTA-{:03}", id),
            origen_venta: SaleOrigin::Direct,
            estado,
            fecha_venta_creada: fecha.into(),
            nombre_cliente: cliente.into(),
        }
    }

    fn page() -> Vec<Sale> {
        vec![
            sale(7, "Juan Pérez", SaleStatus::Draft, "2025-03-10T14:22:00"),
            sale(8, "María Quispe", SaleStatus::Confirmed, "2025-03-11T09:00:00"),
            sale(9, "juan carlos", SaleStatus::Cancelled, "2025-03-11T04:30:00Z"),
        ]
    }

    #[test]
    fn test_client_filter_is_case_insensitive() {
        let mut filters = FilterSet::new();
        filters.set(COL_CLIENTE, ColumnFilter::Contains("JUAN".into()));
        let ids: Vec<i64> = apply_filters(&page(), &filters).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 9]);
    }

    #[test]
    fn test_status_filter_uses_wire_code() {
        let mut filters = FilterSet::new();
        filters.set(COL_ESTADO, ColumnFilter::Exact("CONFIRMADA".into()));
        let visible = apply_filters(&page(), &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].num_venta, "VENTA-008");
    }

    #[test]
    fn test_date_filter_in_lima_time() {
        // 04:30Z on the 11th is still the 10th in Lima (UTC-5).
        let lima = FixedOffset::west_opt(5 * 3600).unwrap();
        let mut filters = FilterSet::new();
        filters.set_date(Some(DateFilter {
            column: COL_FECHA.into(),
            day: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            offset: lima,
        }));
        let ids: Vec<i64> = apply_filters(&page(), &filters).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 9]);
    }
}
