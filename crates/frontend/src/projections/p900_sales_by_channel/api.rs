use crate::shared::api_utils::{get_json, ApiError};
use contracts::projections::p900_sales_by_channel::SalesByChannelRow;

pub async fn fetch_sales_by_channel() -> Result<Vec<SalesByChannelRow>, ApiError> {
    get_json("/venta/analisis/ventas-por-canal", "cargar las ventas por canal").await
}
