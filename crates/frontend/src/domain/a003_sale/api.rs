use crate::shared::api_utils::{get_json, post_json, put_optional, ApiError};
use crate::shared::list_utils::ListQuery;
use contracts::domain::a003_sale::{CreateDraftSaleRequest, CreateDraftSaleResponse, Sale};
use contracts::domain::common::Page;

pub async fn fetch_sales(query: &ListQuery) -> Result<Page<Sale>, ApiError> {
    let path = format!("/venta/paginadas{}", query.to_query_string());
    let page: Page<Sale> = get_json(&path, "cargar las ventas").await?;
    Ok(page.with_request(query.page, query.size))
}

pub async fn create_draft_sale(
    usuario_creador: String,
) -> Result<CreateDraftSaleResponse, ApiError> {
    let body = CreateDraftSaleRequest { usuario_creador };
    post_json("/venta/directa/borrador", &body, "crear la orden").await
}

/// The backend may answer with the updated sale or with an empty body.
pub async fn cancel_sale(id: i64) -> Result<Option<Sale>, ApiError> {
    put_optional(&format!("/venta/{}/cancelar", id), "cancelar la venta").await
}
