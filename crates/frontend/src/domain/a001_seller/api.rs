use crate::shared::api_utils::{get_json, page_query, post_json, ApiError};
use contracts::domain::a001_seller::{CreateSellerRequest, Seller};
use contracts::domain::common::Page;

pub async fn fetch_sellers(page: usize, size: usize) -> Result<Page<Seller>, ApiError> {
    let path = format!("/vendedores{}", page_query(page, size, &[]));
    let result: Page<Seller> = get_json(&path, "cargar los vendedores").await?;
    Ok(result.with_request(page, size))
}

/// Lookup by id. 404 and 400 come back as [`ApiError::NotFound`] and
/// [`ApiError::Rejected`] so the view can show them inline.
pub async fn fetch_seller(id: i64) -> Result<Seller, ApiError> {
    get_json(&format!("/vendedores/{}", id), "buscar el vendedor")
        .await
        .map_err(ApiError::into_lookup)
}

pub async fn create_seller(request: CreateSellerRequest) -> Result<Seller, ApiError> {
    post_json("/vendedores", &request, "registrar el vendedor").await
}
