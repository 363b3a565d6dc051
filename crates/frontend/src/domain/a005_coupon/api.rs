use crate::shared::api_utils::{get_json, page_query, post_json, put_json, ApiError};
use contracts::domain::a005_coupon::{CrearCuponRequest, CuponResponse};
use contracts::domain::common::Page;

pub async fn fetch_coupons(page: usize, size: usize) -> Result<Page<CuponResponse>, ApiError> {
    let path = format!("/admin/cupones{}", page_query(page, size, &[]));
    let result: Page<CuponResponse> = get_json(&path, "cargar los cupones").await?;
    Ok(result.with_request(page, size))
}

pub async fn create_coupon(request: CrearCuponRequest) -> Result<CuponResponse, ApiError> {
    post_json("/admin/cupones", &request, "crear el cupón").await
}

pub async fn update_coupon(id: i64, request: CrearCuponRequest) -> Result<CuponResponse, ApiError> {
    put_json(&format!("/admin/cupones/{}", id), &request, "actualizar el cupón").await
}

/// Create or update, depending on whether the form edits an existing coupon.
pub async fn save_coupon(
    (id, request): (Option<i64>, CrearCuponRequest),
) -> Result<CuponResponse, ApiError> {
    match id {
        Some(id) => update_coupon(id, request).await,
        None => create_coupon(request).await,
    }
}
