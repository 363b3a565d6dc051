use crate::shared::api_utils::{get_json, page_query, ApiError};
use contracts::domain::a002_branch::Branch;
use contracts::domain::common::Page;

pub async fn fetch_branches(page: usize, size: usize) -> Result<Page<Branch>, ApiError> {
    let path = format!("/sedes{}", page_query(page, size, &[]));
    let result: Page<Branch> = get_json(&path, "cargar las sedes").await?;
    Ok(result.with_request(page, size))
}
