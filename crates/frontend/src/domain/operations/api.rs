use contracts::domain::operations::Operation;
use contracts::shared::page::Page;

use crate::shared::api_utils::{get_json, paged_query};

pub async fn fetch_operations(
    page: usize,
    size: usize,
    query: &str,
) -> Result<Page<Operation>, String> {
    get_json(&format!("/operations?{}", paged_query(page, size, query))).await
}

/// Unpaged journal, used by the dashboard aggregations.
pub async fn fetch_all_operations() -> Result<Vec<Operation>, String> {
    get_json("/operations/all").await
}
