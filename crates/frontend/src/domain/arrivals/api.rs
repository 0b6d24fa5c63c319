use contracts::domain::operations::{ArrivalRequest, Operation};
use contracts::shared::page::Page;

use crate::shared::api_utils::{get_json, paged_query, post_json_discard};

pub async fn fetch_arrivals(
    page: usize,
    size: usize,
    query: &str,
) -> Result<Page<Operation>, String> {
    get_json(&format!("/arrivals?{}", paged_query(page, size, query))).await
}

pub async fn create_arrival(request: &ArrivalRequest) -> Result<(), String> {
    post_json_discard("/arrivals", request).await
}
