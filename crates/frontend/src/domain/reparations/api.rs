use contracts::domain::operations::{Operation, ReparationRequest};
use contracts::shared::page::Page;

use crate::shared::api_utils::{get_json, paged_query, post_json_discard};

pub async fn fetch_reparations(
    page: usize,
    size: usize,
    query: &str,
) -> Result<Page<Operation>, String> {
    get_json(&format!("/reparations?{}", paged_query(page, size, query))).await
}

/// The backend accepts a batch, so a single registration posts a one-element
/// array.
pub async fn register_reparations(requests: &[ReparationRequest]) -> Result<(), String> {
    post_json_discard("/reparations", &requests).await
}
