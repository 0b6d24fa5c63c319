use contracts::domain::structures::Structure;
use contracts::shared::page::Page;

use crate::shared::api_utils::{get_json, paged_query};

pub async fn fetch_structures(
    page: usize,
    size: usize,
    query: &str,
) -> Result<Page<Structure>, String> {
    get_json(&format!("/structures?{}", paged_query(page, size, query))).await
}

pub async fn fetch_structure(id: i64) -> Result<Structure, String> {
    get_json(&format!("/structures/{}", id)).await
}

/// Top-level structures only.
pub async fn fetch_directions() -> Result<Vec<Structure>, String> {
    get_json("/structures/directions").await
}

pub async fn fetch_sub_directions(direction_id: i64) -> Result<Vec<Structure>, String> {
    get_json(&format!("/structures/sub_directions/{}", direction_id)).await
}
