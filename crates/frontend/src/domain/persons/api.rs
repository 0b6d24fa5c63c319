use contracts::domain::persons::Person;
use contracts::shared::page::Page;

use crate::shared::api_utils::{get_json, paged_query};

pub async fn fetch_persons(page: usize, size: usize, query: &str) -> Result<Page<Person>, String> {
    get_json(&format!("/persons?{}", paged_query(page, size, query))).await
}

pub async fn fetch_person(id: i64) -> Result<Person, String> {
    get_json(&format!("/persons/{}", id)).await
}

/// All persons attached to a structure, for the distribution form cascade.
pub async fn fetch_persons_of_structure(structure_id: i64) -> Result<Vec<Person>, String> {
    get_json(&format!("/persons/structure/{}/all", structure_id)).await
}
