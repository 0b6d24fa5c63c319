use contracts::domain::items::Item;
use contracts::shared::page::Page;

use crate::shared::api_utils::{get_json, paged_query, put_empty};

pub async fn fetch_items_for_article(
    article_id: i64,
    page: usize,
    size: usize,
    query: &str,
) -> Result<Page<Item>, String> {
    get_json(&format!(
        "/items/article/{}?{}",
        article_id,
        paged_query(page, size, query)
    ))
    .await
}

/// Serial-number search across all items.
pub async fn search_items(serial: &str) -> Result<Vec<Item>, String> {
    if serial.trim().len() < 2 {
        return Ok(Vec::new());
    }
    get_json(&format!(
        "/items/search/{}",
        urlencoding::encode(serial.trim())
    ))
    .await
}

/// Serial-number search restricted to the items a person currently holds.
pub async fn search_items_of_person(person_id: i64, serial: &str) -> Result<Vec<Item>, String> {
    if serial.trim().len() < 2 {
        return Ok(Vec::new());
    }
    get_json(&format!(
        "/items/search/person/{}/{}",
        person_id,
        urlencoding::encode(serial.trim())
    ))
    .await
}

pub async fn mark_repaired(item_id: i64, user_id: i64) -> Result<(), String> {
    put_empty(&format!("/items/{}/repaired?userId={}", item_id, user_id)).await
}

pub async fn mark_reformed(item_id: i64, user_id: i64) -> Result<(), String> {
    put_empty(&format!("/items/{}/reformed?userId={}", item_id, user_id)).await
}
