use contracts::domain::articles::{Article, ArticleDraft};
use contracts::shared::page::Page;

use crate::shared::api_utils::{get_json, paged_query, post_json};

pub async fn fetch_articles(
    page: usize,
    size: usize,
    query: &str,
) -> Result<Page<Article>, String> {
    get_json(&format!("/articles?{}", paged_query(page, size, query))).await
}

pub async fn fetch_article(id: i64) -> Result<Article, String> {
    get_json(&format!("/articles/{}", id)).await
}

/// Name search used by the arrival form. `type_filter` is "ALL", "HARDWARE"
/// or "CONSUMABLE".
pub async fn search_articles(query: &str, type_filter: &str) -> Result<Vec<Article>, String> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }
    get_json(&format!(
        "/articles/searchByName/{}/{}",
        urlencoding::encode(type_filter),
        urlencoding::encode(query.trim())
    ))
    .await
}

pub async fn create_article(draft: &ArticleDraft) -> Result<Article, String> {
    post_json("/articles", draft).await
}
