use std::collections::BTreeMap;

use contracts::domain::items::Item;
use contracts::shared::stats::Stats;

use crate::shared::api_utils::get_json;

pub async fn get_stats() -> Result<Stats, String> {
    get_json("/stats").await
}

/// In-stock counts per designation ("Laptop" -> 12).
pub async fn get_articles_in_stock() -> Result<BTreeMap<String, u64>, String> {
    get_json("/articles/stock").await
}

/// Unpaged item list for the status chart.
pub async fn get_all_items() -> Result<Vec<Item>, String> {
    get_json("/items/all").await
}
