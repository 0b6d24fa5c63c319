use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard, computed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_articles: u64,
    pub items_in_stock: u64,
    pub distributed_items: u64,
    pub under_repair: u64,
    pub reformed_count: u64,
    pub structures_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        let raw = r#"{
            "totalArticles": 12,
            "itemsInStock": 40,
            "distributedItems": 7,
            "underRepair": 2,
            "reformedCount": 1,
            "structuresCount": 5
        }"#;
        let stats: Stats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.total_articles, 12);
        assert_eq!(stats.items_in_stock, 40);
        assert_eq!(stats.structures_count, 5);
    }
}
