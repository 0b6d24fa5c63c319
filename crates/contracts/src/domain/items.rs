use serde::{Deserialize, Serialize};

use super::articles::Article;

/// Lifecycle status of a serialized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    InStock,
    Distributed,
    UnderRepair,
    Reformed,
    Repaired,
}

impl ItemStatus {
    /// Human label, underscores replaced with spaces.
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::InStock => "IN STOCK",
            ItemStatus::Distributed => "DISTRIBUTED",
            ItemStatus::UnderRepair => "UNDER REPAIR",
            ItemStatus::Reformed => "REFORMED",
            ItemStatus::Repaired => "REPAIRED",
        }
    }
}

/// A single serialized unit of a hardware article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub serial_number: String,
    pub article_id: i64,
    pub status: ItemStatus,
    /// Expanded by some endpoints (search results, operation details).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,
}

impl Item {
    /// "Model (SN)" display string used in pickers and operation rows.
    pub fn display_label(&self) -> String {
        match &self.article {
            Some(a) => format!("{} ({})", a.model, self.serial_number),
            None => self.serial_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_repr() {
        let item: Item = serde_json::from_str(
            r#"{"id":7,"serialNumber":"SN-001","articleId":1,"status":"UNDER_REPAIR"}"#,
        )
        .unwrap();
        assert_eq!(item.status, ItemStatus::UnderRepair);
        assert_eq!(item.status.label(), "UNDER REPAIR");
        assert!(item.article.is_none());
    }

    #[test]
    fn display_label_prefers_article_model() {
        let item: Item = serde_json::from_str(
            r#"{"id":7,"serialNumber":"SN-001","articleId":1,"status":"IN_STOCK",
                "article":{"id":1,"model":"Latitude 5530","designation":"Laptop","type":"HARDWARE","quantity":4}}"#,
        )
        .unwrap();
        assert_eq!(item.display_label(), "Latitude 5530 (SN-001)");
    }
}
