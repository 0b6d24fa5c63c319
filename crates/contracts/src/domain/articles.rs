use serde::{Deserialize, Serialize};

/// Catalog entry describing a model of equipment.
///
/// Hardware articles own serialized items; consumables are tracked by
/// quantity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleType {
    Hardware,
    Consumable,
}

impl ArticleType {
    pub fn label(&self) -> &'static str {
        match self {
            ArticleType::Hardware => "HARDWARE",
            ArticleType::Consumable => "CONSUMABLE",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub model: String,
    pub designation: String,
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    /// Total tracked units (item count for hardware, stock quantity for
    /// consumables). Owned by the server.
    #[serde(default)]
    pub quantity: u64,
}

/// Payload for creating a new article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub model: String,
    pub designation: String,
    #[serde(rename = "type")]
    pub article_type: Option<ArticleType>,
}

impl ArticleDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model is required.".into());
        }
        if self.designation.trim().is_empty() {
            return Err("Designation is required.".into());
        }
        if self.article_type.is_none() {
            return Err("Please select an article type.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_type_uses_screaming_snake_wire_repr() {
        let a: Article = serde_json::from_str(
            r#"{"id":1,"model":"Latitude 5530","designation":"Laptop","type":"HARDWARE","quantity":4}"#,
        )
        .unwrap();
        assert_eq!(a.article_type, ArticleType::Hardware);
        assert_eq!(
            serde_json::to_value(ArticleType::Consumable).unwrap(),
            serde_json::json!("CONSUMABLE")
        );
    }

    #[test]
    fn quantity_defaults_to_zero_when_absent() {
        let a: Article = serde_json::from_str(
            r#"{"id":2,"model":"Toner 26A","designation":"Printer toner","type":"CONSUMABLE"}"#,
        )
        .unwrap();
        assert_eq!(a.quantity, 0);
    }

    #[test]
    fn draft_validation() {
        let mut draft = ArticleDraft {
            model: "Latitude 5530".into(),
            designation: "Laptop".into(),
            article_type: Some(ArticleType::Hardware),
        };
        assert!(draft.validate().is_ok());
        draft.model = "  ".into();
        assert!(draft.validate().is_err());
    }
}
