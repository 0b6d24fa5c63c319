use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::articles::{Article, ArticleType};
use super::items::Item;
use super::persons::Person;

/// Kind of logged inventory event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Arrival,
    Distribution,
    Reparation,
    Reversement,
    Reforme,
}

impl OperationType {
    pub fn label(&self) -> &'static str {
        match self {
            OperationType::Arrival => "ARRIVAL",
            OperationType::Distribution => "DISTRIBUTION",
            OperationType::Reparation => "REPARATION",
            OperationType::Reversement => "REVERSEMENT",
            OperationType::Reforme => "REFORME",
        }
    }
}

/// Account that recorded an operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
}

/// A logged event (arrival, distribution, repair, reform) affecting one or
/// more items. Owned server-side; the client never mutates these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: i64,
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    /// ISO-8601 timestamp.
    pub date: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub item_ids: Vec<i64>,
    #[serde(default)]
    pub beneficiary_id: Option<i64>,
    pub user_id: i64,
    // Expanded on some endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

impl Operation {
    pub fn user_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn beneficiary_name(&self) -> String {
        self.beneficiary
            .as_ref()
            .map(Person::full_name)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// "Model - Designation" of the first affected item, for journal rows.
    pub fn first_article_label(&self) -> String {
        self.items
            .as_deref()
            .and_then(|items| items.first())
            .and_then(|item| item.article.as_ref())
            .map(|a: &Article| format!("{} - {}", a.model, a.designation))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn item_count(&self) -> usize {
        self.items
            .as_deref()
            .map(|items| items.len())
            .unwrap_or(self.item_ids.len())
    }
}

/// Distribution row as returned by `/distributions` (operation projection
/// with beneficiary/user expanded, plus whether an attestation exists).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub item_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

// ============================================================================
// Request payloads
// ============================================================================

/// One article added to the arrival form. Hardware lines carry serial
/// numbers; consumable lines carry a quantity.
#[derive(Debug, Clone)]
pub struct ArrivalLine {
    pub article: Article,
    pub serial_numbers: Vec<String>,
    pub quantity: u32,
}

impl ArrivalLine {
    pub fn new(article: Article) -> Self {
        Self {
            article,
            serial_numbers: Vec::new(),
            quantity: 1,
        }
    }
}

/// Payload for `POST /arrivals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalRequest {
    pub budget: String,
    /// article id -> serial numbers
    pub hardwares: BTreeMap<i64, Vec<String>>,
    /// article id -> quantity
    pub consumables: BTreeMap<i64, u32>,
    pub user_id: i64,
    pub remark: String,
}

impl ArrivalRequest {
    /// Split typed form lines into the hardware/consumable maps. A hardware
    /// line never produces a `consumables` entry and vice versa.
    pub fn from_lines(budget: String, lines: &[ArrivalLine], user_id: i64, remark: String) -> Self {
        let mut hardwares = BTreeMap::new();
        let mut consumables = BTreeMap::new();
        for line in lines {
            match line.article.article_type {
                ArticleType::Hardware => {
                    hardwares.insert(line.article.id, line.serial_numbers.clone());
                }
                ArticleType::Consumable => {
                    consumables.insert(line.article.id, line.quantity.max(1));
                }
            }
        }
        Self {
            budget,
            hardwares,
            consumables,
            user_id,
            remark,
        }
    }

    pub fn validate(budget: &str, lines: &[ArrivalLine]) -> Result<(), String> {
        if budget.trim().is_empty() {
            return Err("Please select a budget.".into());
        }
        if lines.is_empty() {
            return Err("Please add at least one article.".into());
        }
        for line in lines {
            if line.article.article_type == ArticleType::Hardware
                && line.serial_numbers.is_empty()
            {
                return Err(format!(
                    "Please add at least one serial number for {}.",
                    line.article.model
                ));
            }
        }
        Ok(())
    }
}

/// Payload for `POST /distributions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRequest {
    pub item_ids: Vec<i64>,
    pub beneficiary_id: i64,
    pub user_id: i64,
    pub remarks: String,
}

impl DistributionRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.item_ids.is_empty() {
            return Err("Please select at least one item.".into());
        }
        if self.beneficiary_id <= 0 {
            return Err("Please select a beneficiary.".into());
        }
        Ok(())
    }
}

/// One element of the `POST /reparations` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReparationRequest {
    pub item_id: i64,
    pub remarks: String,
    pub user_id: i64,
}

impl ReparationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.item_id <= 0 {
            return Err("Please select an item.".into());
        }
        if self.remarks.trim().is_empty() {
            return Err("Remarks are required.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hardware(id: i64, model: &str) -> Article {
        Article {
            id,
            model: model.to_string(),
            designation: "Laptop".to_string(),
            article_type: ArticleType::Hardware,
            quantity: 0,
        }
    }

    fn consumable(id: i64, model: &str) -> Article {
        Article {
            id,
            model: model.to_string(),
            designation: "Toner".to_string(),
            article_type: ArticleType::Consumable,
            quantity: 0,
        }
    }

    #[test]
    fn hardware_line_fills_only_hardwares_map() {
        let mut line = ArrivalLine::new(hardware(5, "Latitude 5530"));
        line.serial_numbers = vec!["SN1".into(), "SN2".into()];

        let req = ArrivalRequest::from_lines("BUDGET_2024".into(), &[line], 1, String::new());

        assert_eq!(req.hardwares.get(&5).unwrap(), &vec!["SN1", "SN2"]);
        assert!(!req.consumables.contains_key(&5));
    }

    #[test]
    fn consumable_line_fills_only_consumables_map() {
        let mut line = ArrivalLine::new(consumable(9, "Toner 26A"));
        line.quantity = 12;

        let req = ArrivalRequest::from_lines("BUDGET_2024".into(), &[line], 1, String::new());

        assert_eq!(req.consumables.get(&9), Some(&12));
        assert!(!req.hardwares.contains_key(&9));
    }

    #[test]
    fn consumable_quantity_is_clamped_to_one() {
        let mut line = ArrivalLine::new(consumable(9, "Toner 26A"));
        line.quantity = 0;
        let req = ArrivalRequest::from_lines("BUDGET_2024".into(), &[line], 1, String::new());
        assert_eq!(req.consumables.get(&9), Some(&1));
    }

    #[test]
    fn arrival_payload_wire_shape() {
        let mut line = ArrivalLine::new(hardware(5, "Latitude 5530"));
        line.serial_numbers = vec!["SN1".into()];
        let req = ArrivalRequest::from_lines("BUDGET_2024".into(), &[line], 1, "first batch".into());

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["budget"], "BUDGET_2024");
        assert_eq!(value["hardwares"]["5"][0], "SN1");
        assert_eq!(value["userId"], 1);
        assert_eq!(value["remark"], "first batch");
        assert!(value["consumables"].as_object().unwrap().is_empty());
    }

    #[test]
    fn arrival_validation_requires_budget_lines_and_serials() {
        assert!(ArrivalRequest::validate("", &[]).is_err());
        assert!(ArrivalRequest::validate("BUDGET_2024", &[]).is_err());

        let bare = ArrivalLine::new(hardware(5, "Latitude 5530"));
        assert!(ArrivalRequest::validate("BUDGET_2024", &[bare]).is_err());

        let mut ok = ArrivalLine::new(hardware(5, "Latitude 5530"));
        ok.serial_numbers = vec!["SN1".into()];
        assert!(ArrivalRequest::validate("BUDGET_2024", &[ok]).is_ok());
    }

    #[test]
    fn distribution_and_reparation_validation() {
        let mut dist = DistributionRequest {
            item_ids: vec![1],
            beneficiary_id: 3,
            user_id: 1,
            remarks: String::new(),
        };
        assert!(dist.validate().is_ok());
        dist.item_ids.clear();
        assert!(dist.validate().is_err());

        let rep = ReparationRequest {
            item_id: 1,
            remarks: "  ".into(),
            user_id: 1,
        };
        assert!(rep.validate().is_err());
    }

    #[test]
    fn operation_journal_helpers() {
        let op: Operation = serde_json::from_str(
            r#"{"id":1,"type":"DISTRIBUTION","date":"2024-03-15T10:00:00Z",
                "remarks":"","itemIds":[7],"userId":1,
                "beneficiary":{"id":3,"firstName":"Amina","lastName":"Berrada"}}"#,
        )
        .unwrap();
        assert_eq!(op.operation_type, OperationType::Distribution);
        assert_eq!(op.user_name(), "Unknown");
        assert_eq!(op.beneficiary_name(), "Amina Berrada");
        assert_eq!(op.first_article_label(), "N/A");
        assert_eq!(op.item_count(), 1);
    }
}
