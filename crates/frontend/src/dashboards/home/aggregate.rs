//! Client-side aggregations behind the dashboard charts.

use std::collections::BTreeMap;

use contracts::domain::items::Item;
use contracts::domain::operations::Operation;

use crate::shared::date_utils::{month_key, month_label};

/// Operation counts bucketed by calendar month, oldest first. Entries with
/// an unparseable date are dropped.
pub fn operations_per_month(operations: &[Operation]) -> Vec<(String, u64)> {
    let mut buckets = BTreeMap::<String, u64>::new();
    for op in operations {
        if let Some(key) = month_key(&op.date) {
            *buckets.entry(key).or_default() += 1;
        }
    }
    buckets
        .into_iter()
        .map(|(key, count)| (month_label(&key), count))
        .collect()
}

/// Operation counts per type, in the journal's display order.
pub fn operations_by_type(operations: &[Operation]) -> Vec<(String, u64)> {
    let mut buckets = BTreeMap::<&'static str, u64>::new();
    for op in operations {
        *buckets.entry(op.operation_type.label()).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect()
}

/// Item counts per lifecycle status.
pub fn items_by_status(items: &[Item]) -> Vec<(String, u64)> {
    let mut buckets = BTreeMap::<&'static str, u64>::new();
    for item in items {
        *buckets.entry(item.status.label()).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::items::ItemStatus;
    use contracts::domain::operations::OperationType;

    fn operation(kind: OperationType, date: &str) -> Operation {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "type": kind.label(),
            "date": date,
            "userId": 1
        }))
        .unwrap()
    }

    fn item(status: ItemStatus) -> Item {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "serialNumber": "SN",
            "articleId": 1,
            "status": match status {
                ItemStatus::InStock => "IN_STOCK",
                ItemStatus::Distributed => "DISTRIBUTED",
                ItemStatus::UnderRepair => "UNDER_REPAIR",
                ItemStatus::Reformed => "REFORMED",
                ItemStatus::Repaired => "REPAIRED",
            }
        }))
        .unwrap()
    }

    #[test]
    fn months_are_bucketed_and_ordered() {
        let ops = vec![
            operation(OperationType::Arrival, "2024-03-15T10:00:00Z"),
            operation(OperationType::Arrival, "2024-01-02T10:00:00Z"),
            operation(OperationType::Distribution, "2024-03-20T10:00:00Z"),
            operation(OperationType::Arrival, "not a date"),
        ];
        assert_eq!(
            operations_per_month(&ops),
            vec![("Jan 24".to_string(), 1), ("Mar 24".to_string(), 2)]
        );
    }

    #[test]
    fn type_counts_cover_every_present_type() {
        let ops = vec![
            operation(OperationType::Arrival, "2024-03-15T10:00:00Z"),
            operation(OperationType::Arrival, "2024-03-16T10:00:00Z"),
            operation(OperationType::Reparation, "2024-03-17T10:00:00Z"),
        ];
        let counts = operations_by_type(&ops);
        assert!(counts.contains(&("ARRIVAL".to_string(), 2)));
        assert!(counts.contains(&("REPARATION".to_string(), 1)));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn status_counts_group_items() {
        let items = vec![
            item(ItemStatus::InStock),
            item(ItemStatus::InStock),
            item(ItemStatus::Reformed),
        ];
        let counts = items_by_status(&items);
        assert!(counts.contains(&("IN STOCK".to_string(), 2)));
        assert!(counts.contains(&("REFORMED".to_string(), 1)));
    }
}
