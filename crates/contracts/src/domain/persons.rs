use serde::{Deserialize, Serialize};

use super::structures::Structure;

/// Beneficiary/employee record. Belongs to an organizational structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub matricule: String,
    #[serde(default)]
    pub structure_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let p: Person = serde_json::from_str(
            r#"{"id":3,"firstName":"Amina","lastName":"Berrada","grade":"Engineer","matricule":"M-042","structureId":2}"#,
        )
        .unwrap();
        assert_eq!(p.full_name(), "Amina Berrada");
        assert_eq!(p.structure_id, Some(2));
    }
}
