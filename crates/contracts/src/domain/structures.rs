use serde::{Deserialize, Serialize};

use super::persons::Person;

/// Organizational unit. Top-level structures are directions; a structure
/// with a `parent_id` is a sub-direction of that parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub chef_id: Option<i64>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Manager, expanded by detail endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef: Option<Box<Person>>,
}

impl Structure {
    pub fn is_direction(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_has_no_parent() {
        let s: Structure =
            serde_json::from_str(r#"{"id":1,"name":"DSI","chefId":4}"#).unwrap();
        assert!(s.is_direction());

        let sub: Structure =
            serde_json::from_str(r#"{"id":2,"name":"Infrastructure","parentId":1}"#).unwrap();
        assert!(!sub.is_direction());
    }
}
