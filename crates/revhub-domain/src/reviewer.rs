//! Reviewer representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// A person assigned to a manuscript who produces comments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub id: String,
    pub name: String,
    pub manuscript_id: String,
    #[serde(with = "timestamp::wrapped")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp::wrapped")]
    pub updated_at: DateTime<Utc>,
}

impl Reviewer {
    /// Create a new reviewer under the given manuscript
    pub fn new(name: String, manuscript_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            manuscript_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviewer_new() {
        let reviewer = Reviewer::new("Dr. X".to_string(), "m-1".to_string());
        assert_eq!(reviewer.name, "Dr. X");
        assert_eq!(reviewer.manuscript_id, "m-1");
    }

    #[test]
    fn test_reviewer_json_field_names() {
        let reviewer = Reviewer::new("Dr. X".to_string(), "m-1".to_string());
        let json = serde_json::to_value(&reviewer).unwrap();
        assert_eq!(json["manuscriptId"], "m-1");
    }
}
