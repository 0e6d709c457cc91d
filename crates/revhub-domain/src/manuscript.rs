//! Manuscript representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// A manuscript under review (the root of the entity graph)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manuscript {
    pub id: String,
    pub title: String,
    #[serde(with = "timestamp::wrapped")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp::wrapped")]
    pub updated_at: DateTime<Utc>,
}

impl Manuscript {
    /// Create a new manuscript with a fresh identifier and timestamps
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manuscript_new() {
        let manuscript = Manuscript::new("Galaxy Formation Revisited".to_string());
        assert_eq!(manuscript.title, "Galaxy Formation Revisited");
        assert!(!manuscript.id.is_empty());
        assert_eq!(manuscript.created_at, manuscript.updated_at);
    }

    #[test]
    fn test_manuscript_ids_unique() {
        let a = Manuscript::new("A".to_string());
        let b = Manuscript::new("B".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_manuscript_json_field_names() {
        let manuscript = Manuscript::new("Paper".to_string());
        let json = serde_json::to_value(&manuscript).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["createdAt"]["__type"], "Date");
    }
}
