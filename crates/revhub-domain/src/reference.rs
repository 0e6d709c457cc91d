//! Reference representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Supporting citation or material attached to a comment.
///
/// At most one reference exists per comment, mirroring [`crate::Response`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    pub text: String,
    pub comment_id: String,
    pub reviewer_id: String,
    pub manuscript_id: String,
    #[serde(with = "timestamp::wrapped")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp::wrapped")]
    pub updated_at: DateTime<Utc>,
}

impl Reference {
    /// Create a new reference attached to the given comment
    pub fn new(text: String, comment_id: String, reviewer_id: String, manuscript_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            comment_id,
            reviewer_id,
            manuscript_id,
            created_at: now,
            updated_at: now,
        }
    }
}
