//! Comment representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// A reviewer's remark about a manuscript.
///
/// `manuscript_id` is a denormalized copy of the owning reviewer's
/// `manuscript_id`; callers always supply the two together and no
/// cross-manuscript reassignment operation exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub reviewer_id: String,
    pub manuscript_id: String,
    #[serde(with = "timestamp::wrapped")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp::wrapped")]
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment under the given reviewer and manuscript
    pub fn new(text: String, reviewer_id: String, manuscript_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            reviewer_id,
            manuscript_id,
            created_at: now,
            updated_at: now,
        }
    }
}
