//! Tagged wire encoding for timestamps
//!
//! JSON has no native timestamp type, so persisted snapshots tag every
//! timestamp field with a recognizable wrapper:
//! `{"__type": "Date", "value": "<ISO-8601>"}`. The wrapper keeps timestamps
//! distinguishable from plain strings when a snapshot is decoded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag stored in the wrapper's `__type` field.
pub const DATE_TAG: &str = "Date";

#[derive(Serialize, Deserialize)]
struct TaggedDate {
    #[serde(rename = "__type")]
    tag: String,
    value: String,
}

/// Serde `with`-module encoding a `DateTime<Utc>` as a tagged wrapper object.
///
/// Usage: `#[serde(with = "timestamp::wrapped")]` on entity timestamp fields.
pub mod wrapped {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TaggedDate {
            tag: DATE_TAG.to_string(),
            value: ts.to_rfc3339(),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tagged = TaggedDate::deserialize(deserializer)?;
        if tagged.tag != DATE_TAG {
            return Err(serde::de::Error::custom(format!(
                "expected __type \"{}\", got \"{}\"",
                DATE_TAG, tagged.tag
            )));
        }
        parse_iso8601(&tagged.value).map_err(serde::de::Error::custom)
    }
}

/// Parse an ISO-8601 timestamp string into a `DateTime<Utc>`.
pub fn parse_iso8601(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|ts| ts.with_timezone(&Utc))
}
