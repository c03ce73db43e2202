//! Friend record domain model.
//!
//! # Data Flow
//! ```text
//! HTTP body / query params
//!     → FriendCandidate (lenient, all fields optional)
//!     → presence validation (name + gender)
//!     → FriendStore (ordered, append-only, in-place field mutation)
//!     → Friend (stored record) serialized back to the client
//! ```
//!
//! # Design Decisions
//! - Ids compare loosely: a numeric stored id equals its string form, so the
//!   string path parameter "3" resolves the record seeded with id 3
//! - Extra fields on inbound records are kept verbatim via serde flatten;
//!   only id, name and gender carry contract meaning
//! - Validation is a presence check only; empty strings count as missing

pub mod filter;
pub mod store;

pub use filter::FilterCriteria;
pub use store::FriendStore;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Record identifier. Accepts JSON numbers and strings interchangeably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FriendId {
    Num(i64),
    Text(String),
}

impl FriendId {
    /// Loose equality against a raw (path-parameter) identifier.
    /// Both sides are normalized to their canonical string form. This is
    /// intentional: stored ids are numeric while path parameters arrive as
    /// text, and the two must compare equal.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            FriendId::Num(n) => n.to_string() == raw,
            FriendId::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendId::Num(n) => write!(f, "{}", n),
            FriendId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A stored friend record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub gender: String,

    /// Arbitrary additional fields supplied at creation time.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: gender.into(),
            extra: Map::new(),
        }
    }
}

/// Inbound record shape for create and update requests.
///
/// Every field is optional so that missing or unparseable bodies degrade to
/// the all-absent candidate, which then fails the presence check rather than
/// producing a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FriendId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FriendCandidate {
    /// Presence gate shared by create and update.
    /// Absent or empty name/gender fails validation.
    pub fn require_name_and_gender(&self) -> Result<(&str, &str), FriendError> {
        match (self.name.as_deref(), self.gender.as_deref()) {
            (Some(name), Some(gender)) if !name.is_empty() && !gender.is_empty() => {
                Ok((name, gender))
            }
            _ => Err(FriendError::MissingFields),
        }
    }
}

/// Domain errors. The Display strings are the exact message bodies the HTTP
/// layer returns; handlers map each variant to a status code locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FriendError {
    #[error("Friend object must contain a name and gender")]
    MissingFields,

    #[error("Friend with ID {0} not found")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_loose_equality() {
        assert!(FriendId::Num(3).matches("3"));
        assert!(FriendId::Text("3".into()).matches("3"));
        assert!(!FriendId::Num(3).matches("4"));
        assert!(!FriendId::Num(3).matches("03")); // canonical forms differ
    }

    #[test]
    fn test_id_deserializes_from_number_and_string() {
        let num: FriendId = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(num, FriendId::Num(7));

        let text: FriendId = serde_json::from_value(json!("7")).unwrap();
        assert_eq!(text, FriendId::Text("7".into()));
    }

    #[test]
    fn test_candidate_presence_check() {
        let ok: FriendCandidate =
            serde_json::from_value(json!({ "name": "Ann", "gender": "F" })).unwrap();
        assert_eq!(ok.require_name_and_gender().unwrap(), ("Ann", "F"));

        let missing_gender: FriendCandidate =
            serde_json::from_value(json!({ "name": "Ann" })).unwrap();
        assert_eq!(
            missing_gender.require_name_and_gender(),
            Err(FriendError::MissingFields)
        );

        // Empty strings are as good as absent
        let empty_name: FriendCandidate =
            serde_json::from_value(json!({ "name": "", "gender": "F" })).unwrap();
        assert_eq!(
            empty_name.require_name_and_gender(),
            Err(FriendError::MissingFields)
        );
    }

    #[test]
    fn test_candidate_keeps_extra_fields() {
        let candidate: FriendCandidate = serde_json::from_value(json!({
            "name": "Ann",
            "gender": "F",
            "hobby": "climbing"
        }))
        .unwrap();
        assert_eq!(candidate.extra["hobby"], json!("climbing"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FriendError::MissingFields.to_string(),
            "Friend object must contain a name and gender"
        );
        assert_eq!(
            FriendError::NotFound("9".into()).to_string(),
            "Friend with ID 9 not found"
        );
    }
}
