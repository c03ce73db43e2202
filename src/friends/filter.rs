//! Filter criteria for the friend list.
//!
//! # Responsibilities
//! - Match gender (exact, case-sensitive)
//! - Match name prefix (input uppercased, so the filter side is
//!   case-insensitive against names stored with an uppercase initial)
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Empty-string query parameters count as absent (falsy semantics)
//! - Zero matches is a reportable not-found condition, never an empty
//!   success; the message text lives here next to the criteria it echoes

use crate::friends::Friend;
use serde::Deserialize;

/// Optional gender and name-prefix constraints, applied together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    pub gender: Option<String>,
    pub letter: Option<String>,
}

impl FilterCriteria {
    /// Gender constraint, with empty strings treated as absent.
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref().filter(|s| !s.is_empty())
    }

    /// Name-prefix constraint, with empty strings treated as absent.
    pub fn letter(&self) -> Option<&str> {
        self.letter.as_deref().filter(|s| !s.is_empty())
    }

    /// Compute the filtered view of `records`, order preserved.
    pub fn apply(&self, records: &[Friend]) -> Vec<Friend> {
        let mut matches: Vec<Friend> = records.to_vec();

        if let Some(gender) = self.gender() {
            matches.retain(|f| f.gender == gender);
        }

        if let Some(letter) = self.letter() {
            let prefix = letter.to_uppercase();
            matches.retain(|f| f.name.starts_with(&prefix));
        }

        matches
    }

    /// The zero-match error message.
    ///
    /// The double space after "gender" is deliberate: it reproduces the
    /// original wire format byte for byte. Absent criteria render as empty
    /// strings.
    pub fn no_match_message(&self) -> String {
        format!(
            "No friends matching gender  {} and letter {}",
            self.gender().unwrap_or(""),
            self.letter().unwrap_or("")
        )
    }
}
