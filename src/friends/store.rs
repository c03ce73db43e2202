//! In-memory record store.
//!
//! # Responsibilities
//! - Hold the ordered friend list for the lifetime of the process
//! - Resolve a record by id (linear scan, first match wins)
//! - Append validated new records
//! - Mutate name/gender of existing records in place
//!
//! # Design Decisions
//! - Append-only: no deletion is exposed, so generated ids (len + 1) cannot
//!   collide unless a caller supplies a duplicate id explicitly
//! - Id uniqueness is by convention, not enforced
//! - The store is owned explicitly and handed to the HTTP layer behind a
//!   single mutex, so each read-then-mutate sequence is atomic

use crate::friends::{Friend, FriendCandidate, FriendError, FriendId};

/// The ordered, in-memory friend collection.
#[derive(Debug, Clone, Default)]
pub struct FriendStore {
    friends: Vec<Friend>,
}

impl FriendStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the built-in seed list.
    pub fn seeded() -> Self {
        let friends = vec![
            Friend::new(FriendId::Num(1), "Ross", "male"),
            Friend::new(FriendId::Num(2), "Rachel", "female"),
            Friend::new(FriendId::Num(3), "Monica", "female"),
            Friend::new(FriendId::Num(4), "Chandler", "male"),
            Friend::new(FriendId::Num(5), "Joey", "male"),
            Friend::new(FriendId::Num(6), "Phoebe", "female"),
        ];
        Self { friends }
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Friend] {
        &self.friends
    }

    /// Resolve a record by its raw identifier. First match in sequence
    /// order; ids compare loosely (see [`FriendId::matches`]).
    pub fn find_by_id(&self, id: &str) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id.matches(id))
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Friend> {
        self.friends.iter_mut().find(|f| f.id.matches(id))
    }

    /// Validate and append a new record.
    ///
    /// A candidate without an id is assigned `len + 1` as a numeric id.
    /// Returns the stored record; the store is untouched on validation
    /// failure.
    pub fn create(&mut self, candidate: FriendCandidate) -> Result<Friend, FriendError> {
        let (name, gender) = candidate.require_name_and_gender()?;
        let (name, gender) = (name.to_string(), gender.to_string());

        let id = candidate
            .id
            .unwrap_or(FriendId::Num(self.friends.len() as i64 + 1));

        let friend = Friend {
            id,
            name,
            gender,
            extra: candidate.extra,
        };
        self.friends.push(friend.clone());
        Ok(friend)
    }

    /// Validate and update an existing record in place.
    ///
    /// Two gates in fixed order: the presence check fails with
    /// [`FriendError::MissingFields`] even when no record matches; only then
    /// is the id resolved, failing with [`FriendError::NotFound`]. On success
    /// exactly `name` and `gender` are overwritten; any other fields on the
    /// stored record stay untouched and candidate extras are ignored.
    pub fn update(&mut self, id: &str, candidate: &FriendCandidate) -> Result<(), FriendError> {
        let (name, gender) = candidate.require_name_and_gender()?;
        let (name, gender) = (name.to_string(), gender.to_string());

        let friend = self
            .find_by_id_mut(id)
            .ok_or_else(|| FriendError::NotFound(id.to_string()))?;

        friend.name = name;
        friend.gender = gender;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(value: serde_json::Value) -> FriendCandidate {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_seeded_store_order() {
        let store = FriendStore::seeded();
        assert_eq!(store.len(), 6);
        assert_eq!(store.all()[0].name, "Ross");
        assert_eq!(store.all()[5].name, "Phoebe");
    }

    #[test]
    fn test_find_by_id_loose() {
        let mut store = FriendStore::seeded();
        // Seeded ids are numeric; the lookup key is text
        assert_eq!(store.find_by_id("3").unwrap().name, "Monica");
        assert!(store.find_by_id("42").is_none());

        // A caller-supplied string id resolves the same way
        store
            .create(candidate(json!({ "id": "7", "name": "Gunther", "gender": "male" })))
            .unwrap();
        assert_eq!(store.find_by_id("7").unwrap().name, "Gunther");
    }

    #[test]
    fn test_create_assigns_next_id() {
        let mut store = FriendStore::seeded();
        let created = store
            .create(candidate(json!({ "name": "Ann", "gender": "F" })))
            .unwrap();
        assert_eq!(created.id, FriendId::Num(7));
        assert_eq!(store.len(), 7);
        assert_eq!(store.all().last().unwrap().name, "Ann");
    }

    #[test]
    fn test_create_keeps_explicit_id_and_extras() {
        let mut store = FriendStore::new();
        let created = store
            .create(candidate(json!({
                "id": 99,
                "name": "Ann",
                "gender": "F",
                "city": "Leeds"
            })))
            .unwrap();
        assert_eq!(created.id, FriendId::Num(99));
        assert_eq!(created.extra["city"], json!("Leeds"));
    }

    #[test]
    fn test_create_validation_leaves_store_unchanged() {
        let mut store = FriendStore::seeded();
        let err = store
            .create(candidate(json!({ "name": "Ann" })))
            .unwrap_err();
        assert_eq!(err, FriendError::MissingFields);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_update_mutates_only_name_and_gender() {
        let mut store = FriendStore::new();
        store
            .create(candidate(json!({
                "id": 1,
                "name": "Ann",
                "gender": "F",
                "city": "Leeds"
            })))
            .unwrap();

        store
            .update(
                "1",
                &candidate(json!({ "name": "Anne", "gender": "female", "city": "York" })),
            )
            .unwrap();

        let updated = store.find_by_id("1").unwrap();
        assert_eq!(updated.name, "Anne");
        assert_eq!(updated.gender, "female");
        // Stored extras untouched, candidate extras ignored
        assert_eq!(updated.extra["city"], json!("Leeds"));
    }

    #[test]
    fn test_update_validation_gate_precedes_existence_gate() {
        let mut store = FriendStore::seeded();
        // Invalid body against a missing id still reports the validation error
        let err = store.update("42", &candidate(json!({}))).unwrap_err();
        assert_eq!(err, FriendError::MissingFields);
    }

    #[test]
    fn test_update_unknown_id_leaves_store_unchanged() {
        let mut store = FriendStore::seeded();
        let before = store.all().to_vec();
        let err = store
            .update("42", &candidate(json!({ "name": "Ann", "gender": "F" })))
            .unwrap_err();
        assert_eq!(err, FriendError::NotFound("42".into()));
        assert_eq!(store.all(), &before[..]);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut store = FriendStore::seeded();
        let body = candidate(json!({ "name": "Rach", "gender": "female" }));
        store.update("2", &body).unwrap();
        let after_first = store.find_by_id("2").unwrap().clone();
        store.update("2", &body).unwrap();
        assert_eq!(store.find_by_id("2").unwrap(), &after_first);
    }
}
