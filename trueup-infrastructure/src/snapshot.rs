use indexmap::IndexMap;
use serde::Deserialize;
use std::{fs, io, path::Path};
use trueup_application::{GroupSnapshotProvider, SnapshotError};
use trueup_domain::Group;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotLoadError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Either the full list of groups the app persists, or a single exported group.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Groups(Vec<Group>),
    Group(Group),
}

/// Read-only group snapshots parsed from a JSON document.
#[derive(Debug, Default)]
pub struct JsonSnapshotStore {
    groups: IndexMap<String, Group>,
}

impl JsonSnapshotStore {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, SnapshotLoadError> {
        let groups = match serde_json::from_str(content)? {
            SnapshotDocument::Groups(groups) => groups,
            SnapshotDocument::Group(group) => vec![group],
        };

        let mut store = Self::default();
        for group in groups {
            if store.groups.contains_key(&group.id) {
                tracing::warn!(
                    group_id = %group.id,
                    "Duplicate group id in snapshot; keeping the first"
                );
                continue;
            }
            store.groups.insert(group.id.clone(), group);
        }

        tracing::debug!(group_count = store.groups.len(), "Group snapshot loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group id when the document holds exactly one group.
    pub fn sole_group_id(&self) -> Option<&str> {
        match self.groups.len() {
            1 => self.groups.keys().next().map(String::as_str),
            _ => None,
        }
    }
}

impl GroupSnapshotProvider for JsonSnapshotStore {
    fn load_group(&self, id: &str) -> Result<Group, SnapshotError> {
        self.groups
            .get(id)
            .cloned()
            .ok_or_else(|| SnapshotError::GroupNotFound { id: id.to_string() })
    }

    fn group_ids(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use trueup_domain::{Money, PersonId, compute_settlements};

    const SINGLE: &str = r#"{
        "id": "1a2b3c4d",
        "name": "Ski trip",
        "people": [{ "id": 1, "name": "Alice" }, { "id": 2, "name": "Bob" }],
        "expenses": [{
            "id": "3f1c", "date": "2024-01-05T18:30:00.000Z", "paidById": 1,
            "amount": 42.5, "description": "Fondue",
            "shares": [{ "personId": 1, "amount": 21.25 }, { "personId": 2, "amount": 21.25 }]
        }],
        "transfers": []
    }"#;

    const MANY: &str = r#"[
        { "id": "aaaaaaaa", "name": "One", "people": [], "expenses": [], "transfers": [] },
        { "id": "bbbbbbbb", "name": "Two", "people": [], "expenses": [], "transfers": [] },
        { "id": "aaaaaaaa", "name": "Shadow", "people": [], "expenses": [], "transfers": [] }
    ]"#;

    #[test]
    fn single_group_document() {
        let store = JsonSnapshotStore::from_json(SINGLE).expect("valid document");

        assert_eq!(store.sole_group_id(), Some("1a2b3c4d"));
        let group = store.load_group("1a2b3c4d").expect("group present");
        assert_eq!(group.expenses[0].amount, Money::new(425, 1));
        assert_eq!(group.expenses[0].shares[1].person_id, PersonId(2));
    }

    #[test]
    fn group_list_keeps_first_of_duplicates() {
        let store = JsonSnapshotStore::from_json(MANY).expect("valid document");

        assert_eq!(store.group_ids(), vec!["aaaaaaaa", "bbbbbbbb"]);
        assert_eq!(store.sole_group_id(), None);
        assert_eq!(store.load_group("aaaaaaaa").map(|g| g.name).as_deref(), Ok("One"));
    }

    #[test]
    fn unknown_group_is_not_found() {
        let store = JsonSnapshotStore::from_json(MANY).expect("valid document");

        assert_eq!(
            store.load_group("cccccccc"),
            Err(SnapshotError::GroupNotFound {
                id: "cccccccc".to_string()
            })
        );
    }

    #[rstest]
    #[case::not_json("groups?")]
    #[case::wrong_shape(r#"{ "groups": 3 }"#)]
    #[case::bad_amount(r#"{ "id": "x", "name": "y", "expenses": [{ "paidById": 1, "amount": "lots" }] }"#)]
    fn malformed_documents_fail_to_parse(#[case] content: &str) {
        let err = JsonSnapshotStore::from_json(content).unwrap_err();

        assert!(matches!(err, SnapshotLoadError::Json(_)));
    }

    #[test]
    fn oversized_amounts_load_and_settle() {
        let content = r#"{
            "id": "ffffffff", "name": "Big",
            "people": [{ "id": 1, "name": "Alice" }, { "id": 2, "name": "Bob" }],
            "expenses": [
                { "paidById": 1, "amount": 5e28, "shares": [{ "personId": 2, "amount": 5e28 }] },
                { "paidById": 1, "amount": 5e28, "shares": [{ "personId": 2, "amount": 5e28 }] }
            ]
        }"#;
        let store = JsonSnapshotStore::from_json(content).expect("valid document");
        let group = store.load_group("ffffffff").expect("group present");

        let settlements = compute_settlements(&group);

        assert_eq!(settlements.len(), 1);
        assert_eq!(settlements[0].from_person_id, PersonId(2));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = JsonSnapshotStore::from_path("/nonexistent/trueup-groups.json").unwrap_err();

        assert!(matches!(err, SnapshotLoadError::Io(_)));
    }
}
