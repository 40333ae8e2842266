use crate::error::SnapshotError;
use trueup_domain::{Group, PersonId};

/// Hands out fully materialized group snapshots.
pub trait GroupSnapshotProvider: Send + Sync {
    fn load_group(&self, id: &str) -> Result<Group, SnapshotError>;

    fn group_ids(&self) -> Vec<String>;
}

pub trait PersonDirectory: Send + Sync {
    fn display_name(&self, person_id: PersonId) -> Option<&str>;
}

impl PersonDirectory for Group {
    fn display_name(&self, person_id: PersonId) -> Option<&str> {
        self.person(person_id).map(|person| person.name.as_str())
    }
}
