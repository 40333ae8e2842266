#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Group '{id}' was not found")]
    GroupNotFound { id: String },
    #[error("Group snapshot is unavailable: {0}")]
    Unavailable(String),
}
