#![warn(clippy::uninlined_format_args)]

pub mod snapshot;

pub use snapshot::{JsonSnapshotStore, SnapshotLoadError};
