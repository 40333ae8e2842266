#![warn(clippy::uninlined_format_args)]

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod ports;
pub mod settlement_service;

pub use diagnostics::{SnapshotDiagnostics, SnapshotIssue};
pub use error::SnapshotError;
pub use model::{PersonBalance, SettlementResult};
pub use ports::{GroupSnapshotProvider, PersonDirectory};
pub use settlement_service::SettlementService;
