#![warn(clippy::uninlined_format_args)]

pub mod settlement_presenter;
pub mod strings;
pub mod timeline_presenter;

pub use settlement_presenter::{SettlementPresenter, SettlementView};
pub use timeline_presenter::{TimelineEntry, TimelinePresenter};
