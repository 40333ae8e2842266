pub mod balance_aggregator;
pub mod settlement_context;
pub mod settlement_matcher;
pub mod settlement_policy;

pub use balance_aggregator::{BalanceAccumulator, BalanceAggregator};
pub use settlement_context::{RoundingMode, SettlementContext};
pub use settlement_matcher::SettlementMatcher;
pub use settlement_policy::{SettlementPolicy, compute_settlements};
