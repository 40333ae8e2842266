#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balance, Expense, ExpenseShare, Group, Money, NetBalances, Person, PersonId, Position,
    Settlement, Transfer, TransferDraft,
};
pub use services::{
    BalanceAccumulator, BalanceAggregator, RoundingMode, SettlementContext, SettlementMatcher,
    SettlementPolicy, compute_settlements,
};
