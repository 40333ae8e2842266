use crate::{
    model::{Balance, Group, Settlement},
    services::{BalanceAggregator, SettlementContext, SettlementMatcher},
};

pub struct SettlementPolicy;

impl SettlementPolicy {
    /// Aggregates the group and matches the resulting net balances.
    pub fn settle(group: &Group, context: SettlementContext) -> Settlement {
        let net_balances = BalanceAggregator.aggregate(group);
        let balances = SettlementMatcher::new(context).match_balances(&net_balances);

        Settlement {
            net_balances,
            balances,
        }
    }
}

/// Suggested payments that would zero every balance in `group`, using two
/// decimal places and one cent of tolerance.
pub fn compute_settlements(group: &Group) -> Vec<Balance> {
    SettlementPolicy::settle(group, SettlementContext::cents_default()).balances
}
