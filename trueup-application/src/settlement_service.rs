use crate::{
    diagnostics::{SnapshotDiagnostics, SnapshotIssue},
    error::SnapshotError,
    model::{PersonBalance, SettlementResult},
    ports::GroupSnapshotProvider,
};
use trueup_domain::{Group, SettlementContext, SettlementPolicy};

#[derive(Clone, Copy)]
pub struct SettlementService<'a> {
    provider: &'a dyn GroupSnapshotProvider,
    context: SettlementContext,
}

impl<'a> SettlementService<'a> {
    pub fn new(provider: &'a dyn GroupSnapshotProvider) -> Self {
        Self::with_context(provider, SettlementContext::cents_default())
    }

    pub fn with_context(
        provider: &'a dyn GroupSnapshotProvider,
        context: SettlementContext,
    ) -> Self {
        Self { provider, context }
    }

    pub fn settle_group(&self, group_id: &str) -> Result<SettlementResult, SnapshotError> {
        let group = self.provider.load_group(group_id)?;
        Ok(self.build_settlement_result(&group))
    }

    pub fn build_settlement_result(&self, group: &Group) -> SettlementResult {
        for issue in SnapshotDiagnostics::inspect(group) {
            log_issue(&group.id, &issue);
        }

        let settlement = SettlementPolicy::settle(group, self.context);
        let balances = settlement
            .net_balances
            .iter()
            .map(|(&id, &balance)| PersonBalance {
                id,
                balance,
                position: self.context.classify(balance),
            })
            .collect();

        for balance in &settlement.balances {
            tracing::debug!(
                group_id = %group.id,
                from = balance.from_person_id.0,
                to = balance.to_person_id.0,
                amount = %balance.amount,
                "Settlement suggested"
            );
        }

        SettlementResult {
            group_id: group.id.clone(),
            balances,
            settlements: settlement.balances,
        }
    }
}

fn log_issue(group_id: &str, issue: &SnapshotIssue) {
    match issue {
        SnapshotIssue::SharesMismatch {
            expense_id,
            amount,
            shares_total,
        } => tracing::warn!(
            group_id,
            expense_id = %expense_id,
            amount = %amount,
            shares_total = %shares_total,
            "Expense shares do not add up to the expense amount"
        ),
        SnapshotIssue::UnknownExpensePerson {
            expense_id,
            person_id,
        } => tracing::warn!(
            group_id,
            expense_id = %expense_id,
            person_id = person_id.0,
            "Expense references a person outside the group"
        ),
        SnapshotIssue::UnknownTransferPerson {
            transfer_id,
            person_id,
        } => tracing::warn!(
            group_id,
            transfer_id = %transfer_id,
            person_id = person_id.0,
            "Transfer references a person outside the group"
        ),
        SnapshotIssue::SelfTransfer {
            transfer_id,
            person_id,
        } => tracing::warn!(
            group_id,
            transfer_id = %transfer_id,
            person_id = person_id.0,
            "Transfer pays the same person it comes from"
        ),
    }
}
