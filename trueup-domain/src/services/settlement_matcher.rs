use crate::{
    model::{Balance, Money, NetBalances, PersonId, Position},
    services::SettlementContext,
};

/// Greedy two-pointer matching of debtors against creditors.
///
/// Emits at most `debtors + creditors - 1` payments. This is not a global
/// minimum in every case, but it is deterministic: both sides keep the
/// iteration order of the net balances and matches come out debtor-major.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementMatcher {
    context: SettlementContext,
}

impl SettlementMatcher {
    pub fn new(context: SettlementContext) -> Self {
        Self { context }
    }

    pub fn match_balances(&self, balances: &NetBalances) -> Vec<Balance> {
        let mut creditors: Vec<(PersonId, Money)> = Vec::new();
        let mut debtors: Vec<(PersonId, Money)> = Vec::new();

        for (&id, &balance) in balances {
            match self.context.classify(balance) {
                Position::Creditor => creditors.push((id, balance)),
                Position::Debtor => debtors.push((id, -balance)),
                Position::Settled => {}
            }
        }

        let mut settlements =
            Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let (debtor, debt) = debtors[i];
            let (creditor, credit) = creditors[j];
            let amount = debt.min(credit);

            settlements.push(Balance {
                from_person_id: debtor,
                to_person_id: creditor,
                amount: self.context.round(amount),
            });

            debtors[i].1 -= amount;
            creditors[j].1 -= amount;

            if self.context.is_exhausted(debtors[i].1) {
                i += 1;
            }
            if self.context.is_exhausted(creditors[j].1) {
                j += 1;
            }
        }

        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            settlement_count = settlements.len(),
            "Settlements matched"
        );
        settlements
    }
}
