use crate::model::{Expense, Group, Money, NetBalances, Person, PersonId, Transfer};

/// Running net positions while folding a group's history.
///
/// Positive means the person is owed money, negative means they owe.
pub struct BalanceAccumulator {
    balances: NetBalances,
}

impl BalanceAccumulator {
    pub fn new(people: &[Person]) -> Self {
        let mut balances = NetBalances::with_capacity_and_hasher(people.len(), Default::default());
        for person in people {
            balances.entry(person.id).or_insert(Money::ZERO);
        }

        Self { balances }
    }

    pub fn apply_expense(&mut self, expense: &Expense) {
        self.adjust(expense.paid_by_id, expense.amount, "expense_payer");
        for share in &expense.shares {
            self.adjust(share.person_id, -share.amount, "expense_share");
        }
    }

    pub fn apply_transfer(&mut self, transfer: &Transfer) {
        self.adjust(transfer.paid_by_id, transfer.amount, "transfer_payer");
        self.adjust(transfer.paid_to_id, -transfer.amount, "transfer_recipient");
    }

    fn adjust(&mut self, person_id: PersonId, delta: Money, role: &'static str) {
        match self.balances.get_mut(&person_id) {
            Some(balance) => *balance += delta,
            None => {
                tracing::warn!(
                    person_id = person_id.0,
                    role,
                    delta = %delta,
                    "Balance adjustment references a person outside the group"
                );
                self.balances.insert(person_id, delta);
            }
        }
    }

    pub fn balances(&self) -> &NetBalances {
        &self.balances
    }

    pub fn into_balances(self) -> NetBalances {
        self.balances
    }
}

/// Folds every expense and transfer of a group into one net balance per person.
pub struct BalanceAggregator;

impl BalanceAggregator {
    pub fn aggregate(&self, group: &Group) -> NetBalances {
        let mut accumulator = BalanceAccumulator::new(&group.people);
        for expense in &group.expenses {
            accumulator.apply_expense(expense);
        }
        for transfer in &group.transfers {
            accumulator.apply_transfer(transfer);
        }

        let balances = accumulator.into_balances();
        tracing::debug!(
            group_id = %group.id,
            person_count = group.people.len(),
            expense_count = group.expenses.len(),
            transfer_count = group.transfers.len(),
            balance_count = balances.len(),
            "Net balances aggregated"
        );
        balances
    }
}
