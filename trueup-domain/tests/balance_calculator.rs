use proptest::prelude::*;
use trueup_domain::{
    BalanceAggregator, Expense, Group, Money, PersonId, SettlementContext, Transfer,
    compute_settlements,
};

/// Groups whose expenses are always internally consistent (shares sum to the
/// amount). Amounts are `units * 10^-scale`.
fn group_strategy(scale: u32) -> impl Strategy<Value = Group> {
    (1usize..=6)
        .prop_flat_map(|member_count| {
            let expense = (0..member_count, prop::collection::vec(0i64..=5_000, member_count));
            let transfer = (0..member_count, 0..member_count, 0i64..=5_000);
            (
                Just(member_count),
                prop::collection::vec(expense, 0..=12),
                prop::collection::vec(transfer, 0..=6),
            )
        })
        .prop_map(move |(member_count, expenses, transfers)| {
            let mut group = Group::new("generated", "Generated");
            for idx in 0..member_count {
                group = group.with_person(PersonId(idx as u64 + 1), format!("P{idx}"));
            }

            for (n, (payer, shares)) in expenses.into_iter().enumerate() {
                let mut expense =
                    Expense::new(format!("e{n}"), PersonId(payer as u64 + 1), Money::ZERO);
                for (idx, share) in shares.into_iter().enumerate() {
                    if share > 0 {
                        expense =
                            expense.with_share(PersonId(idx as u64 + 1), Money::new(share, scale));
                    }
                }
                expense.amount = expense.shares_total();
                group = group.with_expense(expense);
            }

            for (n, (from, to, amount)) in transfers.into_iter().enumerate() {
                group = group.with_transfer(Transfer::new(
                    format!("t{n}"),
                    PersonId(from as u64 + 1),
                    PersonId(to as u64 + 1),
                    Money::new(amount, scale),
                ));
            }

            group
        })
}

fn count_sides(group: &Group) -> (usize, usize) {
    let tolerance = SettlementContext::cents_default().tolerance;
    let net = BalanceAggregator.aggregate(group);
    let debtors = net.values().filter(|b| **b < -tolerance).count();
    let creditors = net.values().filter(|b| **b > tolerance).count();
    (debtors, creditors)
}

proptest! {
    #[test]
    fn balances_sum_to_zero(group in group_strategy(2)) {
        let net = BalanceAggregator.aggregate(&group);
        let total: Money = net.values().sum();
        prop_assert_eq!(total, Money::ZERO);
        prop_assert_eq!(net.len(), group.people.len());
    }

    #[test]
    fn settlements_close_every_balance(group in group_strategy(0)) {
        let settlements = compute_settlements(&group);
        let mut net = BalanceAggregator.aggregate(&group);
        for settlement in &settlements {
            net[&settlement.from_person_id] += settlement.amount;
            net[&settlement.to_person_id] -= settlement.amount;
        }
        for balance in net.values() {
            prop_assert!(balance.abs() <= Money::new(1, 2), "residual {}", balance);
        }
    }

    #[test]
    fn settlement_shape_is_bounded(group in group_strategy(2)) {
        let settlements = compute_settlements(&group);
        let (debtors, creditors) = count_sides(&group);

        if debtors == 0 || creditors == 0 {
            prop_assert!(settlements.is_empty());
        } else {
            prop_assert!(settlements.len() <= debtors + creditors - 1);
        }

        for settlement in &settlements {
            prop_assert_ne!(settlement.from_person_id, settlement.to_person_id);
            prop_assert!(settlement.amount > Money::ZERO);
            prop_assert_eq!(
                settlement.amount,
                SettlementContext::cents_default().round(settlement.amount)
            );
        }
    }

    #[test]
    fn recording_suggestions_settles_the_group(group in group_strategy(2)) {
        let mut settled = group.clone();
        for (n, settlement) in compute_settlements(&group).iter().enumerate() {
            let draft = settlement.to_transfer_draft();
            settled = settled.with_transfer(Transfer::new(
                format!("settle{n}"),
                draft.paid_by_id,
                draft.paid_to_id,
                draft.amount,
            ));
        }

        prop_assert!(compute_settlements(&settled).is_empty());
    }
}
