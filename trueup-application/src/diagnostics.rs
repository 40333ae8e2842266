use fxhash::FxHashSet;
use trueup_domain::{Group, Money, PersonId, SettlementContext};

/// Data-integrity findings in a group snapshot.
///
/// These are reported, never enforced: the settlement computation accepts the
/// snapshot as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotIssue {
    SharesMismatch {
        expense_id: String,
        amount: Money,
        shares_total: Money,
    },
    UnknownExpensePerson {
        expense_id: String,
        person_id: PersonId,
    },
    UnknownTransferPerson {
        transfer_id: String,
        person_id: PersonId,
    },
    SelfTransfer {
        transfer_id: String,
        person_id: PersonId,
    },
}

pub struct SnapshotDiagnostics;

impl SnapshotDiagnostics {
    pub fn inspect(group: &Group) -> Vec<SnapshotIssue> {
        let tolerance = SettlementContext::cents_default().tolerance;
        let known: FxHashSet<PersonId> = group.people.iter().map(|person| person.id).collect();
        let mut issues = Vec::new();

        for expense in &group.expenses {
            let shares_total = expense.shares_total();
            if (shares_total - expense.amount).abs() > tolerance {
                issues.push(SnapshotIssue::SharesMismatch {
                    expense_id: expense.id.clone(),
                    amount: expense.amount,
                    shares_total,
                });
            }

            let mut reported = FxHashSet::default();
            let referenced = std::iter::once(expense.paid_by_id)
                .chain(expense.shares.iter().map(|share| share.person_id));
            for person_id in referenced {
                if !known.contains(&person_id) && reported.insert(person_id) {
                    issues.push(SnapshotIssue::UnknownExpensePerson {
                        expense_id: expense.id.clone(),
                        person_id,
                    });
                }
            }
        }

        for transfer in &group.transfers {
            if transfer.paid_by_id == transfer.paid_to_id {
                issues.push(SnapshotIssue::SelfTransfer {
                    transfer_id: transfer.id.clone(),
                    person_id: transfer.paid_by_id,
                });
            }

            let mut reported = FxHashSet::default();
            for person_id in [transfer.paid_by_id, transfer.paid_to_id] {
                if !known.contains(&person_id) && reported.insert(person_id) {
                    issues.push(SnapshotIssue::UnknownTransferPerson {
                        transfer_id: transfer.id.clone(),
                        person_id,
                    });
                }
            }
        }

        issues
    }
}
