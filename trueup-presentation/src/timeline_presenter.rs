use crate::{settlement_presenter::person_label, strings};
use chrono::{DateTime, FixedOffset};
use std::cmp::Reverse;
use trueup_application::PersonDirectory;
use trueup_domain::{Expense, Group, Transfer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEntry<'a> {
    Expense(&'a Expense),
    Transfer(&'a Transfer),
}

impl<'a> TimelineEntry<'a> {
    pub fn date(&self) -> &'a str {
        match self {
            TimelineEntry::Expense(expense) => &expense.date,
            TimelineEntry::Transfer(transfer) => &transfer.date,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date()).ok()
    }
}

/// Expenses and transfers merged into one history, newest first.
pub struct TimelinePresenter;

impl TimelinePresenter {
    /// Entries with an unreadable date go last; equal dates keep expenses
    /// before transfers, each in stored order.
    pub fn entries(group: &Group) -> Vec<TimelineEntry<'_>> {
        let mut dated: Vec<(Option<DateTime<FixedOffset>>, TimelineEntry<'_>)> = group
            .expenses
            .iter()
            .map(TimelineEntry::Expense)
            .chain(group.transfers.iter().map(TimelineEntry::Transfer))
            .map(|entry| (entry.timestamp(), entry))
            .collect();
        dated.sort_by_key(|(timestamp, _)| Reverse(*timestamp));
        dated.into_iter().map(|(_, entry)| entry).collect()
    }

    pub fn render(group: &Group, directory: &dyn PersonDirectory, currency: &str) -> Vec<String> {
        let entries = Self::entries(group);
        if entries.is_empty() {
            return vec![strings::NO_ACTIVITY.to_string()];
        }

        entries
            .iter()
            .flat_map(|entry| Self::format_entry(entry, directory, currency))
            .collect()
    }

    pub fn format_entry(
        entry: &TimelineEntry<'_>,
        directory: &dyn PersonDirectory,
        currency: &str,
    ) -> Vec<String> {
        let when = match entry.timestamp() {
            Some(timestamp) => timestamp.format("%Y-%m-%d %H:%M").to_string(),
            None => entry.date().to_string(),
        };

        match entry {
            TimelineEntry::Expense(expense) => {
                let split = expense
                    .shares
                    .iter()
                    .map(|share| {
                        format!(
                            "{} ({currency}{})",
                            person_label(share.person_id, directory),
                            share.amount.to_fixed(2)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![
                    format!("{when} {}", expense.description),
                    format!(
                        "  Paid by {}: {currency}{}",
                        person_label(expense.paid_by_id, directory),
                        expense.amount.to_fixed(2)
                    ),
                    format!("  Split: {split}"),
                ]
            }
            TimelineEntry::Transfer(transfer) => vec![
                format!("{when} {}", strings::TRANSFER),
                format!(
                    "  {} paid {}: {currency}{}",
                    person_label(transfer.paid_by_id, directory),
                    person_label(transfer.paid_to_id, directory),
                    transfer.amount.to_fixed(2)
                ),
            ],
        }
    }
}
