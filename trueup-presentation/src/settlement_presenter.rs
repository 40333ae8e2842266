use crate::strings;
use std::fmt::Write as _;
use trueup_application::{PersonBalance, PersonDirectory, SettlementResult};
use trueup_domain::{Balance, PersonId, Position};

pub struct SettlementPresenter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementView {
    pub balance_lines: Vec<String>,
    pub settlement_lines: Vec<String>,
}

impl SettlementView {
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(256);
        let _ = writeln!(out, "{}:", strings::BALANCES);
        for line in &self.balance_lines {
            let _ = writeln!(out, "  {line}");
        }
        let _ = writeln!(out, "{}:", strings::SETTLEMENTS);
        for line in &self.settlement_lines {
            let _ = writeln!(out, "  {line}");
        }
        out
    }
}

impl SettlementPresenter {
    pub fn render(
        result: &SettlementResult,
        directory: &dyn PersonDirectory,
        currency: &str,
    ) -> SettlementView {
        let balance_lines = result
            .balances
            .iter()
            .map(|balance| Self::format_balance(balance, directory))
            .collect();

        let settlement_lines = if result.settlements.is_empty() {
            vec![strings::ALL_BALANCED.to_string()]
        } else {
            result
                .settlements
                .iter()
                .map(|settlement| Self::format_settlement(settlement, directory, currency))
                .collect()
        };

        SettlementView {
            balance_lines,
            settlement_lines,
        }
    }

    pub fn format_settlement(
        settlement: &Balance,
        directory: &dyn PersonDirectory,
        currency: &str,
    ) -> String {
        format!(
            "{} {} {} {currency}{}",
            person_label(settlement.from_person_id, directory),
            strings::OWES,
            person_label(settlement.to_person_id, directory),
            settlement.amount.to_fixed(2),
        )
    }

    pub fn format_balance(balance: &PersonBalance, directory: &dyn PersonDirectory) -> String {
        let name = person_label(balance.id, directory);
        match balance.position {
            Position::Settled => format!("{name}: {}", strings::SETTLED),
            Position::Creditor => format!("{name}: +{}", balance.balance.to_fixed(2)),
            Position::Debtor => format!("{name}: {}", balance.balance.to_fixed(2)),
        }
    }
}

pub(crate) fn person_label(id: PersonId, directory: &dyn PersonDirectory) -> &str {
    directory.display_name(id).unwrap_or(strings::UNKNOWN_PERSON)
}
