use trueup_domain::{Balance, Money, PersonId, Position, TransferDraft};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonBalance {
    pub id: PersonId,
    pub balance: Money,
    pub position: Position,
}

#[derive(Debug, PartialEq)]
pub struct SettlementResult {
    pub group_id: String,
    /// Every person with a net position, settled ones included.
    pub balances: Vec<PersonBalance>,
    pub settlements: Vec<Balance>,
}

impl SettlementResult {
    pub fn is_balanced(&self) -> bool {
        self.settlements.is_empty()
    }

    pub fn transfer_drafts(&self) -> Vec<TransferDraft> {
        self.settlements
            .iter()
            .map(Balance::to_transfer_draft)
            .collect()
    }
}
