pub const BALANCES: &str = "Balances";
pub const SETTLEMENTS: &str = "Suggested settlements";
pub const ACTIVITY: &str = "Activity";
pub const ALL_BALANCED: &str = "All balanced! No one owes anything.";
pub const NO_ACTIVITY: &str = "No expenses or transfers yet.";
pub const SETTLED: &str = "settled";
pub const OWES: &str = "owes";
pub const TRANSFER: &str = "Transfer";
pub const UNKNOWN_PERSON: &str = "Unknown";
