use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount in the group's single implicit currency.
///
/// Backed by a decimal so that aggregation is exact; snapshots still carry
/// plain JSON numbers. Addition and subtraction saturate at the decimal range
/// instead of panicking.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `Money::new(333, 2)` is `3.33`.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn round_dp_with_strategy(self, dp: u32, strategy: RoundingStrategy) -> Self {
        Self(self.0.round_dp_with_strategy(dp, strategy))
    }

    /// Renders with exactly `dp` decimal places, e.g. `10` as `10.00`.
    pub fn to_fixed(self, dp: u32) -> String {
        let mut value = self.0.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(dp);
        value.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseShare {
    pub person_id: PersonId,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default)]
    pub id: String,
    /// ISO 8601 with timezone; carried through untouched.
    #[serde(default)]
    pub date: String,
    pub paid_by_id: PersonId,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub shares: Vec<ExpenseShare>,
}

impl Expense {
    pub fn new(id: impl Into<String>, paid_by_id: PersonId, amount: Money) -> Self {
        Self {
            id: id.into(),
            date: String::new(),
            paid_by_id,
            amount,
            description: String::new(),
            shares: Vec::new(),
        }
    }

    pub fn with_share(mut self, person_id: PersonId, amount: Money) -> Self {
        self.shares.push(ExpenseShare { person_id, amount });
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn shares_total(&self) -> Money {
        self.shares.iter().map(|share| share.amount).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    pub paid_by_id: PersonId,
    pub paid_to_id: PersonId,
    pub amount: Money,
}

impl Transfer {
    pub fn new(
        id: impl Into<String>,
        paid_by_id: PersonId,
        paid_to_id: PersonId,
        amount: Money,
    ) -> Self {
        Self {
            id: id.into(),
            date: String::new(),
            paid_by_id,
            paid_to_id,
            amount,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_person(mut self, id: PersonId, name: impl Into<String>) -> Self {
        self.people.push(Person {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    pub fn with_transfer(mut self, transfer: Transfer) -> Self {
        self.transfers.push(transfer);
        self
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }
}

/// Net position per person in first-seen order: group people first, then any
/// ids that only show up in expenses or transfers.
pub type NetBalances = IndexMap<PersonId, Money, FxBuildHasher>;

/// Suggested settlement payment from a debtor to a creditor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub from_person_id: PersonId,
    pub to_person_id: PersonId,
    pub amount: Money,
}

impl Balance {
    /// Pre-fill for the "record a transfer" form. Id and date are assigned by
    /// whoever stores the transfer.
    pub fn to_transfer_draft(&self) -> TransferDraft {
        TransferDraft {
            paid_by_id: self.from_person_id,
            paid_to_id: self.to_person_id,
            amount: self.amount,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDraft {
    pub paid_by_id: PersonId,
    pub paid_to_id: PersonId,
    pub amount: Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Creditor,
    Debtor,
    Settled,
}

#[derive(Debug, PartialEq)]
pub struct Settlement {
    pub net_balances: NetBalances,
    pub balances: Vec<Balance>,
}
