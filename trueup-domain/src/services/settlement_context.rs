//! Numeric policy shared by the matcher and the balance summary.

use crate::model::{Money, Position};
use rust_decimal::RoundingStrategy;

/// Rounding mode applied to emitted settlement amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half away from zero (e.g., 0.005 -> 0.01).
    #[default]
    HalfUp,
    /// Round half to nearest even number (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Context for settlement matching.
///
/// # Example
/// ```
/// use trueup_domain::{Money, Position, services::SettlementContext};
///
/// let ctx = SettlementContext::cents_default();
/// assert_eq!(ctx.classify(Money::new(1, 2)), Position::Settled);
/// assert_eq!(ctx.round(Money::new(3335, 3)), Money::new(334, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementContext {
    /// Decimal places of emitted amounts.
    pub scale: u32,
    /// Balances whose magnitude does not exceed this are treated as settled.
    pub tolerance: Money,
    pub rounding_mode: RoundingMode,
}

impl SettlementContext {
    /// Two decimal places, one cent of tolerance, half-up rounding.
    pub fn cents_default() -> Self {
        Self {
            scale: 2,
            tolerance: Money::new(1, 2),
            rounding_mode: RoundingMode::HalfUp,
        }
    }

    pub fn with_rounding_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = rounding_mode;
        self
    }

    pub fn round(self, amount: Money) -> Money {
        amount.round_dp_with_strategy(self.scale, self.rounding_mode.strategy())
    }

    pub fn classify(self, balance: Money) -> Position {
        if balance > self.tolerance {
            Position::Creditor
        } else if balance < -self.tolerance {
            Position::Debtor
        } else {
            Position::Settled
        }
    }

    /// Whether a remaining amount is small enough to move past.
    pub fn is_exhausted(self, remaining: Money) -> bool {
        remaining < self.tolerance
    }
}

impl Default for SettlementContext {
    fn default() -> Self {
        Self::cents_default()
    }
}
