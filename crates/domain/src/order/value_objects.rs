//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

/// Amount of money in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Whole dollars to cents.
    ///
    /// # Panics
    ///
    /// Panics on overflow in debug builds; use [`Money::checked_from_dollars`]
    /// for untrusted input.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Whole dollars to cents, or `None` if the amount does not fit.
    pub fn checked_from_dollars(dollars: i64) -> Option<Self> {
        dollars.checked_mul(100).map(Self::from_cents)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Sum of both amounts, or `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Self::from_cents)
    }

    /// Sum of both amounts, clamped to the representable range.
    pub fn saturating_add(self, other: Money) -> Money {
        Self::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}
