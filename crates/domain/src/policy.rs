//! Order placement thresholds.

use crate::order::Money;

/// Minimum credit rating a customer must exceed to order at all.
pub const MIN_CREDIT_RATING: i32 = 200;

/// Purchase total (in dollars) a customer must exceed for expedited orders.
pub const EXPEDITE_MIN_TOTAL_PURCHASES: i64 = 5000;

/// Credit rating a customer must exceed for expedited orders.
pub const EXPEDITE_MIN_CREDIT_RATING: i32 = 500;

/// Thresholds used when placing orders.
///
/// Defaults are the fixed business constants above. [`OrderPolicy::from_lookup`]
/// reads overrides from any key/value source:
/// - `ORDER_MIN_CREDIT_RATING` (default: `200`)
/// - `ORDER_EXPEDITE_MIN_PURCHASES` in whole dollars (default: `5000`)
/// - `ORDER_EXPEDITE_MIN_CREDIT_RATING` (default: `500`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPolicy {
    pub min_credit_rating: i32,
    pub expedite_min_total_purchases: Money,
    pub expedite_min_credit_rating: i32,
}

impl OrderPolicy {
    /// Loads the policy from an arbitrary key lookup. Missing, unparsable or
    /// out-of-range values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            min_credit_rating: lookup("ORDER_MIN_CREDIT_RATING")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.min_credit_rating),
            expedite_min_total_purchases: lookup("ORDER_EXPEDITE_MIN_PURCHASES")
                .and_then(|v| v.trim().parse().ok())
                .and_then(Money::checked_from_dollars)
                .unwrap_or(defaults.expedite_min_total_purchases),
            expedite_min_credit_rating: lookup("ORDER_EXPEDITE_MIN_CREDIT_RATING")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.expedite_min_credit_rating),
        }
    }

    /// Returns true if the rating is strictly above the ordering minimum.
    pub fn has_sufficient_credit(&self, credit_rating: i32) -> bool {
        credit_rating > self.min_credit_rating
    }

    /// Returns true if both thresholds are strictly exceeded.
    pub fn qualifies_for_expedite(&self, total_purchases: Money, credit_rating: i32) -> bool {
        total_purchases > self.expedite_min_total_purchases
            && credit_rating > self.expedite_min_credit_rating
    }
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            min_credit_rating: MIN_CREDIT_RATING,
            expedite_min_total_purchases: Money::from_dollars(EXPEDITE_MIN_TOTAL_PURCHASES),
            expedite_min_credit_rating: EXPEDITE_MIN_CREDIT_RATING,
        }
    }
}
