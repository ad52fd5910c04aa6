//! Random values for fixtures.

use rand::Rng;
use uuid::Uuid;

/// Returns a random, non-blank string.
pub fn string() -> String {
    Uuid::new_v4().to_string()
}

/// Returns a random integer in `min..i32::MAX`.
///
/// # Panics
///
/// Panics if `min` is `i32::MAX`.
pub fn int_with_min(min: i32) -> i32 {
    rand::rng().random_range(min..i32::MAX)
}

/// Returns a random positive identifier value.
pub fn id() -> i64 {
    rand::rng().random_range(1..i64::from(i32::MAX))
}
