//! Shared types for the order placement workspace.

mod types;

pub use types::{CustomerId, OrderId};
