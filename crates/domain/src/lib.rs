//! Domain layer for order placement.
//!
//! This crate provides:
//! - `Order`, `Customer` and `Address` models
//! - `OrderService`, which validates an order, decides whether it is
//!   expedited and records it against the customer's purchase history
//! - `OrderPolicy` thresholds and the `PlaceOrderError` taxonomy

pub mod address;
pub mod customer;
pub mod error;
pub mod order;
pub mod policy;

pub use address::{Address, AddressField};
pub use common::{CustomerId, OrderId};
pub use customer::{Customer, CustomerViolation};
pub use error::{ErrorKind, PlaceOrderError};
pub use order::{Money, Order, OrderRecord, OrderService, OrderViolation};
pub use policy::OrderPolicy;
