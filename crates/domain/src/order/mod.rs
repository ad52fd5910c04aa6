//! Order aggregate and related types.

mod aggregate;
mod service;
mod value_objects;

pub use aggregate::{Order, OrderRecord};
pub use service::OrderService;
pub use value_objects::Money;

use common::OrderId;
use thiserror::Error;

/// Structural problems with an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderViolation {
    /// Order ID must be unallocated before placement.
    #[error("order already has an ID ({0})")]
    IdAlreadyAllocated(OrderId),

    /// Order amount must be non-zero.
    #[error("order amount must be non-zero")]
    ZeroAmount,

    /// Order must reference a customer.
    #[error("order must have a customer")]
    MissingCustomer,

    /// Adding the order to the customer's purchase total would overflow.
    #[error("order amount {amount} would overflow the customer's purchase total")]
    PurchaseTotalOverflow { amount: Money },
}
