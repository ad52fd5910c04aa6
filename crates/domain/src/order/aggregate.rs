//! Order aggregate implementation.

use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::customer::Customer;

use super::Money;

/// Order aggregate root.
///
/// Owns the customer it is placed for, so placing the order can update the
/// customer's purchase history without shared references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, unallocated until persisted.
    pub(super) id: OrderId,

    /// Total amount of the order.
    pub(super) total_amount: Money,

    /// Customer who placed the order.
    pub(super) customer: Option<Customer>,

    /// Set during placement for priority fulfillment.
    #[serde(default)]
    pub(super) expedited: bool,
}

/// Snapshot of a placed order as kept in a customer's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub total_amount: Money,
    pub expedited: bool,
}

impl Order {
    /// Creates an unplaced order with an unallocated ID.
    pub fn new(total_amount: Money, customer: Option<Customer>) -> Self {
        Self {
            id: OrderId::UNALLOCATED,
            total_amount,
            customer,
            expedited: false,
        }
    }

    /// Replaces the order ID.
    pub fn with_id(mut self, id: OrderId) -> Self {
        self.id = id;
        self
    }
}

// Query methods
impl Order {
    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Detaches the customer, e.g. to hand it back to storage after placement.
    pub fn take_customer(&mut self) -> Option<Customer> {
        self.customer.take()
    }

    pub fn is_expedited(&self) -> bool {
        self.expedited
    }

    /// Returns the history entry this order produces once placed.
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            order_id: self.id,
            total_amount: self.total_amount,
            expedited: self.expedited,
        }
    }
}
