//! Customer entity and its purchase history.

use common::{CustomerId, OrderId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{Address, is_blank};
use crate::order::{Money, OrderRecord};

/// Data-integrity problems with a customer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerViolation {
    #[error("customer must have an ID > 0 (got {0})")]
    NonPositiveId(CustomerId),

    #[error("customer must have an address")]
    MissingAddress,

    #[error("customer must have a first and last name")]
    BlankName,

    #[error("customer must have total purchases >= 0 (got {0})")]
    NegativeTotalPurchases(Money),
}

/// A customer placing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub credit_rating: i32,

    /// Running total of everything this customer has ordered.
    pub total_purchases: Money,

    pub home_address: Option<Address>,

    /// Placed orders, oldest first. Only grows through [`Customer::record_order`].
    #[serde(default)]
    order_history: Vec<OrderRecord>,
}

impl Customer {
    /// Creates a customer with no name, no address, zero credit and no history.
    pub fn new(id: CustomerId) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            credit_rating: 0,
            total_purchases: Money::zero(),
            home_address: None,
            order_history: Vec::new(),
        }
    }

    /// Returns true if either name is empty or whitespace-only.
    pub fn has_blank_name(&self) -> bool {
        is_blank(&self.first_name) || is_blank(&self.last_name)
    }

    /// Returns the placed orders in insertion order.
    pub fn order_history(&self) -> &[OrderRecord] {
        &self.order_history
    }

    /// Looks up a placed order by ID.
    ///
    /// Orders keep the unallocated ID until persisted elsewhere, so several
    /// entries may share an ID; the earliest one is returned.
    pub fn find_order(&self, order_id: OrderId) -> Option<&OrderRecord> {
        self.order_history
            .iter()
            .find(|record| record.order_id == order_id)
    }

    /// Appends an order to the history and adds its amount to the running total.
    ///
    /// The total saturates; placement rejects orders that would overflow it
    /// before getting here.
    pub(crate) fn record_order(&mut self, record: OrderRecord) {
        self.total_purchases = self.total_purchases.saturating_add(record.total_amount);
        self.order_history.push(record);
    }
}
