//! Domain error types.

use thiserror::Error;

use crate::address::AddressField;
use crate::customer::CustomerViolation;
use crate::order::OrderViolation;

/// Broad category of a placement failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOrder,
    InvalidCustomer,
    InsufficientCredit,
    InvalidAddress,
}

impl ErrorKind {
    /// Returns the snake_case label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidOrder => "invalid_order",
            ErrorKind::InvalidCustomer => "invalid_customer",
            ErrorKind::InsufficientCredit => "insufficient_credit",
            ErrorKind::InvalidAddress => "invalid_address",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while placing an order.
///
/// Every variant is raised before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    /// The order itself is malformed.
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderViolation),

    /// The customer's data is malformed.
    #[error("Invalid customer: {0}")]
    InvalidCustomer(#[from] CustomerViolation),

    /// The customer does not qualify to order at all.
    #[error("Insufficient credit: rating {rating} must be greater than {minimum}")]
    InsufficientCredit { rating: i32, minimum: i32 },

    /// A required field of the customer's address is blank.
    #[error("Invalid address: {field} is required")]
    InvalidAddress { field: AddressField },
}

impl PlaceOrderError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlaceOrderError::InvalidOrder(_) => ErrorKind::InvalidOrder,
            PlaceOrderError::InvalidCustomer(_) => ErrorKind::InvalidCustomer,
            PlaceOrderError::InsufficientCredit { .. } => ErrorKind::InsufficientCredit,
            PlaceOrderError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
        }
    }

    /// Returns true if the caller should fix the customer's data and retry,
    /// as opposed to a policy rejection or a malformed order.
    pub fn is_customer_data_error(&self) -> bool {
        matches!(
            self,
            PlaceOrderError::InvalidCustomer(_) | PlaceOrderError::InvalidAddress { .. }
        )
    }
}

impl From<AddressField> for PlaceOrderError {
    fn from(field: AddressField) -> Self {
        PlaceOrderError::InvalidAddress { field }
    }
}
