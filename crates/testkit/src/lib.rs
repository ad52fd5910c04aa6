//! Test fixtures for order placement.
//!
//! Builders start from a valid, placeable value filled with random data so a
//! test only states the one field it cares about:
//!
//! ```ignore
//! let mut order = OrderBuilder::new()
//!     .with_customer(CustomerBuilder::new().with_credit_rating(100).build())
//!     .build();
//! ```

pub mod builders;
pub mod random;

pub use builders::{AddressBuilder, CustomerBuilder, OrderBuilder};
