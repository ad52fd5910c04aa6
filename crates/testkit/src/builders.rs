//! Builders for orders, customers and addresses.

use domain::policy::MIN_CREDIT_RATING;
use domain::{Address, Customer, CustomerId, Money, Order, OrderId};

use crate::random;

/// Builder for [`Address`]. Every field, optional street lines included,
/// starts out as a random non-blank string.
#[derive(Debug, Clone)]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn new() -> Self {
        Self {
            address: Address {
                street1: random::string(),
                street2: Some(random::string()),
                street3: Some(random::string()),
                city: random::string(),
                state: random::string(),
                postal_code: random::string(),
                country: random::string(),
            },
        }
    }

    pub fn with_street1(mut self, street1: impl Into<String>) -> Self {
        self.address.street1 = street1.into();
        self
    }

    pub fn with_street2(mut self, street2: Option<String>) -> Self {
        self.address.street2 = street2;
        self
    }

    pub fn with_street3(mut self, street3: Option<String>) -> Self {
        self.address.street3 = street3;
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.address.city = city.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.address.state = state.into();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.address.postal_code = postal_code.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.address.country = country.into();
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

impl Default for AddressBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Customer`].
///
/// Defaults to a random positive ID, random names, a credit rating above the
/// ordering minimum, no prior purchases and a random complete address.
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    id: CustomerId,
    first_name: String,
    last_name: String,
    credit_rating: i32,
    total_purchases: Money,
    home_address: Option<Address>,
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self {
            id: CustomerId::new(random::id()),
            first_name: random::string(),
            last_name: random::string(),
            credit_rating: random::int_with_min(MIN_CREDIT_RATING + 1),
            total_purchases: Money::zero(),
            home_address: Some(AddressBuilder::new().build()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = CustomerId::new(id);
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn with_credit_rating(mut self, credit_rating: i32) -> Self {
        self.credit_rating = credit_rating;
        self
    }

    /// Sets the purchase total in whole dollars.
    pub fn with_total_purchases(mut self, dollars: i64) -> Self {
        self.total_purchases = Money::from_dollars(dollars);
        self
    }

    /// Sets the purchase total in cents.
    pub fn with_total_purchases_cents(mut self, cents: i64) -> Self {
        self.total_purchases = Money::from_cents(cents);
        self
    }

    pub fn with_home_address(mut self, address: Address) -> Self {
        self.home_address = Some(address);
        self
    }

    pub fn without_home_address(mut self) -> Self {
        self.home_address = None;
        self
    }

    pub fn build(self) -> Customer {
        let mut customer = Customer::new(self.id);
        customer.first_name = self.first_name;
        customer.last_name = self.last_name;
        customer.credit_rating = self.credit_rating;
        customer.total_purchases = self.total_purchases;
        customer.home_address = self.home_address;
        customer
    }
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Order`].
///
/// Defaults to an unallocated ID, a total of $100.00 and a customer from
/// [`CustomerBuilder::new`].
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    id: OrderId,
    total_amount: Money,
    customer: Option<Customer>,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self {
            id: OrderId::UNALLOCATED,
            total_amount: Money::from_dollars(100),
            customer: Some(CustomerBuilder::new().build()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = OrderId::new(id);
        self
    }

    /// Sets the order total in whole dollars.
    pub fn with_total_amount(mut self, dollars: i64) -> Self {
        self.total_amount = Money::from_dollars(dollars);
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn without_customer(mut self) -> Self {
        self.customer = None;
        self
    }

    pub fn build(self) -> Order {
        Order::new(self.total_amount, self.customer).with_id(self.id)
    }
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
