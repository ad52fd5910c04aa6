//! Order service implementing the placement workflow.

use crate::address::Address;
use crate::customer::{Customer, CustomerViolation};
use crate::error::PlaceOrderError;
use crate::policy::OrderPolicy;

use super::{Order, OrderRecord, OrderViolation};

/// Service for placing orders.
///
/// Placement runs three steps in sequence: validate, expedite, record.
/// Validation fails fast on the first violated rule and nothing is mutated
/// until every rule has passed.
#[derive(Debug, Clone, Default)]
pub struct OrderService {
    policy: OrderPolicy,
}

impl OrderService {
    /// Creates a service using the default policy thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with custom thresholds.
    pub fn with_policy(policy: OrderPolicy) -> Self {
        Self { policy }
    }

    /// Places an order.
    ///
    /// On success the order carries its final expedited flag and has been
    /// appended to its customer's history. On failure neither the order nor
    /// the customer is changed.
    #[tracing::instrument(
        skip(self, order),
        fields(order_id = %order.id(), amount = %order.total_amount())
    )]
    pub fn place_order<'a>(&self, order: &'a mut Order) -> Result<&'a Order, PlaceOrderError> {
        let (order_id, total_amount) = (order.id, order.total_amount);

        let customer = match self.validate_order(order) {
            Ok(customer) => customer,
            Err(err) => {
                tracing::warn!(kind = %err.kind(), error = %err, "order rejected");
                metrics::counter!("orders_rejected_total", "kind" => err.kind().as_str())
                    .increment(1);
                return Err(err);
            }
        };

        // Decided on the purchase total before this order is counted.
        let expedited = self
            .policy
            .qualifies_for_expedite(customer.total_purchases, customer.credit_rating);
        tracing::debug!(
            expedited,
            total_purchases = %customer.total_purchases,
            credit_rating = customer.credit_rating,
            "expedite decision"
        );
        if expedited {
            metrics::counter!("orders_expedited_total").increment(1);
        }

        customer.record_order(OrderRecord {
            order_id,
            total_amount,
            expedited,
        });
        metrics::counter!("orders_placed_total").increment(1);
        tracing::info!(customer_id = %customer.id, expedited, "order placed");

        order.expedited = expedited;
        Ok(order)
    }

    /// Runs every rule in order and hands back the customer to record against.
    fn validate_order<'o>(
        &self,
        order: &'o mut Order,
    ) -> Result<&'o mut Customer, PlaceOrderError> {
        if !order.id.is_unallocated() {
            return Err(OrderViolation::IdAlreadyAllocated(order.id).into());
        }

        if order.total_amount.is_zero() {
            return Err(OrderViolation::ZeroAmount.into());
        }

        let amount = order.total_amount;
        let customer = order
            .customer
            .as_mut()
            .ok_or(OrderViolation::MissingCustomer)?;

        self.validate_customer(customer)?;

        if customer.total_purchases.checked_add(amount).is_none() {
            return Err(OrderViolation::PurchaseTotalOverflow { amount }.into());
        }

        Ok(customer)
    }

    fn validate_customer(&self, customer: &Customer) -> Result<(), PlaceOrderError> {
        if !customer.id.is_valid() {
            return Err(CustomerViolation::NonPositiveId(customer.id).into());
        }

        let address = customer
            .home_address
            .as_ref()
            .ok_or(CustomerViolation::MissingAddress)?;

        if customer.has_blank_name() {
            return Err(CustomerViolation::BlankName.into());
        }

        if !self.policy.has_sufficient_credit(customer.credit_rating) {
            return Err(PlaceOrderError::InsufficientCredit {
                rating: customer.credit_rating,
                minimum: self.policy.min_credit_rating,
            });
        }

        if customer.total_purchases.is_negative() {
            return Err(CustomerViolation::NegativeTotalPurchases(customer.total_purchases).into());
        }

        validate_address(address)
    }
}

fn validate_address(address: &Address) -> Result<(), PlaceOrderError> {
    address.validate().map_err(PlaceOrderError::from)
}

#[cfg(test)]
mod tests {
    use common::{CustomerId, OrderId};

    use super::*;
    use crate::address::AddressField;
    use crate::error::ErrorKind;
    use crate::order::Money;

    fn valid_customer() -> Customer {
        let mut customer = Customer::new(CustomerId::new(42));
        customer.first_name = "Grace".to_string();
        customer.last_name = "Hopper".to_string();
        customer.credit_rating = 300;
        customer.home_address = Some(Address {
            street1: "1 Navy Way".to_string(),
            street2: None,
            street3: None,
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            postal_code: "22202".to_string(),
            country: "US".to_string(),
        });
        customer
    }

    fn valid_order() -> Order {
        Order::new(Money::from_dollars(100), Some(valid_customer()))
    }

    #[test]
    fn test_place_valid_order() {
        let service = OrderService::new();
        let mut order = valid_order();

        let placed = service.place_order(&mut order).unwrap();

        assert!(!placed.is_expedited());
        let customer = placed.customer().unwrap();
        assert_eq!(customer.order_history().len(), 1);
        assert_eq!(customer.total_purchases, Money::from_dollars(100));
    }

    #[test]
    fn test_allocated_id_wins_over_other_violations() {
        let service = OrderService::new();
        let mut order = Order::new(Money::zero(), None).with_id(OrderId::new(123));

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(
            err,
            PlaceOrderError::InvalidOrder(OrderViolation::IdAlreadyAllocated(OrderId::new(123)))
        );
    }

    #[test]
    fn test_customer_id_checked_before_address() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        customer.id = CustomerId::new(0);
        customer.home_address = None;
        let mut order = Order::new(Money::from_dollars(100), Some(customer));

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(
            err,
            PlaceOrderError::InvalidCustomer(CustomerViolation::NonPositiveId(CustomerId::new(0)))
        );
    }

    #[test]
    fn test_missing_address_checked_before_name() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        customer.home_address = None;
        customer.first_name = String::new();
        let mut order = Order::new(Money::from_dollars(100), Some(customer));

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(
            err,
            PlaceOrderError::InvalidCustomer(CustomerViolation::MissingAddress)
        );
    }

    #[test]
    fn test_credit_checked_before_negative_purchases() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        customer.credit_rating = 200;
        customer.total_purchases = Money::from_dollars(-1);
        let mut order = Order::new(Money::from_dollars(100), Some(customer));

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientCredit);
    }

    #[test]
    fn test_customer_rules_checked_before_address_fields() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        customer.total_purchases = Money::from_dollars(-2);
        if let Some(address) = customer.home_address.as_mut() {
            address.city = String::new();
        }
        let mut order = Order::new(Money::from_dollars(100), Some(customer));

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCustomer);
    }

    #[test]
    fn test_blank_address_field_is_reported() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        if let Some(address) = customer.home_address.as_mut() {
            address.country = "  ".to_string();
        }
        let mut order = Order::new(Money::from_dollars(100), Some(customer));

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(
            err,
            PlaceOrderError::InvalidAddress {
                field: AddressField::Country
            }
        );
    }

    #[test]
    fn test_rejection_leaves_customer_untouched() {
        let service = OrderService::new();
        let mut order = valid_order().with_id(OrderId::new(7));
        let before = order.clone();

        assert!(service.place_order(&mut order).is_err());
        assert_eq!(order, before);
    }

    #[test]
    fn test_purchase_total_overflow_is_rejected() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        customer.total_purchases = Money::from_dollars(1);
        let mut order = Order::new(Money::from_cents(i64::MAX), Some(customer));
        let before = order.clone();

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(
            err,
            PlaceOrderError::InvalidOrder(OrderViolation::PurchaseTotalOverflow {
                amount: Money::from_cents(i64::MAX)
            })
        );
        assert_eq!(order, before);
    }

    #[test]
    fn test_address_checked_before_purchase_total_overflow() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        customer.total_purchases = Money::from_dollars(1);
        if let Some(address) = customer.home_address.as_mut() {
            address.street1 = String::new();
        }
        let mut order = Order::new(Money::from_cents(i64::MAX), Some(customer));

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);
    }

    #[test]
    fn test_expedite_uses_purchases_before_this_order() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        customer.credit_rating = 600;
        customer.total_purchases = Money::from_dollars(4950);
        let mut order = Order::new(Money::from_dollars(100), Some(customer));

        let placed = service.place_order(&mut order).unwrap();

        assert!(!placed.is_expedited());
        assert_eq!(
            placed.customer().unwrap().total_purchases,
            Money::from_dollars(5050)
        );
    }

    #[test]
    fn test_custom_policy() {
        let service = OrderService::with_policy(OrderPolicy {
            min_credit_rating: 400,
            ..OrderPolicy::default()
        });
        let mut order = valid_order();

        let err = service.place_order(&mut order).unwrap_err();
        assert_eq!(
            err,
            PlaceOrderError::InsufficientCredit {
                rating: 300,
                minimum: 400
            }
        );
    }

    #[test]
    fn test_history_record_matches_order() {
        let service = OrderService::new();
        let mut customer = valid_customer();
        customer.credit_rating = 900;
        customer.total_purchases = Money::from_dollars(10_000);
        let mut order = Order::new(Money::from_cents(1999), Some(customer));

        let placed = service.place_order(&mut order).unwrap();

        let record = placed.customer().unwrap().order_history()[0];
        assert_eq!(record, placed.to_record());
        assert!(record.expedited);
    }
}
