use crate::config::CheckoutConfig;
use crate::model::{Money, Order};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Order {0} has no items")]
    EmptyOrder(String),

    #[error("Invalid quantity {quantity} for {food_item_id} in order {order_id}")]
    InvalidQuantity {
        order_id: String,
        food_item_id: String,
        quantity: u32,
    },

    #[error("Order total {total} is below the minimum of {minimum}")]
    BelowMinimum { total: Money, minimum: Money },

    #[error("Customer {0} has no contact email")]
    MissingContact(String),
}

/// Checks an order before it is paid for. The model itself accepts any order; these
/// rules apply at checkout only.
#[derive(Debug, Clone)]
pub struct OrderValidator {
    minimum: Money,
}

impl OrderValidator {
    pub fn new(config: &CheckoutConfig) -> Self {
        Self::with_minimum(Money::from_cents(config.minimum_order_cents))
    }

    pub fn with_minimum(minimum: Money) -> Self {
        Self { minimum }
    }

    /// Runs every check in turn and reports the first failure.
    pub fn validate(&self, order: &Order) -> Result<(), ValidationError> {
        let result = self
            .check_not_empty(order)
            .and_then(|()| self.check_quantities(order))
            .and_then(|()| self.check_minimum(order))
            .and_then(|()| self.check_contact(order));
        if let Err(e) = &result {
            warn!(order_id = %order.id(), error = %e, "Validation failed");
        }
        result
    }

    pub fn check_not_empty(&self, order: &Order) -> Result<(), ValidationError> {
        if order.is_empty() {
            return Err(ValidationError::EmptyOrder(order.id().to_string()));
        }
        Ok(())
    }

    pub fn check_quantities(&self, order: &Order) -> Result<(), ValidationError> {
        match order.items().iter().find(|line| line.quantity == 0) {
            Some(line) => Err(ValidationError::InvalidQuantity {
                order_id: order.id().to_string(),
                food_item_id: line.food_item.id().to_string(),
                quantity: line.quantity,
            }),
            None => Ok(()),
        }
    }

    pub fn check_minimum(&self, order: &Order) -> Result<(), ValidationError> {
        let total = order.calculate_total();
        if total < self.minimum {
            return Err(ValidationError::BelowMinimum {
                total,
                minimum: self.minimum,
            });
        }
        Ok(())
    }

    pub fn check_contact(&self, order: &Order) -> Result<(), ValidationError> {
        if order.customer().email.trim().is_empty() {
            return Err(ValidationError::MissingContact(order.customer().id().to_string()));
        }
        Ok(())
    }
}

impl Default for OrderValidator {
    fn default() -> Self {
        Self::new(&CheckoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodItem, OrderItem, User};
    use std::sync::Arc;

    fn order_with(email: &str, lines: &[(u64, u32)]) -> Order {
        let customer = Arc::new(User::new("c1", "John Doe", email, "+1234567890"));
        let mut order = Order::new("ord1", customer);
        for (i, &(cents, quantity)) in lines.iter().enumerate() {
            let item = FoodItem::new(format!("f{}", i + 1), "Item", "", Money::from_cents(cents));
            order.add_item(OrderItem::new(Arc::new(item), quantity));
        }
        order
    }

    #[test]
    fn test_valid_order_passes() {
        let order = order_with("john.doe@email.com", &[(1099, 2), (399, 1)]);
        assert_eq!(OrderValidator::default().validate(&order), Ok(()));
    }

    #[test]
    fn test_empty_order_is_rejected_first() {
        let order = order_with("", &[]);
        assert_eq!(
            OrderValidator::default().validate(&order),
            Err(ValidationError::EmptyOrder("ord1".into()))
        );
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let order = order_with("john.doe@email.com", &[(1099, 2), (399, 0)]);
        assert_eq!(
            OrderValidator::default().validate(&order),
            Err(ValidationError::InvalidQuantity {
                order_id: "ord1".into(),
                food_item_id: "f2".into(),
                quantity: 0,
            })
        );
    }

    #[test]
    fn test_minimum_is_inclusive() {
        let validator = OrderValidator::with_minimum(Money::from_cents(1000));
        assert!(validator.validate(&order_with("a@b.c", &[(500, 2)])).is_ok());

        let err = validator.validate(&order_with("a@b.c", &[(999, 1)])).unwrap_err();
        assert_eq!(err.to_string(), "Order total $9.99 is below the minimum of $10.00");
    }

    #[test]
    fn test_blank_email_is_missing_contact() {
        let order = order_with("   ", &[(1099, 1)]);
        assert_eq!(
            OrderValidator::default().validate(&order),
            Err(ValidationError::MissingContact("c1".into()))
        );
    }
}
