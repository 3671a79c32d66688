//! # Order Aggregate
//!
//! An [`Order`] is the aggregate root of one customer transaction. It owns its
//! [`OrderItem`] lines exclusively and is the only way to reach or change them:
//!
//! - **Composition**: lines are created for this order and dropped with it
//! - **Association**: the customer and the optional driver are shared [`User`] values
//!   that live independently of the order
//!
//! Totals are always computed from the lines, never stored.

use super::{FoodItem, Money, OrderId, User};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One line of an order: a food item and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub food_item: Arc<FoodItem>,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(food_item: Arc<FoodItem>, quantity: u32) -> Self {
        Self { food_item, quantity }
    }

    /// `price × quantity`.
    pub fn total(&self) -> Money {
        self.food_item.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: Arc<User>,
    items: Vec<OrderItem>,
    driver: Option<Arc<User>>,
}

impl Order {
    /// A new order for `customer`, with no lines and no driver.
    pub fn new(id: impl Into<OrderId>, customer: Arc<User>) -> Self {
        Self {
            id: id.into(),
            customer,
            items: Vec::new(),
            driver: None,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer(&self) -> &Arc<User> {
        &self.customer
    }

    pub fn driver(&self) -> Option<&Arc<User>> {
        self.driver.as_ref()
    }

    /// Appends a line. Adding the same food item twice yields two lines.
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// The lines in the order they were added.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every line total; zero for an empty order.
    pub fn calculate_total(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Attaches `driver`, replacing any driver already assigned.
    pub fn assign_driver(&mut self, driver: Arc<User>) {
        self.driver = Some(driver);
    }

    /// Returns the order to the unassigned state.
    pub fn unassign_driver(&mut self) -> Option<Arc<User>> {
        self.driver.take()
    }
}
