//! Store actions for the Order aggregate.
//!
//! Line and driver changes to a stored order go through these actions so they run the
//! aggregate's own methods inside the store, rather than a client replacing the whole
//! value with an edited copy.

use crate::model::{Money, OrderItem, User};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Append a line.
    AddItem(OrderItem),
    /// Attach or replace the driver.
    AssignDriver(Arc<User>),
    UnassignDriver,
    /// Read the current total.
    Total,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Number of lines after the append.
    AddItem(usize),
    AssignDriver(()),
    /// The driver that was removed, if any.
    UnassignDriver(Option<Arc<User>>),
    Total(Money),
}
