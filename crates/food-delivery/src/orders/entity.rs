//! [`StoreEntity`] implementation for [`Order`].

use super::{OrderAction, OrderActionResult, OrderError};
use crate::model::{Order, OrderId};
use async_trait::async_trait;
use entity_store::StoreEntity;
use tracing::debug;

#[async_trait]
impl StoreEntity for Order {
    type Id = OrderId;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id().clone()
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AddItem(item) => {
                debug!(order_id = %self.id(), food_item_id = %item.food_item.id(), quantity = item.quantity, "Adding line");
                self.add_item(item);
                Ok(OrderActionResult::AddItem(self.items().len()))
            }
            OrderAction::AssignDriver(driver) => {
                debug!(order_id = %self.id(), driver_id = %driver.id(), "Assigning driver");
                self.assign_driver(driver);
                Ok(OrderActionResult::AssignDriver(()))
            }
            OrderAction::UnassignDriver => Ok(OrderActionResult::UnassignDriver(self.unassign_driver())),
            OrderAction::Total => Ok(OrderActionResult::Total(self.calculate_total())),
        }
    }
}
