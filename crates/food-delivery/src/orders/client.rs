//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` store.
//! It wraps a `StoreClient<Order>` and exposes the repository capability plus the
//! aggregate operations a stored order supports.
use super::{OrderAction, OrderActionResult, OrderError, OrderRepository};
use crate::model::{Money, Order, OrderId, OrderItem, User};
use async_trait::async_trait;
use entity_store::{EntityClient, StoreClient, StoreError};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Appends a line to a stored order. Returns the new line count.
    #[instrument(skip(self, item), fields(food_item_id = %item.food_item.id(), quantity = item.quantity))]
    pub async fn add_item(&self, id: OrderId, item: OrderItem) -> Result<usize, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::AddItem(item)).await? {
            OrderActionResult::AddItem(count) => Ok(count),
            other => Err(unexpected("AddItem", other)),
        }
    }

    #[instrument(skip(self, driver), fields(driver_id = %driver.id()))]
    pub async fn assign_driver(&self, id: OrderId, driver: Arc<User>) -> Result<(), OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::AssignDriver(driver)).await? {
            OrderActionResult::AssignDriver(()) => Ok(()),
            other => Err(unexpected("AssignDriver", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn unassign_driver(&self, id: OrderId) -> Result<Option<Arc<User>>, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::UnassignDriver).await? {
            OrderActionResult::UnassignDriver(previous) => Ok(previous),
            other => Err(unexpected("UnassignDriver", other)),
        }
    }

    /// The current total of a stored order.
    #[instrument(skip(self))]
    pub async fn total(&self, id: OrderId) -> Result<Money, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::Total).await? {
            OrderActionResult::Total(total) => Ok(total),
            other => Err(unexpected("Total", other)),
        }
    }
}

fn unexpected(action: &str, result: OrderActionResult) -> OrderError {
    OrderError::UnexpectedResponse(format!("{action} answered with {result:?}"))
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}

#[async_trait]
impl OrderRepository for OrderClient {
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn save(&self, order: Order) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        Ok(self.inner.save(order).await?)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        EntityClient::get(self, id.clone()).await
    }

    async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
        EntityClient::list(self).await
    }

    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn update(&self, order: Order) -> Result<Order, OrderError> {
        debug!("Sending request");
        Ok(self.inner.update(order).await?)
    }

    async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        EntityClient::delete(self, id.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FoodItem;
    use entity_store::mock::{create_mock_client, expect_action, expect_save, MockStore};

    fn customer() -> Arc<User> {
        Arc::new(User::new("c1", "John Doe", "john.doe@email.com", "+1234567890"))
    }

    fn burger_line() -> OrderItem {
        let burger = FoodItem::new("f1", "Classic Burger", "", Money::from_cents(1099));
        OrderItem::new(Arc::new(burger), 2)
    }

    #[tokio::test]
    async fn test_add_item_sends_the_line() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client.add_item(OrderId::from("ord1"), burger_line()).await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, "ord1");
        match action {
            OrderAction::AddItem(line) => {
                assert_eq!(line.food_item.id(), "f1");
                assert_eq!(line.quantity, 2);
            }
            other => panic!("Expected AddItem action, got {other:?}"),
        }

        responder.send(Ok(OrderActionResult::AddItem(3))).unwrap();
        assert_eq!(task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.total(OrderId::from("ord1")).await });

        let (_, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, OrderAction::Total));
        responder.send(Ok(OrderActionResult::AddItem(1))).unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(OrderError::UnexpectedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_save_maps_duplicate_ids() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            OrderRepository::save(&order_client, Order::new("ord1", customer())).await
        });

        let (order, responder) = expect_save(&mut receiver).await.unwrap();
        assert_eq!(order.id(), &OrderId::from("ord1"));
        responder
            .send(Err(StoreError::AlreadyExists("ord1".to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(OrderError::AlreadyExists("ord1".to_string()))
        );
    }

    #[tokio::test]
    async fn test_repository_reads_through_the_store() {
        let stored = Order::new("ord1", customer());

        let mock = MockStore::<Order>::new();
        mock.expect_get(OrderId::from("ord1")).return_ok(Some(stored.clone()));
        mock.expect_get(OrderId::from("ord9")).return_ok(None);
        mock.expect_list().return_ok(vec![stored.clone()]);
        mock.expect_delete(OrderId::from("ord9"))
            .return_err(StoreError::NotFound("ord9".to_string()));

        let repo: Arc<dyn OrderRepository> = Arc::new(OrderClient::new(mock.client()));

        assert_eq!(repo.find_by_id(&OrderId::from("ord1")).await.unwrap(), Some(stored.clone()));
        assert_eq!(repo.find_by_id(&OrderId::from("ord9")).await.unwrap(), None);
        assert_eq!(
            repo.find_by_customer(&"c1".into()).await.unwrap(),
            vec![stored]
        );
        assert_eq!(
            repo.delete(&OrderId::from("ord9")).await,
            Err(OrderError::NotFound("ord9".to_string()))
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Order>(1);
        drop(receiver);
        let order_client = OrderClient::new(client);

        let result = order_client.total(OrderId::from("ord1")).await;
        assert!(matches!(result, Err(OrderError::StoreCommunicationError(msg)) if msg == "Store actor closed"));
    }
}
