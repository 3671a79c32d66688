//! # Order Repository
//!
//! [`OrderRepository`] is the persistence capability the checkout depends on. It accepts
//! and returns whole [`Order`] values; implementations never reach into an order's lines.
//!
//! Two implementations are provided and are interchangeable behind
//! `Arc<dyn OrderRepository>`:
//!
//! - [`OrderClient`](super::OrderClient), backed by a running order store
//! - [`InMemoryOrderRepository`], a plain list for callers without a runtime store

use super::OrderError;
use crate::model::{Order, OrderId, UserId};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a new order. Fails with [`OrderError::AlreadyExists`] if the id is taken.
    async fn save(&self, order: Order) -> Result<OrderId, OrderError>;

    /// A missing id is `Ok(None)`.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Every order, in the order they were saved.
    async fn find_all(&self) -> Result<Vec<Order>, OrderError>;

    /// Replaces a stored order. Fails with [`OrderError::NotFound`] for an unknown id.
    async fn update(&self, order: Order) -> Result<Order, OrderError>;

    async fn delete(&self, id: &OrderId) -> Result<(), OrderError>;

    /// Orders of one customer, in the order they were saved.
    async fn find_by_customer(&self, customer_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.find_all().await?;
        orders.retain(|order| order.customer().id() == customer_id);
        Ok(orders)
    }
}

/// An [`OrderRepository`] over an in-process list.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: Mutex::new(orders.into_iter().collect()),
        }
    }

    fn orders(&self) -> MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: Order) -> Result<OrderId, OrderError> {
        let mut orders = self.orders();
        let id = order.id().clone();
        if orders.iter().any(|existing| existing.id() == &id) {
            warn!(order_id = %id, "Save rejected: id already exists");
            return Err(OrderError::AlreadyExists(id.to_string()));
        }
        orders.push(order);
        debug!(order_id = %id, size = orders.len(), "Saved");
        Ok(id)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self.orders().iter().find(|order| order.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders().clone())
    }

    async fn update(&self, order: Order) -> Result<Order, OrderError> {
        let mut orders = self.orders();
        let slot = orders
            .iter_mut()
            .find(|existing| existing.id() == order.id())
            .ok_or_else(|| OrderError::NotFound(order.id().to_string()))?;
        *slot = order.clone();
        debug!(order_id = %order.id(), "Updated");
        Ok(order)
    }

    async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        let mut orders = self.orders();
        let position = orders
            .iter()
            .position(|order| order.id() == id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        orders.remove(position);
        debug!(order_id = %id, size = orders.len(), "Deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use std::sync::Arc;

    fn order(id: &str, customer_id: &str) -> Order {
        let customer = Arc::new(User::new(customer_id, "Ann", "ann@example.com", "+100"));
        Order::new(id, customer)
    }

    #[tokio::test]
    async fn test_in_memory_repository_round_trip() {
        let repo = InMemoryOrderRepository::new();

        let id = repo.save(order("o1", "c1")).await.unwrap();
        repo.save(order("o2", "c2")).await.unwrap();
        repo.save(order("o3", "c1")).await.unwrap();

        assert!(repo.find_by_id(&id).await.unwrap().is_some());
        assert!(repo.find_by_id(&OrderId::from("o9")).await.unwrap().is_none());

        let mine: Vec<String> = repo
            .find_by_customer(&UserId::from("c1"))
            .await
            .unwrap()
            .iter()
            .map(|o| o.id().to_string())
            .collect();
        assert_eq!(mine, vec!["o1", "o3"]);

        repo.delete(&id).await.unwrap();
        let ids: Vec<String> = repo.find_all().await.unwrap().iter().map(|o| o.id().to_string()).collect();
        assert_eq!(ids, vec!["o2", "o3"]);
    }

    #[tokio::test]
    async fn test_in_memory_repository_rejections() {
        let repo = InMemoryOrderRepository::with_orders([order("o1", "c1")]);

        assert_eq!(
            repo.save(order("o1", "c2")).await,
            Err(OrderError::AlreadyExists("o1".into()))
        );
        assert_eq!(
            repo.update(order("o9", "c1")).await,
            Err(OrderError::NotFound("o9".into()))
        );
        assert_eq!(
            repo.delete(&OrderId::from("o9")).await,
            Err(OrderError::NotFound("o9".into()))
        );
    }

    #[tokio::test]
    async fn test_update_replaces_the_whole_order() {
        let repo = InMemoryOrderRepository::with_orders([order("o1", "c1")]);

        let mut changed = order("o1", "c1");
        changed.assign_driver(Arc::new(User::new("d1", "Dan", "dan@example.com", "+200")));
        repo.update(changed.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(&OrderId::from("o1")).await.unwrap(), Some(changed));
    }
}
