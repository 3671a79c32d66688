use crate::catalog::Catalog;
use crate::checkout::CheckoutService;
use crate::config::AppConfig;
use crate::orders::{self, OrderClient, OrderRepository};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Store task failed: {0}")]
    TaskFailed(String),
}

/// The running application: catalog, order store and checkout.
///
/// # Example
///
/// ```ignore
/// let system = DeliverySystem::start(&AppConfig::default());
/// let history = system.order_client.find_by_customer(&"c1".into()).await?;
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    pub catalog: Arc<Catalog>,

    /// Client for the order store
    pub order_client: OrderClient,

    pub checkout: CheckoutService,

    handle: JoinHandle<()>,
}

impl DeliverySystem {
    /// Starts the system on the demonstration catalog.
    pub fn start(config: &AppConfig) -> Self {
        Self::with_catalog(config, Catalog::seed())
    }

    /// Starts the system on `catalog`. The order store begins with the catalog's orders.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn with_catalog(config: &AppConfig, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);

        let history = catalog.list_all_orders().to_vec();
        let (order_actor, order_client) = orders::with_orders(config.store.buffer_size, history);
        let handle = tokio::spawn(order_actor.run(()));

        let repository: Arc<dyn OrderRepository> = Arc::new(order_client.clone());
        let checkout = CheckoutService::new(repository, &config.checkout);

        info!(
            restaurants = catalog.list_restaurants().len(),
            food_items = catalog.list_food_items().len(),
            "Delivery system started"
        );

        Self {
            catalog,
            order_client,
            checkout,
            handle,
        }
    }

    /// Closes the order store and waits for it to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.checkout);
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(SystemError::TaskFailed(format!("{e:?}")));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
