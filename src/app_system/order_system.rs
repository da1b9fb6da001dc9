use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::app_system::ShopConfig;
use crate::clients::{InventoryClient, OrderClient};
use crate::domain::{Product, ProductId, ReturnId, ReturnedItem, StockItem};
use crate::inventory_actor::InventoryError;

/// The application system that owns the actors.
///
/// Responsible for starting up actors, wiring clients together, and handling shutdown.
pub struct ShopSystem {
    pub inventory_client: InventoryClient,
    pub order_client: OrderClient,
    initial_stock: u32,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    pub fn new(config: &ShopConfig) -> Self {
        // 1. Stock actor
        let product_id_counter = Arc::new(AtomicU64::new(1));
        let next_product_id = move || ProductId(product_id_counter.fetch_add(1, Ordering::SeqCst));

        let (stock_actor, stock_client) =
            ResourceActor::<StockItem>::new(config.channel_buffer, next_product_id);
        let stock_handle = tokio::spawn(stock_actor.run());

        // 2. Returned-stock log actor
        let return_id_counter = Arc::new(AtomicU64::new(1));
        let next_return_id = move || ReturnId(return_id_counter.fetch_add(1, Ordering::SeqCst));

        let (returns_actor, returns_client) =
            ResourceActor::<ReturnedItem>::new(config.channel_buffer, next_return_id);
        let returns_handle = tokio::spawn(returns_actor.run());

        // 3. Clients
        let inventory_client = InventoryClient::new(stock_client, returns_client);
        let order_client = OrderClient::new(inventory_client.clone(), config.delivery_window());

        Self {
            inventory_client,
            order_client,
            initial_stock: config.initial_stock,
            handles: vec![stock_handle, returns_handle],
        }
    }

    /// Stocks every product at the configured initial level.
    pub async fn stock_catalog(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<ProductId>, InventoryError> {
        let mut ids = Vec::with_capacity(products.len());
        for product in products {
            ids.push(self.inventory_client.add_product(product, self.initial_stock).await?);
        }
        info!(products = ids.len(), "Catalog stocked");
        Ok(ids)
    }

    /// Stocks the built-in catalog.
    pub async fn stock_default_catalog(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<ProductId>, InventoryError> {
        self.stock_catalog(super::default_catalog(today)).await
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Dropping the clients closes the channels; each ResourceActor stops
        // once its receiver drains.
        drop(self.order_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
