use chrono::Local;
use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{
    Category, LineItem, Product, ProductId, ReturnId, ReturnedItem, ReturnedItemCreate, StockItem,
    StockItemCreate,
};
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};

/// Shown instead of an empty stock listing.
pub const NO_PRODUCTS: &str = "No products in inventory.";
/// Shown instead of an empty returned-stock listing.
pub const NO_RETURNS: &str = "No items have been returned.";

/// Client for the inventory: the stock actor and the returned-stock log actor.
///
/// Every stock change in the system goes through this client.
#[derive(Clone)]
pub struct InventoryClient {
    stock: ResourceClient<StockItem>,
    returns: ResourceClient<ReturnedItem>,
}

impl InventoryClient {
    pub fn new(stock: ResourceClient<StockItem>, returns: ResourceClient<ReturnedItem>) -> Self {
        Self { stock, returns }
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn add_product(
        &self,
        product: Product,
        initial_stock: u32,
    ) -> Result<ProductId, InventoryError> {
        debug!("Sending request");
        let id = self.stock.create(StockItemCreate { product, initial_stock }).await?;
        info!(product_id = %id, "Product stocked");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ProductId) -> Result<Option<StockItem>, InventoryError> {
        debug!("Sending request");
        Ok(self.stock.get(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_stock(&self) -> Result<Vec<StockItem>, InventoryError> {
        debug!("Sending request");
        Ok(self.stock.list().await?)
    }

    /// Stock entries of one category, in catalog order.
    #[instrument(skip(self))]
    pub async fn products_in(&self, category: Category) -> Result<Vec<StockItem>, InventoryError> {
        let mut items = self.list_stock().await?;
        items.retain(|item| item.product.category() == category);
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self.stock.perform_action(id, InventoryAction::CheckStock).await? {
            InventoryActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Takes `quantity` out of stock and returns the remaining level.
    #[instrument(skip(self))]
    pub async fn update_stock(&self, id: ProductId, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self.stock.perform_action(id, InventoryAction::UpdateStock(quantity)).await? {
            InventoryActionResult::UpdateStock(level) => {
                info!(remaining = level, "Stock updated");
                Ok(level)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Puts `quantity` back into stock and returns the new level.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self.stock.perform_action(id, InventoryAction::Restock(quantity)).await? {
            InventoryActionResult::Restock(level) => {
                info!(on_hand = level, "Stock replenished");
                Ok(level)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Appends an entry stamped with the current time to the returned-stock log.
    #[instrument(skip(self, line), fields(product_id = %line.product_id))]
    pub async fn add_to_returned_stock(
        &self,
        order_id: &str,
        line: &LineItem,
        quantity: u32,
    ) -> Result<ReturnId, InventoryError> {
        debug!("Sending request");
        let params = ReturnedItemCreate {
            order_id: order_id.to_string(),
            product_id: line.product_id,
            product: line.product.clone(),
            quantity,
            returned_at: Local::now(),
        };
        let id = self.returns.create(params).await?;
        info!(return_id = %id, "Return logged");
        Ok(id)
    }

    /// Quantity of a product already returned against one order.
    #[instrument(skip(self))]
    pub async fn returned_quantity(
        &self,
        order_id: &str,
        product_id: ProductId,
    ) -> Result<u32, InventoryError> {
        let returned: u32 = self
            .list_returned()
            .await?
            .iter()
            .filter(|item| item.order_id == order_id && item.product_id == product_id)
            .map(|item| item.quantity)
            .sum();
        Ok(returned)
    }

    #[instrument(skip(self))]
    pub async fn list_returned(&self) -> Result<Vec<ReturnedItem>, InventoryError> {
        debug!("Sending request");
        Ok(self.returns.list().await?)
    }

    pub async fn display_stock(&self) -> Result<String, InventoryError> {
        Ok(render_stock(&self.list_stock().await?))
    }

    pub async fn display_returned_stock(&self) -> Result<String, InventoryError> {
        Ok(render_returned(&self.list_returned().await?))
    }
}

fn unexpected(result: InventoryActionResult) -> InventoryError {
    InventoryError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}

pub fn render_stock(items: &[StockItem]) -> String {
    if items.is_empty() {
        return NO_PRODUCTS.to_string();
    }
    items.iter().map(StockItem::describe).collect::<Vec<_>>().join("\n")
}

pub fn render_returned(items: &[ReturnedItem]) -> String {
    if items.is_empty() {
        return NO_RETURNS.to_string();
    }
    items.iter().map(ReturnedItem::to_string).collect::<Vec<_>>().join("\n")
}
