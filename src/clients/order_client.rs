use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;
use tracing::{error, info, instrument, warn};

use crate::app_system::OrderError;
use crate::clients::InventoryClient;
use crate::domain::{Cart, Customer, DeliveryWindow, LineItem, Order, ProductId, ReturnId};
use crate::inventory_actor::InventoryError;

/// Client for order workflows.
///
/// Orders are not stored anywhere: this client orchestrates the inventory
/// while a cart is filled, turns the cart into an [`Order`] at checkout, and
/// pushes returned goods back into stock.
#[derive(Clone)]
pub struct OrderClient {
    inventory: InventoryClient,
    delivery: DeliveryWindow,
    next_order: Arc<AtomicU64>,
}

impl OrderClient {
    pub fn new(inventory: InventoryClient, delivery: DeliveryWindow) -> Self {
        Self {
            inventory,
            delivery,
            next_order: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Reserves stock and appends a line item. On any failure the cart and
    /// the stock level are left as they were.
    #[instrument(skip(self, cart))]
    pub async fn add_line_item(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), OrderError> {
        info!("Processing add_line_item request");

        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        // Step 1: Validate product
        let item = match self.inventory.get_item(product_id).await? {
            Some(item) => item,
            None => {
                error!("Product not found");
                return Err(OrderError::InvalidProduct(product_id.to_string()));
            }
        };

        // Step 2: Reserve stock
        match self.inventory.update_stock(product_id, quantity).await {
            Ok(_) => info!(product_name = %item.product.name, "Stock reserved successfully"),
            Err(InventoryError::InsufficientStock { requested, available }) => {
                warn!(requested, available, "Stock reservation rejected");
                return Err(OrderError::InsufficientStock { requested, available });
            }
            Err(e) => {
                error!(error = %e, "Stock reservation failed");
                return Err(e.into());
            }
        }

        // Step 3: Append line item
        cart.push(LineItem::new(product_id, item.product, quantity));
        Ok(())
    }

    /// Abandons a cart and puts its reserved stock back.
    ///
    /// Every line is attempted even if an earlier one fails; the first
    /// failure is returned once all lines have been tried.
    #[instrument(skip(self, cart), fields(lines = cart.items().len()))]
    pub async fn cancel(&self, cart: Cart) -> Result<(), OrderError> {
        let mut first_error = None;
        for item in cart.into_items() {
            if let Err(e) = self.inventory.restock(item.product_id, item.quantity).await {
                error!(
                    product_id = %item.product_id,
                    error = %e,
                    "Failed to release reserved stock"
                );
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e.into()),
            None => {
                info!("Cart cancelled");
                Ok(())
            }
        }
    }

    /// Turns a filled cart into an order with status "Processing".
    #[instrument(skip(self, cart, customer), fields(customer_name = %customer.name))]
    pub async fn checkout(&self, cart: Cart, customer: Customer) -> Result<Order, OrderError> {
        if cart.is_empty() {
            warn!("Checkout with empty cart");
            return Err(OrderError::EmptyCart);
        }

        let id = format!("order_{}", self.next_order.fetch_add(1, Ordering::SeqCst));
        let order = Order::place(
            id,
            cart.into_items(),
            customer,
            Local::now(),
            self.delivery,
            &mut rand::thread_rng(),
        );

        info!(order_id = %order.id, total = %order.calculate_total(), "Order placed");
        Ok(order)
    }

    /// Returns goods from a placed order: restocks them and logs the return.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn process_return(
        &self,
        order: &Order,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<ReturnId, OrderError> {
        info!("Processing return request");

        let line = order
            .items
            .iter()
            .find(|item| item.product_id == product_id)
            .ok_or_else(|| OrderError::NotInOrder(product_id.to_string()))?;

        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        let purchased = order.purchased(product_id);
        let already_returned = self.inventory.returned_quantity(&order.id, product_id).await?;
        let returnable = purchased.saturating_sub(already_returned);
        if quantity > returnable {
            warn!(requested = quantity, returnable, "Return rejected");
            return Err(OrderError::ReturnExceedsPurchase { requested: quantity, returnable });
        }

        self.inventory.restock(product_id, quantity).await?;
        let logged = self.inventory.add_to_returned_stock(&order.id, line, quantity).await;
        let return_id = match logged {
            Ok(id) => id,
            Err(e) => {
                // Stock and the return log move together: undo the restock
                error!(error = %e, "Failed to log return, reverting restock");
                if let Err(undo) = self.inventory.update_stock(product_id, quantity).await {
                    error!(error = %undo, "Failed to revert restock");
                }
                return Err(e.into());
            }
        };

        info!(return_id = %return_id, "Return processed");
        Ok(return_id)
    }
}
