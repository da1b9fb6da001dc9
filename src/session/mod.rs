//! The interactive shopping session: menus, prompts, and the single
//! in-progress order.

mod console;

pub use console::Console;

use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{info, instrument};

use crate::app_system::OrderError;
use crate::clients::{InventoryClient, OrderClient};
use crate::domain::{format::currency, Cart, Category, Customer, Order};
use crate::inventory_actor::InventoryError;

pub const NO_ORDER: &str = "No order has been placed yet.";

const MAIN_MENU: &str = "\n=== Main Menu ===
1. Start Shopping
2. View Order
3. Return Product
4. Inventory Management
5. Exit";

const SHOPPING_MENU: &str = "\n=== Shopping ===
1. Electronics
2. Clothing
3. Groceries
4. Checkout
5. Cancel";

const INVENTORY_MENU: &str = "\n=== Inventory Management ===
1. View Stock
2. View Returned Items
3. Back";

/// Failures that end a session. Rejections the user can fix (bad input,
/// insufficient stock, oversized returns) are reported and never surface here.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

pub struct Session<R, W> {
    console: Console<R, W>,
    inventory: InventoryClient,
    orders: OrderClient,
    current_order: Option<Order>,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(console: Console<R, W>, inventory: InventoryClient, orders: OrderClient) -> Self {
        Self {
            console,
            inventory,
            orders,
            current_order: None,
        }
    }

    #[cfg(test)]
    pub fn current_order(&self) -> Option<&Order> {
        self.current_order.as_ref()
    }

    #[cfg(test)]
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the main menu until Exit is chosen or the input ends.
    #[instrument(name = "session", skip(self))]
    pub async fn run(&mut self) -> Result<(), SessionError> {
        match self.main_menu().await {
            Ok(()) | Err(SessionError::InputClosed) => {
                info!("Session ended");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn main_menu(&mut self) -> Result<(), SessionError> {
        loop {
            self.console.say(MAIN_MENU).await?;
            match self.console.choose("Select an option:", 5).await? {
                1 => self.shop().await?,
                2 => self.view_order().await?,
                3 => self.return_product().await?,
                4 => self.inventory_menu().await?,
                _ => {
                    self.console.say("Goodbye!").await?;
                    return Ok(());
                }
            }
        }
    }

    /// One shopping session. Starting it discards the previous order.
    async fn shop(&mut self) -> Result<(), SessionError> {
        self.current_order = None;
        let mut cart = Cart::new();

        loop {
            self.console.say(SHOPPING_MENU).await?;
            if !cart.is_empty() {
                let summary = format!(
                    "Cart: {} item(s), total {}",
                    cart.items().len(),
                    currency(cart.total())
                );
                self.console.say(&summary).await?;
            }
            match self.console.choose("Select an option:", 5).await? {
                1 => self.add_to_cart(&mut cart, Category::Electronics).await?,
                2 => self.add_to_cart(&mut cart, Category::Clothing).await?,
                3 => self.add_to_cart(&mut cart, Category::Groceries).await?,
                4 => {
                    if cart.is_empty() {
                        self.console.say("Your cart is empty.").await?;
                        continue;
                    }
                    return self.checkout(cart).await;
                }
                _ => {
                    self.orders.cancel(cart).await?;
                    self.console.say("Shopping cancelled.").await?;
                    return Ok(());
                }
            }
        }
    }

    async fn add_to_cart(
        &mut self,
        cart: &mut Cart,
        category: Category,
    ) -> Result<(), SessionError> {
        let items = self.inventory.products_in(category).await?;
        if items.is_empty() {
            self.console.say("No products available in this category.").await?;
            return Ok(());
        }

        self.console.say(&format!("\n--- {category} ---")).await?;
        for (i, item) in items.iter().enumerate() {
            self.console.say(&format!("{}. {}", i + 1, item.describe())).await?;
        }

        let index = self.console.choose("Select a product:", items.len()).await?;
        let item = &items[index - 1];

        let available = self.inventory.check_stock(item.id).await?;
        if available == 0 {
            self.console.say(&format!("{} is out of stock.", item.product.name)).await?;
            return Ok(());
        }

        let quantity = self.console.ask_quantity("Enter quantity:").await?;
        match self.orders.add_line_item(cart, item.id, quantity).await {
            Ok(()) => {
                let message = format!("Added {} x {} to your cart.", quantity, item.product.name);
                self.console.say(&message).await?;
            }
            Err(OrderError::InsufficientStock { requested, available }) => {
                let message = format!(
                    "Insufficient stock for {}: requested {}, available {}.",
                    item.product.name, requested, available
                );
                self.console.say(&message).await?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    async fn checkout(&mut self, cart: Cart) -> Result<(), SessionError> {
        let name = self.console.ask("Enter your name:").await?;
        let address = self.console.ask("Enter your address:").await?;

        let order = self.orders.checkout(cart, Customer::new(name, address)).await?;
        self.console.say("\nOrder placed successfully!").await?;
        self.console.say(&order.to_string()).await?;
        self.current_order = Some(order);
        Ok(())
    }

    async fn view_order(&mut self) -> Result<(), SessionError> {
        let details = match &self.current_order {
            Some(order) => order.to_string(),
            None => NO_ORDER.to_string(),
        };
        self.console.say(&details).await
    }

    async fn return_product(&mut self) -> Result<(), SessionError> {
        let Some(order) = self.current_order.clone() else {
            return self.console.say(NO_ORDER).await;
        };

        self.console.say(&format!("\nItems in order {}:", order.id)).await?;
        for (i, line) in order.items.iter().enumerate() {
            let entry = format!("{}. {} x {}", i + 1, line.product.name, line.quantity);
            self.console.say(&entry).await?;
        }

        let index = self.console.choose("Select an item to return:", order.items.len()).await?;
        let line = &order.items[index - 1];
        let quantity = self.console.ask_quantity("Enter quantity to return:").await?;

        match self.orders.process_return(&order, line.product_id, quantity).await {
            Ok(_) => {
                let message = format!(
                    "Returned {} x {}. Stock has been replenished.",
                    quantity, line.product.name
                );
                self.console.say(&message).await
            }
            Err(OrderError::ReturnExceedsPurchase { requested, returnable }) => {
                let message = format!(
                    "Cannot return {} x {}: only {} can still be returned.",
                    requested, line.product.name, returnable
                );
                self.console.say(&message).await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn inventory_menu(&mut self) -> Result<(), SessionError> {
        loop {
            self.console.say(INVENTORY_MENU).await?;
            let listing = match self.console.choose("Select an option:", 3).await? {
                1 => self.inventory.display_stock().await?,
                2 => self.inventory.display_returned_stock().await?,
                _ => return Ok(()),
            };
            self.console.say(&listing).await?;
        }
    }
}
