use crate::actor_framework::Entity;
use crate::domain::{
    ProductId, ReturnId, ReturnedItem, ReturnedItemCreate, StockItem, StockItemCreate,
};
use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;

impl Entity for StockItem {
    type Id = ProductId;
    type CreateParams = StockItemCreate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Error = InventoryError;

    /// Stocks a product with its initial on-hand count.
    fn from_create_params(id: ProductId, params: StockItemCreate) -> Result<Self, InventoryError> {
        Ok(Self {
            id,
            product: params.product,
            on_hand: params.initial_stock,
        })
    }

    /// Handles stock actions.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `UpdateStock(amount)`: Decrements stock by the specified amount
    /// - `Restock(amount)`: Increments stock by the specified amount
    ///
    /// # Errors
    /// Zero quantities and over-requests are rejected without touching stock.
    fn handle_action(
        &mut self,
        action: InventoryAction,
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::CheckStock => Ok(InventoryActionResult::CheckStock(self.on_hand)),
            InventoryAction::UpdateStock(0) | InventoryAction::Restock(0) => {
                Err(InventoryError::InvalidQuantity(0))
            }
            InventoryAction::UpdateStock(amount) => {
                if amount > self.on_hand {
                    return Err(InventoryError::InsufficientStock {
                        requested: amount,
                        available: self.on_hand,
                    });
                }
                self.on_hand -= amount;
                Ok(InventoryActionResult::UpdateStock(self.on_hand))
            }
            InventoryAction::Restock(amount) => {
                self.on_hand = self.on_hand.saturating_add(amount);
                Ok(InventoryActionResult::Restock(self.on_hand))
            }
        }
    }
}

impl Entity for ReturnedItem {
    type Id = ReturnId;
    type CreateParams = ReturnedItemCreate;
    type Action = (); // Log entries are never mutated
    type ActionResult = ();
    type Error = InventoryError;

    fn from_create_params(
        id: ReturnId,
        params: ReturnedItemCreate,
    ) -> Result<Self, InventoryError> {
        if params.quantity == 0 {
            return Err(InventoryError::InvalidQuantity(0));
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            product_id: params.product_id,
            product: params.product,
            quantity: params.quantity,
            returned_at: params.returned_at,
        })
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), InventoryError> {
        Ok(())
    }
}
