/// Custom actions for stock entries.
///
/// These are the only operations that change a product's on-hand count.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Removes a quantity from stock.
    ///
    /// # Errors
    /// Fails when the quantity is zero or exceeds the stock on hand; stock is
    /// left unchanged in that case.
    UpdateStock(u32),
    /// Puts a quantity back into stock (returns, cancelled carts).
    Restock(u32),
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction.
/// Each carries the stock level after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    CheckStock(u32),
    UpdateStock(u32),
    Restock(u32),
}
