use super::product::{Product, ProductId};

/// A catalog product together with its on-hand count. Only the inventory
/// actor holds these mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    pub id: ProductId,
    pub product: Product,
    pub on_hand: u32,
}

/// Parameters for stocking a new product.
#[derive(Debug, Clone)]
pub struct StockItemCreate {
    pub product: Product,
    pub initial_stock: u32,
}

impl StockItem {
    pub fn describe(&self) -> String {
        self.product.describe(self.on_hand)
    }
}
