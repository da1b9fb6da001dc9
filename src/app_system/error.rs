use thiserror::Error;

use crate::inventory_actor::InventoryError;

/// Errors that can occur while building, placing, or returning an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Product not in order: {0}")]
    NotInOrder(String),
    #[error("Return exceeds purchase: requested {requested}, returnable {returnable}")]
    ReturnExceedsPurchase { requested: u32, returnable: u32 },
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),
}
