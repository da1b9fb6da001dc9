use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<InventoryError>> for InventoryError {
    fn from(err: FrameworkError<InventoryError>) -> Self {
        match err {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            other => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
