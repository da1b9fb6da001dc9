//! Typed handles over the resource actors.

pub mod inventory_client;
pub mod order_client;

pub use inventory_client::*;
pub use order_client::*;
