//! Inventory domain logic: stock entries and the returned-stock log.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
