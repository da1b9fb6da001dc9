//! System orchestration, configuration, startup, and shutdown logic.

pub mod catalog;
pub mod config;
pub mod error;
pub mod order_system;
pub mod tracing;

pub use self::catalog::*;
pub use self::config::*;
pub use self::error::*;
pub use self::order_system::*;
pub use self::tracing::*;
