pub mod format;
pub mod order;
pub mod product;
pub mod returned_item;
pub mod stock_item;

pub use order::*;
pub use product::*;
pub use returned_item::*;
pub use stock_item::*;
