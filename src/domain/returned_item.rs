use std::fmt;

use chrono::{DateTime, Local};

use super::format::short_date;
use super::product::{Product, ProductId};

/// Sequence number in the returned-stock log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReturnId(pub u64);

impl fmt::Display for ReturnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return_{}", self.0)
    }
}

/// One entry of the append-only returned-stock log.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnedItem {
    pub id: ReturnId,
    pub order_id: String,
    pub product_id: ProductId,
    pub product: Product,
    pub quantity: u32,
    pub returned_at: DateTime<Local>,
}

/// Parameters for logging a return.
#[derive(Debug, Clone)]
pub struct ReturnedItemCreate {
    pub order_id: String,
    pub product_id: ProductId,
    pub product: Product,
    pub quantity: u32,
    pub returned_at: DateTime<Local>,
}

impl fmt::Display for ReturnedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - Quantity: {}, Order: {}, Returned: {}",
            self.id,
            self.product.name,
            self.quantity,
            self.order_id,
            short_date(self.returned_at.date_naive()),
        )
    }
}
