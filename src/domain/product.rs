use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::format::{currency, short_date};

/// Identifier handed out by the inventory actor when a product is stocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Shopping aisle a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Clothing,
    Groceries,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Groceries => "Groceries",
        };
        f.write_str(name)
    }
}

/// Variant-specific product data.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    Electronic { warranty_months: u32 },
    Clothing { size: String, material: String },
    Grocery { expires_on: NaiveDate },
}

/// Catalog entry. Stock is not part of the product; the inventory owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: Decimal,
    pub kind: ProductKind,
}

impl Product {
    pub fn electronic(name: impl Into<String>, price: Decimal, warranty_months: u32) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ProductKind::Electronic { warranty_months },
        }
    }

    pub fn clothing(
        name: impl Into<String>,
        price: Decimal,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ProductKind::Clothing {
                size: size.into(),
                material: material.into(),
            },
        }
    }

    pub fn grocery(name: impl Into<String>, price: Decimal, expires_on: NaiveDate) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ProductKind::Grocery { expires_on },
        }
    }

    pub fn category(&self) -> Category {
        match self.kind {
            ProductKind::Electronic { .. } => Category::Electronics,
            ProductKind::Clothing { .. } => Category::Clothing,
            ProductKind::Grocery { .. } => Category::Groceries,
        }
    }

    /// Human-readable line combining the common fields, the given stock level
    /// and the variant's own fields.
    pub fn describe(&self, stock: u32) -> String {
        let base = format!("{} - Price: {}, Stock: {}", self.name, currency(self.price), stock);
        match &self.kind {
            ProductKind::Electronic { warranty_months } => {
                format!("{base}, Warranty: {warranty_months} months")
            }
            ProductKind::Clothing { size, material } => {
                format!("{base}, Size: {size}, Material: {material}")
            }
            ProductKind::Grocery { expires_on } => {
                format!("{base}, Expires: {}", short_date(*expires_on))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_per_variant() {
        let laptop = Product::electronic("Laptop", Decimal::new(129999, 2), 24);
        assert_eq!(
            laptop.describe(20),
            "Laptop - Price: $1,299.99, Stock: 20, Warranty: 24 months"
        );

        let shirt = Product::clothing("T-Shirt", Decimal::new(1999, 2), "M", "Cotton");
        assert_eq!(
            shirt.describe(3),
            "T-Shirt - Price: $19.99, Stock: 3, Size: M, Material: Cotton"
        );

        let expires = NaiveDate::from_ymd_opt(2026, 10, 26).unwrap();
        let milk = Product::grocery("Milk", Decimal::new(349, 2), expires);
        assert_eq!(milk.describe(0), "Milk - Price: $3.49, Stock: 0, Expires: 10/26/2026");
    }

    #[test]
    fn test_category_follows_kind() {
        let phone = Product::electronic("Phone", Decimal::ONE, 12);
        assert_eq!(phone.category(), Category::Electronics);
        let hat = Product::clothing("Hat", Decimal::ONE, "L", "Wool");
        assert_eq!(hat.category(), Category::Clothing);
        let expires = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let bread = Product::grocery("Bread", Decimal::ONE, expires);
        assert_eq!(bread.category(), Category::Groceries);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId(7).to_string(), "product_7");
    }
}
