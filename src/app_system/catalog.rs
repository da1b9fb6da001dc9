use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::Product;

/// The fixed product range, three per category. Grocery expiry dates count
/// from `today`.
pub fn default_catalog(today: NaiveDate) -> Vec<Product> {
    let expires = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(today);

    vec![
        Product::electronic("Laptop", Decimal::new(99999, 2), 24),
        Product::electronic("Smartphone", Decimal::new(69999, 2), 12),
        Product::electronic("Headphones", Decimal::new(14999, 2), 6),
        Product::clothing("T-Shirt", Decimal::new(1999, 2), "M", "Cotton"),
        Product::clothing("Jeans", Decimal::new(4999, 2), "32", "Denim"),
        Product::clothing("Jacket", Decimal::new(8999, 2), "L", "Leather"),
        Product::grocery("Milk", Decimal::new(349, 2), expires(7)),
        Product::grocery("Bread", Decimal::new(299, 2), expires(3)),
        Product::grocery("Apples", Decimal::new(499, 2), expires(14)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ProductKind};

    #[test]
    fn test_three_products_per_category() {
        let catalog = default_catalog(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        for category in [Category::Electronics, Category::Clothing, Category::Groceries] {
            assert_eq!(catalog.iter().filter(|p| p.category() == category).count(), 3);
        }
        assert!(catalog.iter().all(|p| p.price >= Decimal::ZERO));
    }

    #[test]
    fn test_groceries_expire_after_today() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        for product in default_catalog(today) {
            if let ProductKind::Grocery { expires_on } = product.kind {
                assert!(expires_on > today);
            }
        }
    }
}
