use std::fmt;

use chrono::{DateTime, Duration, Local};
use rand::Rng;
use rust_decimal::Decimal;

use super::format::{currency, short_date};
use super::product::{Product, ProductId};

/// Quantity at which a line item earns the bulk discount.
pub const BULK_DISCOUNT_THRESHOLD: u32 = 10;

/// Bulk discount rate in percent of the line subtotal.
pub const BULK_DISCOUNT_PERCENT: u32 = 10;

/// A (product, quantity) pair. The product is a snapshot of catalog data;
/// stock is looked up through the inventory by `product_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_id: ProductId, product: Product, quantity: u32) -> Self {
        Self { product_id, product, quantity }
    }

    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    pub fn has_bulk_discount(&self) -> bool {
        self.quantity >= BULK_DISCOUNT_THRESHOLD
    }

    pub fn discount(&self) -> Decimal {
        if self.has_bulk_discount() {
            self.subtotal() * Decimal::from(BULK_DISCOUNT_PERCENT) / Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }

    pub fn total(&self) -> Decimal {
        self.subtotal() - self.discount()
    }
}

/// Line items collected during an open shopping session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Decimal {
        calculate_total(&self.items)
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}

/// Sum of line totals, bulk discount applied per line.
pub fn calculate_total(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::total).sum()
}

/// Who the order ships to. Free text, not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub address: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Inclusive range of days between ordering and delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    pub min_days: i64,
    pub max_days: i64,
}

impl Default for DeliveryWindow {
    fn default() -> Self {
        Self { min_days: 3, max_days: 6 }
    }
}

impl DeliveryWindow {
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Duration {
        Duration::days(rng.gen_range(self.min_days..=self.max_days))
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub items: Vec<LineItem>,
    pub customer: Customer,
    pub ordered_at: DateTime<Local>,
    pub delivers_at: DateTime<Local>,
    pub status: String,
}

impl Order {
    /// Creates an order in status "Processing" with a delivery date drawn
    /// from `window`.
    pub fn place<R: Rng>(
        id: impl Into<String>,
        items: Vec<LineItem>,
        customer: Customer,
        ordered_at: DateTime<Local>,
        window: DeliveryWindow,
        rng: &mut R,
    ) -> Self {
        Self {
            id: id.into(),
            items,
            customer,
            ordered_at,
            delivers_at: ordered_at + window.pick(rng),
            status: "Processing".to_string(),
        }
    }

    pub fn calculate_total(&self) -> Decimal {
        calculate_total(&self.items)
    }

    /// Total quantity bought of one product across all lines.
    pub fn purchased(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .filter(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .sum()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order {}", self.id)?;
        writeln!(f, "Customer: {}", self.customer.name)?;
        writeln!(f, "Address: {}", self.customer.address)?;
        writeln!(f, "Order Date: {}", short_date(self.ordered_at.date_naive()))?;
        writeln!(f, "Delivery Date: {}", short_date(self.delivers_at.date_naive()))?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Items:")?;
        for item in &self.items {
            write!(
                f,
                "  {} x {} @ {} = {}",
                item.product.name,
                item.quantity,
                currency(item.product.price),
                currency(item.total()),
            )?;
            if item.has_bulk_discount() {
                write!(f, " ({}% bulk discount)", BULK_DISCOUNT_PERCENT)?;
            }
            writeln!(f)?;
        }
        write!(f, "Total: {}", currency(self.calculate_total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line(id: u64, price: i64, quantity: u32) -> LineItem {
        let product = Product::electronic("Item", Decimal::from(price), 12);
        LineItem::new(ProductId(id), product, quantity)
    }

    fn customer() -> Customer {
        Customer::new("A", "B")
    }

    #[test]
    fn test_no_discount_below_threshold() {
        assert_eq!(calculate_total(&[line(1, 100, 9)]), Decimal::from(900));
    }

    #[test]
    fn test_discount_at_and_above_threshold() {
        assert_eq!(calculate_total(&[line(1, 100, 10)]), Decimal::from(900));
        assert_eq!(calculate_total(&[line(1, 100, 11)]), Decimal::from(990));
    }

    #[test]
    fn test_total_is_additive_per_line() {
        let items = vec![line(1, 100, 11), line(2, 100, 9), line(3, 5, 1)];
        assert_eq!(calculate_total(&items), Decimal::from(990 + 900 + 5));
        assert_eq!(calculate_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_discount_keeps_cents_exact() {
        let cable = Product::electronic("Cable", Decimal::new(1999, 2), 6);
        let item = LineItem::new(ProductId(1), cable, 10);
        assert_eq!(item.discount(), Decimal::new(1999, 2));
        assert_eq!(item.total(), Decimal::new(17991, 2));
    }

    #[test]
    fn test_place_sets_processing_and_window() {
        let ordered_at = Local.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let items = vec![line(1, 100, 5)];
            let window = DeliveryWindow::default();
            let order = Order::place("order_1", items, customer(), ordered_at, window, &mut rng);
            let offset = order.delivers_at - order.ordered_at;
            assert!(offset >= Duration::days(3) && offset <= Duration::days(6), "offset {offset}");
            assert_eq!(order.status, "Processing");
        }
    }

    #[test]
    fn test_window_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = DeliveryWindow::default();
        let picks: Vec<i64> = (0..500).map(|_| window.pick(&mut rng).num_days()).collect();
        assert!(picks.contains(&3));
        assert!(picks.contains(&6));
    }

    #[test]
    fn test_purchased_sums_matching_lines() {
        let ordered_at = Local::now();
        let items = vec![line(1, 10, 2), line(2, 10, 4), line(1, 10, 3)];
        let mut rng = StdRng::seed_from_u64(1);
        let window = DeliveryWindow::default();
        let order = Order::place("order_1", items, customer(), ordered_at, window, &mut rng);
        assert_eq!(order.purchased(ProductId(1)), 5);
        assert_eq!(order.purchased(ProductId(9)), 0);
    }

    #[test]
    fn test_details_list_items_and_total() {
        let ordered_at = Local.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        let items = vec![line(1, 100, 11)];
        let window = DeliveryWindow { min_days: 4, max_days: 4 };
        let mut rng = StdRng::seed_from_u64(1);
        let order = Order::place("order_3", items, customer(), ordered_at, window, &mut rng);
        let details = order.to_string();
        assert!(details.contains("Order order_3"));
        assert!(details.contains("Order Date: 10/19/2026"));
        assert!(details.contains("Delivery Date: 10/23/2026"));
        assert!(details.contains("Item x 11 @ $100.00 = $990.00 (10% bulk discount)"));
        assert!(details.ends_with("Total: $990.00"));
    }
}
