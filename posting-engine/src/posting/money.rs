//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization.

use rust_decimal::prelude::*;
use shared::models::OrderItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a monetary value to 2 decimal places, half away from zero
#[inline]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line subtotal: quantity x unit price, rounded to the cent
pub fn item_subtotal(item: &OrderItem) -> Decimal {
    round_currency(to_decimal(item.quantity) * to_decimal(item.unit_price))
}

/// Order total recomputed from line items.
///
/// The raw products are summed first and the sum rounded once, so weighed
/// quantities do not accumulate per-line rounding drift.
pub fn order_total(items: &[OrderItem]) -> Decimal {
    let raw: Decimal = items
        .iter()
        .map(|item| to_decimal(item.quantity) * to_decimal(item.unit_price))
        .sum();
    round_currency(raw)
}

/// Compare two stored amounts at cent precision
pub fn money_eq(a: f64, b: f64) -> bool {
    (round_currency(to_decimal(a)) - round_currency(to_decimal(b))).abs() < MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_half_up() {
        // 0.005 should round up to 0.01
        let value = Decimal::new(5, 3);
        assert_eq!(to_f64(value), 0.01);

        // 0.004 should round down to 0.00
        let value2 = Decimal::new(4, 3);
        assert_eq!(to_f64(value2), 0.0);
    }

    #[test]
    fn test_item_subtotal() {
        let item = OrderItem::new("Flour", 2.5, "KG", 4.333);
        // 2.5 * 4.333 = 10.8325 -> 10.83
        assert_eq!(to_f64(item_subtotal(&item)), 10.83);
    }

    #[test]
    fn test_order_total_sums_before_rounding() {
        // Three lines of 0.333 each: per-line rounding would give 0.99,
        // summing first gives 1.00 (0.999 -> 1.00)
        let items: Vec<OrderItem> = (0..3)
            .map(|_| OrderItem::new("Widget", 1.0, "UND", 0.333))
            .collect();
        assert_eq!(to_f64(order_total(&items)), 1.0);
    }

    #[test]
    fn test_many_small_items() {
        // 100 items at 0.01 each
        let items: Vec<OrderItem> = (0..100)
            .map(|i| OrderItem::new(format!("Penny Item {}", i), 1.0, "UND", 0.01))
            .collect();
        assert_eq!(to_f64(order_total(&items)), 1.0);
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(100.0, 100.0));
        assert!(money_eq(100.004, 100.0));
        assert!(!money_eq(100.0, 100.02));
    }
}
