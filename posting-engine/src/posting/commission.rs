//! Commission and markup resolution
//!
//! Order-level figures are rounded to the cent. Per-leg figures are plain
//! even division and may carry fractional cents: they feed reporting
//! dashboards, not the principal receivable. Pending product-owner
//! confirmation before hardening to cent-exact splits.

use super::money::{to_decimal, to_f64};
use rust_decimal::Decimal;

/// Resolved commission figures for a whole order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionSplit {
    /// Gross commission in currency units
    pub gross_commission: f64,
    /// Markup / pass-through in currency units
    pub markup_amount: f64,
}

impl CommissionSplit {
    /// Resolve commission from the order terms.
    ///
    /// A manual override > 0 wins over the percentage, even when the
    /// percentage is zero.
    pub fn resolve(
        total: Decimal,
        commission_pct: f64,
        markup_pct: f64,
        manual_commission: f64,
    ) -> Self {
        let gross_commission = if manual_commission > 0.0 {
            manual_commission
        } else {
            to_f64(total * to_decimal(commission_pct) / Decimal::ONE_HUNDRED)
        };
        let markup_amount = to_f64(total * to_decimal(markup_pct) / Decimal::ONE_HUNDRED);
        Self {
            gross_commission,
            markup_amount,
        }
    }

    /// Caller-facing net commission (gross minus markup). Reporting value,
    /// never stored.
    pub fn net_commission(&self) -> f64 {
        self.gross_commission - self.markup_amount
    }

    /// Even (commission, markup) split across `count` legs, not re-rounded
    pub fn per_leg(&self, count: u32) -> (f64, f64) {
        let n = count.max(1) as f64;
        (self.gross_commission / n, self.markup_amount / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(v: f64) -> Decimal {
        to_decimal(v)
    }

    #[test]
    fn test_percentage_commission() {
        let split = CommissionSplit::resolve(dec(1000.0), 5.0, 2.0, 0.0);
        assert_eq!(split.gross_commission, 50.0);
        assert_eq!(split.markup_amount, 20.0);
        assert_eq!(split.net_commission(), 30.0);
    }

    #[test]
    fn test_manual_override_wins() {
        let split = CommissionSplit::resolve(dec(1000.0), 5.0, 0.0, 75.5);
        assert_eq!(split.gross_commission, 75.5);

        // Override wins even when the percentage is zero
        let split = CommissionSplit::resolve(dec(1000.0), 0.0, 0.0, 12.0);
        assert_eq!(split.gross_commission, 12.0);
    }

    #[test]
    fn test_zero_override_falls_back_to_percentage() {
        let split = CommissionSplit::resolve(dec(200.0), 10.0, 0.0, 0.0);
        assert_eq!(split.gross_commission, 20.0);
    }

    #[test]
    fn test_commission_rounds_to_cent() {
        // 3.333% of 100.01 = 3.33333... -> 3.33
        let split = CommissionSplit::resolve(dec(100.01), 3.333, 0.0, 0.0);
        assert_eq!(split.gross_commission, 3.33);
    }

    #[test]
    fn test_per_leg_is_not_rerounded() {
        let split = CommissionSplit::resolve(dec(100.0), 10.0, 0.0, 0.0);
        let (commission, markup) = split.per_leg(3);
        // 10.00 / 3 stays fractional; only order-level totals are rounded
        assert!((commission - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(markup, 0.0);
    }

    #[test]
    fn test_per_leg_zero_count_clamped() {
        let split = CommissionSplit::resolve(dec(100.0), 10.0, 5.0, 0.0);
        assert_eq!(split.per_leg(0), split.per_leg(1));
    }
}
