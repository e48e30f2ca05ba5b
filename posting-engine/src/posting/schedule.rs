//! Installment schedule planner
//!
//! Turns an order total plus payment terms into the ordered list of
//! installments (due date, amount, initial status). Amounts are apportioned
//! in `Decimal` so the schedule always sums back to the total exactly.

use super::calendar;
use super::error::ValidationError;
use super::money::{round_currency, to_f64};
use rust_decimal::Decimal;
use shared::models::{PaymentMethod, ReceivableStatus};

/// One planned installment, not yet a persisted ledger entry
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledInstallment {
    /// 1-based index
    pub number: u32,
    pub due_date: String,
    pub amount: f64,
    pub status: ReceivableStatus,
    pub payment_date: Option<String>,
}

/// Pad with zeros / truncate so the offsets match the installment count.
///
/// When the user edits the count, already-entered offsets must survive: a
/// larger count gains trailing zero offsets, a smaller count drops the tail.
pub fn normalize_offsets(offsets: &[i64], count: usize) -> Vec<i64> {
    let mut out = offsets.to_vec();
    if out.len() < count {
        out.resize(count, 0);
    } else {
        out.truncate(count);
    }
    out
}

/// Plan the ordered installment list for an order total.
///
/// Cash orders produce a single leg due on the issue date, already paid.
/// Installment orders require a base (delivery) date and exactly `count`
/// offsets; callers that tolerate user edits should run
/// [`normalize_offsets`] first.
///
/// Amounts: legs 1..n-1 get `round(total / n)`; the last leg absorbs the
/// rounding remainder so the sum is exact to the cent.
pub fn plan(
    total: Decimal,
    method: PaymentMethod,
    count: u32,
    offsets: &[i64],
    issue_date: &str,
    base_date: Option<&str>,
) -> Result<Vec<ScheduledInstallment>, ValidationError> {
    match method {
        PaymentMethod::Cash => {
            let issue = calendar::parse_date(issue_date)?;
            let due = issue.format("%Y-%m-%d").to_string();
            Ok(vec![ScheduledInstallment {
                number: 1,
                due_date: due.clone(),
                amount: to_f64(total),
                status: ReceivableStatus::Paid,
                payment_date: Some(due),
            }])
        }
        PaymentMethod::Installment => {
            let base = base_date
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .ok_or(ValidationError::MissingBaseDate)?;

            let count = count.max(1) as usize;
            if offsets.len() != count {
                return Err(ValidationError::OffsetCountMismatch {
                    expected: count,
                    actual: offsets.len(),
                });
            }

            let n = Decimal::from(count as u64);
            let per = round_currency(total / n);
            let mut legs = Vec::with_capacity(count);
            for (i, &offset) in offsets.iter().enumerate() {
                let amount = if i + 1 == count {
                    // Last leg absorbs the rounding remainder
                    total - per * Decimal::from((count - 1) as u64)
                } else {
                    per
                };
                legs.push(ScheduledInstallment {
                    number: (i + 1) as u32,
                    due_date: calendar::add_calendar_days(base, offset)?,
                    amount: to_f64(amount),
                    status: ReceivableStatus::Pending,
                    payment_date: None,
                });
            }
            Ok(legs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::money::to_decimal;

    fn dec(v: f64) -> Decimal {
        to_decimal(v)
    }

    #[test]
    fn test_cash_single_paid_leg() {
        let legs = plan(
            dec(250.0),
            PaymentMethod::Cash,
            1,
            &[],
            "2024-05-10",
            None,
        )
        .unwrap();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].number, 1);
        assert_eq!(legs[0].amount, 250.0);
        assert_eq!(legs[0].due_date, "2024-05-10");
        assert_eq!(legs[0].status, ReceivableStatus::Paid);
        assert_eq!(legs[0].payment_date.as_deref(), Some("2024-05-10"));
    }

    #[test]
    fn test_cash_ignores_installment_fields() {
        // Count and offsets are meaningless for cash; still one leg
        let legs = plan(
            dec(99.9),
            PaymentMethod::Cash,
            5,
            &[0, 30, 60],
            "2024-05-10",
            Some("2024-06-01"),
        )
        .unwrap();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].amount, 99.9);
    }

    #[test]
    fn test_worked_example_100_over_3() {
        let legs = plan(
            dec(100.0),
            PaymentMethod::Installment,
            3,
            &[0, 30, 60],
            "2024-01-01",
            Some("2024-01-01"),
        )
        .unwrap();
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0].amount, 33.33);
        assert_eq!(legs[0].due_date, "2024-01-01");
        assert_eq!(legs[1].amount, 33.33);
        assert_eq!(legs[1].due_date, "2024-01-31");
        assert_eq!(legs[2].amount, 33.34);
        assert_eq!(legs[2].due_date, "2024-03-01");
        let sum: f64 = legs.iter().map(|l| l.amount).sum();
        assert_eq!(to_f64(dec(sum)), 100.0);
        assert!(legs.iter().all(|l| l.status == ReceivableStatus::Pending));
        assert!(legs.iter().all(|l| l.payment_date.is_none()));
    }

    #[test]
    fn test_sum_exact_for_any_count() {
        for total in [100.0, 100.01, 99.99, 123.45, 0.01, 7.0] {
            for n in 1u32..=24 {
                let offsets: Vec<i64> = (0..n as i64).map(|i| i * 30).collect();
                let legs = plan(
                    dec(total),
                    PaymentMethod::Installment,
                    n,
                    &offsets,
                    "2024-01-01",
                    Some("2024-01-01"),
                )
                .unwrap();
                assert_eq!(legs.len(), n as usize);
                let sum: Decimal = legs.iter().map(|l| dec(l.amount)).sum();
                assert_eq!(
                    to_f64(sum),
                    total,
                    "sum mismatch for total={} n={}",
                    total,
                    n
                );
                // Remainder sits on the last leg only
                if n > 1 {
                    let per = legs[0].amount;
                    assert!(legs[..(n as usize - 1)].iter().all(|l| l.amount == per));
                }
            }
        }
    }

    #[test]
    fn test_single_installment_stays_pending() {
        let legs = plan(
            dec(50.0),
            PaymentMethod::Installment,
            1,
            &[15],
            "2024-01-01",
            Some("2024-02-01"),
        )
        .unwrap();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].amount, 50.0);
        assert_eq!(legs[0].due_date, "2024-02-16");
        assert_eq!(legs[0].status, ReceivableStatus::Pending);
        assert!(legs[0].payment_date.is_none());
    }

    #[test]
    fn test_missing_base_date() {
        for base in [None, Some(""), Some("   ")] {
            let err = plan(
                dec(100.0),
                PaymentMethod::Installment,
                2,
                &[0, 30],
                "2024-01-01",
                base,
            )
            .unwrap_err();
            assert_eq!(err, ValidationError::MissingBaseDate);
        }
    }

    #[test]
    fn test_offset_count_mismatch() {
        let err = plan(
            dec(100.0),
            PaymentMethod::Installment,
            3,
            &[0, 30],
            "2024-01-01",
            Some("2024-01-01"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::OffsetCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_invalid_base_date() {
        let err = plan(
            dec(100.0),
            PaymentMethod::Installment,
            1,
            &[0],
            "2024-01-01",
            Some("01/01/2024"),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate(_)));
    }

    #[test]
    fn test_normalize_offsets() {
        assert_eq!(normalize_offsets(&[0, 30], 4), vec![0, 30, 0, 0]);
        assert_eq!(normalize_offsets(&[0, 30, 60, 90], 2), vec![0, 30]);
        assert_eq!(normalize_offsets(&[], 3), vec![0, 0, 0]);
        assert_eq!(normalize_offsets(&[10], 1), vec![10]);
    }
}
