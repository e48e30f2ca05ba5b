//! Posting Coordinator
//!
//! Orchestrates order save/update/delete against the receivables ledger.
//! Invariant: ledger rows for an order are always a pure function of the
//! order's current state. On every post the engine recomputes the total,
//! schedule and commission split, upserts the order, then replaces that
//! order's ledger rows wholesale (delete then insert).
//!
//! The engine holds no locks and never retries; per-order serialization and
//! retry policy belong to the caller. The delete-then-insert ordering means
//! a mid-flight failure can leave an order with a stale or empty ledger but
//! never a double-posted one; [`PostingOutcome::PartiallyApplied`] reports
//! which phase failed so the caller can decide.

use super::commission::CommissionSplit;
use super::error::ValidationError;
use super::money;
use super::schedule::{self, ScheduledInstallment};
use super::store::{LedgerStore, OrderStore, StoreError, StoreResult};
use rust_decimal::Decimal;
use shared::models::{LedgerEntry, PaymentMethod, ReceivableStatus, SaleOrder};

/// Display name recorded when an order has no linked customer
const WALK_IN_CUSTOMER: &str = "Walk-in";

/// Which persistence phase failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingPhase {
    /// Order upsert failed; nothing was applied
    OrderUpsert,
    /// Old ledger rows could not be deleted; order saved, ledger stale
    LedgerDelete,
    /// Fresh ledger rows could not be inserted; order saved, ledger empty
    LedgerInsert,
}

/// Outcome of a posting call. Callers branch exhaustively instead of
/// catching; only `Posted` means the order and its ledger are consistent.
#[derive(Debug)]
pub enum PostingOutcome {
    /// Order and freshly derived ledger fully persisted
    Posted {
        order: SaleOrder,
        entries: Vec<LedgerEntry>,
    },
    /// A store call failed mid-flight. The phase says what may be left
    /// behind; retry the whole posting operation.
    PartiallyApplied {
        phase: PostingPhase,
        error: StoreError,
    },
    /// Failed local validation; no store call was made
    Rejected(ValidationError),
}

impl PostingOutcome {
    pub fn is_posted(&self) -> bool {
        matches!(self, PostingOutcome::Posted { .. })
    }

    /// Unpack a successful posting, discarding failure detail
    pub fn into_posted(self) -> Option<(SaleOrder, Vec<LedgerEntry>)> {
        match self {
            PostingOutcome::Posted { order, entries } => Some((order, entries)),
            _ => None,
        }
    }
}

/// Coordinates order and ledger stores so receivables always mirror orders
pub struct PostingCoordinator<O, L> {
    orders: O,
    ledger: L,
}

impl<O: OrderStore, L: LedgerStore> PostingCoordinator<O, L> {
    pub fn new(orders: O, ledger: L) -> Self {
        Self { orders, ledger }
    }

    /// Post an order: validate, recompute, persist, replace its ledger rows.
    ///
    /// An order with an id is an edit; its existing ledger rows are deleted
    /// before the fresh set is inserted.
    pub async fn post(&self, order: SaleOrder) -> PostingOutcome {
        let (order, legs, split) = match prepare(order) {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::warn!(error = %e, "Order rejected");
                return PostingOutcome::Rejected(e);
            }
        };

        let is_edit = order.id.is_some();
        let leg_count = legs.len() as u32;

        let saved = match self.orders.upsert(order).await {
            Ok(saved) => saved,
            Err(error) => {
                tracing::error!(phase = ?PostingPhase::OrderUpsert, error = %error, "Posting failed");
                return PostingOutcome::PartiallyApplied {
                    phase: PostingPhase::OrderUpsert,
                    error,
                };
            }
        };

        let Some(order_id) = saved.id.clone() else {
            let error = StoreError::new("Order store returned an order without an id");
            tracing::error!(phase = ?PostingPhase::OrderUpsert, error = %error, "Posting failed");
            return PostingOutcome::PartiallyApplied {
                phase: PostingPhase::OrderUpsert,
                error,
            };
        };

        if is_edit {
            if let Err(error) = self.ledger.delete_by_order_id(&order_id).await {
                tracing::error!(
                    order_id = %order_id,
                    phase = ?PostingPhase::LedgerDelete,
                    error = %error,
                    "Posting failed; ledger is stale"
                );
                return PostingOutcome::PartiallyApplied {
                    phase: PostingPhase::LedgerDelete,
                    error,
                };
            }
        }

        let (leg_commission, leg_markup) = split.per_leg(leg_count);
        let entries: Vec<LedgerEntry> = legs
            .iter()
            .map(|leg| LedgerEntry {
                id: None,
                order_id: order_id.clone(),
                customer_id: saved.customer_id.clone(),
                customer_name: saved.customer_name.clone(),
                seller: saved.seller.clone(),
                amount: leg.amount,
                due_date: leg.due_date.clone(),
                payment_date: leg.payment_date.clone(),
                status: leg.status,
                installment_number: leg.number,
                commission_amount: leg_commission,
                markup_amount: leg_markup,
                created_at: None,
            })
            .collect();

        if let Err(error) = self.ledger.insert_many(entries.clone()).await {
            tracing::error!(
                order_id = %order_id,
                phase = ?PostingPhase::LedgerInsert,
                error = %error,
                "Posting failed; order has no receivables"
            );
            return PostingOutcome::PartiallyApplied {
                phase: PostingPhase::LedgerInsert,
                error,
            };
        }

        tracing::info!(
            order_id = %order_id,
            entries = entries.len(),
            total = saved.total,
            edit = is_edit,
            "Order posted"
        );
        PostingOutcome::Posted {
            order: saved,
            entries,
        }
    }

    /// Delete an order and its receivables, ledger rows first (no orphans)
    pub async fn delete(&self, order_id: &str) -> StoreResult<()> {
        self.ledger.delete_by_order_id(order_id).await?;
        self.orders.delete_by_id(order_id).await?;
        tracing::info!(order_id = %order_id, "Order and receivables deleted");
        Ok(())
    }

    /// Mark a ledger entry paid as of `payment_date`, or reopen it.
    ///
    /// Touches only status/payment date, never amounts or due dates, and
    /// never cascades to sibling installments.
    pub async fn set_entry_status(
        &self,
        entry_id: &str,
        paid: bool,
        payment_date: &str,
    ) -> StoreResult<()> {
        let (status, payment_date) = if paid {
            (ReceivableStatus::Paid, Some(payment_date.to_string()))
        } else {
            (ReceivableStatus::Pending, None)
        };
        self.ledger
            .update_status(entry_id, status, payment_date)
            .await?;
        tracing::info!(entry_id = %entry_id, status = ?status, "Receivable status updated");
        Ok(())
    }
}

/// Validate and recompute everything derived from the order's current state.
/// Pure; runs before any store call.
fn prepare(
    mut order: SaleOrder,
) -> Result<(SaleOrder, Vec<ScheduledInstallment>, CommissionSplit), ValidationError> {
    order.seller = order.seller.trim().to_string();
    if order.seller.is_empty() {
        return Err(ValidationError::MissingSeller);
    }

    let has_customer_name = order
        .customer_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());
    if !has_customer_name {
        order.customer_name = Some(WALK_IN_CUSTOMER.to_string());
    }

    order.installment_count = order.installment_count.max(1);
    order.installment_offsets = match order.payment_method {
        PaymentMethod::Installment => schedule::normalize_offsets(
            &order.installment_offsets,
            order.installment_count as usize,
        ),
        PaymentMethod::Cash => vec![0],
    };

    let total = money::order_total(&order.items);
    let legs = schedule::plan(
        total,
        order.payment_method,
        order.installment_count,
        &order.installment_offsets,
        &order.issue_date,
        order.delivery_date.as_deref(),
    )?;
    let split = CommissionSplit::resolve(
        total,
        order.commission_pct,
        order.markup_pct,
        order.manual_commission,
    );

    order.total = money::to_f64(total);
    order.per_installment = money::to_f64(total / Decimal::from(order.installment_count));
    order.payment_terms = Some(
        order
            .installment_offsets
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("/"),
    );

    Ok((order, legs, split))
}
