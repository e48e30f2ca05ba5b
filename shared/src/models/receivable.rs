//! Receivable Ledger Entry Model

use serde::{Deserialize, Serialize};

/// Receivable status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReceivableStatus {
    #[default]
    Pending,
    Paid,
}

/// Ledger entry: one expected or received payment tied to an order.
///
/// Entries are derived, never authored: the posting coordinator creates them
/// from an order, replaces them en masse when the order is re-posted, and
/// mutates them individually only to flip `status`/`payment_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// None until persisted
    pub id: Option<String>,
    /// Parent order reference
    pub order_id: String,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub seller: String,
    /// Amount due in currency units
    pub amount: f64,
    /// Due date (plain YYYY-MM-DD)
    pub due_date: String,
    pub payment_date: Option<String>,
    pub status: ReceivableStatus,
    /// 1-based installment index
    pub installment_number: u32,
    /// Per-leg gross commission (reporting figure, may carry fractional cents)
    pub commission_amount: f64,
    /// Per-leg markup / pass-through (reporting figure)
    pub markup_amount: f64,
    pub created_at: Option<String>,
}
