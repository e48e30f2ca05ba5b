//! Shared domain types for the receivables posting engine
//!
//! Common types used by the posting engine and its callers: sale orders,
//! line items, and receivable ledger entries.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
