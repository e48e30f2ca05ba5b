//! Order-to-receivables posting engine
//!
//! Derives receivable ledger entries from sale orders and keeps them
//! consistent when an order is edited or deleted. See [`posting`] for the
//! module breakdown.

pub mod posting;

// Re-exports
pub use posting::{
    CommissionSplit, LedgerStore, MemoryLedgerStore, MemoryOrderStore, OrderStore,
    PostingCoordinator, PostingOutcome, PostingPhase, ScheduledInstallment, StoreError,
    StoreResult, ValidationError,
};
