//! Order Posting Module
//!
//! Implements the order-to-receivables posting engine:
//!
//! - **money**: decimal currency arithmetic and order totals
//! - **calendar**: plain-date parsing and calendar-day offsets
//! - **schedule**: installment planner (amounts and due dates)
//! - **commission**: commission/markup resolution and per-leg split
//! - **coordinator**: order save/update/delete orchestration
//! - **store**: collaborator interfaces to the external stores
//! - **memory**: in-memory store implementations for tests
//!
//! # Data Flow
//!
//! 1. Caller submits an order draft to [`PostingCoordinator::post`]
//! 2. Coordinator validates (seller, base date) before any store call
//! 3. Total, installment schedule and commission split are computed
//! 4. Order is upserted with the recomputed figures
//! 5. Ledger rows for that order are replaced (delete then insert)
//! 6. A [`PostingOutcome`] is returned for exhaustive branching

pub mod calendar;
pub mod commission;
pub mod coordinator;
pub mod error;
pub mod memory;
pub mod money;
pub mod schedule;
pub mod store;

// Re-exports
pub use commission::CommissionSplit;
pub use coordinator::{PostingCoordinator, PostingOutcome, PostingPhase};
pub use error::ValidationError;
pub use memory::{MemoryLedgerStore, MemoryOrderStore};
pub use schedule::ScheduledInstallment;
pub use store::{LedgerStore, OrderStore, StoreError, StoreResult};
