//! Data models
//!
//! Order and ledger entities shared between the engine and its callers.
//! All monetary fields are `f64` in currency units; calculations happen in
//! `rust_decimal` inside the engine. Dates are plain `YYYY-MM-DD` strings.

pub mod order;
pub mod receivable;

// Re-exports
pub use order::*;
pub use receivable::*;
