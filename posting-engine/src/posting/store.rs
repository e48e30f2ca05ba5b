//! Store collaborator interfaces
//!
//! The engine persists through two narrow traits; the surrounding
//! application owns the actual storage technology, retry policy, timeouts
//! and connection pooling. Every call either succeeds completely or fails
//! with a [`StoreError`] that is surfaced to the caller verbatim.

use async_trait::async_trait;
use shared::models::{LedgerEntry, ReceivableStatus, SaleOrder};
use thiserror::Error;

/// Store failure, wrapping whatever the underlying client reported
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Sale order persistence
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert or update an order; returns the order with its id assigned
    async fn upsert(&self, order: SaleOrder) -> StoreResult<SaleOrder>;

    /// Remove an order record. Removing a missing id is not an error.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}

/// Receivables ledger persistence
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Insert a batch of freshly derived entries
    async fn insert_many(&self, entries: Vec<LedgerEntry>) -> StoreResult<()>;

    /// Remove every entry referencing an order id
    async fn delete_by_order_id(&self, order_id: &str) -> StoreResult<()>;

    /// Flip a single entry's status/payment date; amounts and due dates are
    /// immutable once posted
    async fn update_status(
        &self,
        entry_id: &str,
        status: ReceivableStatus,
        payment_date: Option<String>,
    ) -> StoreResult<()>;
}

#[async_trait]
impl<T: OrderStore + ?Sized> OrderStore for std::sync::Arc<T> {
    async fn upsert(&self, order: SaleOrder) -> StoreResult<SaleOrder> {
        (**self).upsert(order).await
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        (**self).delete_by_id(id).await
    }
}

#[async_trait]
impl<T: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<T> {
    async fn insert_many(&self, entries: Vec<LedgerEntry>) -> StoreResult<()> {
        (**self).insert_many(entries).await
    }

    async fn delete_by_order_id(&self, order_id: &str) -> StoreResult<()> {
        (**self).delete_by_order_id(order_id).await
    }

    async fn update_status(
        &self,
        entry_id: &str,
        status: ReceivableStatus,
        payment_date: Option<String>,
    ) -> StoreResult<()> {
        (**self).update_status(entry_id, status, payment_date).await
    }
}
