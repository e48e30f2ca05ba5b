//! In-memory store implementations
//!
//! Dashmap-backed stores used by the test suite and as a reference for real
//! adapters. Independent orders can post concurrently; per-order
//! serialization stays the caller's responsibility.

use super::store::{LedgerStore, OrderStore, StoreError, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{LedgerEntry, ReceivableStatus, SaleOrder};
use uuid::Uuid;

fn today_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// In-memory order store
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: DashMap<String, SaleOrder>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<SaleOrder> {
        self.orders.get(id).map(|o| o.value().clone())
    }

    pub fn ids(&self) -> Vec<String> {
        self.orders.iter().map(|o| o.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn upsert(&self, mut order: SaleOrder) -> StoreResult<SaleOrder> {
        let id = match &order.id {
            Some(id) => id.clone(),
            None => Uuid::new_v4().to_string(),
        };
        order.id = Some(id.clone());
        if order.created_at.is_none() {
            order.created_at = Some(today_stamp());
        }
        self.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.orders.remove(id);
        Ok(())
    }
}

/// In-memory receivables ledger store
#[derive(Default)]
pub struct MemoryLedgerStore {
    entries: DashMap<String, LedgerEntry>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for one order, ordered by installment number
    pub fn entries_for_order(&self, order_id: &str) -> Vec<LedgerEntry> {
        let mut entries: Vec<LedgerEntry> = self
            .entries
            .iter()
            .filter(|e| e.value().order_id == order_id)
            .map(|e| e.value().clone())
            .collect();
        entries.sort_by_key(|e| e.installment_number);
        entries
    }

    pub fn get(&self, id: &str) -> Option<LedgerEntry> {
        self.entries.get(id).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn insert_many(&self, entries: Vec<LedgerEntry>) -> StoreResult<()> {
        for mut entry in entries {
            let id = match &entry.id {
                Some(id) => id.clone(),
                None => Uuid::new_v4().to_string(),
            };
            entry.id = Some(id.clone());
            if entry.created_at.is_none() {
                entry.created_at = Some(today_stamp());
            }
            self.entries.insert(id, entry);
        }
        Ok(())
    }

    async fn delete_by_order_id(&self, order_id: &str) -> StoreResult<()> {
        self.entries.retain(|_, e| e.order_id != order_id);
        Ok(())
    }

    async fn update_status(
        &self,
        entry_id: &str,
        status: ReceivableStatus,
        payment_date: Option<String>,
    ) -> StoreResult<()> {
        let mut entry = self
            .entries
            .get_mut(entry_id)
            .ok_or_else(|| StoreError::new(format!("Ledger entry not found: {}", entry_id)))?;
        entry.status = status;
        entry.payment_date = payment_date;
        Ok(())
    }
}
