//! # In-Memory Receipt Store
//!
//! Records are indexed by id in a `HashMap`, since every read is a lookup
//! by id. Nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use receipt_core::Receipt;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{ReceiptStore, StoredReceipt};
use crate::error::{StoreError, StoreResult};

/// Receipt store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, StoredReceipt>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl ReceiptStore for MemoryStore {
    async fn write(&self, receipt: Receipt) -> StoreResult<StoredReceipt> {
        let id = Uuid::new_v4().to_string();
        let record = StoredReceipt {
            id: id.clone(),
            receipt,
        };

        debug!(id = %id, retailer = %record.receipt.retailer(), "Storing receipt");

        self.records.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn read(&self, id: &str) -> StoreResult<StoredReceipt> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| {
                debug!(id = %id, "Receipt not found");
                StoreError::not_found(id)
            })
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
