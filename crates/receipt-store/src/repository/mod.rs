//! # Repository Module
//!
//! The storage capability consumed by the HTTP layer.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Storage                                      │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  state.store.write(receipt)                                    │
//! │       ▼                                                                 │
//! │  dyn ReceiptStore                                                      │
//! │  ├── write(&self, receipt)  → generates the id                         │
//! │  ├── read(&self, id)        → NotFound for unknown ids                 │
//! │  └── len(&self)             → record count                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryStore (HashMap behind a tokio RwLock)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The id scheme and indexing are private to each implementation.

pub mod memory;

use async_trait::async_trait;
use receipt_core::Receipt;

use crate::error::StoreResult;

/// A receipt together with the id it was stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReceipt {
    pub id: String,
    pub receipt: Receipt,
}

/// Read/write access to persisted receipts.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Persists a receipt under a freshly generated id.
    async fn write(&self, receipt: Receipt) -> StoreResult<StoredReceipt>;

    /// Fetches the receipt stored under `id`.
    async fn read(&self, id: &str) -> StoreResult<StoredReceipt>;

    /// Number of stored receipts.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
