//! # receipt-store: Storage Layer for Receipt Points
//!
//! This crate provides the storage capability the HTTP layer uses to keep
//! validated receipts between the `process` and `points` requests.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Data Flow                            │
//! │                                                                         │
//! │  POST /receipts/process                GET /receipts/{id}/points        │
//! │       │                                      │                          │
//! │       ▼                                      ▼                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ReceiptStore (trait)                                          │   │
//! │  │   ├── write(receipt)  → StoredReceipt { id, receipt }           │   │
//! │  │   └── read(id)        → StoredReceipt | StoreError::NotFound    │   │
//! │  │                                                                 │   │
//! │  │   MemoryStore ── RwLock<HashMap<id, StoredReceipt>>             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Storage error types
//! - [`repository`] - The `ReceiptStore` trait and its implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use receipt_store::{MemoryStore, ReceiptStore};
//!
//! let store = MemoryStore::new();
//! let stored = store.write(receipt).await?;
//! let again = store.read(&stored.id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::memory::MemoryStore;
pub use repository::{ReceiptStore, StoredReceipt};
