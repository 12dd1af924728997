//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  read(id) on an unknown id                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::NotFound (this module)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError { code: NOT_FOUND } (in receipt-api) → HTTP 404              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not-found is a storage condition. It never reuses the core's
//! `ValidationError`.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists for the id.
    ///
    /// ## When This Occurs
    /// - The id was never issued by `write`
    /// - The process restarted (storage is in-memory)
    #[error("Record for id \"{id}\" not found.")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for a given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
