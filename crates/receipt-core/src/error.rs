//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - Input normalization failures                   │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Storage operation failures (not found)         │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError (400)                                │
//! │        StoreError      → ApiError (404)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The points calculator has no error path: every validated receipt scores.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt normalization errors.
///
/// There is a single kind: the first field that failed, and why. The
/// normalizer never aggregates errors and never returns a partial receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field is missing, has the wrong type, or cannot be parsed.
    ///
    /// ## When This Occurs
    /// - `retailer` is absent, empty or not a string
    /// - `purchaseDate`/`purchaseTime` do not form a real instant
    /// - `total` or an item `price` is not numeric text
    /// - `items` is absent, not an array, or empty
    #[error("Invalid receipt field {field}: {detail}")]
    InvalidField { field: String, detail: String },
}

impl ValidationError {
    /// Creates an InvalidField error.
    pub fn invalid(field: impl Into<String>, detail: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field: field.into(),
            detail: detail.into(),
        }
    }

    /// Name of the offending field (e.g. `total`, `items[2].price`).
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidField { field, .. } => field,
        }
    }

    /// Human-readable reason.
    pub fn detail(&self) -> &str {
        match self {
            ValidationError::InvalidField { detail, .. } => detail,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
