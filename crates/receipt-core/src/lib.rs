//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It turns loosely typed
//! receipt documents into validated [`Receipt`] values and scores them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ receipt-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  points   │  │   │
//! │  │   │  Receipt  │  │  Amount   │  │ normalize │  │  6 rules  │  │   │
//! │  │   │   Item    │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 receipt-store (Storage Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item)
//! - [`money`] - Amount type parsed from numeric strings
//! - [`error`] - Domain error types
//! - [`validation`] - The receipt normalizer
//! - [`points`] - The points calculator
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate_points, normalize};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "retailer": "M&M Corner Market",
//!     "purchaseDate": "2022-03-20",
//!     "purchaseTime": "14:33",
//!     "items": [
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" },
//!         { "shortDescription": "Gatorade", "price": "2.25" }
//!     ],
//!     "total": "9.00"
//! });
//!
//! let receipt = normalize(&raw).unwrap();
//! assert_eq!(calculate_points(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Amount;
pub use points::{calculate_points, PointsBreakdown};
pub use types::{Item, Receipt};
pub use validation::normalize;
