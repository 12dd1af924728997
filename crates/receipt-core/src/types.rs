//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │       Receipt        │  1 ── n  │        Item          │            │
//! │  │  ──────────────────  │─────────►│  ──────────────────  │            │
//! │  │  retailer            │          │  short_description   │            │
//! │  │  purchased_at (UTC)  │          │  price (Amount)      │            │
//! │  │  total (Amount)      │          └──────────────────────┘            │
//! │  │  items (non-empty)   │                                              │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! Fields are private. The only way to obtain a `Receipt` is through
//! [`crate::validation::normalize`], so every value in circulation has
//! passed validation and none is ever mutated afterwards.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::money::Amount;

// =============================================================================
// Item
// =============================================================================

/// A line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    short_description: String,
    price: Amount,
}

impl Item {
    pub(crate) fn new(short_description: String, price: Amount) -> Self {
        Item {
            short_description,
            price,
        }
    }

    /// Trimmed description.
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A validated purchase transaction.
///
/// ## Invariants
/// - `retailer` is trimmed and non-empty
/// - `items` is non-empty and in submission order
/// - `total` and every price are finite
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    retailer: String,
    purchased_at: DateTime<Utc>,
    total: Amount,
    items: Vec<Item>,
}

impl Receipt {
    pub(crate) fn new(
        retailer: String,
        purchased_at: DateTime<Utc>,
        total: Amount,
        items: Vec<Item>,
    ) -> Self {
        Receipt {
            retailer,
            purchased_at,
            total,
            items,
        }
    }

    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    /// Purchase date and time combined as a UTC instant.
    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Re-encodes the receipt in the submission format.
    ///
    /// Amounts and the date/time become strings again, so feeding the result
    /// back through the normalizer yields an equal receipt.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::normalize;
    /// use serde_json::json;
    ///
    /// let raw = json!({
    ///     "retailer": " Target ",
    ///     "purchaseDate": "2022-01-01",
    ///     "purchaseTime": "13:01",
    ///     "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
    ///     "total": "1.25"
    /// });
    ///
    /// let receipt = normalize(&raw).unwrap();
    /// assert_eq!(receipt.to_raw()["retailer"], "Target");
    /// assert_eq!(normalize(&receipt.to_raw()).unwrap(), receipt);
    /// ```
    pub fn to_raw(&self) -> Value {
        let time_format = if self.purchased_at.second() == 0 && self.purchased_at.nanosecond() == 0 {
            "%H:%M"
        } else {
            "%H:%M:%S%.f"
        };

        let items: Vec<Value> = self
            .items
            .iter()
            .map(|item| {
                json!({
                    "shortDescription": item.short_description,
                    "price": item.price.to_string(),
                })
            })
            .collect();

        json!({
            "retailer": self.retailer,
            "purchaseDate": self.purchased_at.format("%Y-%m-%d").to_string(),
            "purchaseTime": self.purchased_at.format(time_format).to_string(),
            "total": self.total.to_string(),
            "items": items,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
