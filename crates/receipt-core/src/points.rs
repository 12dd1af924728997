//! # Points Module
//!
//! Scores a validated [`Receipt`] with six independent, additive rules.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Points Rules                                     │
//! │                                                                         │
//! │  Rule              Computation                               Points     │
//! │  ────────────────  ────────────────────────────────────────  ────────   │
//! │  retailer          ASCII letters/digits in retailer name     1 each     │
//! │  total             round dollar amount                       75         │
//! │                    otherwise a multiple of 0.25              25         │
//! │  item count        every two items                           5          │
//! │  descriptions      trimmed length % 3 == 0                   ⌈price×0.2⌉│
//! │  purchase day      odd UTC day of month                      6          │
//! │  purchase time     14:00 <= UTC time < 16:00                 10         │
//! │                                                                         │
//! │  total points = sum of all six (no early exit, no rounding of sums)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: the same receipt always yields the same score.

use chrono::{Datelike, Timelike};

use crate::types::Receipt;

/// Points for a round dollar total.
pub const ROUND_TOTAL_POINTS: u64 = 75;

/// Points for a total that is a multiple of [`QUARTER`].
pub const QUARTER_TOTAL_POINTS: u64 = 25;

pub const QUARTER: f64 = 0.25;

/// Points awarded per pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Price multiplier for qualifying item descriptions.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

pub const ODD_DAY_POINTS: u64 = 6;

pub const AFTERNOON_POINTS: u64 = 10;

/// Purchase-hour window `[start, end)` for [`AFTERNOON_POINTS`].
pub const AFTERNOON_HOURS: (u32, u32) = (14, 16);

// =============================================================================
// Rules
// =============================================================================

/// One point for every alphanumeric character in the retailer name.
///
/// ## Example
/// ```rust
/// use receipt_core::points::retailer_points;
///
/// assert_eq!(retailer_points("Target123"), 9);
/// assert_eq!(retailer_points("  T##ar & ge !t  "), 6);
/// ```
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 75 points for a round dollar total, else 25 for a multiple of 0.25.
///
/// A whole amount is also a quarter multiple; the whole-dollar check wins.
pub fn total_points(receipt: &Receipt) -> u64 {
    let total = receipt.total();

    if total.is_whole() {
        ROUND_TOTAL_POINTS
    } else if total.is_multiple_of(QUARTER) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// 5 points for every two items.
pub fn item_count_points(receipt: &Receipt) -> u64 {
    (receipt.items().len() / 2) as u64 * ITEM_PAIR_POINTS
}

/// Sum of `ceil(price * 0.2)` over items whose trimmed description length is
/// a non-zero multiple of three.
///
/// Each item is rounded up on its own before summing. A negative price
/// contributes nothing; huge prices saturate at `u64::MAX`.
pub fn description_points(receipt: &Receipt) -> u64 {
    receipt
        .items()
        .iter()
        .filter(|item| {
            let len = item.short_description().trim().chars().count();
            len > 0 && len % 3 == 0
        })
        .map(|item| item.price().scaled_ceil(DESCRIPTION_PRICE_MULTIPLIER).max(0) as u64)
        .fold(0, u64::saturating_add)
}

/// 6 points if the UTC day of the purchase is odd.
pub fn purchase_day_points(receipt: &Receipt) -> u64 {
    if receipt.purchased_at().day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 10 points if the UTC purchase hour is in `[14, 16)`.
///
/// 14:00 qualifies; 16:00 does not.
pub fn purchase_time_points(receipt: &Receipt) -> u64 {
    let (start, end) = AFTERNOON_HOURS;
    if (start..end).contains(&receipt.purchased_at().hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Per-rule contributions for a single receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub total: u64,
    pub item_count: u64,
    pub descriptions: u64,
    pub purchase_day: u64,
    pub purchase_time: u64,
}

impl PointsBreakdown {
    /// Evaluates all six rules.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        PointsBreakdown {
            retailer: retailer_points(receipt.retailer()),
            total: total_points(receipt),
            item_count: item_count_points(receipt),
            descriptions: description_points(receipt),
            purchase_day: purchase_day_points(receipt),
            purchase_time: purchase_time_points(receipt),
        }
    }

    /// Sum of every rule's contribution, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.total,
            self.item_count,
            self.descriptions,
            self.purchase_day,
            self.purchase_time,
        ]
        .into_iter()
        .fold(self.retailer, u64::saturating_add)
    }
}

/// Total points earned by a receipt.
///
/// ## Example
/// ```rust
/// use receipt_core::{calculate_points, normalize};
/// use serde_json::json;
///
/// let receipt = normalize(&json!({
///     "retailer": "Target",
///     "purchaseDate": "2022-01-01",
///     "purchaseTime": "13:01",
///     "items": [
///         { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
///         { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
///         { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
///         { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
///         { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
///     ],
///     "total": "35.35"
/// }))
/// .unwrap();
///
/// assert_eq!(calculate_points(&receipt), 28);
/// ```
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::normalize;
    use serde_json::{json, Value};

    fn receipt(overrides: Value) -> Receipt {
        let mut raw = json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "12:01",
            "items": [{ "shortDescription": "aaaa", "price": "1.00" }],
            "total": "35.12"
        });
        for (key, value) in overrides.as_object().unwrap() {
            raw[key] = value.clone();
        }
        normalize(&raw).unwrap()
    }

    fn items(description: &str, price: &str, count: usize) -> Value {
        let item = json!({ "shortDescription": description, "price": price });
        Value::Array(vec![item; count])
    }

    #[test]
    fn test_retailer_points() {
        assert_eq!(retailer_points("Target123"), 9);
        assert_eq!(retailer_points("  Tar  ge t  "), 6);
        assert_eq!(retailer_points("  T##ar & ge !t  "), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("under_score"), 10);
        assert_eq!(retailer_points("Café"), 3);
    }

    #[test]
    fn test_total_points() {
        assert_eq!(total_points(&receipt(json!({ "total": "35.00" }))), 75);
        assert_eq!(total_points(&receipt(json!({ "total": "35.50" }))), 25);
        assert_eq!(total_points(&receipt(json!({ "total": "35.75" }))), 25);
        assert_eq!(total_points(&receipt(json!({ "total": "35.12" }))), 0);
        assert_eq!(total_points(&receipt(json!({ "total": "35.35" }))), 0);
    }

    #[test]
    fn test_item_count_points() {
        for (count, expected) in [(1, 0), (2, 5), (3, 5), (4, 10), (5, 10)] {
            let r = receipt(json!({ "items": items("aaaa", "1", count) }));
            assert_eq!(item_count_points(&r), expected, "{count} items");
        }
    }

    #[test]
    fn test_description_points() {
        let one = receipt(json!({ "items": items("aaa", "23", 1) }));
        assert_eq!(description_points(&one), 5);

        let nine = receipt(json!({ "items": items("aaa", "23", 9) }));
        assert_eq!(description_points(&nine), 45);

        let ten = receipt(json!({ "items": items("aaa", "111.22", 10) }));
        assert_eq!(description_points(&ten), 230);

        let not_multiple = receipt(json!({ "items": items("aaaa", "111.22", 3) }));
        assert_eq!(description_points(&not_multiple), 0);
    }

    #[test]
    fn test_description_points_rounds_each_item() {
        // 2 × ceil(0.45) = 2, where ceil(2 × 0.45) would be 1
        let r = receipt(json!({ "items": items("abc", "2.25", 2) }));
        assert_eq!(description_points(&r), 2);
    }

    #[test]
    fn test_description_points_ignores_negative_prices() {
        let r = receipt(json!({ "items": items("abc", "-20", 2) }));
        assert_eq!(description_points(&r), 0);
    }

    #[test]
    fn test_description_points_saturate_on_huge_prices() {
        let r = receipt(json!({ "items": items("abc", "1e300", 3) }));
        assert_eq!(description_points(&r), u64::MAX);
        assert_eq!(calculate_points(&r), u64::MAX);
    }

    #[test]
    fn test_description_length_counts_characters() {
        // three scalar values, six UTF-16 units
        let r = receipt(json!({ "items": items("🍕🍕🍕", "10", 1) }));
        assert_eq!(description_points(&r), 2);

        let accented = receipt(json!({ "items": items("Café", "10", 1) }));
        assert_eq!(description_points(&accented), 0);
    }

    #[test]
    fn test_purchase_day_points() {
        let odd = receipt(json!({ "purchaseDate": "2022-01-01" }));
        assert_eq!(purchase_day_points(&odd), 6);

        let even = receipt(json!({ "purchaseDate": "2022-01-02" }));
        assert_eq!(purchase_day_points(&even), 0);

        let thirty_first = receipt(json!({ "purchaseDate": "2022-01-31" }));
        assert_eq!(purchase_day_points(&thirty_first), 6);
    }

    #[test]
    fn test_purchase_time_points() {
        for (time, expected) in [
            ("14:01", 10),
            ("12:01", 0),
            ("16:00", 0),
            ("14:00", 10),
            ("15:59:59", 10),
            ("13:59:59", 0),
        ] {
            let r = receipt(json!({ "purchaseTime": time }));
            assert_eq!(purchase_time_points(&r), expected, "at {time}");
        }
    }

    #[test]
    fn test_scenario_target() {
        let r = receipt(json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
                { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
                { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
                { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
            ],
            "total": "35.35"
        }));

        let breakdown = PointsBreakdown::for_receipt(&r);
        assert_eq!(
            breakdown,
            PointsBreakdown {
                retailer: 6,
                total: 0,
                item_count: 10,
                descriptions: 6,
                purchase_day: 6,
                purchase_time: 0,
            }
        );
        assert_eq!(calculate_points(&r), 28);
    }

    #[test]
    fn test_scenario_corner_market() {
        let r = receipt(json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": items("Gatorade", "2.25", 4),
            "total": "9.00"
        }));

        let breakdown = PointsBreakdown::for_receipt(&r);
        assert_eq!(breakdown.retailer, 14);
        assert_eq!(breakdown.total, 75);
        assert_eq!(breakdown.item_count, 10);
        assert_eq!(breakdown.descriptions, 0);
        assert_eq!(breakdown.purchase_day, 0);
        assert_eq!(breakdown.purchase_time, 10);
        assert_eq!(calculate_points(&r), 109);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let r = receipt(json!({ "items": items("aaa", "111.22", 10) }));
        let copy = r.clone();
        assert_eq!(calculate_points(&r), calculate_points(&copy));
        assert_eq!(calculate_points(&r), calculate_points(&r));
    }
}
