//! # Validation Module
//!
//! The receipt normalizer: loosely typed JSON in, validated [`Receipt`] out.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Normalization Pipeline                             │
//! │                                                                         │
//! │  raw JSON object                                                        │
//! │       │                                                                 │
//! │       ├── 1. retailer       present? string? → trim                    │
//! │       ├── 2. purchaseDate   present?                                   │
//! │       │      purchaseTime   present? both strings? → UTC instant       │
//! │       ├── 3. total          present? string? → trim → parse            │
//! │       └── 4. items          present? array? non-empty?                 │
//! │              └── each item  object? shortDescription? price?           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Receipt  (or the FIRST InvalidField; nothing partial escapes)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Presence Is Truthiness
//! A field counts as present only when its value is "truthy": `null`,
//! `false`, `0`, empty and all-whitespace strings are all reported as
//! missing. Amount text that parses to zero (`"0.00"`) is reported as
//! missing too, so zero totals and zero prices are rejected.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::normalize;
//! use serde_json::json;
//!
//! let err = normalize(&json!({ "retailer": "" })).unwrap_err();
//! assert_eq!(err.field(), "retailer");
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Amount;
use crate::types::{Item, Receipt};

/// Accepted time-of-day layouts, tried in order.
const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"];

const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Normalizer
// =============================================================================

/// Validates a raw receipt document and builds a [`Receipt`].
///
/// Fields are checked in a fixed order and the first failure is returned.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::normalize;
/// use serde_json::json;
///
/// let receipt = normalize(&json!({
///     "retailer": "Walgreens",
///     "purchaseDate": "2022-01-02",
///     "purchaseTime": "08:13",
///     "total": "2.65",
///     "items": [
///         { "shortDescription": "Pepsi - 12-oz", "price": "1.25" },
///         { "shortDescription": "Dasani", "price": "1.40" }
///     ]
/// }))
/// .unwrap();
///
/// assert_eq!(receipt.items().len(), 2);
/// ```
pub fn normalize(raw: &Value) -> ValidationResult<Receipt> {
    let fields = raw.as_object().ok_or_else(|| {
        ValidationError::invalid("receipt", "Expected receipt to be a json object.")
    })?;

    let retailer = build_retailer(fields)?;
    let purchased_at = build_purchased_at(fields)?;
    let total = build_total(fields)?;
    let items = build_items(fields)?;

    Ok(Receipt::new(retailer, purchased_at, total, items))
}

fn build_retailer(fields: &Map<String, Value>) -> ValidationResult<String> {
    let retailer = require_string(fields, "retailer", "retailer")?;
    Ok(retailer.trim().to_string())
}

fn build_purchased_at(fields: &Map<String, Value>) -> ValidationResult<DateTime<Utc>> {
    let date = require_present(fields, "purchaseDate", "purchaseDate")?;
    let time = require_present(fields, "purchaseTime", "purchaseTime")?;

    let (Some(date), Some(time)) = (date.as_str(), time.as_str()) else {
        let field = if date.is_string() { "purchaseTime" } else { "purchaseDate" };
        return Err(ValidationError::invalid(
            field,
            "Expected \"purchaseDate\" and \"purchaseTime\" fields to be type of \"string\".",
        ));
    };

    let unparsable = |field: &str| {
        ValidationError::invalid(
            field,
            format!("Could not parse {} and {} into a valid date.", date, time),
        )
    };

    let day = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| unparsable("purchaseDate"))?;
    let time_of_day = parse_time(time.trim()).ok_or_else(|| unparsable("purchaseTime"))?;

    Ok(day.and_time(time_of_day).and_utc())
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
}

fn build_total(fields: &Map<String, Value>) -> ValidationResult<Amount> {
    let total = require_string(fields, "total", "total")?;
    parse_amount(total, "total", "total")
}

fn build_items(fields: &Map<String, Value>) -> ValidationResult<Vec<Item>> {
    let items = require_present(fields, "items", "items")?;

    let items = items
        .as_array()
        .ok_or_else(|| ValidationError::invalid("items", "Expected \"items\" field to be an array."))?;

    if items.is_empty() {
        return Err(ValidationError::invalid(
            "items",
            "Expected \"items\" array to not be empty.",
        ));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| build_item(index, item))
        .collect()
}

fn build_item(index: usize, item: &Value) -> ValidationResult<Item> {
    let path = format!("items[{index}]");

    if !is_truthy(item) {
        return Err(ValidationError::invalid(
            path,
            "Receipt item is missing or empty.",
        ));
    }

    let fields = item.as_object().ok_or_else(|| {
        ValidationError::invalid(path.as_str(), "Expected receipt item to be a json object.")
    })?;

    let description_path = format!("{path}.shortDescription");
    let description = require_string(fields, "shortDescription", &description_path)?;

    let price_path = format!("{path}.price");
    let price = require_string(fields, "price", &price_path)?;
    let price = parse_amount(price, "price", &price_path)?;

    Ok(Item::new(description.trim().to_string(), price))
}

// =============================================================================
// Field Helpers
// =============================================================================

/// JavaScript-style truthiness over JSON values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Looks up `key` and checks it is present (truthy).
///
/// `path` is the name reported in errors, e.g. `items[3].price` for `price`.
fn require_present<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> ValidationResult<&'a Value> {
    match fields.get(key) {
        Some(value) if is_truthy(value) => Ok(value),
        _ => Err(ValidationError::invalid(
            path,
            format!("\"{key}\" field missing or empty."),
        )),
    }
}

/// Looks up a present, string-typed field.
fn require_string<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> ValidationResult<&'a str> {
    require_present(fields, key, path)?.as_str().ok_or_else(|| {
        ValidationError::invalid(
            path,
            format!("Expected \"{key}\" field to be type of \"string\"."),
        )
    })
}

/// Parses amount text; zero is treated like a missing value.
fn parse_amount(text: &str, key: &str, path: &str) -> ValidationResult<Amount> {
    let amount: Amount = text.parse().map_err(|_| {
        ValidationError::invalid(path, format!("Tried to parse \"{key}\" field, but it is NaN."))
    })?;

    if amount.is_zero() {
        return Err(ValidationError::invalid(
            path,
            format!("\"{key}\" field missing or empty."),
        ));
    }

    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn valid() -> Value {
        json!({
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
        })
    }

    fn with(key: &str, value: Value) -> Value {
        let mut raw = valid();
        raw[key] = value;
        raw
    }

    fn without(key: &str) -> Value {
        let mut raw = valid();
        raw.as_object_mut().unwrap().remove(key);
        raw
    }

    fn field_of(raw: &Value) -> String {
        normalize(raw).unwrap_err().field().to_string()
    }

    #[test]
    fn test_normalize_valid_receipt() {
        let receipt = normalize(&valid()).unwrap();

        assert_eq!(receipt.retailer(), "Target");
        assert_eq!(receipt.total().value(), 35.35);
        assert_eq!(receipt.purchased_at().year(), 2022);
        assert_eq!(receipt.purchased_at().day(), 1);
        assert_eq!(receipt.purchased_at().hour(), 13);
        assert_eq!(receipt.purchased_at().minute(), 1);
        assert_eq!(receipt.items().len(), 5);
        assert_eq!(receipt.items()[0].short_description(), "Mountain Dew 12PK");
        assert_eq!(receipt.items()[4].short_description(), "Klarbrunn 12-PK 12 FL OZ");
        assert_eq!(receipt.items()[4].price().value(), 12.0);
    }

    #[test]
    fn test_strings_are_trimmed() {
        let mut raw = with("retailer", json!("  M&M Corner Market  "));
        raw["total"] = json!("  35.35 ");
        raw["items"][0]["price"] = json!(" 6.49\t");

        let receipt = normalize(&raw).unwrap();
        assert_eq!(receipt.retailer(), "M&M Corner Market");
        assert_eq!(receipt.total().value(), 35.35);
        assert_eq!(receipt.items()[0].price().value(), 6.49);
    }

    #[test]
    fn test_time_with_seconds() {
        let receipt = normalize(&with("purchaseTime", json!("14:33:59.250"))).unwrap();
        assert_eq!(receipt.purchased_at().second(), 59);
        assert_eq!(receipt.purchased_at().nanosecond(), 250_000_000);
    }

    #[test]
    fn test_non_object_receipt() {
        assert_eq!(field_of(&json!([1, 2, 3])), "receipt");
        assert_eq!(field_of(&json!("receipt")), "receipt");
    }

    #[test]
    fn test_retailer_rejections() {
        assert_eq!(field_of(&without("retailer")), "retailer");
        assert_eq!(field_of(&with("retailer", json!(""))), "retailer");
        assert_eq!(field_of(&with("retailer", json!("   "))), "retailer");
        assert_eq!(field_of(&with("retailer", json!(null))), "retailer");

        let err = normalize(&with("retailer", json!(42))).unwrap_err();
        assert_eq!(err.field(), "retailer");
        assert!(err.detail().contains("type of \"string\""));
    }

    #[test]
    fn test_date_time_rejections() {
        assert_eq!(field_of(&without("purchaseDate")), "purchaseDate");
        assert_eq!(field_of(&without("purchaseTime")), "purchaseTime");
        assert_eq!(field_of(&with("purchaseDate", json!(20220101))), "purchaseDate");
        assert_eq!(field_of(&with("purchaseTime", json!(1301))), "purchaseTime");
        assert_eq!(field_of(&with("purchaseDate", json!("2022-02-30"))), "purchaseDate");
        assert_eq!(field_of(&with("purchaseDate", json!("01/01/2022"))), "purchaseDate");
        assert_eq!(field_of(&with("purchaseTime", json!("25:00"))), "purchaseTime");
        assert_eq!(field_of(&with("purchaseTime", json!("1pm"))), "purchaseTime");
    }

    #[test]
    fn test_unparsable_date_names_both_inputs() {
        let err = normalize(&with("purchaseTime", json!("noon"))).unwrap_err();
        assert_eq!(
            err.detail(),
            "Could not parse 2022-01-01 and noon into a valid date."
        );
    }

    #[test]
    fn test_total_rejections() {
        assert_eq!(field_of(&without("total")), "total");
        assert_eq!(field_of(&with("total", json!(""))), "total");
        assert_eq!(field_of(&with("total", json!(35.35))), "total");
        assert_eq!(field_of(&with("total", json!(0))), "total");
        assert_eq!(field_of(&with("total", json!("0.00"))), "total");

        let err = normalize(&with("total", json!("thirty five"))).unwrap_err();
        assert_eq!(err.field(), "total");
        assert!(err.detail().contains("NaN"));
    }

    #[test]
    fn test_total_with_trailing_text() {
        let receipt = normalize(&with("total", json!("12abc"))).unwrap();
        assert_eq!(receipt.total().value(), 12.0);

        assert_eq!(field_of(&with("total", json!("0abc"))), "total");
    }

    #[test]
    fn test_items_rejections() {
        assert_eq!(field_of(&without("items")), "items");
        assert_eq!(field_of(&with("items", json!({}))), "items");
        assert_eq!(field_of(&with("items", json!("abc"))), "items");

        let err = normalize(&with("items", json!([]))).unwrap_err();
        assert_eq!(err.field(), "items");
        assert!(err.detail().contains("not be empty"));
    }

    #[test]
    fn test_item_rejections() {
        let mut raw = valid();
        raw["items"][2] = json!(null);
        assert_eq!(field_of(&raw), "items[2]");

        raw["items"][2] = json!("Knorr");
        assert_eq!(field_of(&raw), "items[2]");

        raw["items"][2] = json!({ "price": "1.26" });
        assert_eq!(field_of(&raw), "items[2].shortDescription");

        raw["items"][2] = json!({ "shortDescription": "   ", "price": "1.26" });
        assert_eq!(field_of(&raw), "items[2].shortDescription");

        raw["items"][2] = json!({ "shortDescription": "Knorr" });
        assert_eq!(field_of(&raw), "items[2].price");

        raw["items"][2] = json!({ "shortDescription": "Knorr", "price": 1.26 });
        assert_eq!(field_of(&raw), "items[2].price");

        raw["items"][2] = json!({ "shortDescription": "Knorr", "price": "cheap" });
        let err = normalize(&raw).unwrap_err();
        assert_eq!(err.field(), "items[2].price");
        assert!(err.detail().contains("NaN"));
    }

    #[test]
    fn test_first_failure_wins() {
        let mut raw = without("retailer");
        raw["total"] = json!("abc");
        raw["items"] = json!([]);
        assert_eq!(field_of(&raw), "retailer");

        let mut raw = with("total", json!("abc"));
        raw["items"] = json!([]);
        assert_eq!(field_of(&raw), "total");
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let first = normalize(&valid()).unwrap();
        let second = normalize(&first.to_raw()).unwrap();
        assert_eq!(first, second);

        let odd = normalize(&with("purchaseTime", json!("09:05:07.125"))).unwrap();
        assert_eq!(normalize(&odd.to_raw()).unwrap(), odd);
    }
}
