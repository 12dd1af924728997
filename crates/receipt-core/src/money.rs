//! # Money Module
//!
//! Provides the `Amount` type for receipt totals and item prices.
//!
//! ## Why a Float Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE AMOUNTS COME FROM                                                │
//! │                                                                         │
//! │  Receipts arrive with amounts as TEXT:  "total": "35.35"               │
//! │  Precision is whatever the submitter wrote ("6.49", "111.22", "1.5")  │
//! │                                                                         │
//! │  The points rules only ask three questions of an amount:               │
//! │    • Is it a whole number?              (35.00 → yes)                  │
//! │    • Is it a multiple of 0.25?          (35.50 → yes)                  │
//! │    • What is ceil(amount × 0.2)?        (12.25 → 3)                    │
//! │                                                                         │
//! │  OUR SOLUTION: a finite f64, validated once at parse time              │
//! │    NaN and ±∞ can never be wrapped, so every Amount is comparable      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Amount;
//!
//! let total: Amount = " 35.50 ".parse().unwrap();
//! assert!(!total.is_whole());
//! assert!(total.is_multiple_of(0.25));
//!
//! assert!("abc".parse::<Amount>().is_err());
//! assert!("inf".parse::<Amount>().is_err());
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Amount Type
// =============================================================================

/// A finite decimal amount (dollars) parsed from text.
///
/// ## Design Decisions
/// - **f64**: amounts carry arbitrary submitted precision
/// - **Finite only**: constructors reject NaN and infinities
/// - **Serialize as number**: `{"total": 35.35}` in API responses
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

/// Amount text could not be parsed into a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a finite number")]
pub struct ParseAmountError {
    pub input: String,
}

impl Amount {
    /// Wraps a float, rejecting NaN and infinities.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Amount;
    ///
    /// assert!(Amount::from_f64(9.0).is_some());
    /// assert!(Amount::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(Amount(value))
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the amount has no fractional part (a round dollar amount).
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.0.fract() == 0.0
    }

    /// Checks if the amount is an exact multiple of `step`.
    ///
    /// Exact in the floating-point sense: `35.50` is a multiple of `0.25`,
    /// `35.35` is not.
    #[inline]
    pub fn is_multiple_of(&self, step: f64) -> bool {
        self.0 % step == 0.0
    }

    /// Multiplies by `factor` and rounds up to the nearest integer.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Amount;
    ///
    /// let price: Amount = "12.25".parse().unwrap();
    /// assert_eq!(price.scaled_ceil(0.2), 3);
    /// ```
    #[inline]
    pub fn scaled_ceil(&self, factor: f64) -> i64 {
        (self.0 * factor).ceil() as i64
    }
}

/// Parses the longest decimal literal at the start of the trimmed text.
///
/// Trailing garbage is ignored (`"12abc"` → 12, `"1e"` → 1), but at least
/// one digit must lead the text.
impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let prefix = decimal_prefix(s.trim());
        if prefix.is_empty() {
            return Err(ParseAmountError {
                input: s.to_string(),
            });
        }

        prefix
            .parse::<f64>()
            .ok()
            .and_then(Amount::from_f64)
            .ok_or_else(|| ParseAmountError {
                input: s.to_string(),
            })
    }
}

/// `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` with at least one
/// mantissa digit. Returns `""` when the text does not start with a number.
fn decimal_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &s[..end]
}

/// Shortest text that parses back to the same value (`9.0` → `"9"`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(amount("  12.00 ").value(), 12.0);
        assert_eq!(amount("\t6.49\n").value(), 6.49);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("-".parse::<Amount>().is_err());
        assert!(".".parse::<Amount>().is_err());
        assert!("e5".parse::<Amount>().is_err());
        assert!("NaN".parse::<Amount>().is_err());
        assert!("inf".parse::<Amount>().is_err());
        assert!("-infinity".parse::<Amount>().is_err());
        assert!("1e400".parse::<Amount>().is_err());
    }

    #[test]
    fn test_parse_takes_leading_number() {
        assert_eq!(amount("12abc").value(), 12.0);
        assert_eq!(amount("6.49 USD").value(), 6.49);
        assert_eq!(amount("1.2.3").value(), 1.2);
        assert_eq!(amount("1e").value(), 1.0);
        assert_eq!(amount("1e+").value(), 1.0);
        assert_eq!(amount("2.5e2x").value(), 250.0);
        assert_eq!(amount(".5").value(), 0.5);
        assert_eq!(amount("5.").value(), 5.0);
        assert_eq!(amount("+3").value(), 3.0);
        assert_eq!(amount("-1.25").value(), -1.25);
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = "abc".parse::<Amount>().unwrap_err();
        assert_eq!(err.to_string(), "'abc' is not a finite number");
    }

    #[test]
    fn test_is_whole() {
        assert!(amount("35.00").is_whole());
        assert!(amount("9").is_whole());
        assert!(!amount("35.50").is_whole());
        assert!(!amount("35.12").is_whole());
    }

    #[test]
    fn test_is_multiple_of_quarter() {
        assert!(amount("35.50").is_multiple_of(0.25));
        assert!(amount("35.75").is_multiple_of(0.25));
        assert!(amount("35.00").is_multiple_of(0.25));
        assert!(!amount("35.35").is_multiple_of(0.25));
        assert!(!amount("35.12").is_multiple_of(0.25));
    }

    #[test]
    fn test_scaled_ceil() {
        assert_eq!(amount("23").scaled_ceil(0.2), 5);
        assert_eq!(amount("12.00").scaled_ceil(0.2), 3);
        assert_eq!(amount("2.25").scaled_ceil(0.2), 1);
        assert_eq!(amount("111.22").scaled_ceil(0.2), 23);
        assert_eq!(amount("5").scaled_ceil(0.2), 1);
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["35.35", "9.00", "111.22", "0.1", "-4.5", "1e3"] {
            let a = amount(text);
            assert_eq!(amount(&a.to_string()), a);
        }
        assert_eq!(amount("9.00").to_string(), "9");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&amount("35.35")).unwrap();
        assert_eq!(json, "35.35");
    }
}
