//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Prices in depthbook use fixed-point representation to avoid
//! floating-point errors. Values are stored as u64 scaled by 10^8.
//!
//! The text persistence format carries human decimal strings, so this
//! module is the single conversion boundary between the on-disk format
//! and the in-memory representation.
//!
//! ## Examples
//!
//! ```
//! use depthbook::types::price::{parse_fixed, format_fixed};
//!
//! let price = parse_fixed("120.5").unwrap();
//! assert_eq!(price, 12_050_000_000);
//! assert_eq!(format_fixed(price), "120.5");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point arithmetic: 10^8
///
/// This provides 8 decimal places of precision.
pub const SCALE: u64 = 100_000_000;

/// Convert a decimal string to fixed-point u64.
///
/// Returns `None` if the string is not a decimal number, is negative, or
/// is out of range for the fixed-point representation.
///
/// # Example
///
/// ```
/// use depthbook::types::price::parse_fixed;
///
/// assert_eq!(parse_fixed("1"), Some(100_000_000));
/// assert_eq!(parse_fixed("0.00000001"), Some(1));
/// assert_eq!(parse_fixed("-5"), None);
/// assert_eq!(parse_fixed("abc"), None);
/// ```
pub fn parse_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to fixed-point u64.
///
/// Returns `None` for negative or out-of-range values. Fractional digits
/// beyond the 8th are rounded.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Convert fixed-point u64 to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Format a fixed-point value as a trimmed decimal string.
///
/// Trailing zeros are dropped, so whole prices round-trip through the
/// text format as plain integers.
///
/// # Example
///
/// ```
/// use depthbook::types::price::format_fixed;
///
/// assert_eq!(format_fixed(100_000_000), "1");
/// assert_eq!(format_fixed(150_000_000), "1.5");
/// assert_eq!(format_fixed(123_456_789), "1.23456789");
/// ```
pub fn format_fixed(value: u64) -> String {
    fixed_to_decimal(value).normalize().to_string()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_basic() {
        assert_eq!(parse_fixed("1.0"), Some(100_000_000));
        assert_eq!(parse_fixed("1"), Some(100_000_000));
        assert_eq!(parse_fixed("0.5"), Some(50_000_000));
        assert_eq!(parse_fixed("0.00000001"), Some(1));
        assert_eq!(parse_fixed("50000.12345678"), Some(5_000_012_345_678));
    }

    #[test]
    fn test_parse_fixed_rejects_garbage() {
        assert_eq!(parse_fixed(""), None);
        assert_eq!(parse_fixed("abc"), None);
        assert_eq!(parse_fixed("12,5"), None);
        assert_eq!(parse_fixed("-1.0"), None);
    }

    #[test]
    fn test_parse_fixed_zero() {
        assert_eq!(parse_fixed("0"), Some(0));
        assert_eq!(parse_fixed("0.0"), Some(0));
    }

    #[test]
    fn test_format_fixed_trims() {
        assert_eq!(format_fixed(100_000_000), "1");
        assert_eq!(format_fixed(150_000_000), "1.5");
        assert_eq!(format_fixed(123_456_789), "1.23456789");
        assert_eq!(format_fixed(0), "0");
    }

    #[test]
    fn test_roundtrip() {
        let values = ["1", "0.5", "50000.12345678", "0.00000001", "199"];

        for s in values {
            let fixed = parse_fixed(s).unwrap();
            assert_eq!(format_fixed(fixed), s, "roundtrip failed for {}", s);
        }
    }
}
