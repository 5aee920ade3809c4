//! Display formatting for prices, coordinates and placeholder images.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt::Write as _;

/// Shown in product cards when the image fails to load.
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";
/// Shown on the detail page when the image fails to load.
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=No+Image";

/// Format a price in rupees with thousands separators and at most three
/// fraction digits, trailing zeros dropped (`₹1,250.5`).
pub fn format_price(price: f64) -> String {
    format!("₹{}", group_number(price))
}

/// Group the integer part of `value` in threes.
pub fn group_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + 5);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Four-decimal coordinate text.
pub fn format_coordinate(value: f64) -> String {
    format!("{value:.4}")
}

/// Accept optional text only when it carries something besides whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Percent-encode `value` for use inside a query string component, keeping
/// the same unreserved set as `encodeURIComponent`.
pub fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}
