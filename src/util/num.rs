use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Parses decimal text in the shape number literals take in source code.
///
/// Accepted: an optional leading `-`, then digits with an optional fractional
/// part (`12`, `12.5`, `-3`), or a bare fractional part (`.5`, `-.5`).
/// Anything else, including exponents, surrounding whitespace and a `.` with
/// no digits after it, is rejected.
///
/// ## Example
/// ```
/// use rockstar::util::num::{format_decimal, parse_decimal};
///
/// assert_eq!(format_decimal(&parse_decimal("-.5").unwrap()), "-0.5");
/// assert!(parse_decimal("5.").is_none());
/// assert!(parse_decimal("-").is_none());
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) {
        return None;
    }
    match fraction {
        Some(fraction) if fraction.is_empty() || !all_digits(fraction) => return None,
        None if whole.is_empty() => return None,
        _ => {},
    }

    let normalized = if whole.is_empty() {
        let sign = if text.starts_with('-') { "-" } else { "" };
        format!("{sign}0{unsigned}")
    } else {
        text.to_string()
    };

    BigDecimal::from_str(&normalized).ok()
}

/// Renders a decimal without exponent and without trailing zeros.
///
/// `100` stays `100`, `2.50` becomes `2.5`.
#[must_use]
pub fn format_decimal(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}

/// Tests a decimal for zero regardless of its scale.
#[must_use]
pub fn is_zero(value: &BigDecimal) -> bool {
    *value == BigDecimal::from(0)
}

/// Converts an increment or decrement magnitude to a decimal.
#[must_use]
pub fn from_count(count: u32) -> BigDecimal {
    BigDecimal::from(u64::from(count))
}
