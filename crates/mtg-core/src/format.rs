//! Display formatting for costs.

use rust_decimal::{Decimal, RoundingStrategy};

/// Separator inserted between groups of three integer digits.
pub const GROUP_SEPARATOR: char = ',';

/// Inserts thousands separators into the integer part of a numeric string.
///
/// Anything from the first `.` on is kept verbatim, as is a leading `-`.
pub fn group(numeric: &str) -> String {
    let (sign, unsigned) = match numeric.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", numeric),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    let len = integer.len();
    let mut result = String::with_capacity(numeric.len() + len / 3);
    result.push_str(sign);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    result.push_str(fraction);
    result
}

/// Truncates `value` to `precision` decimal places, rounding toward negative infinity.
pub fn floor(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::ToNegativeInfinity)
}

/// Floors `value`, pads it to exactly `precision` places and groups the digits.
pub fn format_amount(value: Decimal, precision: u32) -> String {
    let floored = floor(value, precision);
    group(&format!("{:.*}", precision as usize, floored))
}

/// `format_amount` followed by the currency code, e.g. `1,234 JPY`.
pub fn format_cost(value: Decimal, precision: u32, currency: &str) -> String {
    format!("{} {currency}", format_amount(value, precision))
}
