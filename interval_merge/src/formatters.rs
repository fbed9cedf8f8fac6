use itertools::Itertools;
use std::fmt::Display;

/// Maximum number of digits displayed after the decimal point
const MAX_FRACTION_DIGITS: usize = 6;

/// Display a boundary value, independently of the locale.
/// The value is rounded to at most six decimal places, and trailing zeros
/// are removed, so that `1.0` is displayed as `1` and `20.330` as `20.33`.
/// The decimal separator is always `.`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }

    let mut result = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    if result.contains('.') {
        let len = result.trim_end_matches('0').trim_end_matches('.').len();
        result.truncate(len);
    }
    result
}

/// Display a list of values as `[a, b, c]`
#[must_use]
pub fn format_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("[{}]", items.into_iter().join(", "))
}
