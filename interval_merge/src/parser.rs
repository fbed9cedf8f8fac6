//! Reading a list of intervals from text.
//!
//! Two forms are accepted, using only numbers, commas and brackets:
//! ```txt
//!    [[25,30],[2,19],[14,23],[4,8]]
//!    [25,30],[2,19],[14,23],[4,8]
//! ```

use crate::errors::Error;
use crate::intervals::Interval;

const SEPARATOR: &str = "],[";

/// Parse a list of intervals.
/// The whole input is rejected as soon as one interval is invalid.
pub fn parse_intervals(text: &str) -> Result<Vec<Interval>, Error> {
    let text = text.trim();
    if !text.starts_with('[') || !text.ends_with(']') {
        return Err(Error::Brackets(text.to_string()));
    }
    text.split(SEPARATOR).map(parse_interval).collect()
}

fn parse_interval(chunk: &str) -> Result<Interval, Error> {
    let cleaned: String =
        chunk.chars().filter(|c| !matches!(c, '[' | ']')).collect();
    let values: Vec<&str> = cleaned.split(',').collect();
    match values.as_slice() {
        [start, end] => Ok(Interval::new(
            parse_bound(chunk, start)?,
            parse_bound(chunk, end)?,
        )),
        _ => Err(Error::ElementCount {
            chunk: chunk.to_string(),
            found: values.len(),
        }),
    }
}

fn parse_bound(chunk: &str, text: &str) -> Result<f64, Error> {
    text.trim()
        .parse::<f64>()
        .map_err(|source| Error::InvalidNumber {
            chunk: chunk.to_string(),
            text: text.to_string(),
            source,
        })
}
