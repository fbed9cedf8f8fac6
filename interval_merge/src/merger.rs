use crate::intervals::{compare_bounds, Interval};
use std::cmp::Ordering;

/// Access to the bounds of an interval-like value, as needed by the merge.
///
/// Implementations must guarantee that `start() <= end()` (using the
/// ordering of [`compare_bounds`]).
pub trait Span {
    fn start(&self) -> f64;
    fn end(&self) -> f64;

    /// Move the upper bound to `end`.  This is only called with values
    /// greater than or equal to the current upper bound.
    fn extend_end(&mut self, end: f64);

    /// Whether every value in self is strictly less than every value in
    /// other, i.e. the two spans can not be merged.
    fn strictly_left_of(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        compare_bounds(self.end(), other.start()) == Ordering::Less
    }
}

impl Span for Interval {
    fn start(&self) -> f64 {
        Interval::start(self)
    }
    fn end(&self) -> f64 {
        Interval::end(self)
    }
    fn extend_end(&mut self, end: f64) {
        if let Err(e) = self.set_end(end) {
            log::debug!("{e}");
        }
    }
}

impl Span for [f64; 2] {
    fn start(&self) -> f64 {
        let [start, _] = *self;
        start
    }
    fn end(&self) -> f64 {
        let [_, end] = *self;
        end
    }
    fn extend_end(&mut self, end: f64) {
        let [_, current] = self;
        *current = end;
    }
}

/// A row of raw numbers, as given to [`merge_pairs`].  The row may be
/// missing, or may not have the expected two values.
pub trait RawRow {
    fn values(&self) -> Option<&[f64]>;
}

impl RawRow for [f64] {
    fn values(&self) -> Option<&[f64]> {
        Some(self)
    }
}

impl<const N: usize> RawRow for [f64; N] {
    fn values(&self) -> Option<&[f64]> {
        Some(self.as_slice())
    }
}

impl RawRow for Vec<f64> {
    fn values(&self) -> Option<&[f64]> {
        Some(self.as_slice())
    }
}

impl<T: RawRow + ?Sized> RawRow for &T {
    fn values(&self) -> Option<&[f64]> {
        (**self).values()
    }
}

impl<T: RawRow> RawRow for Option<T> {
    fn values(&self) -> Option<&[f64]> {
        self.as_ref().and_then(RawRow::values)
    }
}

fn compare_spans<S: Span>(left: &S, right: &S) -> Ordering {
    compare_bounds(left.start(), right.start())
        .then_with(|| compare_bounds(left.end(), right.end()))
}

fn max_bound(left: f64, right: f64) -> f64 {
    std::cmp::max_by(left, right, |l, r| compare_bounds(*l, *r))
}

/// Merge spans that are already sorted by their lower bound.
///
/// A single pass is done over the input, keeping the last span of the
/// result as the one currently being extended.  Since spans are sorted, a
/// span that is strictly right of it can never overlap with any span
/// already in the result.
#[must_use]
pub fn sweep<S, I>(sorted: I) -> Vec<S>
where
    S: Span,
    I: IntoIterator<Item = S>,
{
    let mut result: Vec<S> = Vec::new();
    for current in sorted {
        if let Some(previous) =
            result.last_mut().filter(|p| !p.strictly_left_of(&current))
        {
            log::trace!(
                "extending [{},{}] up to {}",
                previous.start(),
                previous.end(),
                current.end(),
            );
            let end = max_bound(previous.end(), current.end());
            previous.extend_end(end);
        } else {
            result.push(current);
        }
    }
    result
}

/// Sort the spans, then merge the ones that overlap or touch.
#[must_use]
pub fn merge_spans<S: Span>(mut spans: Vec<S>) -> Vec<S> {
    spans.sort_by(compare_spans);
    sweep(spans)
}

/// Merge the overlapping intervals.
///
/// The result is sorted by lower bound, and no two intervals in it overlap
/// or touch.  Missing intervals (`None`) in the input are ignored, so that
/// both `Vec<Interval>` and `Vec<Option<Interval>>` can be given.
///
/// ```
/// use interval_merge::{merge, Interval};
/// let merged = merge(vec![
///     Interval::new(25.0, 30.0),
///     Interval::new(2.0, 19.0),
///     Interval::new(14.0, 23.0),
///     Interval::new(4.0, 8.0),
/// ]);
/// assert_eq!(merged, vec![Interval::new(2.0, 23.0), Interval::new(25.0, 30.0)]);
/// ```
#[must_use]
pub fn merge<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator,
    I::Item: Into<Option<Interval>>,
{
    let mut sorted: Vec<Option<Interval>> =
        intervals.into_iter().map(Into::into).collect();

    // Missing intervals are moved to the end, they are skipped anyway
    sorted.sort_by(|left, right| match (left, right) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let total = sorted.len();
    let result = sweep(sorted.into_iter().flatten());
    log::debug!("merged {} intervals into {}", total, result.len());
    result
}

/// Merge overlapping intervals given as raw pairs `[start, end]`.
///
/// The two bounds of a pair can be given in any order.  Rows that are
/// missing, or that do not contain exactly two values, are ignored.
/// Rows can be given as `Vec<f64>`, arrays or slices, optionally wrapped in
/// an `Option`.
#[must_use]
pub fn merge_pairs<I>(rows: I) -> Vec<[f64; 2]>
where
    I: IntoIterator,
    I::Item: RawRow,
{
    let mut skipped = 0_usize;
    let pairs: Vec<[f64; 2]> = rows
        .into_iter()
        .filter_map(|row| {
            let pair = row.values().and_then(normalized_pair);
            if pair.is_none() {
                skipped += 1;
            }
            pair
        })
        .collect();

    if skipped > 0 {
        log::debug!("ignored {} invalid rows", skipped);
    }

    let total = pairs.len();
    let result = merge_spans(pairs);
    log::debug!("merged {} pairs into {}", total, result.len());
    result
}

fn normalized_pair(row: &[f64]) -> Option<[f64; 2]> {
    match row {
        [start, end] => Some(Interval::new(*start, *end).into()),
        _ => None,
    }
}
