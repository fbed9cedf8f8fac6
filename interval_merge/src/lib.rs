//! This crate merges overlapping intervals of real numbers.
//!
//! Intervals are closed, i.e. both bounds are part of the interval, so two
//! intervals that only share a bound are also merged:
//!
//! ```text
//!        [------ A ------]
//!               [----- B -------]
//!                               [--- C ---]     [--- D ---]
//!
//!        [--------------------------------]     [--- D ---]    merged
//! ```
//!
//! The result is sorted by lower bound, and no two intervals in it have a
//! value in common.
//!
//! Two forms of input are supported: a list of [`Interval`] (see
//! [`merge()`]), or a list of raw pairs of numbers (see [`merge_pairs()`]).
//! Both share the same algorithm, implemented generically over the
//! [`Span`] trait.

pub mod errors;
pub mod formatters;
pub mod intervals;
pub mod merger;
pub mod parser;

pub use crate::errors::Error;
pub use crate::intervals::{compare_bounds, Interval};
pub use crate::merger::{merge, merge_pairs, merge_spans, sweep, RawRow, Span};
pub use crate::parser::parse_intervals;
