use crate::errors::Error;
use crate::formatters::format_number;
use std::cmp::{Ordering, PartialOrd};

/// A closed interval of real numbers, `[start, end]`.
///
/// Both bounds are included, and `start <= end` always holds.  When both
/// bounds are equal, the interval contains a single value.
///
/// Bounds are compared with [`compare_bounds`], so that intervals can be
/// sorted and compared even when they contain NaN.  In particular, `-0.0`
/// is considered smaller than `0.0`, and NaN is greater than every other
/// value (including infinity).
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    start: f64,
    end: f64,
}

/// Total ordering of bounds.  This is the ordering of [`f64::total_cmp`],
/// except that all NaN values are equal to each other, whatever their sign
/// or payload, and greater than every other value.
#[must_use]
pub fn compare_bounds(left: f64, right: f64) -> Ordering {
    canonical(left).total_cmp(&canonical(right))
}

fn canonical(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else {
        value
    }
}

impl Interval {
    /// Construct the interval `[start, end]`.
    /// If the two bounds are given in reverse order, they are swapped.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        match compare_bounds(start, end) {
            Ordering::Greater => Self {
                start: end,
                end: start,
            },
            Ordering::Less | Ordering::Equal => Self { start, end },
        }
    }

    /// Returns an interval that contains a single value (`[value,value]`)
    #[must_use]
    pub fn new_single(value: f64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// The included lower bound, e.g. 0 for `[0,10]`
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The included upper bound, e.g. 10 for `[0,10]`
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Change the lower bound.
    /// This fails, and leaves the interval unchanged, when the new bound is
    /// greater than the current upper bound.
    pub fn set_start(&mut self, start: f64) -> Result<(), Error> {
        match compare_bounds(start, self.end) {
            Ordering::Greater => Err(Error::InvalidStart {
                start,
                end: self.end,
            }),
            Ordering::Less | Ordering::Equal => {
                self.start = start;
                Ok(())
            }
        }
    }

    /// Change the upper bound.
    /// This fails, and leaves the interval unchanged, when the new bound is
    /// less than the current lower bound.
    pub fn set_end(&mut self, end: f64) -> Result<(), Error> {
        match compare_bounds(end, self.start) {
            Ordering::Less => Err(Error::InvalidEnd {
                start: self.start,
                end,
            }),
            Ordering::Greater | Ordering::Equal => {
                self.end = end;
                Ok(())
            }
        }
    }

    /// True if self is of the form `[A, A]`.
    #[must_use]
    pub fn is_single(&self) -> bool {
        compare_bounds(self.start, self.end) == Ordering::Equal
    }

    /// Whether the two intervals have at least one value in common.  Since
    /// bounds are included, this is also true when one interval ends exactly
    /// where the other starts.
    /// ```txt
    ///    [----A----]
    ///              [----B----]    => touches
    /// ```
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        compare_bounds(self.end, other.start) != Ordering::Less
            && compare_bounds(other.end, self.start) != Ordering::Less
    }

    /// Compare with another, possibly missing, interval.  Intervals are
    /// ordered by their lower bound, then by their upper bound.  Comparing
    /// with a missing interval always returns `Greater`.
    #[must_use]
    pub fn compare_to(&self, other: Option<&Self>) -> Ordering {
        match other {
            None => Ordering::Greater,
            Some(other) => compare_bounds(self.start, other.start)
                .then_with(|| compare_bounds(self.end, other.end)),
        }
    }
}

impl From<(f64, f64)> for Interval {
    fn from(value: (f64, f64)) -> Self {
        Interval::new(value.0, value.1)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(value: Interval) -> Self {
        [value.start, value.end]
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(Some(other)) == Ordering::Equal
    }
}

impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(Some(other))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{}]",
            format_number(self.start),
            format_number(self.end)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let intv = Interval::new(1.0, 10.0);
        assert_eq!(intv.start(), 1.0);
        assert_eq!(intv.end(), 10.0);

        // bounds given in reverse order
        let intv = Interval::new(10.0, 1.0);
        assert_eq!(intv.start(), 1.0);
        assert_eq!(intv.end(), 10.0);
        assert_eq!(intv, Interval::new(1.0, 10.0));

        let intv = Interval::new(-5.0, -100.0);
        assert_eq!(intv.start(), -100.0);
        assert_eq!(intv.end(), -5.0);

        let intv = Interval::new(4.0, 4.0);
        assert!(intv.is_single());
        assert_eq!(intv, Interval::new_single(4.0));
        assert!(!Interval::new(4.0, 5.0).is_single());

        let intv = Interval::new(f64::NAN, 3.0);
        assert_eq!(intv.start(), 3.0);
        assert!(intv.end().is_nan());
    }

    #[test]
    fn test_set_start() {
        let mut intv = Interval::new(0.0, 10.0);
        assert!(intv.set_start(5.0).is_ok());
        assert_eq!(intv, Interval::new(5.0, 10.0));

        assert!(intv.set_start(10.0).is_ok());
        assert!(intv.is_single());

        assert!(intv.set_start(-3.0).is_ok());
        assert_eq!(intv, Interval::new(-3.0, 10.0));

        assert!(matches!(
            intv.set_start(11.0),
            Err(Error::InvalidStart { start, end }) if start == 11.0 && end == 10.0
        ));
        assert_eq!(intv, Interval::new(-3.0, 10.0));
    }

    #[test]
    fn test_set_end() {
        let mut intv = Interval::new(0.0, 10.0);
        assert!(intv.set_end(20.0).is_ok());
        assert_eq!(intv, Interval::new(0.0, 20.0));

        assert!(intv.set_end(0.0).is_ok());
        assert!(intv.is_single());

        assert!(matches!(
            intv.set_end(-0.5),
            Err(Error::InvalidEnd { start, end }) if start == 0.0 && end == -0.5
        ));
        assert_eq!(intv, Interval::new(0.0, 0.0));
    }

    #[test]
    fn test_equality() {
        let intv = Interval::new(1.0, 5.0);
        assert_eq!(intv, intv);
        assert_eq!(intv, Interval::new(5.0, 1.0));
        assert_ne!(intv, Interval::new(1.0, 6.0));
        assert_ne!(intv, Interval::new(0.0, 5.0));

        // total ordering of floats
        assert_ne!(Interval::new(-0.0, 1.0), Interval::new(0.0, 1.0));
        let nan = Interval::new(f64::NAN, f64::NAN);
        assert_eq!(nan, nan);
    }

    #[test]
    fn test_ord() {
        let a = Interval::new(1.0, 5.0);
        let b = Interval::new(1.0, 8.0);
        let c = Interval::new(2.0, 3.0);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(c.cmp(&a), Ordering::Greater);

        assert_eq!(a.compare_to(None), Ordering::Greater);
        assert_eq!(a.compare_to(Some(&b)), Ordering::Less);
        assert_eq!(b.compare_to(Some(&a)), Ordering::Greater);

        assert!(Interval::new(-0.0, 1.0) < Interval::new(0.0, 1.0));
        assert!(Interval::new(f64::INFINITY, f64::INFINITY)
            < Interval::new(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_negative_nan() {
        let neg_nan = -f64::NAN;
        assert!(neg_nan.is_sign_negative());

        // all NaN are greater than any other value, whatever their sign
        assert_eq!(compare_bounds(neg_nan, f64::NAN), Ordering::Equal);
        assert_eq!(
            compare_bounds(neg_nan, f64::INFINITY),
            Ordering::Greater
        );
        assert_eq!(compare_bounds(-0.0, 0.0), Ordering::Less);

        let intv = Interval::new(neg_nan, 3.0);
        assert_eq!(intv.start(), 3.0);
        assert!(intv.end().is_nan());
        assert_eq!(
            Interval::new(f64::NAN, f64::NAN),
            Interval::new(neg_nan, neg_nan)
        );

        let mut intv = Interval::new(0.0, 10.0);
        assert!(matches!(
            intv.set_start(neg_nan),
            Err(Error::InvalidStart { .. })
        ));
        assert_eq!(intv, Interval::new(0.0, 10.0));
        assert!(intv.set_end(neg_nan).is_ok());
        assert!(intv.end().is_nan());
    }

    #[test]
    fn test_touches() {
        let a = Interval::new(20.0, 25.0);
        assert!(a.touches(&Interval::new(25.0, 30.0)));
        assert!(Interval::new(25.0, 30.0).touches(&a));
        assert!(a.touches(&Interval::new(21.0, 22.0)));
        assert!(a.touches(&Interval::new(10.0, 40.0)));
        assert!(!a.touches(&Interval::new(25.5, 30.0)));
        assert!(!a.touches(&Interval::new(0.0, 19.0)));
    }

    #[test]
    fn test_convert() {
        assert_eq!(Interval::from((3.0, 1.0)), Interval::new(1.0, 3.0));
        assert_eq!(<[f64; 2]>::from(Interval::new(3.0, 1.0)), [1.0, 3.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(1.0, 20.0).to_string(), "[1,20]");
        assert_eq!(Interval::new(1.5, 20.33).to_string(), "[1.5,20.33]");
        assert_eq!(Interval::new(-5.4, 0.1).to_string(), "[-5.4,0.1]");
        assert_eq!(
            Interval::new(0.1234567, 8.0).to_string(),
            "[0.123457,8]"
        );
    }
}
