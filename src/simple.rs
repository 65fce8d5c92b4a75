//! Small value types: [`Pair`] and closed [`Interval`]
//!
//! Both order lexicographically, first component first. With the `serde`
//! feature enabled they serialize as plain structs.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two values ordered lexicographically
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<A, B> {
    pub a: A,
    pub b: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Self { a, b }
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Closed interval `[l, r]`, ordered by `l` then `r`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<E> {
    pub l: E,
    pub r: E,
}

impl<E: PartialOrd> Interval<E> {
    pub fn new(l: E, r: E) -> Self {
        Self { l, r }
    }

    /// `l <= e <= r`
    pub fn contains(&self, e: &E) -> bool {
        *e >= self.l && *e <= self.r
    }

    /// True if the two closed intervals share at least one point
    pub fn overlaps(&self, other: &Interval<E>) -> bool {
        other.l <= self.r && other.r >= self.l
    }
}

impl<E: fmt::Display> fmt::Display for Interval<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.l, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::HashSet;

    #[test]
    fn test_pair_equality_and_order() {
        let p1 = Pair::new(10, 20);
        let p2 = Pair::from((10, 20));
        assert_eq!(p1, p2);
        assert_eq!(p1.cmp(&p2), Ordering::Equal);
        assert!(Pair::new(10, 25) > p1);
        assert!(Pair::new(9, 99) < p1);

        let set: HashSet<_> = [p1, p2].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_eq!(p1.to_string(), "(10, 20)");
        assert_eq!(p1.into_tuple(), (10, 20));
    }

    #[test]
    fn test_interval_contains_and_overlaps() {
        let interval = Interval::new(10, 20);
        assert!(interval.contains(&10));
        assert!(interval.contains(&15));
        assert!(interval.contains(&20));
        assert!(!interval.contains(&21));

        assert!(interval.overlaps(&Interval::new(15, 25)));
        assert!(interval.overlaps(&Interval::new(20, 30)));
        assert!(interval.overlaps(&Interval::new(0, 100)));
        assert!(!interval.overlaps(&Interval::new(21, 30)));
        assert_eq!(interval.to_string(), "[10, 20]");
    }

    #[test]
    fn test_interval_order() {
        let mut intervals = vec![
            Interval::new(5, 9),
            Interval::new(1, 4),
            Interval::new(5, 6),
        ];
        intervals.sort();
        assert_eq!(
            intervals,
            vec![Interval::new(1, 4), Interval::new(5, 6), Interval::new(5, 9)]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Interval::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"l":1,"r":2}"#);
        let pair: Pair<u8, String> = serde_json::from_str(r#"{"a":1,"b":"x"}"#).unwrap();
        assert_eq!(pair, Pair::new(1, "x".to_string()));
    }
}
