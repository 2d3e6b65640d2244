//! Half-open ranges of series term indices.

use std::fmt;

/// Half-open interval `[start, end)` of Chudnovsky term indices.
///
/// A range always holds at least one term. Splitting a range produces two
/// non-empty children that cover the parent exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermRange {
    /// First index covered.
    pub start: u64,
    /// One past the last index covered.
    pub end: u64,
}

impl TermRange {
    /// Create a range covering `[start, end)`.
    #[must_use]
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start < end, "empty term range [{start}, {end})");
        Self { start, end }
    }

    /// Number of terms in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the range is a single term (the recursion base case).
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.len() == 1
    }

    /// Split at `m = floor((start + end) / 2)` into `[start, m)` and `[m, end)`.
    #[must_use]
    pub fn midpoint_split(&self) -> (Self, Self) {
        debug_assert!(self.len() >= 2);
        let mid = self.start + self.len() / 2;
        (Self::new(self.start, mid), Self::new(mid, self.end))
    }

    /// Split at an explicit interior point `mid`.
    #[must_use]
    pub fn split_at(&self, mid: u64) -> (Self, Self) {
        (Self::new(self.start, mid), Self::new(mid, self.end))
    }
}

impl fmt::Display for TermRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_single() {
        let r = TermRange::new(3, 4);
        assert_eq!(r.len(), 1);
        assert!(r.is_single());
        assert!(!TermRange::new(0, 10).is_single());
    }

    #[test]
    fn midpoint_split_matches_floor_average() {
        let (l, r) = TermRange::new(3, 8).midpoint_split();
        // floor((3 + 8) / 2) = 5
        assert_eq!(l, TermRange::new(3, 5));
        assert_eq!(r, TermRange::new(5, 8));
    }

    #[test]
    fn midpoint_split_of_two_terms() {
        let (l, r) = TermRange::new(0, 2).midpoint_split();
        assert!(l.is_single());
        assert!(r.is_single());
    }

    #[test]
    fn midpoint_split_large_indices() {
        let r = TermRange::new(u64::MAX - 4, u64::MAX);
        let (l, rr) = r.midpoint_split();
        assert_eq!(l.len() + rr.len(), 4);
        assert_eq!(l.end, rr.start);
    }

    #[test]
    fn display() {
        assert_eq!(TermRange::new(0, 81).to_string(), "[0, 81)");
    }
}
