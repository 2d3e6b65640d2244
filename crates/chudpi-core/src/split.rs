//! Binary splitting over a term range.
//!
//! Recursively halves `[a, b)` down to single terms, evaluates each leaf with
//! [`leaf`](crate::term::leaf), and merges siblings with [`Pqt::combine`].
//! Recursion is sequential; parallelism lives one level up in
//! [`parallel`](crate::parallel).

use crate::pqt::Pqt;
use crate::range::TermRange;
use crate::term::leaf;

/// Compute the triple for `range` by binary splitting.
#[must_use]
pub fn binary_split(range: TermRange) -> Pqt {
    if range.is_single() {
        return leaf(range.start);
    }

    let (left_range, right_range) = range.midpoint_split();
    let left = binary_split(left_range);
    let right = binary_split(right_range);
    left.combine(right)
}

/// Compute the triple for `range` by summing terms one at a time, left to right.
///
/// Same result as [`binary_split`] with quadratic cost; kept as a reference
/// for tests and benchmarks.
#[must_use]
pub fn linear_split(range: TermRange) -> Pqt {
    (range.start..range.end)
        .map(leaf)
        .fold(Pqt::identity(), Pqt::combine)
}
