//! The (P, Q, T) accumulator of the binary-split Chudnovsky series.

use num_bigint::BigInt;
use num_traits::One;

/// Partial product numerator `p`, partial product denominator `q`, and
/// weighted partial sum `t` for one term range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pqt {
    /// Product of the term numerators; carries the alternating sign.
    pub p: BigInt,
    /// Product of the term denominators.
    pub q: BigInt,
    /// Weighted partial sum over the range.
    pub t: BigInt,
}

impl Pqt {
    /// Build a triple from its three components.
    #[must_use]
    pub fn new(p: BigInt, q: BigInt, t: BigInt) -> Self {
        Self { p, q, t }
    }

    /// Merge `self` (covering `[a, m)`) with `right` (covering `[m, b)`).
    ///
    /// `P = Pl*Pr`, `Q = Ql*Qr`, `T = Qr*Tl + Pl*Tr`. The `T` pairing is not
    /// symmetric: `right` must cover the indices immediately after `self`.
    /// Both operands are consumed.
    #[must_use]
    pub fn combine(self, right: Pqt) -> Pqt {
        let t = &right.q * &self.t + &self.p * &right.t;
        Pqt {
            p: self.p * right.p,
            q: self.q * right.q,
            t,
        }
    }

    /// Neutral element for `combine` on either side: `P = Q = 1`, `T = 0`.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            p: BigInt::one(),
            q: BigInt::one(),
            t: BigInt::ZERO,
        }
    }
}
