//! Single-term evaluation of the Chudnovsky series.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use crate::constants::{CHUDNOVSKY_A, CHUDNOVSKY_B, CHUDNOVSKY_C, Q_DIVISOR};
use crate::pqt::Pqt;

/// Compute the triple for the single term `k`.
///
/// For `k = 0` the triple is `P = Q = 1`. Otherwise
/// `P = -(6k-5)(2k-1)(6k-1)` and `Q = C^3 k^3 / 24`. In both cases
/// `T = P * (A + B*k)`.
#[must_use]
pub fn leaf(k: u64) -> Pqt {
    let kb = BigInt::from(k);

    let (p, q) = if k == 0 {
        (BigInt::one(), BigInt::one())
    } else {
        let p = -((&kb * 6u32 - 5u32) * (&kb * 2u32 - 1u32) * (&kb * 6u32 - 1u32));

        let c3_k3 = BigInt::from(CHUDNOVSKY_C).pow(3) * kb.pow(3);
        let (q, rem) = c3_k3.div_rem(&BigInt::from(Q_DIVISOR));
        debug_assert!(rem == BigInt::ZERO, "C^3 k^3 not divisible by 24 at k={k}");
        (p, q)
    };

    let t = &p * (kb * CHUDNOVSKY_B + CHUDNOVSKY_A);
    Pqt { p, q, t }
}
