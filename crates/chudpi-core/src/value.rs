//! Conversion of the aggregate triple into decimal digits of pi.
//!
//! Evaluates `pi = 426880 * sqrt(10005) * Q / T` in binary fixed point with
//! `working_bits` fractional bits, then rounds half-up to the requested
//! number of decimals.

use std::fmt;

use num_bigint::{BigUint, Sign};
use num_traits::One;

use crate::calculator::PiError;
use crate::constants::{SQRT_MULTIPLIER, SQRT_RADICAND};
use crate::pqt::Pqt;
use crate::precision::PrecisionBudget;

/// Pi rounded to a fixed number of decimals.
///
/// Stored as `round(pi * 10^decimals)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiValue {
    scaled: BigUint,
    decimals: usize,
}

impl PiValue {
    /// Build a value from `round(pi * 10^decimals)`.
    #[must_use]
    pub fn from_scaled(scaled: BigUint, decimals: usize) -> Self {
        Self { scaled, decimals }
    }

    /// The integer `round(pi * 10^decimals)`.
    #[must_use]
    pub fn scaled(&self) -> &BigUint {
        &self.scaled
    }

    /// Number of fractional digits.
    #[must_use]
    pub fn decimals(&self) -> usize {
        self.decimals
    }
}

impl fmt::Display for PiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.scaled.to_str_radix(10);
        if self.decimals == 0 {
            return f.write_str(&digits);
        }
        if digits.len() <= self.decimals {
            // integer part is zero; pad the fraction with leading zeros
            return write!(f, "0.{digits:0>width$}", width = self.decimals);
        }
        let (int_part, frac_part) = digits.split_at(digits.len() - self.decimals);
        write!(f, "{int_part}.{frac_part}")
    }
}

/// Derive pi from the aggregate triple at the budget's precision.
///
/// # Errors
///
/// Returns [`PiError::Calculation`] if `Q` or `T` is not positive, which
/// cannot happen for a triple covering `[0, N)`.
pub fn derive_pi(pqt: &Pqt, budget: &PrecisionBudget) -> Result<PiValue, PiError> {
    let q = positive_magnitude(&pqt.q, "Q")?;
    let t = positive_magnitude(&pqt.t, "T")?;
    let bits = budget.working_bits;

    // sqrt(10005) * 2^bits
    let sqrt_c = (BigUint::from(SQRT_RADICAND) << (2 * bits)).sqrt();
    // pi * 2^bits
    let pi_fixed = sqrt_c * SQRT_MULTIPLIER * q / t;

    let decimals = u32::try_from(budget.decimals)
        .map_err(|_| PiError::Config(format!("{} decimals too large", budget.decimals)))?;
    let half = BigUint::one() << (bits - 1);
    let scaled = (pi_fixed * BigUint::from(10u32).pow(decimals) + half) >> bits;

    Ok(PiValue::from_scaled(scaled, budget.decimals))
}

fn positive_magnitude(value: &num_bigint::BigInt, name: &str) -> Result<BigUint, PiError> {
    match value.sign() {
        Sign::Plus => Ok(value.magnitude().clone()),
        _ => Err(PiError::Calculation(format!(
            "series {name} is not positive: {value}"
        ))),
    }
}
