//! Precision budget derived from the requested decimal count.

use crate::calculator::PiError;
use crate::constants::{BITS_PER_DIGIT, DIGITS_PER_TERM, GUARD_DIGITS, TERM_SAFETY_MARGIN};

/// Term count and working precision for one run.
///
/// Built once from the requested decimals and passed explicitly to the value
/// derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionBudget {
    /// Requested fractional decimal digits.
    pub decimals: usize,
    /// Series terms to sum, `[0, terms)`.
    pub terms: u64,
    /// Fixed-point working precision in bits.
    pub working_bits: usize,
}

impl PrecisionBudget {
    /// Derive the budget for `decimals` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::Config`] when the working precision or the decimal
    /// scale would not fit the integer types used downstream.
    pub fn for_decimals(decimals: usize) -> Result<Self, PiError> {
        if u32::try_from(decimals).is_err() {
            return Err(PiError::Config(format!(
                "{decimals} decimals exceeds the supported maximum of {}",
                u32::MAX
            )));
        }

        let working_bits = decimals
            .checked_add(GUARD_DIGITS)
            .and_then(|d| d.checked_mul(BITS_PER_DIGIT))
            // sqrt radicand is shifted by twice the working precision
            .filter(|bits| bits.checked_mul(2).is_some())
            .ok_or_else(|| {
                PiError::Config(format!("{decimals} decimals overflows working precision"))
            })?;

        let terms = decimals as u64 / DIGITS_PER_TERM + TERM_SAFETY_MARGIN;

        Ok(Self {
            decimals,
            terms,
            working_bits,
        })
    }
}
