//! Calculator trait and the Chudnovsky implementation.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `ChudnovskyCalculator` wires precision budget, parallel splitting and
//! value derivation together.

use tracing::debug;

use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::parallel::split_parallel;
use crate::precision::PrecisionBudget;
use crate::value::{derive_pi, PiValue};

/// Error type for pi calculations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PiError {
    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Cross-checked runs produced different digits.
    #[error("result mismatch between thread configurations")]
    Mismatch,
}

/// Public trait for pi calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate pi with the given options.
    fn calculate(
        &self,
        observer: &dyn ProgressObserver,
        opts: &Options,
    ) -> Result<PiValue, PiError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Chudnovsky series with binary splitting across worker threads.
///
/// # Example
/// ```
/// use chudpi_core::calculator::{Calculator, ChudnovskyCalculator};
/// use chudpi_core::observer::NoOpObserver;
/// use chudpi_core::options::Options;
///
/// let calc = ChudnovskyCalculator::new();
/// let pi = calc.calculate(&NoOpObserver::new(), &Options::new(20, 2)).unwrap();
/// assert_eq!(pi.to_string(), "3.14159265358979323846");
/// ```
pub struct ChudnovskyCalculator;

impl ChudnovskyCalculator {
    /// Create a new `ChudnovskyCalculator`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChudnovskyCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for ChudnovskyCalculator {
    fn calculate(
        &self,
        observer: &dyn ProgressObserver,
        opts: &Options,
    ) -> Result<PiValue, PiError> {
        let opts = opts.clone().normalize();
        let budget = PrecisionBudget::for_decimals(opts.decimals)?;
        debug!(
            decimals = budget.decimals,
            terms = budget.terms,
            working_bits = budget.working_bits,
            threads = opts.threads,
            "Precision budget"
        );

        let pqt = split_parallel(budget.terms, opts.threads, opts.fold, observer)?;
        derive_pi(&pqt, &budget)
    }

    fn name(&self) -> &'static str {
        "Chudnovsky"
    }
}
