//! # chudpi-core
//!
//! Core library for the chudpi calculator. Computes decimal digits of pi
//! with the Chudnovsky series, binary splitting, and a fixed pool of worker
//! threads whose results are folded in range order.

pub mod calculator;
pub mod constants;
pub mod observer;
pub mod options;
pub mod parallel;
pub mod pqt;
pub mod precision;
pub mod progress;
pub mod range;
pub mod split;
pub mod term;
pub mod value;

// Re-exports
pub use calculator::{Calculator, ChudnovskyCalculator, PiError};
pub use constants::{exit_codes, DEFAULT_DECIMALS, DEFAULT_THREADS, MIN_THREADS};
pub use observer::{LoggingObserver, NoOpObserver, ProgressObserver};
pub use options::{clamp_threads, FoldStrategy, Options};
pub use pqt::Pqt;
pub use precision::PrecisionBudget;
pub use progress::ProgressUpdate;
pub use range::TermRange;
pub use value::PiValue;

/// Compute pi to `decimals` fractional digits on `threads` workers.
///
/// This is a convenience function for simple use cases. For progress
/// reporting or a different fold strategy, use the `Calculator` trait
/// directly.
///
/// # Errors
///
/// Returns [`PiError`] if the precision budget or thread pool cannot be set up.
///
/// # Example
/// ```
/// assert_eq!(chudpi_core::pi(5, 1).unwrap().to_string(), "3.14159");
/// ```
pub fn pi(decimals: usize, threads: usize) -> Result<PiValue, PiError> {
    ChudnovskyCalculator::new().calculate(&NoOpObserver::new(), &Options::new(decimals, threads))
}
