//! Orchestration interfaces.

use std::time::Duration;

use chudpi_core::calculator::PiError;
use chudpi_core::value::PiValue;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(&self, result: &CalculationResult);

    /// Present a comparison between cross-checked runs.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// Requested fractional digits.
    pub decimals: usize,
    /// Worker threads used after clamping.
    pub threads: usize,
    /// The computed value or a structured error.
    pub outcome: Result<PiValue, PiError>,
    /// Wall-clock computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// Decimals produced per second, or `None` for a zero duration.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn decimals_per_second(&self) -> Option<f64> {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            Some(self.decimals as f64 / secs)
        } else {
            None
        }
    }
}
