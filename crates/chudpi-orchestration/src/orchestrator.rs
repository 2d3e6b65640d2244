//! Core orchestration: timed execution, cross-checks and result analysis.

use std::time::Instant;

use tracing::{debug, warn};

use chudpi_core::calculator::{Calculator, PiError};
use chudpi_core::observer::ProgressObserver;
use chudpi_core::options::Options;
use chudpi_core::parallel::effective_workers;
use chudpi_core::precision::PrecisionBudget;

use crate::interfaces::CalculationResult;

/// Run `calc` once with `opts`, timing the whole computation.
pub fn execute_calculation(
    calc: &dyn Calculator,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> CalculationResult {
    let opts = opts.clone().normalize();
    let threads = PrecisionBudget::for_decimals(opts.decimals)
        .map_or(opts.threads, |b| effective_workers(b.terms, opts.threads));

    let start = Instant::now();
    let outcome = calc.calculate(observer, &opts);
    let duration = start.elapsed();

    debug!(
        algorithm = calc.name(),
        decimals = opts.decimals,
        threads,
        ?duration,
        ok = outcome.is_ok(),
        "Calculation finished"
    );

    CalculationResult {
        algorithm: calc.name().to_string(),
        decimals: opts.decimals,
        threads,
        outcome,
        duration,
    }
}

/// Run `calc` with `opts` and again on a single thread for comparison.
///
/// The requested run comes first. If `opts` already asks for one thread, only
/// one result is returned.
pub fn execute_cross_check(
    calc: &dyn Calculator,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> Vec<CalculationResult> {
    let primary = execute_calculation(calc, opts, observer);
    if primary.threads <= 1 {
        return vec![primary];
    }

    let reference_opts = Options {
        threads: 1,
        ..opts.clone()
    };
    let reference = execute_calculation(calc, &reference_opts, observer);
    vec![primary, reference]
}

/// Analyze comparison results for mismatches.
///
/// Every run must have succeeded; the first failure is returned as is.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), PiError> {
    let Some((first, rest)) = results.split_first() else {
        return Err(PiError::Calculation("no valid results".into()));
    };

    if let Some((threads, err)) = results
        .iter()
        .find_map(|r| r.outcome.as_ref().err().map(|e| (r.threads, e)))
    {
        warn!(threads, error = %err, "Run failed during cross-check");
        return Err(err.clone());
    }

    for result in rest {
        if result.outcome.as_ref().ok() != first.outcome.as_ref().ok() {
            warn!(
                first_threads = first.threads,
                other_threads = result.threads,
                "Digits differ between thread configurations"
            );
            return Err(PiError::Mismatch);
        }
    }

    Ok(())
}
