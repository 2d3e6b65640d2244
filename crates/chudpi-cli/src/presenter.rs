//! CLI result presenter.
//!
//! Pi goes to stdout; the stats report, comparisons, and errors go to stderr
//! so redirecting the digits never captures diagnostics.

use std::io::{self, Write};

use chudpi_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_comparison, format_stats};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
    stats: bool,
}

impl CLIResultPresenter {
    /// Create a presenter; `quiet` hides the digits, `stats` adds the report.
    #[must_use]
    pub fn new(quiet: bool, stats: bool) -> Self {
        Self { quiet, stats }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult) {
        match &result.outcome {
            Ok(value) => {
                if !self.quiet {
                    let mut out = io::stdout().lock();
                    // a closed pipe is not worth a panic
                    let _ = writeln!(out, "{value}");
                    let _ = out.flush();
                }
                if self.stats {
                    eprint!("{}", format_stats(result));
                }
            }
            Err(e) => self.present_error(&e.to_string()),
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        // diagnostics on stderr; quiet only silences the digits
        eprint!("{}", format_comparison(results));
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
