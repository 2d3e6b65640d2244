//! Worker progress bar on stderr.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use chudpi_core::observer::ProgressObserver;
use chudpi_core::progress::ProgressUpdate;

const TEMPLATE: &str = "{spinner:.cyan} [{elapsed_precise}] {bar:30.cyan/blue} {pos}/{len} workers";

/// Progress observer that drives an `indicatif` bar, one tick per finished
/// worker. The bar length is taken from the first update.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// Create a reporter drawing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr()))
    }

    /// Create a reporter that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { bar }
    }

    /// Workers finished so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for CLIProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for CLIProgressReporter {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.bar.set_length(update.total as u64);
        self.bar.set_position(update.completed as u64);
        if update.done {
            self.bar.finish_and_clear();
        }
    }
}
