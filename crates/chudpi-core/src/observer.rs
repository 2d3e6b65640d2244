//! Observers receiving worker progress.

use tracing::{debug, info};

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
///
/// Called from worker threads, so implementations must be thread-safe.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Null object pattern; does nothing with progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}

/// Observer that forwards progress to `tracing`.
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create an observer logging each finished worker at debug level.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            info!(workers = update.total, "All workers complete");
        } else {
            debug!(
                worker = update.worker,
                range = %update.range,
                completed = update.completed,
                total = update.total,
                progress = format!("{:.0}%", update.fraction() * 100.0),
                "Worker complete"
            );
        }
    }
}
