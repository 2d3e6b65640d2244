//! Progress updates emitted while workers finish their ranges.

use crate::range::TermRange;

/// Progress update sent from the parallel splitter to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Index of the worker that produced this update.
    pub worker: usize,
    /// Term range the worker covered.
    pub range: TermRange,
    /// Workers finished so far, including this one.
    pub completed: usize,
    /// Total number of workers.
    pub total: usize,
    /// Whether every worker has finished.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create an update for `worker` finishing `range`.
    #[must_use]
    pub fn new(worker: usize, range: TermRange, completed: usize, total: usize) -> Self {
        Self {
            worker,
            range,
            completed,
            total,
            done: completed >= total,
        }
    }

    /// Fraction of workers finished, in `[0.0, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_worker_marks_done() {
        let update = ProgressUpdate::new(2, TermRange::new(20, 31), 3, 3);
        assert!(update.done);
        assert!((update.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_progress() {
        let update = ProgressUpdate::new(0, TermRange::new(0, 10), 1, 4);
        assert!(!update.done);
        assert!((update.fraction() - 0.25).abs() < f64::EPSILON);
    }
}
