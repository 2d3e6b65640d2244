//! Calculation options and configuration.

use tracing::warn;

use crate::constants::{DEFAULT_DECIMALS, DEFAULT_THREADS, MIN_THREADS};

/// How per-worker triples are merged after the join barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldStrategy {
    /// Left-to-right accumulation; each worker result is the right child.
    #[default]
    Sequential,
    /// Adjacent pairs merged level by level, keeping range order.
    Pairwise,
}

/// Options for a pi calculation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of fractional decimal digits to produce.
    pub decimals: usize,
    /// Number of worker threads.
    pub threads: usize,
    /// Strategy for merging worker results.
    pub fold: FoldStrategy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            threads: DEFAULT_THREADS,
            fold: FoldStrategy::default(),
        }
    }
}

impl Options {
    /// Create options for `decimals` digits on `threads` workers.
    #[must_use]
    pub fn new(decimals: usize, threads: usize) -> Self {
        Self {
            decimals,
            threads,
            ..Self::default()
        }
    }

    /// Normalize options, raising the thread count to the minimum.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.threads < MIN_THREADS {
            self.threads = MIN_THREADS;
        }
        self
    }
}

/// Clamp a user-supplied thread count, which may be zero or negative.
#[must_use]
pub fn clamp_threads(requested: i64) -> usize {
    if requested < MIN_THREADS as i64 {
        warn!(requested, "thread count below minimum, using {MIN_THREADS}");
        return MIN_THREADS;
    }
    usize::try_from(requested).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.decimals, 1000);
        assert_eq!(opts.threads, 1);
        assert_eq!(opts.fold, FoldStrategy::Sequential);
    }

    #[test]
    fn normalize_zero_threads() {
        let opts = Options::new(100, 0).normalize();
        assert_eq!(opts.threads, 1);
    }

    #[test]
    fn normalize_keeps_valid_threads() {
        let opts = Options::new(100, 8).normalize();
        assert_eq!(opts.threads, 8);
    }

    #[test]
    fn clamp_negative_and_zero() {
        assert_eq!(clamp_threads(-7), 1);
        assert_eq!(clamp_threads(0), 1);
        assert_eq!(clamp_threads(1), 1);
        assert_eq!(clamp_threads(16), 16);
    }
}
