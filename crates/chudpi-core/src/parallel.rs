//! Parallel distribution of the term range and ordered folding of results.
//!
//! `[0, N)` is cut into W contiguous sub-ranges, each split independently on
//! its own pool thread. The ordered `collect` is the join barrier; the fold
//! runs on the calling thread once every worker has returned.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::calculator::PiError;
use crate::observer::ProgressObserver;
use crate::options::FoldStrategy;
use crate::pqt::Pqt;
use crate::progress::ProgressUpdate;
use crate::range::TermRange;
use crate::split::binary_split;

/// Number of workers actually used for `total_terms` terms.
///
/// At least one, and never more than there are terms, so every sub-range is
/// non-empty.
#[must_use]
pub fn effective_workers(total_terms: u64, workers: usize) -> usize {
    let cap = usize::try_from(total_terms).unwrap_or(usize::MAX).max(1);
    workers.clamp(1, cap)
}

/// Cut `[0, total_terms)` into `workers` contiguous ranges of equal size; the
/// last range absorbs the remainder.
///
/// `workers` is first reduced to [`effective_workers`].
#[must_use]
pub fn partition(total_terms: u64, workers: usize) -> Vec<TermRange> {
    debug_assert!(total_terms > 0);
    let workers = effective_workers(total_terms, workers);
    let count = workers as u64;
    let chunk = total_terms / count;

    (0..count)
        .map(|i| {
            let start = i * chunk;
            let end = if i == count - 1 {
                total_terms
            } else {
                (i + 1) * chunk
            };
            TermRange::new(start, end)
        })
        .collect()
}

/// Merge worker triples in range order.
///
/// Returns `None` for an empty input.
#[must_use]
pub fn fold_ordered(parts: Vec<Pqt>, strategy: FoldStrategy) -> Option<Pqt> {
    match strategy {
        FoldStrategy::Sequential => parts.into_iter().reduce(Pqt::combine),
        FoldStrategy::Pairwise => fold_pairwise(parts),
    }
}

fn fold_pairwise(parts: Vec<Pqt>) -> Option<Pqt> {
    let mut level = parts;
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut iter = level.into_iter();
        while let Some(left) = iter.next() {
            match iter.next() {
                Some(right) => next.push(left.combine(right)),
                None => next.push(left),
            }
        }
        level = next;
    }
    level.pop()
}

/// Compute the triple for `[0, total_terms)` on `workers` threads.
///
/// With a single worker the split runs on the calling thread. Otherwise a
/// dedicated pool with exactly that many threads is built for this call.
///
/// # Errors
///
/// Returns [`PiError::Calculation`] if the thread pool cannot be created.
pub fn split_parallel(
    total_terms: u64,
    workers: usize,
    strategy: FoldStrategy,
    observer: &dyn ProgressObserver,
) -> Result<Pqt, PiError> {
    let ranges = partition(total_terms, workers);
    let workers = ranges.len();
    debug!(total_terms, workers, ?strategy, "Splitting term range");

    if workers == 1 {
        let range = ranges[0];
        let pqt = binary_split(range);
        observer.on_progress(&ProgressUpdate::new(0, range, 1, 1));
        return Ok(pqt);
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("chudpi-worker-{i}"))
        .build()
        .map_err(|e| PiError::Calculation(format!("failed to create thread pool: {e}")))?;

    let completed = AtomicUsize::new(0);
    let parts: Vec<Pqt> = pool.install(|| {
        ranges
            .into_par_iter()
            .enumerate()
            .map(|(worker, range)| {
                debug!(worker, %range, "Worker started");
                let pqt = binary_split(range);
                let done = completed.fetch_add(1, Ordering::AcqRel) + 1;
                observer.on_progress(&ProgressUpdate::new(worker, range, done, workers));
                pqt
            })
            .collect()
    });

    fold_ordered(parts, strategy)
        .ok_or_else(|| PiError::Calculation("no worker results to fold".into()))
}
