//! Property-based tests for binary splitting and parallel folding.

use proptest::prelude::*;

use chudpi_core::calculator::{Calculator, ChudnovskyCalculator};
use chudpi_core::observer::NoOpObserver;
use chudpi_core::options::{FoldStrategy, Options};
use chudpi_core::parallel::{fold_ordered, partition};
use chudpi_core::pqt::Pqt;
use chudpi_core::range::TermRange;
use chudpi_core::split::binary_split;

fn compute(decimals: usize, threads: usize) -> String {
    ChudnovskyCalculator::new()
        .calculate(&NoOpObserver::new(), &Options::new(decimals, threads))
        .unwrap()
        .to_string()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Splitting [a, b) directly equals combining [a, m) and [m, b).
    #[test]
    fn split_point_does_not_matter(a in 0u64..200, len in 2u64..60, cut in 1u64..59) {
        let b = a + len;
        let m = a + 1 + cut % (len - 1);
        let whole = TermRange::new(a, b);
        let (left, right) = whole.split_at(m);
        let direct = binary_split(whole);
        let combined = binary_split(left).combine(binary_split(right));
        prop_assert_eq!(direct, combined, "[{}, {}) at {}", a, b, m);
    }

    /// Partitions cover [0, N) exactly, in order, with no empty range.
    #[test]
    fn partition_covers_range(total in 1u64..500, workers in 0usize..40) {
        let ranges = partition(total, workers);
        prop_assert!(!ranges.is_empty());
        prop_assert!(ranges.len() <= workers.max(1));
        let mut next = 0;
        for r in &ranges {
            prop_assert_eq!(r.start, next);
            prop_assert!(r.len() >= 1);
            next = r.end;
        }
        prop_assert_eq!(next, total);
    }

    /// Both fold strategies agree with a single split of the whole range.
    #[test]
    fn folds_agree_with_direct_split(total in 1u64..120, workers in 1usize..12) {
        let parts: Vec<Pqt> = partition(total, workers).into_iter().map(binary_split).collect();
        let direct = binary_split(TermRange::new(0, total));
        let seq = fold_ordered(parts.clone(), FoldStrategy::Sequential).unwrap();
        let pair = fold_ordered(parts, FoldStrategy::Pairwise).unwrap();
        prop_assert_eq!(&seq, &direct);
        prop_assert_eq!(&pair, &direct);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// Thread count never changes the formatted digits.
    #[test]
    fn thread_count_invariance(decimals in 0usize..400, w1 in 1usize..9, w2 in 1usize..9) {
        prop_assert_eq!(compute(decimals, w1), compute(decimals, w2));
    }

    /// Output always has the requested number of fractional digits.
    #[test]
    fn output_width(decimals in 0usize..300) {
        let s = compute(decimals, 2);
        if decimals == 0 {
            prop_assert_eq!(s, "3");
        } else {
            prop_assert!(s.starts_with("3."));
            prop_assert_eq!(s.len(), decimals + 2);
        }
    }
}
