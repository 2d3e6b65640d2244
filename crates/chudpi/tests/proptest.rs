//! Property-based tests for CLI configuration handling.

use clap::Parser;
use proptest::prelude::*;

use chudpi_core::calculator::{Calculator, ChudnovskyCalculator};
use chudpi_core::observer::NoOpObserver;
use chudpi_lib::config::AppConfig;

fn parse(decimals: usize, threads: i64) -> AppConfig {
    AppConfig::try_parse_from([
        "chudpi".to_string(),
        "-d".to_string(),
        decimals.to_string(),
        "-t".to_string(),
        threads.to_string(),
    ])
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any requested thread count yields at least one worker.
    #[test]
    fn threads_never_below_one(threads in any::<i64>()) {
        let opts = parse(10, threads).to_options();
        prop_assert!(opts.threads >= 1);
        if threads >= 1 {
            prop_assert_eq!(opts.threads as i64, threads);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    /// Clamped configurations compute the same digits as one thread.
    #[test]
    fn clamped_threads_match_single(decimals in 0usize..200, threads in -16i64..=16) {
        let calc = ChudnovskyCalculator::new();
        let observer = NoOpObserver::new();
        let requested = calc.calculate(&observer, &parse(decimals, threads).to_options()).unwrap();
        let single = calc.calculate(&observer, &parse(decimals, 1).to_options()).unwrap();
        prop_assert_eq!(requested, single);
    }
}
