#![no_main]

use libfuzzer_sys::fuzz_target;

use chudpi_core::calculator::{Calculator, ChudnovskyCalculator};
use chudpi_core::observer::NoOpObserver;
use chudpi_core::options::{FoldStrategy, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let decimals = usize::from(u16::from_le_bytes([data[0], data[1]])) % 3_000;
    let threads = usize::from(data[2] % 32);
    let fold = if data[3] & 1 == 0 {
        FoldStrategy::Sequential
    } else {
        FoldStrategy::Pairwise
    };

    let calc = ChudnovskyCalculator::new();
    let observer = NoOpObserver::new();
    let reference = calc.calculate(&observer, &Options::new(decimals, 1));
    let candidate = calc.calculate(
        &observer,
        &Options {
            decimals,
            threads,
            fold,
        },
    );

    if let (Ok(r), Ok(c)) = (reference, candidate) {
        assert_eq!(r, c, "decimals={decimals} threads={threads} fold={fold:?}");
    }
});
