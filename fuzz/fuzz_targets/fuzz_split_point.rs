#![no_main]

use libfuzzer_sys::fuzz_target;

use chudpi_core::range::TermRange;
use chudpi_core::split::binary_split;

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // start, length and cut point, kept small so each run stays fast
    let start = u64::from(u16::from_le_bytes([data[0], data[1]])) % 2_000;
    let len = u64::from(u16::from_le_bytes([data[2], data[3]])) % 200 + 2;
    let cut = u64::from(u16::from_le_bytes([data[4], data[5]])) % (len - 1) + 1;

    let whole = TermRange::new(start, start + len);
    let (left, right) = whole.split_at(start + cut);

    let direct = binary_split(whole);
    let combined = binary_split(left).combine(binary_split(right));
    assert_eq!(direct, combined, "split of {whole} at {} differs", start + cut);
});
