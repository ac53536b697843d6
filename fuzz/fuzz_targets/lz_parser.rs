#![no_main]

use libfuzzer_sys::fuzz_target;
use spikeplex::lz::{lz_complexity, lz_complexity_bounded};

fuzz_target!(|data: &[u8]| {
    // The parser must stay in bounds for any alphabet and length
    if data.is_empty() {
        assert!(lz_complexity(data).is_err());
        return;
    }
    let full = lz_complexity(data).unwrap();
    assert!(full >= 1 && full <= data.len());

    let threshold = usize::from(data[0]);
    let bounded = lz_complexity_bounded(data, threshold).unwrap();
    assert!(bounded <= full);
});
