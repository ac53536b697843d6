#![no_main]

use libfuzzer_sys::fuzz_target;
use spikeplex::ppm::{compressed_bits, PpmConfig, PpmModel};

fuzz_target!(|data: &[u8]| {
    // First byte picks the order, the rest is the sequence
    let Some((&order, seq)) = data.split_first() else {
        return;
    };
    let config = PpmConfig {
        order: usize::from(order % 8),
        alphabet_size: 256,
    };

    let bits = compressed_bits(seq, config).unwrap();
    assert!(bits.is_finite() && bits >= 0.0);

    // Splitting the input across two observations costs the same
    let (head, tail) = seq.split_at(seq.len() / 2);
    let mut model = PpmModel::new(config);
    let split = model.observe(head).unwrap() + model.observe(tail).unwrap();
    assert!((split - bits).abs() < 1e-6 * bits.max(1.0));
});
