// Tests for the PPM context model
//
// Expected bit counts were traced by hand through the escape/exclusion
// rules: e.g. [0, 1] over 256 symbols costs 8 bits for the first symbol,
// 1 bit for the order-0 escape and log2(255) bits at order -1.

use super::*;
use crate::error::ComplexityError;
use crate::symbol::concat;

const KASPAR_SCHUSTER: [u8; 16] = [1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_first_symbol_costs_log_alphabet() {
    assert_eq!(compressed_bits(&[0u8], PpmConfig::default()).unwrap(), 8.0);
    assert_eq!(compressed_bits(&[1u8], PpmConfig::binary()).unwrap(), 1.0);
}

#[test]
fn test_escape_and_exclusion() {
    let bits = compressed_bits(&[0u8, 1], PpmConfig::default()).unwrap();
    assert!(close(bits, 8.0 + 1.0 + 255f64.log2()));

    // Over {0, 1} the order -1 fallback is certain once 0 is excluded
    assert_eq!(compressed_bits(&[0u8, 1], PpmConfig::binary()).unwrap(), 2.0);
}

#[test]
fn test_repeated_symbol() {
    assert_eq!(compressed_bits(&[0u8, 0], PpmConfig::default()).unwrap(), 9.0);
    assert_eq!(
        compressed_bits(&[0u8, 0, 0, 0], PpmConfig::default()).unwrap(),
        11.0
    );
    assert_eq!(compressed_bits(&[0u8, 0, 0, 0], PpmConfig::binary()).unwrap(), 4.0);
}

#[test]
fn test_periodic_and_irregular_sequences() {
    let periodic = [0u8, 1, 0, 1, 0, 1, 0, 1];
    assert!(close(
        compressed_bits(&periodic, PpmConfig::default()).unwrap(),
        23.579_315_937_580_017
    ));
    assert!(close(
        compressed_bits(&periodic, PpmConfig::binary()).unwrap(),
        8.584_962_500_721_156
    ));
    assert!(close(
        compressed_bits(&KASPAR_SCHUSTER, PpmConfig::default()).unwrap(),
        36.808_134_628_075_89
    ));
    assert!(close(
        compressed_bits(&KASPAR_SCHUSTER, PpmConfig::binary()).unwrap(),
        21.813_781_191_217_04
    ));
}

#[test]
fn test_empty_sequence_costs_nothing() {
    assert_eq!(compressed_bits::<u8>(&[], PpmConfig::default()).unwrap(), 0.0);
}

#[test]
fn test_fresh_model_per_call_is_deterministic() {
    let a = compressed_bits(&KASPAR_SCHUSTER, PpmConfig::default()).unwrap();
    let b = compressed_bits(&KASPAR_SCHUSTER, PpmConfig::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_reused_model_accumulates_context() {
    let s = [0u8, 1, 1, 0, 1];
    let t = [0u8, 1, 1, 0, 1];

    let mut shared = PpmModel::new(PpmConfig::default());
    let first = shared.observe(&s).unwrap();
    let second = shared.observe(&t).unwrap();

    let joined = compressed_bits(&concat(&s, &t), PpmConfig::default()).unwrap();
    assert!(close(first + second, joined));
    assert!(close(shared.total_bits(), joined));
    assert_eq!(shared.symbols_seen(), 10);

    // A second, independent model pays the full price for t again
    let independent = compressed_bits(&t, PpmConfig::default()).unwrap();
    assert!(second < independent);
}

#[test]
fn test_symbol_outside_alphabet() {
    let err = compressed_bits(&[0u8, 2], PpmConfig::binary()).unwrap_err();
    assert!(matches!(err, ComplexityError::InvalidAlphabet(_)));

    let err = compressed_bits(&[-1i32], PpmConfig::default()).unwrap_err();
    assert!(matches!(err, ComplexityError::InvalidAlphabet(_)));

    let mut model = PpmModel::new(PpmConfig::binary());
    assert!(model.update(5u8, &[]).is_err());
}

#[test]
fn test_context_table_suffix_updates() {
    let mut model = PpmModel::new(PpmConfig::default());
    model.observe(&[0u8, 1, 1, 0]).unwrap();
    let tables = model.contexts();

    assert_eq!(tables.max_order(), 3);
    // Order 0 has the single empty context
    assert_eq!(tables.contexts_at(0), 1);
    let root = tables.get(&[]).unwrap();
    assert_eq!(root.get(&0), 2);
    assert_eq!(root.get(&1), 2);

    // Symbol 0 at index 3 was recorded after [0, 1, 1], [1, 1] and [1]
    assert_eq!(tables.get(&[0, 1, 1]).unwrap().get(&0), 1);
    assert_eq!(tables.get(&[1, 1]).unwrap().get(&0), 1);
    assert_eq!(tables.get(&[1]).unwrap().get(&0), 1);
    assert_eq!(tables.get(&[1]).unwrap().get(&1), 1);
    assert!(tables.get(&[1, 0]).is_none());
}

#[test]
fn test_order_zero_model() {
    let config = PpmConfig {
        order: 0,
        alphabet_size: 2,
    };
    // Order 0 only: [0,0,0,0] → 1 + 1/2 + 2/3 + 3/4 probabilities
    let bits = compressed_bits(&[0u8, 0, 0, 0], config).unwrap();
    let expected = 1.0 - (0.5f64).log2() - (2.0f64 / 3.0).log2() - (0.75f64).log2();
    assert!(close(bits, expected));
}
