//! Tests for the 2-bit field pattern counter

use pattern_simulator_core_rs::count_pattern_fields;
use proptest::prelude::*;

#[test]
fn test_all_zero_fields() {
    assert_eq!(count_pattern_fields(0x0000_0000), 0);
}

#[test]
fn test_all_fields_match() {
    assert_eq!(count_pattern_fields(0xFFFF_FFFF), 16);
}

#[test]
fn test_alternating_patterns_never_match() {
    // `10` repeated and `01` repeated: no field has both bits set.
    assert_eq!(count_pattern_fields(0xAAAA_AAAA), 0);
    assert_eq!(count_pattern_fields(0x5555_5555), 0);
}

#[test]
fn test_exactly_one_matching_field() {
    for field in 0..16u32 {
        let value = 0b11u32 << (field * 2);
        assert_eq!(
            count_pattern_fields(value),
            1,
            "single matching field at position {} miscounted",
            field
        );
    }
}

#[test]
fn test_mixed_value() {
    // Fields (low to high): 11, 01, 11, 00 -> two matches.
    assert_eq!(count_pattern_fields(0b00_11_01_11), 2);
}

/// Reference implementation: inspect each 2-bit field individually.
fn count_fields_naive(value: u32) -> u32 {
    (0..16)
        .filter(|field| (value >> (field * 2)) & 0b11 == 0b11)
        .count() as u32
}

proptest! {
    #[test]
    fn prop_matches_naive_field_scan(value in any::<u32>()) {
        prop_assert_eq!(count_pattern_fields(value), count_fields_naive(value));
    }

    #[test]
    fn prop_count_bounded_by_field_count(value in any::<u32>()) {
        prop_assert!(count_pattern_fields(value) <= 16);
    }
}
