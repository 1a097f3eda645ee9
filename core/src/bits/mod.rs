//! 2-bit field pattern counting
//!
//! A 32-bit word is read as 16 non-overlapping 2-bit fields. Under a
//! uniform-random bit assumption each field equals the target pattern `11`
//! with probability 1/4, so one draw yields 16 independent 1/4-chance
//! attempts. Counting is branch-free: a field is `11` exactly when both of
//! its bits are set, and `n & (n << 1)` moves "both bits set" into the
//! field's high bit, where the alternating mask isolates it without
//! cross-field bleed.

/// Number of 2-bit fields carried by one generator draw.
pub const FIELDS_PER_DRAW: u32 = u32::BITS / 2;

/// Selects the high bit of each 2-bit field.
const ALTERNATING_MASK: u32 = 0xAAAA_AAAA;

/// Count how many of the 16 2-bit fields of `value` equal `11`
///
/// Pure and total; the result is always in `[0, 16]`.
///
/// # Example
/// ```
/// use pattern_simulator_core_rs::bits::count_pattern_fields;
///
/// assert_eq!(count_pattern_fields(0x0000_0000), 0);
/// assert_eq!(count_pattern_fields(0xFFFF_FFFF), 16);
/// assert_eq!(count_pattern_fields(0b1100), 1);
/// ```
pub fn count_pattern_fields(value: u32) -> u32 {
    (value & (value << 1) & ALTERNATING_MASK).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values() {
        assert_eq!(count_pattern_fields(0x0000_0000), 0);
        assert_eq!(count_pattern_fields(0xFFFF_FFFF), 16);
        // Repeating `10`: no field has both bits set.
        assert_eq!(count_pattern_fields(0xAAAA_AAAA), 0);
        // Repeating `01`: same.
        assert_eq!(count_pattern_fields(0x5555_5555), 0);
    }

    #[test]
    fn test_single_field_at_every_position() {
        for field in 0..FIELDS_PER_DRAW {
            let value = 0b11u32 << (field * 2);
            assert_eq!(
                count_pattern_fields(value),
                1,
                "field {} not counted exactly once",
                field
            );
        }
    }

    #[test]
    fn test_adjacent_set_bits_across_field_boundary_do_not_count() {
        // Bits 1 and 2 are both set, but they straddle two fields.
        assert_eq!(count_pattern_fields(0b0110), 0);
    }
}
