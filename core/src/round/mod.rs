//! Round evaluation
//!
//! One round performs a fixed number of attempts, where each attempt tests
//! one 2-bit field of generator output against the target pattern. A single
//! draw supplies 16 fields, so attempts are consumed in batches: full draws
//! first, then one partial draw masked down to the remaining fields so that
//! exactly `attempts` attempts are evaluated — no more, no fewer.

use crate::bits::{count_pattern_fields, FIELDS_PER_DRAW};
use crate::rng::MwcState;

/// Run one round of `attempts` attempts from the given state
///
/// Returns the number of hits, always in `[0, attempts]`. The state is
/// consumed by value: a round owns its substream and leaves the caller's
/// stream untouched.
///
/// When `attempts` is an exact multiple of 16 the remainder mask is empty
/// and the partial draw is skipped entirely, which also avoids a shift by
/// the full bit width.
///
/// # Example
/// ```
/// use pattern_simulator_core_rs::{evaluate_round, MwcState};
///
/// let state = MwcState::new(0xC0DE15AF, !0xC0DE15AF);
/// let hits = evaluate_round(state, 231);
/// assert!(hits <= 231);
/// ```
pub fn evaluate_round(mut state: MwcState, attempts: u32) -> u32 {
    let full_draws = attempts / FIELDS_PER_DRAW;
    let remainder_fields = attempts % FIELDS_PER_DRAW;

    let mut hits = 0u32;
    for _ in 0..full_draws {
        hits += count_pattern_fields(state.next());
    }

    if remainder_fields > 0 {
        let mask = (1u32 << (remainder_fields * 2)) - 1;
        hits += count_pattern_fields(state.next() & mask);
    }

    hits
}
