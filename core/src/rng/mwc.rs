//! Multiply-with-carry random number generator
//!
//! A very small, very fast PRNG built from two coupled 16-bit
//! multiply-with-carry lanes packed into a pair of `u32` words. Not
//! cryptographically secure, and not intended to be: it exists to feed a
//! statistical simulation as cheaply as possible.
//!
//! # Algorithm
//!
//! Each call advances both lanes with a 16x16-bit multiply plus the carry
//! held in the upper half of the word, then combines the two lanes into one
//! 32-bit output. All arithmetic wraps modulo 2^32; the wraparound IS the
//! generator, not an overflow bug.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact simulation)
//! - Testing (verify behavior)
//! - Research (validate results)

use serde::{Deserialize, Serialize};

/// Mask selecting the low 16 bits of a word.
const LOWER_HALF_MASK: u32 = 0xFFFF;

/// Deterministic multiply-with-carry generator state
///
/// Holds the `(u, v)` word pair the generator advances on every draw.
/// Each worker in a parallel run owns an exclusive copy; the state is
/// never shared across threads.
///
/// # Example
/// ```
/// use pattern_simulator_core_rs::MwcState;
///
/// let mut rng = MwcState::new(0xC0DE15AF, !0xC0DE15AF);
/// let value = rng.next();
/// let sub = rng.derive(); // jump-ahead state for an independent substream
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MwcState {
    /// Low-lane word (contributes the low 16 output bits)
    u: u32,
    /// High-lane word (contributes the high 16 output bits)
    v: u32,
}

impl MwcState {
    /// Create a new generator state from a seed word pair
    ///
    /// Any `(u, v)` pair is a valid seed; there is no forbidden state.
    ///
    /// # Example
    /// ```
    /// use pattern_simulator_core_rs::MwcState;
    ///
    /// let rng = MwcState::new(12345, 67890);
    /// assert_eq!(rng.words(), (12345, 67890));
    /// ```
    pub fn new(u: u32, v: u32) -> Self {
        Self { u, v }
    }

    /// Generate the next random u32 value
    ///
    /// Advances both lanes in place and returns their combination. Total:
    /// every input state has a defined successor, no failure modes.
    ///
    /// # Example
    /// ```
    /// use pattern_simulator_core_rs::MwcState;
    ///
    /// let mut rng = MwcState::new(12345, 67890);
    /// let value = rng.next();
    /// ```
    pub fn next(&mut self) -> u32 {
        self.v = 36969u32
            .wrapping_mul(self.v & LOWER_HALF_MASK)
            .wrapping_add(self.v >> 16);
        self.u = 18000u32
            .wrapping_mul(self.u & LOWER_HALF_MASK)
            .wrapping_add(self.u >> 16);
        (self.v << 16) | (self.u & LOWER_HALF_MASK)
    }

    /// Derive a fresh state, advancing this one by two draws
    ///
    /// The two outputs are repackaged as a new `(u, v)` pair. Used to jump
    /// ahead into an independent-looking substream, either per round or per
    /// worker. The derived state is a pure function of `self`, so the same
    /// stream always yields the same substreams.
    ///
    /// # Example
    /// ```
    /// use pattern_simulator_core_rs::MwcState;
    ///
    /// let mut stream = MwcState::new(12345, 67890);
    /// let sub_a = stream.derive();
    /// let sub_b = stream.derive();
    /// assert_ne!(sub_a, sub_b);
    /// ```
    pub fn derive(&mut self) -> MwcState {
        let u = self.next();
        let v = self.next();
        MwcState { u, v }
    }

    /// Get the current state words (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use pattern_simulator_core_rs::MwcState;
    ///
    /// let mut rng = MwcState::new(12345, 67890);
    /// rng.next();
    ///
    /// // Later, can recreate the generator from this snapshot
    /// let (u, v) = rng.words();
    /// let replay = MwcState::new(u, v);
    /// assert_eq!(replay, rng);
    /// ```
    pub fn words(&self) -> (u32, u32) {
        (self.u, self.v)
    }
}
