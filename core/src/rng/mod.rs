//! Deterministic random number generation
//!
//! Uses a multiply-with-carry style generator for fast, deterministic
//! random number generation. CRITICAL: All randomness in the simulation
//! MUST go through this module.

mod mwc;

pub use mwc::MwcState;
