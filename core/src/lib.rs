//! Pattern Simulator Core - Rust Engine
//!
//! Extreme-value simulation over a multiply-with-carry generator: draw
//! pseudo-random 32-bit values, count 2-bit fields matching the target
//! pattern across a fixed attempt budget per round, and track the maximum
//! hit count over a very large number of independent rounds. Doubles as a
//! single-core / multi-core throughput benchmark.
//!
//! # Architecture
//!
//! - **rng**: Deterministic multiply-with-carry generator
//! - **bits**: 2-bit field pattern counting
//! - **round**: Per-round attempt batching and hit counting
//! - **driver**: Configuration, sequential loop, parallel worker pool
//!
//! # Critical Invariants
//!
//! 1. All generator arithmetic is unsigned 32-bit with wrapping semantics
//! 2. All randomness is deterministic (seeded, reproducible substreams)
//! 3. Generator state is never shared between workers
//! 4. The running maximum only ever grows; cross-worker combination is a
//!    single `max` reduction at join time

// Module declarations
pub mod bits;
pub mod driver;
pub mod rng;
pub mod round;

// Re-exports for convenience
pub use bits::count_pattern_fields;
pub use driver::{
    default_workers, worker_stream_state, Simulation, SimulationConfig, SimulationError,
};
pub use rng::MwcState;
pub use round::evaluate_round;
