//! Simulation driver - outer loop over rounds
//!
//! Runs a configured number of rounds, each from a freshly derived
//! generator state, and folds the per-round hit counts into a running
//! maximum. `engine.rs` holds the configuration layer and the sequential
//! loop; `parallel.rs` partitions the same loop across a fixed pool of
//! worker threads.

pub mod engine;
pub mod parallel;

// Re-export main types for convenience
pub use engine::{default_workers, Simulation, SimulationConfig, SimulationError};
pub use parallel::worker_stream_state;
