//! Sequential simulation engine
//!
//! Integrates the pipeline components into the outer loop:
//! - Generator (per-round substream derivation)
//! - Round evaluator (fixed attempt budget per round)
//! - Running-maximum fold over all rounds
//!
//! # Architecture
//!
//! ```text
//! For each round r:
//! 1. Derive a fresh sub-state from the seed stream
//! 2. Evaluate the round (batched draws + masked partial draw)
//! 3. Fold the hit count into the running maximum
//! ```
//!
//! The hot path is total over wrapping unsigned arithmetic: no allocation,
//! no I/O, no error paths. The only fallible operation is configuration
//! validation at construction time.

use crate::rng::MwcState;
use crate::round::evaluate_round;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference seed word, chosen by the original experiment. The companion
/// word is its bitwise complement.
pub const DEFAULT_SEED_U: u32 = 0xC0DE15AF;

/// Reference number of rounds (also the benchmark workload size).
pub const DEFAULT_ROUNDS: u64 = 1_000_000_000;

/// Reference number of attempts per round.
pub const DEFAULT_ATTEMPTS_PER_ROUND: u32 = 231;

/// Number of worker threads to default to: one per logical core.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Complete simulation configuration
///
/// This struct contains all parameters needed to run a simulation.
/// Missing fields in a JSON document fall back to the reference
/// configuration, so a config file only needs to name what it changes.
///
/// # Fields
///
/// * `seed_u`, `seed_v` - Seed word pair for the generator stream
/// * `rounds` - Number of independent rounds to evaluate (must be > 0)
/// * `attempts_per_round` - Attempt budget per round; the per-round hit
///   count is bounded by this value
/// * `workers` - Worker thread count for the parallel driver (must be >= 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Generator seed, low lane
    pub seed_u: u32,

    /// Generator seed, high lane
    pub seed_v: u32,

    /// Number of rounds to simulate
    pub rounds: u64,

    /// Attempts evaluated per round
    pub attempts_per_round: u32,

    /// Number of parallel workers (1 = sequential partitioning)
    pub workers: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed_u: DEFAULT_SEED_U,
            seed_v: !DEFAULT_SEED_U,
            rounds: DEFAULT_ROUNDS,
            attempts_per_round: DEFAULT_ATTEMPTS_PER_ROUND,
            workers: default_workers(),
        }
    }
}

impl SimulationConfig {
    /// The generator state this configuration seeds the run with
    pub fn seed_state(&self) -> MwcState {
        MwcState::new(self.seed_u, self.seed_v)
    }
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// A validated, ready-to-run simulation
///
/// # Example
///
/// ```
/// use pattern_simulator_core_rs::{Simulation, SimulationConfig};
///
/// let config = SimulationConfig {
///     rounds: 1000,
///     workers: 1,
///     ..Default::default()
/// };
///
/// let simulation = Simulation::new(config).unwrap();
/// let max_hits = simulation.run();
/// assert!(max_hits <= 231);
/// ```
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Create a new simulation from a configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Complete simulation configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Simulation)` - Successfully validated simulation
    /// * `Err(SimulationError)` - Configuration validation failed
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;
        Ok(Self { config })
    }

    /// Validate configuration
    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if config.rounds == 0 {
            return Err(SimulationError::InvalidConfig(
                "rounds must be > 0".to_string(),
            ));
        }

        if config.workers == 0 {
            return Err(SimulationError::InvalidConfig(
                "workers must be >= 1".to_string(),
            ));
        }

        Ok(())
    }

    /// The configuration this simulation was built from
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation sequentially and return the maximum hit count
    ///
    /// Each round derives a fresh sub-state from the seed stream, so round
    /// `r` always sees the same substream regardless of how many rounds
    /// follow it. Bit-for-bit reproducible: identical configurations yield
    /// identical maxima.
    pub fn run(&self) -> u32 {
        let mut stream = self.config.seed_state();
        let mut max_hits = 0u32;

        for _ in 0..self.config.rounds {
            let hits = evaluate_round(stream.derive(), self.config.attempts_per_round);
            max_hits = max_hits.max(hits);
        }

        max_hits
    }
}
