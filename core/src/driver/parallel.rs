//! Parallel simulation driver
//!
//! Partitions the round range across a fixed pool of scoped worker
//! threads. Each worker owns an exclusive generator state advanced into its
//! own substream, evaluates its contiguous chunk of rounds against a local
//! maximum, and the chunk maxima are folded with `max` at join time. The
//! join is the only synchronization point: `max` is commutative and
//! associative, so chunk order is unobservable.

use crate::rng::MwcState;
use crate::round::evaluate_round;

use super::engine::Simulation;

/// The generator state worker `worker_index` starts from
///
/// Applies the jump-ahead derivation `worker_index` times to the seed
/// state, consuming two draws per step. Worker 0 uses the seed unmodified.
/// The result depends only on the seed and the index, so every worker's
/// substream is reproducible without running the others.
///
/// The derivation decorrelates substreams empirically rather than by a
/// rigorous independence argument, matching the statistical (not
/// cryptographic) ambitions of the generator itself.
///
/// # Example
/// ```
/// use pattern_simulator_core_rs::{worker_stream_state, MwcState};
///
/// let seed = MwcState::new(0xC0DE15AF, !0xC0DE15AF);
/// assert_eq!(worker_stream_state(seed, 0), seed);
/// assert_ne!(worker_stream_state(seed, 1), seed);
/// ```
pub fn worker_stream_state(seed: MwcState, worker_index: usize) -> MwcState {
    let mut state = seed;
    for _ in 0..worker_index {
        state = state.derive();
    }
    state
}

impl Simulation {
    /// Run the simulation across the configured worker pool
    ///
    /// Rounds are split into contiguous, near-equal chunks, one per
    /// worker. Workers never share generator state; each derives its own
    /// substream from the seed and its index, so the result is
    /// deterministic for a fixed configuration (including the worker
    /// count — different worker counts select different substreams and
    /// may legitimately report different maxima).
    ///
    /// With `workers == 1` the partitioning degenerates to the sequential
    /// loop and produces its exact result.
    pub fn run_parallel(&self) -> u32 {
        let workers = self.config().workers;
        if workers == 1 {
            return self.run();
        }

        let rounds = self.config().rounds;
        let attempts = self.config().attempts_per_round;
        let seed = self.config().seed_state();

        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);

            for worker_index in 0..workers {
                handles.push(scope.spawn(move || {
                    let chunk = chunk_len(rounds, workers, worker_index);
                    let mut stream = worker_stream_state(seed, worker_index);
                    let mut local_max = 0u32;

                    for _ in 0..chunk {
                        let hits = evaluate_round(stream.derive(), attempts);
                        local_max = local_max.max(hits);
                    }

                    local_max
                }));
            }

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(local_max) => local_max,
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .fold(0, u32::max)
        })
    }
}

/// Size of worker `worker_index`'s contiguous chunk of the round range
///
/// Balanced partition: every chunk is `rounds / workers` rounded to within
/// one, and the chunk sizes sum to `rounds` exactly. Widened arithmetic
/// keeps the boundary products from overflowing for any `u64` round count.
fn chunk_len(rounds: u64, workers: usize, worker_index: usize) -> u64 {
    let workers = workers as u128;
    let index = worker_index as u128;
    let start = (rounds as u128 * index / workers) as u64;
    let end = (rounds as u128 * (index + 1) / workers) as u64;
    end - start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_zero_uses_seed_unmodified() {
        let seed = MwcState::new(0xC0DE15AF, !0xC0DE15AF);
        assert_eq!(worker_stream_state(seed, 0), seed);
    }

    #[test]
    fn test_worker_streams_are_reproducible_and_distinct() {
        let seed = MwcState::new(0xC0DE15AF, !0xC0DE15AF);

        let first = worker_stream_state(seed, 3);
        let second = worker_stream_state(seed, 3);
        assert_eq!(first, second);

        assert_ne!(worker_stream_state(seed, 1), worker_stream_state(seed, 2));
    }

    #[test]
    fn test_worker_stream_is_iterated_derivation() {
        let seed = MwcState::new(1, 2);
        let mut expected = seed;
        expected = expected.derive();
        expected = expected.derive();
        assert_eq!(worker_stream_state(seed, 2), expected);
    }

    #[test]
    fn test_chunks_cover_round_range_exactly() {
        for &(rounds, workers) in &[(10u64, 3usize), (1, 8), (1000, 7), (16, 16)] {
            let total: u64 = (0..workers).map(|w| chunk_len(rounds, workers, w)).sum();
            assert_eq!(total, rounds, "rounds={} workers={}", rounds, workers);
        }
    }

    #[test]
    fn test_chunks_are_balanced() {
        let rounds = 1003u64;
        let workers = 8usize;
        for w in 0..workers {
            let len = chunk_len(rounds, workers, w);
            assert!(
                len == rounds / workers as u64 || len == rounds / workers as u64 + 1,
                "chunk {} has unbalanced length {}",
                w,
                len
            );
        }
    }
}
