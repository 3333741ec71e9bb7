//! Runs the full hashing pipeline: angle generation, state preparation,
//! layered evolution, measurement sampling, and shot aggregation.
//!
//! This module contains the [`RqcHasher`] entry point and the internal gate
//! engine responsible for evolving the amplitude buffer.

pub(crate) mod engine;
mod results;

// Re-export the main public interface types
pub use results::{HashHistogram, HashResult};

use crate::angles::AngleSchedule;
use crate::core::{HashConfig, RqcError};
use crate::encoding;
use crate::sampling::{self, SampleSource};
use log::{debug, info};
use rayon::prelude::*;

/// The single entry point of the hashing pipeline.
///
/// Construction validates the configuration up front; [`RqcHasher::digest`]
/// then runs the configured number of independent trials and aggregates their
/// outcomes. Trials only need read-only access to the shared angle schedule
/// and message, so they run across a bounded worker pool with per-worker
/// local histograms merged once at the end.
#[derive(Debug, Clone)]
pub struct RqcHasher {
    config: HashConfig,
}

impl RqcHasher {
    /// Creates a hasher for the given configuration.
    ///
    /// Configuration and resource-ceiling errors are rejected here, before
    /// any amplitude buffer is allocated.
    pub fn new(config: HashConfig) -> Result<Self, RqcError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read-only access to the validated configuration.
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Hashes a message: runs `shots` prepare-evolve-measure trials and
    /// selects the dominant sampled outcome.
    ///
    /// The angle schedule and the prepared register are computed once and
    /// shared read-only. Each worker owns a private amplitude buffer; since
    /// evolution is a pure function of `(message, schedule)`, a worker
    /// evolves its buffer once and draws all of its trials from it, which is
    /// observationally identical to re-evolving per trial and keeps the hot
    /// path allocation-free. In deterministic test mode each trial's sampler
    /// is seeded from the global trial index, so the result is independent of
    /// how trials land on workers.
    pub fn digest(&self, message: &[u8]) -> Result<HashResult, RqcError> {
        let config = &self.config;
        let n = config.n_qubits;
        let shots = config.shots;

        let schedule = AngleSchedule::generate(config.seed, config.depth, n);
        let register = encoding::prepare(message, n)?;
        debug!(
            "prepared {}-qubit register {} from {}-byte message, depth {}, seed {}",
            n,
            register,
            message.len(),
            config.depth,
            config.seed
        );

        let source = match config.sampling_seed {
            Some(seed) => SampleSource::Seeded(seed),
            None => SampleSource::Stochastic,
        };

        let locals: Vec<results::HashHistogram> = trial_ranges(shots)
            .into_par_iter()
            .map(|(start, end)| -> Result<results::HashHistogram, RqcError> {
                let mut state = encoding::to_basis_state(&register);
                engine::evolve(&mut state, &schedule)?;

                let mut local = results::HashHistogram::new(n);
                for trial in start..end {
                    let mut rng = source.trial_rng(trial);
                    let outcome = sampling::sample(&state, &mut rng);
                    local.increment(outcome.to_index());
                }
                Ok(local)
            })
            .collect::<Result<Vec<_>, RqcError>>()?;

        let mut histogram = results::HashHistogram::new(n);
        for local in locals {
            histogram.merge(local);
        }

        let (hash, count) = histogram.mode().ok_or_else(|| RqcError::Simulation {
            message: "trial loop completed with an empty histogram".to_string(),
        })?;
        info!(
            "run complete: {} of {} shots on {} ({} distinct outcomes)",
            count,
            shots,
            hash,
            histogram.distinct()
        );

        Ok(HashResult::new(hash, count, shots, histogram))
    }
}

/// Splits `shots` into contiguous per-worker ranges, at most one per rayon
/// thread. Each range carries global trial indices so seeded sampling stays
/// scheduling-independent.
fn trial_ranges(shots: u64) -> Vec<(u64, u64)> {
    let workers = (rayon::current_num_threads() as u64).clamp(1, shots);
    let base = shots / workers;
    let remainder = shots % workers;

    let mut ranges = Vec::with_capacity(workers as usize);
    let mut start = 0;
    for w in 0..workers {
        let len = base + u64::from(w < remainder);
        ranges.push((start, start + len));
        start += len;
    }
    ranges
}
