//! Measurement: collapsing a state vector into one classical outcome.
//!
//! Sampling is the stochastic half of the pipeline's randomness and is kept
//! strictly separate from the deterministic angle stream: production runs
//! draw from a thread-local source that varies shot to shot, while test mode
//! seeds an independent generator per trial so fixtures reproduce exactly
//! regardless of how trials are scheduled across workers.

use crate::core::{BitRegister, StateVector};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// Where measurement randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSource {
    /// Production mode: an OS-seeded thread-local generator.
    Stochastic,
    /// Deterministic test mode: trial `t` draws from a generator seeded by
    /// the base value mixed with `t`, independent of worker scheduling.
    Seeded(u64),
}

impl SampleSource {
    /// Builds the random source for one trial, identified by its global index.
    pub(crate) fn trial_rng(&self, trial: u64) -> TrialRng {
        match self {
            SampleSource::Stochastic => TrialRng::Stochastic(rand::rng()),
            SampleSource::Seeded(base) => {
                // Distinct odd-constant multiply keeps per-trial seeds unique;
                // StdRng's seeding spreads them into full generator state.
                let seed = base.wrapping_add(trial.wrapping_mul(0x9E37_79B9_7F4A_7C15));
                TrialRng::Seeded(StdRng::seed_from_u64(seed))
            }
        }
    }
}

/// A trial-scoped random source, either stochastic or seeded.
pub(crate) enum TrialRng {
    Stochastic(ThreadRng),
    Seeded(StdRng),
}

impl RngCore for TrialRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            TrialRng::Stochastic(rng) => rng.next_u32(),
            TrialRng::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            TrialRng::Stochastic(rng) => rng.next_u64(),
            TrialRng::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            TrialRng::Stochastic(rng) => rng.fill_bytes(dest),
            TrialRng::Seeded(rng) => rng.fill_bytes(dest),
        }
    }
}

/// Draws one classical outcome from the state's measurement distribution.
///
/// Basis-index probabilities are the squared amplitude magnitudes. The draw
/// is taken over the actual probability mass, which renormalizes any drift
/// from 1 at sampling time (drift beyond the norm tolerance during evolution
/// is already a fatal error upstream). The chosen index is decomposed into a
/// register LSB-first, matching state preparation.
pub fn sample<R: Rng>(state: &StateVector, rng: &mut R) -> BitRegister {
    let amps = state.amplitudes();
    let total: f64 = amps.iter().map(|c| c.norm_sqr()).sum();

    // Sampling against the cumulative mass in [0, total) is the documented
    // renormalization step: each outcome's weight is |c_k|^2 / total.
    let target = rng.random::<f64>() * total;

    let mut cumulative = 0.0;
    let mut chosen = None;
    let mut last_nonzero = 0usize;
    for (k, amp) in amps.iter().enumerate() {
        let p = amp.norm_sqr();
        if p > 0.0 {
            last_nonzero = k;
        }
        cumulative += p;
        if target < cumulative {
            chosen = Some(k);
            break;
        }
    }
    // Floating-point edge: target can land exactly on the accumulated total.
    let index = chosen.unwrap_or(last_nonzero);

    BitRegister::from_index(index, state.n_qubits())
}
