//! Run configuration and up-front validation.

use super::error::RqcError;

/// Default ceiling on the simulated qubit count.
///
/// The amplitude buffer holds `2^n` `Complex<f64>` values (16 bytes each), so
/// 24 qubits caps a single trial's state at 256 MiB. Anything larger must be
/// requested explicitly via [`HashConfig::max_qubits`].
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// Fixed inputs for one hashing run.
///
/// The message itself is passed separately to [`crate::RqcHasher::digest`];
/// everything here is circuit geometry and randomness control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashConfig {
    /// Number of simulated qubits (`n`). State size is `2^n` amplitudes.
    pub n_qubits: usize,
    /// Number of rotation + entangling layers. `depth = 0` is the identity
    /// circuit: every trial reproduces the prepared register exactly.
    pub depth: usize,
    /// Seed for the deterministic angle generator.
    pub seed: u64,
    /// Number of independent prepare-evolve-measure trials.
    pub shots: u64,
    /// Resource ceiling on `n_qubits`, checked before any allocation.
    pub max_qubits: usize,
    /// When set, measurement sampling becomes deterministic: trial `t` draws
    /// from a generator seeded by this value mixed with `t`. Production runs
    /// leave this `None` and sample from a thread-local stochastic source.
    pub sampling_seed: Option<u64>,
}

impl HashConfig {
    /// Creates a configuration with the default resource ceiling and
    /// stochastic (production) sampling.
    pub fn new(n_qubits: usize, depth: usize, seed: u64, shots: u64) -> Self {
        Self {
            n_qubits,
            depth,
            seed,
            shots,
            max_qubits: DEFAULT_MAX_QUBITS,
            sampling_seed: None,
        }
    }

    /// Switches measurement sampling into deterministic test mode.
    pub fn with_sampling_seed(mut self, seed: u64) -> Self {
        self.sampling_seed = Some(seed);
        self
    }

    /// Overrides the qubit ceiling.
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Validates the configuration before any simulation work begins.
    ///
    /// Configuration errors and resource-ceiling violations are fatal and
    /// reported here, never attempted and aborted midway.
    pub fn validate(&self) -> Result<(), RqcError> {
        if self.n_qubits == 0 {
            return Err(RqcError::InvalidConfiguration {
                message: "n_qubits must be positive".to_string(),
            });
        }
        if self.shots == 0 {
            return Err(RqcError::InvalidConfiguration {
                message: "shots must be positive".to_string(),
            });
        }
        if self.n_qubits > self.max_qubits {
            return Err(RqcError::ResourceLimit {
                message: format!(
                    "n_qubits = {} exceeds ceiling of {} (state vector would hold 2^{} amplitudes)",
                    self.n_qubits, self.max_qubits, self.n_qubits
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = HashConfig::new(8, 6, 42, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_qubits_rejected() {
        let config = HashConfig::new(0, 6, 42, 1024);
        assert!(matches!(
            config.validate(),
            Err(RqcError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_zero_shots_rejected() {
        let config = HashConfig::new(8, 6, 42, 0);
        assert!(matches!(
            config.validate(),
            Err(RqcError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_ceiling_enforced_before_allocation() {
        let config = HashConfig::new(30, 6, 42, 1024);
        assert!(matches!(
            config.validate(),
            Err(RqcError::ResourceLimit { .. })
        ));

        // Raising the ceiling explicitly makes the same geometry acceptable.
        let raised = HashConfig::new(30, 6, 42, 1024).with_max_qubits(30);
        assert!(raised.validate().is_ok());
    }

    #[test]
    fn test_depth_zero_is_valid() {
        let config = HashConfig::new(4, 0, 7, 16);
        assert!(config.validate().is_ok());
    }
}
