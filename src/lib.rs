// src/lib.rs

//! `rqc-hash` - a proof-of-concept hash sampled from a random quantum circuit
//!
//! The "hash" of a message is the most frequent measurement outcome observed
//! when the message, encoded as a basis state, is evolved through a seeded
//! random circuit of RZ/RX rotation layers and CNOT entangling sublayers and
//! then measured repeatedly. Two random sources are kept deliberately
//! separate: a deterministic seeded stream for the rotation angles, and a
//! trial-scoped stochastic source for measurement (seedable for tests).
//!
//! This is a reproducible computational pipeline, not a cryptographic hash;
//! no preimage- or collision-resistance property is claimed.

pub mod angles;
pub mod core;
pub mod encoding;
pub mod sampling;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use angles::AngleSchedule;
pub use core::{BitRegister, DEFAULT_MAX_QUBITS, HashConfig, RqcError, StateVector};
pub use sampling::{SampleSource, sample};
pub use simulation::{HashHistogram, HashResult, RqcHasher};
pub use validation::check_normalization;

// Example 1: Degenerate depth-0 run
// With no rotation or entangling layers the circuit is the identity, so every
// trial reproduces the prepared register and the hash is the message encoding
// itself.
/// ```
/// use rqc_hash::{HashConfig, RqcHasher};
///
/// // 'h' = 0x68, encoded LSB-first into 8 qubits.
/// let config = HashConfig::new(8, 0, 42, 64).with_sampling_seed(1);
/// let hasher = RqcHasher::new(config).unwrap();
/// let result = hasher.digest(b"h").unwrap();
///
/// assert_eq!(result.hash().to_index(), 0x68);
/// assert_eq!(result.count(), 64); // every shot lands on the same outcome
/// assert_eq!(result.hash_hex(), "68");
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Reproducible non-trivial run
// With a fixed circuit seed and a fixed sampling seed, two runs agree on the
// full result, histogram included.
/// ```
/// use rqc_hash::{HashConfig, RqcHasher};
///
/// let config = HashConfig::new(6, 4, 12345, 256).with_sampling_seed(99);
/// let hasher = RqcHasher::new(config).unwrap();
///
/// let first = hasher.digest(b"hello").unwrap();
/// let second = hasher.digest(b"hello").unwrap();
/// assert_eq!(first, second);
/// assert_eq!(first.histogram().total(), 256);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
