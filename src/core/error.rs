//! Error handling logic

use std::fmt;

/// Error types for the hashing pipeline.
///
/// Every failure mode is classified up front: configuration and resource
/// problems are rejected before any state vector is allocated, while a
/// [`RqcError::NormViolation`] signals an arithmetic defect inside gate
/// application and is always fatal.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum RqcError {
    /// A run parameter is invalid (`n_qubits == 0`, `shots == 0`).
    /// Rejected before any simulation begins, never retried.
    InvalidConfiguration {
        /// InvalidConfiguration failure message
        message: String,
    },

    /// The requested qubit count exceeds the configured ceiling.
    /// The state vector holds `2^n` complex amplitudes, so `n` is gated
    /// before allocation rather than attempted and aborted midway.
    ResourceLimit {
        /// ResourceLimit failure message
        message: String,
    },

    /// The state vector's squared-magnitude norm drifted beyond tolerance
    /// during evolution. Gate application must preserve the norm as an
    /// invariant of its arithmetic; a violation is an internal defect.
    NormViolation {
        /// NormViolation failure message
        message: String,
    },

    /// General error encountered during the simulation process itself.
    Simulation {
        /// Simulation failure message
        message: String,
    },
}

impl fmt::Display for RqcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RqcError::InvalidConfiguration { message } => {
                write!(f, "Invalid Configuration: {}", message)
            }
            RqcError::ResourceLimit { message } => write!(f, "Resource Limit: {}", message),
            RqcError::NormViolation { message } => write!(f, "Norm Violation: {}", message),
            RqcError::Simulation { message } => write!(f, "Simulation Process Error: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for RqcError {}
