//! Core data structures and types

// Declare modules within core
pub mod config;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `rqc_hash::core::TypeName`
pub use config::{DEFAULT_MAX_QUBITS, HashConfig};
pub use error::RqcError;
pub use state::{BitRegister, StateVector};
