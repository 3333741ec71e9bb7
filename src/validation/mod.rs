//! Numerical invariant checks on the amplitude state vector.

use crate::core::{RqcError, StateVector};

/// Allowed deviation of the squared norm from 1 (can be overridden by caller).
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to [`DEFAULT_NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(RqcError::NormViolation)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), RqcError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(RqcError::NormViolation {
            message: format!(
                "state vector normalization failed: Sum(|c_i|^2) = {} (deviation > {})",
                norm_sqr, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
