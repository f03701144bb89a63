//! Entanglement metric
//!
//! A similarity-to-Bell-state proxy, not the general Wootters concurrence.
//! The 0.9 classification threshold downstream is calibrated against this
//! exact definition, so it must not be swapped for the textbook formula.

use crate::bell::canonical_bell;
use cryoq_core::constants::entanglement;
use cryoq_core::{CryoqError, CryoqResult};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Concurrence of a two-qubit state, in [0, 1]
///
/// Defined as the squared magnitude of the inner product with the canonical
/// Bell state (|00> + |11>)/sqrt(2). Fails with `InvalidStateDimension` for
/// anything other than 4 amplitudes.
pub fn concurrence(state: &[Complex64]) -> CryoqResult<f64> {
    if state.len() != 4 {
        return Err(CryoqError::InvalidStateDimension {
            expected: 4,
            actual: state.len(),
        });
    }

    let bell = canonical_bell();
    let overlap: Complex64 = state
        .iter()
        .zip(bell.iter())
        .map(|(a, b)| a.conj() * b)
        .sum();
    Ok(overlap.norm_sqr())
}

/// Classification of entanglement strength consumed by the boundary layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntanglementStrength {
    /// Concurrence above the maximal threshold
    Maximal,
    /// Everything else
    Partial,
}

impl EntanglementStrength {
    /// Classify a concurrence value
    pub fn classify(concurrence: f64) -> Self {
        if concurrence > entanglement::MAXIMAL_THRESHOLD {
            EntanglementStrength::Maximal
        } else {
            EntanglementStrength::Partial
        }
    }
}

impl fmt::Display for EntanglementStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntanglementStrength::Maximal => write!(f, "maximal"),
            EntanglementStrength::Partial => write!(f, "partial"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
