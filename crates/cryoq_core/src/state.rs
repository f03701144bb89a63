//! Qubit state representation
//!
//! A two-level complex amplitude vector with a unit-norm invariant. Gate
//! noise injection may transiently violate the norm by a bounded amount;
//! callers treat that as simulated infidelity, not corruption.

use crate::error::{CryoqError, CryoqResult};
use crate::types::{to_wire, Amplitude};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-level quantum state
///
/// Owned exclusively by the qubit handle that holds it; mutated in place by
/// the gate engine. No aliasing across qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    amps: [Complex64; 2],
}

impl QubitState {
    /// Create a state in |0>
    pub fn new() -> Self {
        Self {
            amps: [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        }
    }

    /// The |1> basis state
    pub fn excited() -> Self {
        Self {
            amps: [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        }
    }

    /// Create from raw amplitudes, normalizing to unit norm
    pub fn from_amplitudes(a0: Complex64, a1: Complex64) -> CryoqResult<Self> {
        let norm = (a0.norm_sqr() + a1.norm_sqr()).sqrt();
        if norm == 0.0 {
            return Err(CryoqError::ZeroNormState);
        }
        Ok(Self {
            amps: [a0 / norm, a1 / norm],
        })
    }

    /// Current amplitudes
    pub fn amplitudes(&self) -> &[Complex64; 2] {
        &self.amps
    }

    /// Replace the stored amplitudes (gate-engine side effect)
    pub fn set_amplitudes(&mut self, amps: [Complex64; 2]) {
        self.amps = amps;
    }

    /// Probability of measuring |0>
    pub fn p0(&self) -> f64 {
        self.amps[0].norm_sqr()
    }

    /// Probability of measuring |1>
    pub fn p1(&self) -> f64 {
        self.amps[1].norm_sqr()
    }

    /// Both basis probabilities as (p0, p1)
    pub fn probabilities(&self) -> (f64, f64) {
        (self.p0(), self.p1())
    }

    /// Sum of squared magnitudes (1.0 for a normalized state)
    pub fn norm_sqr(&self) -> f64 {
        self.amps[0].norm_sqr() + self.amps[1].norm_sqr()
    }

    /// Check the unit-norm invariant within a tolerance
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Wire representation of the amplitudes
    pub fn to_wire(&self) -> Vec<Amplitude> {
        to_wire(&self.amps)
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QubitState(p0={:.4}, p1={:.4})", self.p0(), self.p1())
    }
}

// ============================================================================
// Tests
// ============================================================================
