//! Shot-based dispersive readout
//!
//! Models readout error as a symmetric fidelity blend: a qubit that is
//! truly excited reads |1> with probability `fidelity`, and a qubit in the
//! ground state reads |1> with probability `1 - fidelity`. Each shot is an
//! independent Bernoulli draw against the blended probability.

use cryoq_core::{readout, MeasurementResult};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

/// Readout simulator with a fixed assignment fidelity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadoutSimulator {
    fidelity: f64,
}

impl Default for ReadoutSimulator {
    fn default() -> Self {
        Self::new(readout::FIDELITY)
    }
}

impl ReadoutSimulator {
    /// Create a simulator with the given assignment fidelity
    pub fn new(fidelity: f64) -> Self {
        Self { fidelity }
    }

    /// Assignment fidelity
    pub fn fidelity(&self) -> f64 {
        self.fidelity
    }

    /// Observed excitation probability after the fidelity blend
    pub fn observed_p1(&self, true_p1: f64) -> f64 {
        true_p1 * self.fidelity + (1.0 - true_p1) * (1.0 - self.fidelity)
    }

    /// Sample `shots` single-shot outcomes for a qubit with excitation
    /// probability `true_p1`
    ///
    /// The returned counts always satisfy `zeros + ones == shots`,
    /// including `shots == 0`.
    pub fn measure(&self, true_p1: f64, shots: u64, rng: &mut StdRng) -> MeasurementResult {
        let p1 = self.observed_p1(true_p1);

        let mut ones = 0u64;
        for _ in 0..shots {
            if rng.gen::<f64>() < p1 {
                ones += 1;
            }
        }

        debug!(shots, true_p1, observed_p1 = p1, ones, "readout complete");

        MeasurementResult {
            zeros: shots - ones,
            ones,
            readout_fidelity: self.fidelity,
            true_probability: true_p1,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
