//! Surface code strategy
//!
//! Simplified distance-d surface code: tensor-product ancilla encoding,
//! stochastic stabilizer sampling, and a scalar fidelity-loss correction
//! model rather than a real Pauli-frame decoder.

use crate::code::StabilizerKind;
use cryoq_core::constants::qec;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of one stabilizer measurement (+1 or -1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilizerOutcome {
    /// Stabilizer index within its type
    pub index: usize,
    /// X- or Z-type
    pub kind: StabilizerKind,
    /// +1 for no error, -1 for an error indicator
    pub value: i8,
}

/// A stabilizer that flagged an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceDefect {
    /// Stabilizer index within its type
    pub index: usize,
    /// X- or Z-type
    pub kind: StabilizerKind,
}

/// Surface-code strategy with the given distance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceCode {
    distance: usize,
}

impl SurfaceCode {
    /// Create with the given code distance
    pub fn new(distance: usize) -> Self {
        Self { distance }
    }

    /// Code distance
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Maximum number of stabilizer violations one cycle can report
    pub fn max_defects(&self) -> usize {
        2 * (self.distance.saturating_sub(1))
    }

    /// Encode the logical state with a uniform ancilla superposition
    ///
    /// Tensor product of the logical amplitudes with 2^d uniformly weighted
    /// ancilla positions.
    pub fn encode(&self, logical: &[Complex64; 2]) -> Vec<Complex64> {
        let ancilla_dim = 1 << self.distance;
        let weight = 1.0 / (ancilla_dim as f64).sqrt();

        let mut encoded = Vec::with_capacity(2 * ancilla_dim);
        for amp in logical {
            for _ in 0..ancilla_dim {
                encoded.push(*amp * weight);
            }
        }
        debug!(distance = self.distance, dim = encoded.len(), "encoded logical qubit");
        encoded
    }

    /// Sample every X- and Z-type stabilizer
    ///
    /// d-1 stabilizers per type, each returning +1 with the syndrome
    /// fidelity (95 %) and -1 otherwise.
    pub fn measure_stabilizers(&self, rng: &mut StdRng) -> Vec<StabilizerOutcome> {
        let mut outcomes = Vec::with_capacity(self.max_defects());
        for index in 0..self.distance.saturating_sub(1) {
            for kind in [StabilizerKind::X, StabilizerKind::Z] {
                let value = if rng.gen::<f64>() < qec::SYNDROME_FIDELITY {
                    1
                } else {
                    -1
                };
                outcomes.push(StabilizerOutcome { index, kind, value });
            }
        }
        outcomes
    }

    /// Collect the index and type of every -1 stabilizer
    pub fn detect_errors(&self, outcomes: &[StabilizerOutcome]) -> Vec<SurfaceDefect> {
        outcomes
            .iter()
            .filter(|o| o.value == -1)
            .map(|o| SurfaceDefect {
                index: o.index,
                kind: o.kind,
            })
            .collect()
    }

    /// Approximate fidelity-loss correction
    ///
    /// Scales the state by 1 - 0.1 * defects. A statistical stand-in for a
    /// real Pauli-frame correction.
    pub fn correct(&self, state: &[Complex64], defects: &[SurfaceDefect]) -> Vec<Complex64> {
        if defects.is_empty() {
            return state.to_vec();
        }
        let strength = 1.0 - qec::CORRECTION_LOSS * defects.len() as f64;
        debug!(count = defects.len(), strength, "correcting surface defects");
        state.iter().map(|a| *a * strength).collect()
    }
}

impl Default for SurfaceCode {
    fn default() -> Self {
        Self::new(qec::DEFAULT_DISTANCE)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ground() -> [Complex64; 2] {
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
    }

    #[test]
    fn test_encode_dimensions_and_norm() {
        let code = SurfaceCode::new(3);
        let encoded = code.encode(&ground());
        assert_eq!(encoded.len(), 16); // 2 * 2^3

        let norm: f64 = encoded.iter().map(|a| a.norm_sqr()).sum();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_encode_uniform_over_ancilla() {
        let code = SurfaceCode::new(3);
        let encoded = code.encode(&ground());
        let weight = 1.0 / 8.0_f64.sqrt();
        for amp in &encoded[..8] {
            assert!((amp.re - weight).abs() < 1e-12);
        }
        for amp in &encoded[8..] {
            assert!(amp.norm_sqr() < 1e-24);
        }
    }

    #[test]
    fn test_stabilizer_count_and_defect_bound() {
        let code = SurfaceCode::new(3);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcomes = code.measure_stabilizers(&mut rng);
            // (d-1) X-type plus (d-1) Z-type
            assert_eq!(outcomes.len(), 4);

            let defects = code.detect_errors(&outcomes);
            assert!(defects.len() <= code.max_defects());
        }
    }

    #[test]
    fn test_detect_collects_minus_one_only() {
        let code = SurfaceCode::new(3);
        let outcomes = vec![
            StabilizerOutcome {
                index: 0,
                kind: StabilizerKind::X,
                value: 1,
            },
            StabilizerOutcome {
                index: 0,
                kind: StabilizerKind::Z,
                value: -1,
            },
            StabilizerOutcome {
                index: 1,
                kind: StabilizerKind::X,
                value: -1,
            },
        ];
        let defects = code.detect_errors(&outcomes);
        assert_eq!(defects.len(), 2);
        assert_eq!(defects[0].kind, StabilizerKind::Z);
        assert_eq!(defects[1].index, 1);
    }

    #[test]
    fn test_correct_scales_by_defect_count() {
        let code = SurfaceCode::new(3);
        let encoded = code.encode(&ground());
        let defects = vec![
            SurfaceDefect {
                index: 0,
                kind: StabilizerKind::X,
            },
            SurfaceDefect {
                index: 1,
                kind: StabilizerKind::Z,
            },
        ];

        let corrected = code.correct(&encoded, &defects);
        // 1 - 0.1 * 2 = 0.8
        assert!((corrected[0].re / encoded[0].re - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_correct_without_defects_is_identity() {
        let code = SurfaceCode::new(3);
        let encoded = code.encode(&ground());
        assert_eq!(code.correct(&encoded, &[]), encoded);
    }
}
