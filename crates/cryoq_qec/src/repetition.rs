//! Bit-flip repetition code
//!
//! Basis-state replication over r physical positions, majority-vote error
//! detection, and a deliberately report-only correction step.

use cryoq_core::constants::qec;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

/// Repetition-code strategy with redundancy `r`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepetitionCode {
    repetitions: usize,
}

impl RepetitionCode {
    /// Create with the given redundancy
    pub fn new(repetitions: usize) -> Self {
        Self { repetitions }
    }

    /// Redundancy of the code
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Encode a logical state by basis-state replication
    ///
    /// Not a true superposition encoding: if the logical amplitudes favor
    /// |0> the result is all-zero-except-first over 2^r positions, if they
    /// favor |1> the encoding mirrors to all-zero-except-last. Preserved
    /// simplification of the model.
    pub fn encode(&self, logical: &[Complex64; 2]) -> Vec<Complex64> {
        let dim = 1 << self.repetitions;
        let mut encoded = vec![Complex64::new(0.0, 0.0); dim];
        if logical[0].norm_sqr() >= logical[1].norm_sqr() {
            encoded[0] = Complex64::new(1.0, 0.0);
        } else {
            encoded[dim - 1] = Complex64::new(1.0, 0.0);
        }
        debug!(repetitions = self.repetitions, dim, "encoded logical qubit");
        encoded
    }

    /// The bit value the encoding represents
    pub fn encoded_bit(&self, encoded: &[Complex64]) -> u8 {
        if encoded
            .first()
            .map(|a| a.norm_sqr() > 0.0)
            .unwrap_or(false)
        {
            0
        } else {
            1
        }
    }

    /// Sample each of the r physical positions
    ///
    /// Each sample reports the true encoded bit with the syndrome fidelity
    /// (95 %) and the flipped value otherwise.
    pub fn measure_syndrome(&self, encoded: &[Complex64], rng: &mut StdRng) -> Vec<u8> {
        let true_bit = self.encoded_bit(encoded);
        (0..self.repetitions)
            .map(|_| {
                if rng.gen::<f64>() < qec::SYNDROME_FIDELITY {
                    true_bit
                } else {
                    true_bit ^ 1
                }
            })
            .collect()
    }

    /// Majority-vote detection: positions disagreeing with the majority
    pub fn detect_errors(&self, syndrome: &[u8]) -> Vec<usize> {
        let ones: usize = syndrome.iter().map(|&b| b as usize).sum();
        let majority: u8 = if 2 * ones > syndrome.len() { 1 } else { 0 };

        syndrome
            .iter()
            .enumerate()
            .filter(|(_, &bit)| bit != majority)
            .map(|(i, _)| i)
            .collect()
    }

    /// Report-only correction
    ///
    /// Intentionally leaves the state vector untouched: the logical-error-
    /// rate formula is calibrated against this no-op behavior, so flipping
    /// bits here would silently change downstream semantics.
    pub fn correct(&self, state: &[Complex64], errors: &[usize]) -> Vec<Complex64> {
        if !errors.is_empty() {
            debug!(count = errors.len(), "bit-flip errors detected (report-only correction)");
        }
        state.to_vec()
    }
}

impl Default for RepetitionCode {
    fn default() -> Self {
        Self::new(qec::DEFAULT_REPETITIONS)
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

    fn excited() -> [Complex64; 2] {
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
    }

    #[test]
    fn test_encode_ground_state() {
        let code = RepetitionCode::default();
        let encoded = code.encode(&ground());
        assert_eq!(encoded.len(), 8);
        assert_eq!(encoded[0], Complex64::new(1.0, 0.0));
        assert!(encoded[1..].iter().all(|a| a.norm_sqr() == 0.0));
        assert_eq!(code.encoded_bit(&encoded), 0);
    }

    #[test]
    fn test_encode_excited_state_mirrors() {
        let code = RepetitionCode::default();
        let encoded = code.encode(&excited());
        assert_eq!(encoded[7], Complex64::new(1.0, 0.0));
        assert!(encoded[..7].iter().all(|a| a.norm_sqr() == 0.0));
        assert_eq!(code.encoded_bit(&encoded), 1);
    }

    #[test]
    fn test_majority_vote_finds_minority_positions() {
        let code = RepetitionCode::new(3);
        // Known minority pattern: position 1 disagrees
        assert_eq!(code.detect_errors(&[0, 1, 0]), vec![1]);
        assert_eq!(code.detect_errors(&[1, 0, 1]), vec![1]);
        assert_eq!(code.detect_errors(&[0, 0, 0]), Vec::<usize>::new());
    }

    #[test]
    fn test_majority_vote_wider_code() {
        let code = RepetitionCode::new(5);
        assert_eq!(code.detect_errors(&[1, 1, 0, 1, 0]), vec![2, 4]);
    }

    #[test]
    fn test_syndrome_length_and_error_bound() {
        let code = RepetitionCode::new(3);
        let encoded = code.encode(&ground());
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let syndrome = code.measure_syndrome(&encoded, &mut rng);
            assert_eq!(syndrome.len(), 3);

            let errors = code.detect_errors(&syndrome);
            assert!(errors.len() <= 3);
        }
    }

    #[test]
    fn test_correct_is_noop_on_state() {
        let code = RepetitionCode::new(3);
        let encoded = code.encode(&ground());
        let corrected = code.correct(&encoded, &[0, 2]);
        assert_eq!(corrected, encoded);
    }
}
