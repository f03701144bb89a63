//! Constants for cryoq
//!
//! Physical constants, control-stack design constants, and readout/QEC
//! parameters. Model constants are deliberately simplified analytic values,
//! not hardware-calibrated numbers.

// ============================================================================
// Physics Constants
// ============================================================================

pub mod physics {
    //! Physical constants and sampling parameters

    /// Boltzmann constant (J/K), used for Johnson-Nyquist noise power
    pub const BOLTZMANN_J_PER_K: f64 = 1.380649e-23;

    /// Waveform sample rate in gigasamples per second
    pub const SAMPLE_RATE_GSPS: f64 = 10.0;

    /// Mixing-chamber base temperature in Kelvin (typical fridge floor)
    pub const MIXING_CHAMBER_K: f64 = 0.015;

    /// Number of samples for a waveform of the given duration
    #[inline]
    pub fn sample_count(duration_ns: f64) -> usize {
        (duration_ns * SAMPLE_RATE_GSPS) as usize
    }
}

// ============================================================================
// Gate Constants
// ============================================================================

pub mod gates {
    //! Two-qubit gate defaults and the infidelity noise model constant

    /// Standard deviation of the per-entry Gaussian matrix perturbation
    /// applied when a fidelity trial fails. Design constant, not
    /// physically derived.
    pub const NOISE_STD: f64 = 0.01;

    /// Default two-qubit gate duration in nanoseconds
    pub const DEFAULT_DURATION_NS: f64 = 60.0;

    /// Default two-qubit gate fidelity
    pub const DEFAULT_FIDELITY: f64 = 0.98;

    /// Default qubit-qubit coupling strength in MHz
    pub const DEFAULT_COUPLING_MHZ: f64 = 5.0;
}

// ============================================================================
// Readout Constants
// ============================================================================

pub mod readout {
    //! Readout chain parameters

    /// Symmetric readout fidelity for the measurement blend
    pub const FIDELITY: f64 = 0.95;

    /// Default number of measurement shots
    pub const DEFAULT_SHOTS: u64 = 1000;

    /// Readout tone duration in nanoseconds
    pub const TONE_DURATION_NS: f64 = 100.0;
}

// ============================================================================
// QEC Constants
// ============================================================================

pub mod qec {
    //! Error-correction model parameters

    /// Base physical error rate, input to the logical-error-rate formulas
    pub const BASE_ERROR_RATE: f64 = 0.01;

    /// Probability that a syndrome sample reports the true value
    pub const SYNDROME_FIDELITY: f64 = 0.95;

    /// Fidelity loss per detected error in the surface-code correction
    pub const CORRECTION_LOSS: f64 = 0.1;

    /// Default repetition-code redundancy
    pub const DEFAULT_REPETITIONS: usize = 3;

    /// Default surface-code distance
    pub const DEFAULT_DISTANCE: usize = 3;
}

// ============================================================================
// Entanglement Constants
// ============================================================================

pub mod entanglement {
    //! Entanglement classification thresholds

    /// Concurrence above this value classifies as maximal entanglement
    pub const MAXIMAL_THRESHOLD: f64 = 0.9;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        // 100 ns at 10 GS/s -> 1000 samples
        assert_eq!(physics::sample_count(100.0), 1000);
        assert_eq!(physics::sample_count(0.0), 0);
    }

    #[test]
    fn test_probability_constants_in_range() {
        assert!(readout::FIDELITY > 0.5 && readout::FIDELITY <= 1.0);
        assert!(qec::SYNDROME_FIDELITY > 0.5 && qec::SYNDROME_FIDELITY <= 1.0);
        assert!(qec::BASE_ERROR_RATE > 0.0 && qec::BASE_ERROR_RATE < 1.0);
    }
}
