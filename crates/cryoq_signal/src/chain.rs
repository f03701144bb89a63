//! Ordered cryogenic signal chain
//!
//! A strict sequence of labeled amplifier stages; the output of each stage
//! is the exact input of the next. SNR improvement is defined over the
//! chain's own input and final output, never intermediate stages.

use crate::amplifier::{AmplifierSpec, CryoAmplifier, TemperatureStage};
use num_complex::Complex64;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mean output power of one stage, labeled for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePower {
    /// Stage label (e.g. "4K", "MXC")
    pub label: String,
    /// Mean |signal|^2 at the stage output
    pub power: f64,
}

/// Result of pushing a signal through the whole chain
#[derive(Debug, Clone, PartialEq)]
pub struct ChainRun {
    /// Final signal out of the last stage
    pub output: Vec<Complex64>,
    /// Mean output power per stage, in chain order
    pub stage_powers: Vec<StagePower>,
}

/// One labeled position in the chain
#[derive(Debug, Clone)]
struct ChainStage {
    label: String,
    amplifier: CryoAmplifier,
}

/// Ordered amplifier chain
#[derive(Debug, Clone)]
pub struct SignalChain {
    stages: Vec<ChainStage>,
}

impl SignalChain {
    /// Empty chain
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Standard two-stage readout chain: a 4 K HEMT feeding the
    /// mixing-chamber stage.
    pub fn standard() -> Self {
        Self::new()
            .with_stage(
                "4K",
                AmplifierSpec {
                    gain_db: 35.0,
                    noise_temperature_k: 2.0,
                    bandwidth_hz: (4e9, 8e9),
                    compression_dbm: 10.0,
                    stage: TemperatureStage::Still,
                },
            )
            .with_stage(
                "MXC",
                AmplifierSpec {
                    gain_db: 25.0,
                    noise_temperature_k: 5.0,
                    bandwidth_hz: (4e9, 8e9),
                    compression_dbm: 5.0,
                    stage: TemperatureStage::MixingChamber,
                },
            )
    }

    /// Append a labeled stage at the end of the chain
    pub fn with_stage(mut self, label: &str, spec: AmplifierSpec) -> Self {
        self.stages.push(ChainStage {
            label: label.to_string(),
            amplifier: CryoAmplifier::new(spec),
        });
        self
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage labels in chain order
    pub fn labels(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.label.as_str()).collect()
    }

    /// Run the input through every stage in order
    pub fn run(&self, input: &[Complex64], rng: &mut StdRng) -> ChainRun {
        let mut signal = input.to_vec();
        let mut stage_powers = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            signal = stage.amplifier.process(&signal, rng);
            let power = mean_power(&signal);
            debug!(stage = %stage.label, power, "chain stage output");
            stage_powers.push(StagePower {
                label: stage.label.clone(),
                power,
            });
        }

        ChainRun {
            output: signal,
            stage_powers,
        }
    }
}

impl Default for SignalChain {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Signal Statistics
// ============================================================================

/// Mean |x|^2 over the signal
pub fn mean_power(signal: &[Complex64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|s| s.norm_sqr()).sum::<f64>() / signal.len() as f64
}

/// Variance around the complex mean, mean |x - mean|^2
pub fn variance(signal: &[Complex64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let mean: Complex64 = signal.iter().sum::<Complex64>() / signal.len() as f64;
    signal.iter().map(|s| (s - mean).norm_sqr()).sum::<f64>() / signal.len() as f64
}

/// Mean-power-over-variance SNR of one signal
///
/// Zero-variance signals are an expected idealized edge case and map to an
/// infinity sentinel rather than an error.
pub fn snr(signal: &[Complex64]) -> f64 {
    let var = variance(signal);
    if var <= 0.0 {
        f64::INFINITY
    } else {
        mean_power(signal) / var
    }
}

/// SNR improvement from chain input to final chain output
///
/// Degenerate cases keep the sentinel contract: both signals degenerate
/// gives 1.0 (nothing changed), a degenerate input alone gives 0.0.
pub fn snr_improvement(input: &[Complex64], output: &[Complex64]) -> f64 {
    let input_snr = snr(input);
    let output_snr = snr(output);

    if input_snr.is_infinite() && output_snr.is_infinite() {
        1.0
    } else if input_snr.is_infinite() {
        0.0
    } else {
        output_snr / input_snr
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::readout_tone;
    use rand::SeedableRng;

    #[test]
    fn test_standard_chain_order() {
        let chain = SignalChain::standard();
        assert_eq!(chain.labels(), vec!["4K", "MXC"]);
    }

    #[test]
    fn test_run_reports_power_per_stage() {
        let chain = SignalChain::standard();
        let mut rng = StdRng::seed_from_u64(11);
        let tone = readout_tone(6.5, 0.01, 100.0);

        let run = chain.run(&tone, &mut rng);
        assert_eq!(run.stage_powers.len(), 2);
        assert_eq!(run.output.len(), tone.len());

        // Each stage adds gain, so power grows monotonically
        let input_power = mean_power(&tone);
        assert!(run.stage_powers[0].power > input_power);
        assert!(run.stage_powers[1].power > run.stage_powers[0].power);
    }

    #[test]
    fn test_snr_improvement_positive_for_tone() {
        let chain = SignalChain::standard();
        let mut rng = StdRng::seed_from_u64(5);
        let tone = readout_tone(6.5, 0.01, 100.0);

        let run = chain.run(&tone, &mut rng);
        let improvement = snr_improvement(&tone, &run.output);
        assert!(improvement > 0.0, "improvement = {improvement}");
        assert!(improvement.is_finite());
    }

    #[test]
    fn test_zero_variance_sentinel() {
        let constant = vec![Complex64::new(0.01, 0.0); 64];
        assert!(snr(&constant).is_infinite());

        // Degenerate on both sides: no change
        assert_eq!(snr_improvement(&constant, &constant), 1.0);

        // Degenerate input, noisy output: sentinel zero, no panic
        let tone = readout_tone(6.5, 0.01, 100.0);
        assert_eq!(snr_improvement(&constant, &tone), 0.0);
    }

    #[test]
    fn test_empty_chain_passthrough() {
        let chain = SignalChain::new();
        let mut rng = StdRng::seed_from_u64(1);
        let tone = readout_tone(6.5, 0.01, 10.0);

        let run = chain.run(&tone, &mut rng);
        assert_eq!(run.output, tone);
        assert!(run.stage_powers.is_empty());
    }

    #[test]
    fn test_variance_of_tone_nonzero() {
        let tone = readout_tone(6.5, 0.01, 100.0);
        assert!(variance(&tone) > 0.0);
    }
}
