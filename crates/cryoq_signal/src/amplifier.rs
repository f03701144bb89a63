//! Cryogenic amplifier model
//!
//! HEMT-style amplifier stages: linear gain from the dB spec plus
//! Johnson-Nyquist noise set by the stage's noise temperature and
//! bandwidth.

use cryoq_core::constants::physics;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ============================================================================
// Temperature Stages
// ============================================================================

/// Standard dilution refrigerator stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureStage {
    /// 300 K
    RoomTemp,
    /// 0.8 K still plate
    Still,
    /// 0.1 K cold plate
    Cold,
    /// 15 mK mixing chamber (qubit stage)
    MixingChamber,
}

impl TemperatureStage {
    /// Physical temperature of the stage in Kelvin
    pub fn kelvin(&self) -> f64 {
        match self {
            TemperatureStage::RoomTemp => 300.0,
            TemperatureStage::Still => 0.8,
            TemperatureStage::Cold => 0.1,
            TemperatureStage::MixingChamber => physics::MIXING_CHAMBER_K,
        }
    }
}

impl fmt::Display for TemperatureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} K", self.kelvin())
    }
}

// ============================================================================
// Amplifier
// ============================================================================

/// Fixed specification of one amplifier stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplifierSpec {
    /// Gain in dB
    pub gain_db: f64,

    /// Equivalent noise temperature in Kelvin
    pub noise_temperature_k: f64,

    /// Passband as (lower, upper) cutoff in Hz
    pub bandwidth_hz: (f64, f64),

    /// 1 dB compression point in dBm
    pub compression_dbm: f64,

    /// Refrigerator stage the amplifier sits at
    pub stage: TemperatureStage,
}

impl AmplifierSpec {
    /// Linear voltage gain derived from the dB spec
    pub fn gain_linear(&self) -> f64 {
        10.0_f64.powf(self.gain_db / 20.0)
    }

    /// Passband width in Hz
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth_hz.1 - self.bandwidth_hz.0
    }

    /// Johnson-Nyquist noise standard deviation per quadrature
    pub fn noise_std(&self) -> f64 {
        (physics::BOLTZMANN_J_PER_K * self.noise_temperature_k * self.bandwidth()).sqrt()
    }
}

/// One cryogenic amplifier stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryoAmplifier {
    spec: AmplifierSpec,
}

impl CryoAmplifier {
    /// Create from a fixed specification
    pub fn new(spec: AmplifierSpec) -> Self {
        Self { spec }
    }

    /// The amplifier's specification
    pub fn spec(&self) -> &AmplifierSpec {
        &self.spec
    }

    /// Amplify a complex baseband signal and add thermal noise
    ///
    /// Gain first, then independent Gaussian noise per quadrature with
    /// standard deviation sqrt(k_B * T_noise * bandwidth).
    pub fn process(&self, input: &[Complex64], rng: &mut StdRng) -> Vec<Complex64> {
        let gain = self.spec.gain_linear();
        let sigma = self.spec.noise_std();

        debug!(
            gain_db = self.spec.gain_db,
            noise_temperature_k = self.spec.noise_temperature_k,
            sigma,
            samples = input.len(),
            "amplifier stage"
        );

        let Ok(noise) = Normal::new(0.0, sigma) else {
            // Degenerate noise spec behaves as an ideal amplifier
            return input.iter().map(|s| *s * gain).collect();
        };

        input
            .iter()
            .map(|s| *s * gain + Complex64::new(noise.sample(rng), noise.sample(rng)))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn spec_4k() -> AmplifierSpec {
        AmplifierSpec {
            gain_db: 35.0,
            noise_temperature_k: 2.0,
            bandwidth_hz: (4e9, 8e9),
            compression_dbm: 10.0,
            stage: TemperatureStage::Still,
        }
    }

    #[test]
    fn test_gain_linear() {
        let spec = spec_4k();
        // 35 dB voltage gain: 10^(35/20)
        assert!((spec.gain_linear() - 10.0_f64.powf(1.75)).abs() < 1e-9);
        assert_eq!(spec.bandwidth(), 4e9);
    }

    #[test]
    fn test_noise_std_scale() {
        let sigma = spec_4k().noise_std();
        // sqrt(1.38e-23 * 2 * 4e9) ~ 1e-7 V
        assert!(sigma > 0.0 && sigma < 1e-5, "sigma = {sigma}");
    }

    #[test]
    fn test_process_amplifies_mean_power() {
        let amp = CryoAmplifier::new(spec_4k());
        let mut rng = StdRng::seed_from_u64(3);
        let input = vec![Complex64::new(0.01, 0.0); 100];

        let output = amp.process(&input, &mut rng);
        assert_eq!(output.len(), input.len());

        let in_power: f64 = input.iter().map(|s| s.norm_sqr()).sum::<f64>() / 100.0;
        let out_power: f64 = output.iter().map(|s| s.norm_sqr()).sum::<f64>() / 100.0;
        let expected = in_power * spec_4k().gain_linear().powi(2);
        // Noise is orders of magnitude below the amplified tone
        assert!((out_power / expected - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_stage_temperatures_ordered() {
        assert!(TemperatureStage::RoomTemp.kelvin() > TemperatureStage::Still.kelvin());
        assert!(TemperatureStage::Still.kelvin() > TemperatureStage::Cold.kelvin());
        assert!(TemperatureStage::Cold.kelvin() > TemperatureStage::MixingChamber.kelvin());
    }
}
