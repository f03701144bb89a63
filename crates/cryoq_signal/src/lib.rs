//! # cryoq Signal
//!
//! Cryogenic readout signal chain for the cryoq control stack: HEMT-style
//! amplifier stages with Johnson-Nyquist noise, the ordered stage chain
//! with per-stage power reporting, SNR statistics, and readout tone
//! synthesis.
//!
//! ## Quick Start
//!
//! ```rust
//! use cryoq_signal::{readout_tone, snr_improvement, SignalChain};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let chain = SignalChain::standard();
//! let tone = readout_tone(6.5, 0.01, 100.0);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let run = chain.run(&tone, &mut rng);
//! assert!(snr_improvement(&tone, &run.output) > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Amplifier stage model
pub mod amplifier;

/// Ordered stage chain and SNR statistics
pub mod chain;

/// Readout tone synthesis
pub mod tone;

pub use amplifier::{AmplifierSpec, CryoAmplifier, TemperatureStage};
pub use chain::{mean_power, snr, snr_improvement, variance, ChainRun, SignalChain, StagePower};
pub use tone::readout_tone;
