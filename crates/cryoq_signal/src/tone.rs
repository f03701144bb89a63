//! Readout tone synthesis
//!
//! Ideal complex baseband tone at the qubit's readout frequency, sampled at
//! the stack's fixed 10 GS/s rate. This is the chain input for a readout.

use cryoq_core::constants::physics;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Synthesize an ideal readout tone
///
/// `amplitude * exp(i * 2*pi * f * t)` over `duration_ns` nanoseconds.
pub fn readout_tone(frequency_ghz: f64, amplitude: f64, duration_ns: f64) -> Vec<Complex64> {
    let n = physics::sample_count(duration_ns);
    if n < 2 {
        return vec![Complex64::new(amplitude, 0.0); n];
    }

    let step = duration_ns / (n - 1) as f64;
    (0..n)
        .map(|k| {
            let t_ns = k as f64 * step;
            let phase = 2.0 * PI * frequency_ghz * t_ns;
            Complex64::from_polar(amplitude, phase)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
