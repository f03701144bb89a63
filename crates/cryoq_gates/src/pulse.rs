//! Control pulse synthesis
//!
//! IQ waveforms for the drive lines: DRAG for single-qubit pi pulses and
//! cross-resonance for the CNOT family. Pure functions; the waveforms are
//! reported to the caller, never fed back into the statevector model.

use cryoq_core::constants::physics;
use cryoq_core::TwoQubitGateSpec;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default DRAG derivative-correction parameter
pub const DRAG_BETA: f64 = 0.5;

/// Default DRAG Gaussian width parameter (fraction of duration)
pub const DRAG_SIGMA: f64 = 0.25;

/// Single-qubit pi-pulse amplitude
pub const PI_PULSE_AMPLITUDE: f64 = 0.1;

/// Cross-resonance drive amplitude
pub const CR_AMPLITUDE: f64 = 0.05;

/// I/Q component pair for an IQ mixer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IqWaveform {
    /// In-phase component
    pub i: Vec<f64>,
    /// Quadrature component
    pub q: Vec<f64>,
}

impl IqWaveform {
    /// Number of samples (same for both components)
    pub fn len(&self) -> usize {
        self.i.len()
    }

    /// Whether the waveform holds no samples
    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }

    /// Peak in-phase amplitude
    pub fn peak(&self) -> f64 {
        self.i.iter().fold(0.0_f64, |m, &x| m.max(x.abs()))
    }
}

/// Time axis for a waveform: `sample_count(duration)` points spanning
/// [0, duration] inclusive.
fn time_axis(duration_ns: f64) -> Vec<f64> {
    let n = physics::sample_count(duration_ns);
    if n < 2 {
        return vec![0.0; n];
    }
    let step = duration_ns / (n - 1) as f64;
    (0..n).map(|k| k as f64 * step).collect()
}

/// DRAG pulse: Gaussian envelope with a derivative quadrature correction
pub fn drag_pulse(duration_ns: f64, amplitude: f64, beta: f64, sigma: f64) -> IqWaveform {
    let center = duration_ns / 2.0;
    let width = sigma * duration_ns;

    let t = time_axis(duration_ns);
    let mut i = Vec::with_capacity(t.len());
    let mut q = Vec::with_capacity(t.len());
    for &tk in &t {
        let envelope = amplitude * (-0.5 * ((tk - center) / width).powi(2)).exp();
        i.push(envelope);
        q.push(-beta * (tk - center) / width.powi(2) * envelope);
    }
    IqWaveform { i, q }
}

/// Standard pi pulse for the X gate
pub fn pi_pulse(duration_ns: f64) -> IqWaveform {
    drag_pulse(duration_ns, PI_PULSE_AMPLITUDE, DRAG_BETA, DRAG_SIGMA)
}

/// Cross-resonance drive for a two-qubit gate
///
/// Sinusoid at the coupling frequency with swapped sin/cos quadratures.
pub fn cross_resonance_pulse(spec: &TwoQubitGateSpec) -> IqWaveform {
    let freq_ghz = spec.coupling_mhz * 1e-3;

    let t = time_axis(spec.duration_ns);
    let mut i = Vec::with_capacity(t.len());
    let mut q = Vec::with_capacity(t.len());
    for &tk in &t {
        let phase = 2.0 * PI * freq_ghz * tk;
        i.push(CR_AMPLITUDE * phase.sin());
        q.push(CR_AMPLITUDE * phase.cos());
    }
    IqWaveform { i, q }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cryoq_core::GateKind;

    #[test]
    fn test_drag_pulse_shape() {
        let wf = drag_pulse(20.0, 0.1, DRAG_BETA, DRAG_SIGMA);
        assert_eq!(wf.i.len(), wf.q.len());
        assert_eq!(wf.len(), 200); // 20 ns at 10 GS/s
        assert!(wf.peak() > 0.0);

        // Envelope peaks at the center sample
        let mid = wf.len() / 2;
        assert!(wf.i[mid] > wf.i[0]);
        assert!((wf.i[mid] - 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_drag_quadrature_antisymmetric() {
        let wf = drag_pulse(20.0, 0.1, DRAG_BETA, DRAG_SIGMA);
        // Derivative of a Gaussian: positive before center, negative after
        assert!(wf.q[10] > 0.0);
        assert!(wf.q[wf.len() - 10] < 0.0);
    }

    #[test]
    fn test_pi_pulse_defaults() {
        let wf = pi_pulse(20.0);
        assert!((wf.peak() - PI_PULSE_AMPLITUDE).abs() < 1e-3);
    }

    #[test]
    fn test_cross_resonance_quadratures() {
        let spec = TwoQubitGateSpec::with_defaults(GateKind::Cnot, 0, 1);
        let wf = cross_resonance_pulse(&spec);
        assert_eq!(wf.len(), 600); // 60 ns at 10 GS/s
        // sin starts at 0, cos starts at full amplitude
        assert!(wf.i[0].abs() < 1e-12);
        assert!((wf.q[0] - CR_AMPLITUDE).abs() < 1e-12);
    }

    #[test]
    fn test_zero_duration_is_empty() {
        let wf = drag_pulse(0.0, 0.1, DRAG_BETA, DRAG_SIGMA);
        assert!(wf.is_empty());
    }
}
