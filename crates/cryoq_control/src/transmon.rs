//! Transmon qubit handle
//!
//! Pairs a static hardware spec with the live single-qubit state it owns.
//! Gate application on a handle is deterministic; stochastic effects enter
//! only through two-qubit execution and readout at the system level.

use cryoq_core::{physics, CryoqResult, QubitSpec, QubitState};
use cryoq_gates::pulse::{pi_pulse, IqWaveform};
use cryoq_gates::{apply_single_qubit, pauli_x};

/// One physical qubit: spec, state, and operating temperature
#[derive(Debug, Clone)]
pub struct Transmon {
    /// Hardware parameters (immutable for the handle's lifetime)
    spec: QubitSpec,

    /// Current single-qubit state, owned exclusively by this handle
    state: QubitState,

    /// Base-plate temperature in kelvin
    temperature_k: f64,
}

impl Transmon {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a transmon in |0> at the mixing-chamber base temperature
    ///
    /// Fails if the spec violates its own physical constraints.
    pub fn new(spec: QubitSpec) -> CryoqResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            state: QubitState::new(),
            temperature_k: physics::MIXING_CHAMBER_K,
        })
    }

    /// Create a typical 5 GHz transmon
    pub fn typical() -> Self {
        Self {
            spec: QubitSpec::typical(),
            state: QubitState::new(),
            temperature_k: physics::MIXING_CHAMBER_K,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Hardware spec
    pub fn spec(&self) -> &QubitSpec {
        &self.spec
    }

    /// Current state
    pub fn state(&self) -> &QubitState {
        &self.state
    }

    /// Mutable state access for system-level gate routines
    pub(crate) fn state_mut(&mut self) -> &mut QubitState {
        &mut self.state
    }

    /// Operating temperature in kelvin
    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }

    /// (p0, p1) for the current state
    pub fn probabilities(&self) -> (f64, f64) {
        self.state.probabilities()
    }

    // ========================================================================
    // Gates
    // ========================================================================

    /// Apply a Pauli-X and return the DRAG pi-pulse that realizes it
    ///
    /// The state flip is exact; the returned waveform is the control
    /// envelope that would be played on hardware.
    pub fn apply_x(&mut self) -> IqWaveform {
        apply_single_qubit(&mut self.state, &pauli_x());
        pi_pulse(cryoq_core::gates::DEFAULT_DURATION_NS)
    }

    /// Reset to |0>
    pub fn reset(&mut self) {
        self.state = QubitState::new();
    }
}

// ============================================================================
// Tests
// ============================================================================
