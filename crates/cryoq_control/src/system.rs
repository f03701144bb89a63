//! Control-system coordinator
//!
//! Owns the transmon handles, the cryogenic signal chain, and the readout
//! simulator, and exposes the boundary operations: qubit registration,
//! gate execution, and shot-based readout. All stochastic operations draw
//! from an RNG constructed per call, seeded when a seed is configured.

use crate::readout::ReadoutSimulator;
use crate::transmon::Transmon;
use cryoq_core::{
    physics, readout, to_wire, Amplitude, CryoqError, CryoqResult, MeasurementResult, QubitSpec,
    TwoQubitGateSpec,
};
use cryoq_gates::pulse::{cross_resonance_pulse, IqWaveform};
use cryoq_gates::{apply_two_qubit, concurrence, tensor_states, EntanglementStrength};
use cryoq_signal::{readout_tone, snr_improvement, SignalChain, StagePower};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// ============================================================================
// Boundary Reports
// ============================================================================

/// Result of executing one two-qubit gate
///
/// The joint state lives only in this report; the per-qubit handles keep
/// their separable states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoQubitOutcome {
    /// Joint 4-amplitude state after the gate, in wire form
    pub joint_state: Vec<Amplitude>,

    /// Overlap with the maximally entangled |Phi+> state
    pub concurrence: f64,

    /// Classification of the concurrence value
    pub strength: EntanglementStrength,

    /// Cross-resonance drive envelope that realizes the gate
    pub drive: IqWaveform,
}

/// Result of one readout: shot counts plus the analog chain diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadoutReport {
    /// Shot-count statistics
    pub measurement: MeasurementResult,

    /// Mean output power per amplifier stage, in chain order
    pub stage_powers: Vec<StagePower>,

    /// Final-output SNR over input SNR
    pub snr_improvement: f64,
}

/// Point-in-time summary of the control system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    /// Number of registered qubits
    pub num_qubits: usize,

    /// Number of amplifier stages in the readout chain
    pub num_chain_stages: usize,

    /// Mixing-chamber base temperature in kelvin
    pub base_temperature_k: f64,

    /// Assignment fidelity of the readout simulator
    pub readout_fidelity: f64,
}

// ============================================================================
// Control System
// ============================================================================

/// Coordinator for qubits, gates, signal chain, and readout
#[derive(Debug)]
pub struct ControlSystem {
    /// Registered qubit handles, indexed by registration order
    qubits: Vec<Transmon>,

    /// Cryogenic amplification chain for readout signals
    chain: SignalChain,

    /// Shot-based readout simulator
    readout: ReadoutSimulator,

    /// Random seed
    seed: Option<u64>,
}

impl Default for ControlSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSystem {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an empty system with the standard two-stage chain
    pub fn new() -> Self {
        Self {
            qubits: Vec::new(),
            chain: SignalChain::standard(),
            readout: ReadoutSimulator::default(),
            seed: None,
        }
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the readout chain
    pub fn with_chain(mut self, chain: SignalChain) -> Self {
        self.chain = chain;
        self
    }

    /// Replace the readout simulator
    pub fn with_readout(mut self, readout: ReadoutSimulator) -> Self {
        self.readout = readout;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    // ========================================================================
    // Qubit Registry
    // ========================================================================

    /// Register a qubit and return its index
    ///
    /// The spec is validated before anything is stored; a rejected spec
    /// leaves the registry untouched.
    pub fn add_qubit(&mut self, spec: QubitSpec) -> CryoqResult<usize> {
        let qubit = Transmon::new(spec)?;
        let index = self.qubits.len();
        info!(index, spec = %qubit.spec(), "qubit registered");
        self.qubits.push(qubit);
        Ok(index)
    }

    /// Number of registered qubits
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Qubit handle by index
    pub fn qubit(&self, index: usize) -> CryoqResult<&Transmon> {
        self.qubits
            .get(index)
            .ok_or(CryoqError::QubitIndexOutOfRange {
                index,
                num_qubits: self.qubits.len(),
            })
    }

    fn qubit_mut(&mut self, index: usize) -> CryoqResult<&mut Transmon> {
        let num_qubits = self.qubits.len();
        self.qubits
            .get_mut(index)
            .ok_or(CryoqError::QubitIndexOutOfRange { index, num_qubits })
    }

    // ========================================================================
    // Gates
    // ========================================================================

    /// Apply a deterministic X gate to one qubit
    pub fn apply_x_gate(&mut self, index: usize) -> CryoqResult<IqWaveform> {
        let waveform = self.qubit_mut(index)?.apply_x();
        debug!(index, samples = waveform.len(), "X gate applied");
        Ok(waveform)
    }

    /// Execute a two-qubit gate on the tensor product of two handle states
    ///
    /// Both indices are range-checked before any state is touched. The
    /// joint state is reported, not written back into the handles.
    pub fn execute_two_qubit_gate(
        &self,
        spec: &TwoQubitGateSpec,
    ) -> CryoqResult<TwoQubitOutcome> {
        let control = self.qubit(spec.control)?;
        let target = self.qubit(spec.target)?;

        let mut joint = tensor_states(control.state(), target.state());
        let mut rng = self.rng();
        apply_two_qubit(&mut joint, spec, &mut rng)?;

        let concurrence = concurrence(&joint)?;
        let strength = EntanglementStrength::classify(concurrence);
        debug!(
            kind = %spec.kind,
            control = spec.control,
            target = spec.target,
            concurrence,
            "two-qubit gate executed"
        );

        Ok(TwoQubitOutcome {
            joint_state: to_wire(&joint),
            concurrence,
            strength,
            drive: cross_resonance_pulse(spec),
        })
    }

    // ========================================================================
    // Readout
    // ========================================================================

    /// Read out one qubit: synthesize its tone, amplify it through the
    /// chain, and sample shot counts
    pub fn run_readout(&self, index: usize, shots: u64) -> CryoqResult<ReadoutReport> {
        let qubit = self.qubit(index)?;
        let spec = qubit.spec();

        let tone = readout_tone(
            spec.readout_frequency_ghz,
            spec.readout_amplitude_v,
            readout::TONE_DURATION_NS,
        );

        let mut rng = self.rng();
        let run = self.chain.run(&tone, &mut rng);
        let improvement = snr_improvement(&tone, &run.output);

        let (_, p1) = qubit.probabilities();
        let measurement = self.readout.measure(p1, shots, &mut rng);

        info!(
            index,
            shots,
            p1_observed = measurement.p1_observed(),
            snr_improvement = improvement,
            "readout run"
        );

        Ok(ReadoutReport {
            measurement,
            stage_powers: run.stage_powers,
            snr_improvement: improvement,
        })
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// Summary of the system's current configuration
    pub fn status(&self) -> SystemStatus {
        SystemStatus {
            num_qubits: self.qubits.len(),
            num_chain_stages: self.chain.len(),
            base_temperature_k: physics::MIXING_CHAMBER_K,
            readout_fidelity: self.readout.fidelity(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cryoq_core::GateKind;

    fn three_qubit_system() -> ControlSystem {
        let mut system = ControlSystem::new().with_seed(42);
        for _ in 0..3 {
            system.add_qubit(QubitSpec::typical()).unwrap();
        }
        system
    }

    #[test]
    fn test_add_qubit_returns_sequential_indices() {
        let mut system = ControlSystem::new();
        assert_eq!(system.add_qubit(QubitSpec::typical()).unwrap(), 0);
        assert_eq!(system.add_qubit(QubitSpec::typical()).unwrap(), 1);
        assert_eq!(system.num_qubits(), 2);
    }

    #[test]
    fn test_invalid_spec_leaves_registry_untouched() {
        let mut system = ControlSystem::new();
        let bad = QubitSpec {
            t2_ns: 3.0 * QubitSpec::typical().t1_ns,
            ..QubitSpec::typical()
        };
        assert!(system.add_qubit(bad).is_err());
        assert_eq!(system.num_qubits(), 0);
    }

    #[test]
    fn test_qubit_index_out_of_range() {
        let system = three_qubit_system();
        let err = system.qubit(5).unwrap_err();
        assert!(matches!(
            err,
            CryoqError::QubitIndexOutOfRange {
                index: 5,
                num_qubits: 3
            }
        ));
    }

    #[test]
    fn test_apply_x_gate_flips_state() {
        let mut system = three_qubit_system();
        system.apply_x_gate(1).unwrap();
        assert_relative_eq!(system.qubit(1).unwrap().probabilities().1, 1.0);
        // Neighbors untouched
        assert_relative_eq!(system.qubit(0).unwrap().probabilities().0, 1.0);
        assert_relative_eq!(system.qubit(2).unwrap().probabilities().0, 1.0);
    }

    #[test]
    fn test_two_qubit_gate_range_checks_before_execution() {
        let system = three_qubit_system();
        let spec = TwoQubitGateSpec::with_defaults(GateKind::Cnot, 0, 9);
        let err = system.execute_two_qubit_gate(&spec).unwrap_err();
        assert!(matches!(
            err,
            CryoqError::QubitIndexOutOfRange { index: 9, .. }
        ));
    }

    #[test]
    fn test_swap_rejected_by_name() {
        let system = three_qubit_system();
        let spec = TwoQubitGateSpec::with_defaults(GateKind::Swap, 0, 1);
        let err = system.execute_two_qubit_gate(&spec).unwrap_err();
        match err {
            CryoqError::UnsupportedGate(kind) => assert_eq!(kind, "SWAP"),
            other => panic!("expected UnsupportedGate, got {other:?}"),
        }
    }

    #[test]
    fn test_cnot_on_ground_states_stays_separable() {
        let system = three_qubit_system();
        let spec = TwoQubitGateSpec::new(GateKind::Cnot, 0, 1, 1.0).unwrap();
        let outcome = system.execute_two_qubit_gate(&spec).unwrap();
        // |00> is a CNOT fixed point; its |Phi+> overlap is exactly 1/2
        assert_relative_eq!(outcome.concurrence, 0.5, epsilon = 1e-12);
        assert_eq!(outcome.strength, EntanglementStrength::Partial);
        assert_eq!(outcome.joint_state.len(), 4);
        assert!(!outcome.drive.is_empty());
    }

    #[test]
    fn test_handles_keep_separable_states_after_joint_gate() {
        let mut system = three_qubit_system();
        system.apply_x_gate(0).unwrap();
        let spec = TwoQubitGateSpec::new(GateKind::Cnot, 0, 1, 1.0).unwrap();
        system.execute_two_qubit_gate(&spec).unwrap();

        // Joint execution must not write back into the handles
        assert_relative_eq!(system.qubit(0).unwrap().probabilities().1, 1.0);
        assert_relative_eq!(system.qubit(1).unwrap().probabilities().0, 1.0);
    }

    #[test]
    fn test_readout_out_of_range() {
        let system = three_qubit_system();
        let err = system.run_readout(5, 100).unwrap_err();
        assert!(matches!(
            err,
            CryoqError::QubitIndexOutOfRange {
                index: 5,
                num_qubits: 3
            }
        ));
    }

    #[test]
    fn test_readout_report_shape() {
        let system = three_qubit_system();
        let report = system.run_readout(0, 1000).unwrap();
        assert_eq!(report.measurement.shots(), 1000);
        assert_eq!(report.stage_powers.len(), 2);
        assert_eq!(report.stage_powers[0].label, "4K");
        assert_eq!(report.stage_powers[1].label, "MXC");
        assert!(report.snr_improvement > 0.0);
    }

    #[test]
    fn test_seeded_readout_reproducible() {
        let a = three_qubit_system().run_readout(0, 500).unwrap();
        let b = three_qubit_system().run_readout(0, 500).unwrap();
        assert_eq!(a.measurement, b.measurement);
    }

    #[test]
    fn test_status_summary() {
        let system = three_qubit_system();
        let status = system.status();
        assert_eq!(status.num_qubits, 3);
        assert_eq!(status.num_chain_stages, 2);
        assert_relative_eq!(status.base_temperature_k, 0.015);
        assert_relative_eq!(status.readout_fidelity, 0.95);
    }
}
