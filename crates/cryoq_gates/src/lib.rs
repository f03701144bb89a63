//! # cryoq Gates
//!
//! Statevector gate engine for the cryoq control stack: single- and
//! two-qubit gate application with the Bernoulli fidelity-noise model,
//! idealized Bell-state construction, the similarity-based entanglement
//! metric, and drive-pulse synthesis.
//!
//! ## Quick Start
//!
//! ```rust
//! use cryoq_core::GateKind;
//! use cryoq_gates::bell::create_bell_state;
//! use cryoq_gates::entanglement::concurrence;
//!
//! let state = create_bell_state(GateKind::Cnot).unwrap();
//! let c = concurrence(&state).unwrap();
//! assert!((c - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Bell-state construction
pub mod bell;

/// Gate matrices and statevector application
pub mod engine;

/// Entanglement metric and classification
pub mod entanglement;

/// Drive-pulse waveform synthesis
pub mod pulse;

pub use bell::{canonical_bell, create_bell_state};
pub use engine::{
    apply_single_qubit, apply_two_qubit, hadamard, identity, kron, pauli_x, tensor_states,
    two_qubit_matrix, Matrix2, Matrix4,
};
pub use entanglement::{concurrence, EntanglementStrength};
pub use pulse::{cross_resonance_pulse, drag_pulse, pi_pulse, IqWaveform};
