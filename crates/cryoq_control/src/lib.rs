//! # cryoq control
//!
//! Top-level coordinator for the cryoq stack. A [`ControlSystem`] owns a
//! registry of [`Transmon`] handles, the standard two-stage cryogenic
//! [`SignalChain`](cryoq_signal::SignalChain), and a [`ReadoutSimulator`],
//! and exposes the boundary operations: qubit registration, X and two-qubit
//! gate execution, and shot-based readout with chain diagnostics.
//!
//! ## Quick Start
//!
//! ```rust
//! use cryoq_control::ControlSystem;
//! use cryoq_core::{GateKind, QubitSpec, TwoQubitGateSpec};
//!
//! let mut system = ControlSystem::new().with_seed(42);
//! let q0 = system.add_qubit(QubitSpec::typical()).unwrap();
//! let q1 = system.add_qubit(QubitSpec::typical()).unwrap();
//!
//! system.apply_x_gate(q0).unwrap();
//! let gate = TwoQubitGateSpec::with_defaults(GateKind::Cnot, q0, q1);
//! let outcome = system.execute_two_qubit_gate(&gate).unwrap();
//! assert_eq!(outcome.joint_state.len(), 4);
//!
//! let report = system.run_readout(q0, 1000).unwrap();
//! assert_eq!(report.measurement.shots(), 1000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Shot-based readout simulation
pub mod readout;

/// Control-system coordinator
pub mod system;

/// Transmon qubit handle
pub mod transmon;

pub use readout::ReadoutSimulator;
pub use system::{ControlSystem, ReadoutReport, SystemStatus, TwoQubitOutcome};
pub use transmon::Transmon;
