//! # cryoq Core
//!
//! Foundation types for the cryoq control-stack simulator: the shared error
//! taxonomy, physical and design constants, immutable specification types,
//! and the two-level qubit state.
//!
//! ## Quick Start
//!
//! ```rust
//! use cryoq_core::prelude::*;
//!
//! let spec = QubitSpec::typical();
//! assert!(spec.validate().is_ok());
//!
//! let state = QubitState::new();
//! assert_eq!(state.p0(), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Constants (physics, gates, readout, QEC, entanglement)
pub mod constants;

/// Error types
pub mod error;

/// Qubit state representation
pub mod state;

/// Core types (specs, gate vocabulary, results, wire amplitudes)
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use constants::{entanglement, gates, physics, qec, readout};
pub use error::{CryoqError, CryoqResult};
pub use state::QubitState;
pub use types::{
    to_wire, Amplitude, GateKind, MeasurementResult, QubitSpec, TwoQubitGateSpec,
};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::constants::{entanglement, gates, physics, qec, readout};
    pub use crate::error::{CryoqError, CryoqResult};
    pub use crate::state::QubitState;
    pub use crate::types::{
        to_wire, Amplitude, GateKind, MeasurementResult, QubitSpec, TwoQubitGateSpec,
    };
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_spec_and_state_roundtrip() {
        let spec = QubitSpec::typical();
        let json = serde_json::to_string(&spec).unwrap();
        let back: QubitSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);

        let state = QubitState::new();
        assert!(state.is_normalized(1e-12));
    }

    #[test]
    fn test_gate_vocabulary_subset_supported() {
        // Recognized kinds split into matrix-backed and rejected subsets
        let supported: Vec<GateKind> = [GateKind::Cnot, GateKind::Cz, GateKind::Cr, GateKind::Swap]
            .into_iter()
            .filter(GateKind::has_matrix)
            .collect();
        assert_eq!(supported, vec![GateKind::Cnot, GateKind::Cz]);
    }
}
