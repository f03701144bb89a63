//! Error types for cryoq
//!
//! All conditions here are local and recoverable: they are raised at the
//! point of violation, before any state mutation, and the boundary layer is
//! expected to turn them into user-facing responses.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for cryoq
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CryoqError {
    // ========================================================================
    // Gate Errors
    // ========================================================================
    /// Bell-state preparation given a gate outside the entangling set
    #[error("Invalid gate kind '{kind}' for Bell-state preparation: valid kinds are CNOT, CZ")]
    InvalidGateKind { kind: String },

    /// Two-qubit gate kind with no matrix implementation
    #[error("Unsupported gate kind: {0}")]
    UnsupportedGate(String),

    // ========================================================================
    // State Errors
    // ========================================================================
    /// State vector has the wrong number of amplitudes
    #[error("Invalid state dimension: expected {expected} amplitudes, got {actual}")]
    InvalidStateDimension { expected: usize, actual: usize },

    /// State vector cannot be normalized
    #[error("State vector has zero norm")]
    ZeroNormState,

    // ========================================================================
    // System Errors
    // ========================================================================
    /// Qubit index outside the control system's collection
    #[error("Qubit index {index} out of range: system has {num_qubits} qubits")]
    QubitIndexOutOfRange { index: usize, num_qubits: usize },

    // ========================================================================
    // QEC Errors
    // ========================================================================
    /// QEC code kind with no strategy implementation
    #[error("Unsupported QEC code: {0}")]
    UnsupportedCode(String),

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Fidelity value out of range [0, 1]
    #[error("Invalid fidelity {0}: must be in range [0, 1]")]
    InvalidFidelity(f64),

    /// Invalid T2 value (must be <= 2*T1)
    #[error("Invalid T2 ({t2_ns:.0} ns): must be <= 2*T1 ({t1_ns:.0} ns)")]
    InvalidT2 { t2_ns: f64, t1_ns: f64 },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for cryoq operations
pub type CryoqResult<T> = Result<T, CryoqError>;

impl From<serde_json::Error> for CryoqError {
    fn from(err: serde_json::Error) -> Self {
        CryoqError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl CryoqError {
    /// Check if error is a caller-input validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CryoqError::InvalidFidelity(_)
                | CryoqError::InvalidT2 { .. }
                | CryoqError::InvalidStateDimension { .. }
                | CryoqError::ZeroNormState
        )
    }

    /// Check if error names an unrecognized or unimplemented operation
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            CryoqError::InvalidGateKind { .. }
                | CryoqError::UnsupportedGate(_)
                | CryoqError::UnsupportedCode(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_gate_names_kind() {
        let err = CryoqError::UnsupportedGate("SWAP".to_string());
        assert!(err.to_string().contains("SWAP"));
    }

    #[test]
    fn test_invalid_gate_kind_reports_valid_set() {
        let err = CryoqError::InvalidGateKind {
            kind: "CR".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("CNOT"));
        assert!(msg.contains("CZ"));
    }

    #[test]
    fn test_qubit_index_out_of_range() {
        let err = CryoqError::QubitIndexOutOfRange {
            index: 5,
            num_qubits: 3,
        };
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_is_validation_error() {
        assert!(CryoqError::InvalidFidelity(1.5).is_validation_error());
        assert!(!CryoqError::UnsupportedCode("shor".into()).is_validation_error());
    }

    #[test]
    fn test_is_unsupported() {
        assert!(CryoqError::UnsupportedCode("steane".into()).is_unsupported());
        assert!(!CryoqError::ZeroNormState.is_unsupported());
    }
}
