//! Bell-state construction
//!
//! Idealized preparation path: no fidelity trial, exact matrices. Starts
//! from |00>, applies H on the first qubit via H (x) I, then the requested
//! entangling gate.

use crate::engine::{apply_matrix4, hadamard, identity, kron, two_qubit_matrix, Matrix4};
use cryoq_core::{CryoqError, CryoqResult, GateKind};
use num_complex::Complex64;
use tracing::debug;

/// Canonical Bell state (|00> + |11>)/sqrt(2)
pub fn canonical_bell() -> [Complex64; 4] {
    let h = 1.0 / 2.0_f64.sqrt();
    [
        Complex64::new(h, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(h, 0.0),
    ]
}

/// Prepare a Bell state with the requested entangling gate
///
/// Only CNOT and CZ are valid; anything else fails with `InvalidGateKind`
/// and the error message reports the valid set.
pub fn create_bell_state(kind: GateKind) -> CryoqResult<[Complex64; 4]> {
    if !kind.is_entangler() {
        return Err(CryoqError::InvalidGateKind {
            kind: kind.to_string(),
        });
    }

    // |00>
    let mut state = [
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(0.0, 0.0),
    ];

    let h_full: Matrix4 = kron(&hadamard(), &identity());
    apply_matrix4(&mut state, &h_full);

    // Entangler kind was validated above, so the matrix lookup cannot fail
    let entangler = two_qubit_matrix(kind)?;
    apply_matrix4(&mut state, &entangler);

    debug!(gate = %kind, "prepared Bell state");
    Ok(state)
}

// ============================================================================
// Tests
// ============================================================================
