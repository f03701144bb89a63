//! Statevector gate engine
//!
//! Applies fixed unitary matrices to one- and two-qubit statevectors.
//! Single-qubit application is deterministic; the two-qubit path runs the
//! Bernoulli fidelity trial from the gate spec and perturbs the matrix on
//! failure before multiplying it into the state.

use cryoq_core::constants::gates;
use cryoq_core::{CryoqError, CryoqResult, GateKind, QubitState, TwoQubitGateSpec};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// 2x2 complex matrix
pub type Matrix2 = [[Complex64; 2]; 2];

/// 4x4 complex matrix
pub type Matrix4 = [[Complex64; 4]; 4];

#[inline]
fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

// ============================================================================
// Fixed Matrices
// ============================================================================

/// 2x2 identity
pub fn identity() -> Matrix2 {
    [[c(1.0), c(0.0)], [c(0.0), c(1.0)]]
}

/// Pauli-X (bit flip)
pub fn pauli_x() -> Matrix2 {
    [[c(0.0), c(1.0)], [c(1.0), c(0.0)]]
}

/// Hadamard
pub fn hadamard() -> Matrix2 {
    let h = 1.0 / 2.0_f64.sqrt();
    [[c(h), c(h)], [c(h), c(-h)]]
}

/// Matrix for a two-qubit gate kind
///
/// CNOT is the permutation swapping the |10> and |11> amplitudes; CZ is
/// diagonal, negating the |11> amplitude. Kinds without a matrix fail with
/// `UnsupportedGate`.
pub fn two_qubit_matrix(kind: GateKind) -> CryoqResult<Matrix4> {
    match kind {
        GateKind::Cnot => Ok([
            [c(1.0), c(0.0), c(0.0), c(0.0)],
            [c(0.0), c(1.0), c(0.0), c(0.0)],
            [c(0.0), c(0.0), c(0.0), c(1.0)],
            [c(0.0), c(0.0), c(1.0), c(0.0)],
        ]),
        GateKind::Cz => Ok([
            [c(1.0), c(0.0), c(0.0), c(0.0)],
            [c(0.0), c(1.0), c(0.0), c(0.0)],
            [c(0.0), c(0.0), c(1.0), c(0.0)],
            [c(0.0), c(0.0), c(0.0), c(-1.0)],
        ]),
        other => Err(CryoqError::UnsupportedGate(other.to_string())),
    }
}

/// Tensor product of two 2x2 matrices
pub fn kron(a: &Matrix2, b: &Matrix2) -> Matrix4 {
    let mut out = [[c(0.0); 4]; 4];
    for (i, a_row) in a.iter().enumerate() {
        for (j, &a_ij) in a_row.iter().enumerate() {
            for (k, b_row) in b.iter().enumerate() {
                for (l, &b_kl) in b_row.iter().enumerate() {
                    out[2 * i + k][2 * j + l] = a_ij * b_kl;
                }
            }
        }
    }
    out
}

/// Tensor product of two single-qubit statevectors
pub fn tensor_states(a: &QubitState, b: &QubitState) -> [Complex64; 4] {
    let x = a.amplitudes();
    let y = b.amplitudes();
    [x[0] * y[0], x[0] * y[1], x[1] * y[0], x[1] * y[1]]
}

// ============================================================================
// Gate Application
// ============================================================================

/// Multiply a 4x4 matrix into a 4-amplitude state in place
pub fn apply_matrix4(state: &mut [Complex64; 4], m: &Matrix4) {
    let prev = *state;
    for (row, out) in m.iter().zip(state.iter_mut()) {
        *out = row
            .iter()
            .zip(prev.iter())
            .map(|(&m_ij, &s_j)| m_ij * s_j)
            .sum();
    }
}

/// Apply an arbitrary 2x2 unitary to a qubit state, in place
///
/// Deterministic; the fidelity noise model only exists on the two-qubit
/// path, matching the hardware model where single-qubit drives are treated
/// as ideal.
pub fn apply_single_qubit(state: &mut QubitState, gate: &Matrix2) {
    let [a0, a1] = *state.amplitudes();
    state.set_amplitudes([
        gate[0][0] * a0 + gate[0][1] * a1,
        gate[1][0] * a0 + gate[1][1] * a1,
    ]);
}

/// Apply a two-qubit gate to a 4-amplitude state, in place
///
/// Draws one uniform value; if it exceeds `spec.fidelity`, every matrix
/// entry is perturbed by independent Gaussian noise with a small fixed
/// standard deviation before the multiply. Output is therefore not
/// deterministic even for a "successful" application.
pub fn apply_two_qubit(
    state: &mut [Complex64; 4],
    spec: &TwoQubitGateSpec,
    rng: &mut StdRng,
) -> CryoqResult<()> {
    let mut matrix = two_qubit_matrix(spec.kind)?;

    let perturbed = rng.gen::<f64>() > spec.fidelity;
    if perturbed {
        perturb(&mut matrix, rng);
    }

    apply_matrix4(state, &matrix);
    debug!(gate = %spec.kind, fidelity = spec.fidelity, perturbed, "applied two-qubit gate");
    Ok(())
}

/// Add independent Gaussian noise to every matrix entry
fn perturb(matrix: &mut Matrix4, rng: &mut StdRng) {
    let Ok(noise) = Normal::new(0.0, gates::NOISE_STD) else {
        return;
    };
    for row in matrix.iter_mut() {
        for entry in row.iter_mut() {
            *entry += Complex64::new(noise.sample(rng), 0.0);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
