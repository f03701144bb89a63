//! Core types for cryoq
//!
//! Immutable specification types, gate vocabulary, measurement results, and
//! the wire representation of complex amplitudes.

use crate::constants::gates;
use crate::error::{CryoqError, CryoqResult};
use num_complex::Complex64;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Qubit Specification
// ============================================================================

/// Physical parameters of a transmon qubit
///
/// Created once at qubit-creation time and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QubitSpec {
    /// Resonant frequency in GHz
    pub frequency_ghz: f64,

    /// Anharmonicity in GHz (negative for transmons)
    pub anharmonicity_ghz: f64,

    /// T1 relaxation time in nanoseconds
    pub t1_ns: f64,

    /// T2 dephasing time in nanoseconds
    pub t2_ns: f64,

    /// Readout resonator frequency in GHz
    pub readout_frequency_ghz: f64,

    /// Readout drive amplitude in volts
    pub readout_amplitude_v: f64,
}

impl QubitSpec {
    /// Create a validated qubit specification
    pub fn new(
        frequency_ghz: f64,
        anharmonicity_ghz: f64,
        t1_ns: f64,
        t2_ns: f64,
        readout_frequency_ghz: f64,
        readout_amplitude_v: f64,
    ) -> CryoqResult<Self> {
        let spec = Self {
            frequency_ghz,
            anharmonicity_ghz,
            t1_ns,
            t2_ns,
            readout_frequency_ghz,
            readout_amplitude_v,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Typical transmon specification (5 GHz qubit, 6.5 GHz readout)
    pub fn typical() -> Self {
        Self {
            frequency_ghz: 5.0,
            anharmonicity_ghz: -0.3,
            t1_ns: 10_000.0,
            t2_ns: 5_000.0,
            readout_frequency_ghz: 6.5,
            readout_amplitude_v: 0.01,
        }
    }

    /// Validate physical constraints
    ///
    /// Dephasing is bounded by relaxation: T2 <= 2*T1.
    pub fn validate(&self) -> CryoqResult<()> {
        if self.t2_ns > 2.0 * self.t1_ns {
            return Err(CryoqError::InvalidT2 {
                t2_ns: self.t2_ns,
                t1_ns: self.t1_ns,
            });
        }
        Ok(())
    }
}

impl fmt::Display for QubitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QubitSpec(f={:.2}GHz, T1={:.0}ns, T2={:.0}ns, ro={:.2}GHz)",
            self.frequency_ghz, self.t1_ns, self.t2_ns, self.readout_frequency_ghz
        )
    }
}

// ============================================================================
// Gate Vocabulary
// ============================================================================

/// Two-qubit gate kinds in the hardware vocabulary
///
/// Only CNOT and CZ have matrix implementations; CR and SWAP are recognized
/// mnemonics that the engine rejects with `UnsupportedGate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateKind {
    /// Controlled-NOT
    Cnot,
    /// Controlled-Z
    Cz,
    /// Cross-resonance
    Cr,
    /// SWAP
    Swap,
}

impl GateKind {
    /// Whether the engine holds a matrix for this kind
    pub fn has_matrix(&self) -> bool {
        matches!(self, GateKind::Cnot | GateKind::Cz)
    }

    /// Whether this kind is a valid Bell-state entangler
    pub fn is_entangler(&self) -> bool {
        matches!(self, GateKind::Cnot | GateKind::Cz)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateKind::Cnot => "CNOT",
            GateKind::Cz => "CZ",
            GateKind::Cr => "CR",
            GateKind::Swap => "SWAP",
        };
        write!(f, "{name}")
    }
}

impl FromStr for GateKind {
    type Err = CryoqError;

    fn from_str(s: &str) -> CryoqResult<Self> {
        match s {
            "CNOT" => Ok(GateKind::Cnot),
            "CZ" => Ok(GateKind::Cz),
            "CR" => Ok(GateKind::Cr),
            "SWAP" => Ok(GateKind::Swap),
            other => Err(CryoqError::UnsupportedGate(other.to_string())),
        }
    }
}

/// Specification for one two-qubit gate execution
///
/// Immutable; constructed per gate-execution request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoQubitGateSpec {
    /// Gate kind
    pub kind: GateKind,

    /// Control qubit index
    pub control: usize,

    /// Target qubit index
    pub target: usize,

    /// Gate duration in nanoseconds
    pub duration_ns: f64,

    /// Gate fidelity in [0, 1]
    pub fidelity: f64,

    /// Coupling strength in MHz
    pub coupling_mhz: f64,
}

impl TwoQubitGateSpec {
    /// Create a validated gate specification
    pub fn new(kind: GateKind, control: usize, target: usize, fidelity: f64) -> CryoqResult<Self> {
        if !(0.0..=1.0).contains(&fidelity) {
            return Err(CryoqError::InvalidFidelity(fidelity));
        }
        Ok(Self {
            kind,
            control,
            target,
            duration_ns: gates::DEFAULT_DURATION_NS,
            fidelity,
            coupling_mhz: gates::DEFAULT_COUPLING_MHZ,
        })
    }

    /// Create with the default fidelity and coupling
    pub fn with_defaults(kind: GateKind, control: usize, target: usize) -> Self {
        Self {
            kind,
            control,
            target,
            duration_ns: gates::DEFAULT_DURATION_NS,
            fidelity: gates::DEFAULT_FIDELITY,
            coupling_mhz: gates::DEFAULT_COUPLING_MHZ,
        }
    }

    /// Set duration
    pub fn with_duration_ns(mut self, duration_ns: f64) -> Self {
        self.duration_ns = duration_ns;
        self
    }

    /// Set coupling strength
    pub fn with_coupling_mhz(mut self, coupling_mhz: f64) -> Self {
        self.coupling_mhz = coupling_mhz;
        self
    }
}

// ============================================================================
// Measurement Result
// ============================================================================

/// Shot-count statistics from one readout
///
/// Produced fresh per readout call; never mutated after creation.
/// Invariant: `zeros + ones` equals the number of requested shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    /// Count of |0> outcomes
    pub zeros: u64,

    /// Count of |1> outcomes
    pub ones: u64,

    /// Readout fidelity assumed by the measurement blend
    pub readout_fidelity: f64,

    /// True underlying excitation probability before readout error
    pub true_probability: f64,
}

impl MeasurementResult {
    /// Total number of shots
    pub fn shots(&self) -> u64 {
        self.zeros + self.ones
    }

    /// Observed excitation probability
    pub fn p1_observed(&self) -> f64 {
        if self.shots() == 0 {
            0.0
        } else {
            self.ones as f64 / self.shots() as f64
        }
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MeasurementResult(0: {}, 1: {}, p1={:.4})",
            self.zeros,
            self.ones,
            self.p1_observed()
        )
    }
}

// ============================================================================
// Wire Amplitudes
// ============================================================================

/// Wire representation of a complex amplitude
///
/// Serializes as a bare real number when the imaginary part is exactly
/// zero, otherwise as `{"real": .., "imag": ..}`. This is the only wire
/// contract the core carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplitude(pub Complex64);

impl Serialize for Amplitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.im == 0.0 {
            serializer.serialize_f64(self.0.re)
        } else {
            let mut state = serializer.serialize_struct("Amplitude", 2)?;
            state.serialize_field("real", &self.0.re)?;
            state.serialize_field("imag", &self.0.im)?;
            state.end()
        }
    }
}

impl<'de> Deserialize<'de> for Amplitude {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Real(f64),
            Pair { real: f64, imag: f64 },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Real(re) => Amplitude(Complex64::new(re, 0.0)),
            Repr::Pair { real, imag } => Amplitude(Complex64::new(real, imag)),
        })
    }
}

impl From<Complex64> for Amplitude {
    fn from(c: Complex64) -> Self {
        Amplitude(c)
    }
}

/// Convert a state vector to its wire representation
pub fn to_wire(amplitudes: &[Complex64]) -> Vec<Amplitude> {
    amplitudes.iter().copied().map(Amplitude).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_spec_validation() {
        assert!(QubitSpec::typical().validate().is_ok());

        // T2 > 2*T1 violates the dephasing bound
        let result = QubitSpec::new(5.0, -0.3, 1_000.0, 2_500.0, 6.5, 0.01);
        assert_eq!(
            result,
            Err(CryoqError::InvalidT2 {
                t2_ns: 2_500.0,
                t1_ns: 1_000.0
            })
        );
    }

    #[test]
    fn test_gate_kind_parse() {
        assert_eq!("CNOT".parse::<GateKind>().unwrap(), GateKind::Cnot);
        assert_eq!("CZ".parse::<GateKind>().unwrap(), GateKind::Cz);

        let err = "TOFFOLI".parse::<GateKind>().unwrap_err();
        assert_eq!(err, CryoqError::UnsupportedGate("TOFFOLI".to_string()));
    }

    #[test]
    fn test_gate_kind_roundtrip_display() {
        for kind in [GateKind::Cnot, GateKind::Cz, GateKind::Cr, GateKind::Swap] {
            assert_eq!(kind.to_string().parse::<GateKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_gate_kind_matrix_support() {
        assert!(GateKind::Cnot.has_matrix());
        assert!(GateKind::Cz.has_matrix());
        assert!(!GateKind::Swap.has_matrix());
        assert!(!GateKind::Cr.has_matrix());
    }

    #[test]
    fn test_gate_spec_fidelity_validation() {
        assert!(TwoQubitGateSpec::new(GateKind::Cnot, 0, 1, 0.98).is_ok());
        assert_eq!(
            TwoQubitGateSpec::new(GateKind::Cnot, 0, 1, 1.2),
            Err(CryoqError::InvalidFidelity(1.2))
        );
    }

    #[test]
    fn test_measurement_result_shots() {
        let result = MeasurementResult {
            zeros: 480,
            ones: 520,
            readout_fidelity: 0.95,
            true_probability: 0.5,
        };
        assert_eq!(result.shots(), 1000);
        assert!((result.p1_observed() - 0.52).abs() < 1e-12);
    }

    #[test]
    fn test_amplitude_serializes_real_as_plain_number() {
        let json = serde_json::to_string(&Amplitude(Complex64::new(0.5, 0.0))).unwrap();
        assert_eq!(json, "0.5");
    }

    #[test]
    fn test_amplitude_serializes_complex_as_pair() {
        let json = serde_json::to_string(&Amplitude(Complex64::new(0.0, -1.0))).unwrap();
        assert!(json.contains("\"real\""));
        assert!(json.contains("\"imag\""));
    }

    #[test]
    fn test_amplitude_deserialize_both_forms() {
        let plain: Amplitude = serde_json::from_str("0.25").unwrap();
        assert_eq!(plain.0, Complex64::new(0.25, 0.0));

        let pair: Amplitude = serde_json::from_str(r#"{"real": 0.0, "imag": 0.5}"#).unwrap();
        assert_eq!(pair.0, Complex64::new(0.0, 0.5));
    }

    #[test]
    fn test_to_wire() {
        let amps = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];
        let wire = to_wire(&amps);
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].0, amps[0]);
    }
}
