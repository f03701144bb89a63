//! QEC code vocabulary and cycle reports

use cryoq_core::constants::qec;
use cryoq_core::{CryoqError, CryoqResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Code Kinds
// ============================================================================

/// Error-correction code kinds
///
/// Repetition and surface have strategy implementations; Shor and Steane
/// are recognized names the engine rejects with `UnsupportedCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    /// Bit-flip repetition code
    Repetition,
    /// Distance-d surface code
    Surface,
    /// Shor 9-qubit code (not implemented)
    Shor,
    /// Steane 7-qubit code (not implemented)
    Steane,
}

impl CodeKind {
    /// Whether the engine has a strategy for this kind
    pub fn is_implemented(&self) -> bool {
        matches!(self, CodeKind::Repetition | CodeKind::Surface)
    }

    /// Modelled logical error rate after one correction cycle
    ///
    /// Repetition: 3*p^2 (triple redundancy), surface: p^2 (quadratic
    /// suppression), with p the fixed base physical error rate. Calibrated
    /// formulas; consumers depend on the exact values.
    pub fn logical_error_rate(&self) -> f64 {
        let p = qec::BASE_ERROR_RATE;
        match self {
            CodeKind::Repetition => 3.0 * p * p,
            CodeKind::Surface => p * p,
            _ => p,
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodeKind::Repetition => "repetition",
            CodeKind::Surface => "surface",
            CodeKind::Shor => "shor",
            CodeKind::Steane => "steane",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CodeKind {
    type Err = CryoqError;

    fn from_str(s: &str) -> CryoqResult<Self> {
        match s {
            "repetition" => Ok(CodeKind::Repetition),
            "surface" => Ok(CodeKind::Surface),
            "shor" => Ok(CodeKind::Shor),
            "steane" => Ok(CodeKind::Steane),
            other => Err(CryoqError::UnsupportedCode(other.to_string())),
        }
    }
}

// ============================================================================
// Stabilizers
// ============================================================================

/// Stabilizer type in the surface-code syndrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilizerKind {
    /// X-type stabilizer
    X,
    /// Z-type stabilizer
    Z,
}

impl fmt::Display for StabilizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StabilizerKind::X => write!(f, "X"),
            StabilizerKind::Z => write!(f, "Z"),
        }
    }
}

// ============================================================================
// Cycle Report
// ============================================================================

/// Terminal report of one QEC cycle
///
/// No persistent state carries across cycles; each report is produced fresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    /// Code kind the cycle ran with
    pub code: CodeKind,

    /// Number of errors the detection phase flagged
    pub errors_detected: usize,

    /// Modelled logical error rate for this code
    pub logical_error_rate: f64,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CycleReport(code={}, errors={}, logical_rate={:.6})",
            self.code, self.errors_detected, self.logical_error_rate
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
    fn test_code_kind_parse() {
        assert_eq!("repetition".parse::<CodeKind>().unwrap(), CodeKind::Repetition);
        assert_eq!("surface".parse::<CodeKind>().unwrap(), CodeKind::Surface);

        let err = "bacon_shor".parse::<CodeKind>().unwrap_err();
        assert_eq!(err, CryoqError::UnsupportedCode("bacon_shor".to_string()));
    }

    #[test]
    fn test_logical_error_rates_exact() {
        // p = 0.01: repetition 3p^2 = 3e-4, surface p^2 = 1e-4
        assert!((CodeKind::Repetition.logical_error_rate() - 3e-4).abs() < 1e-15);
        assert!((CodeKind::Surface.logical_error_rate() - 1e-4).abs() < 1e-15);
    }

    #[test]
    fn test_surface_beats_repetition() {
        assert!(CodeKind::Surface.logical_error_rate() < CodeKind::Repetition.logical_error_rate());
    }

    #[test]
    fn test_report_serializes_code_as_lowercase() {
        let report = CycleReport {
            code: CodeKind::Repetition,
            errors_detected: 1,
            logical_error_rate: 3e-4,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"repetition\""));
    }
}
