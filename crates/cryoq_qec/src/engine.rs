//! QEC cycle engine
//!
//! Drives the Encode -> MeasureSyndrome -> DetectErrors -> Correct -> Report
//! sequence over a closed set of code strategies. Terminal state is the
//! report; nothing persists across cycles.

use crate::code::{CodeKind, CycleReport};
use crate::repetition::RepetitionCode;
use crate::surface::SurfaceCode;
use cryoq_core::constants::qec;
use cryoq_core::{CryoqError, CryoqResult};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Strategy dispatch for the implemented codes
#[derive(Debug, Clone)]
enum Strategy {
    Repetition(RepetitionCode),
    Surface(SurfaceCode),
}

/// Error-correction cycle engine
#[derive(Debug, Clone)]
pub struct QecEngine {
    kind: CodeKind,
    strategy: Strategy,
    seed: Option<u64>,
}

impl QecEngine {
    /// Create an engine for the given code kind with default parameters
    ///
    /// Fails with `UnsupportedCode` for kinds without a strategy.
    pub fn new(kind: CodeKind) -> CryoqResult<Self> {
        let strategy = match kind {
            CodeKind::Repetition => {
                Strategy::Repetition(RepetitionCode::new(qec::DEFAULT_REPETITIONS))
            }
            CodeKind::Surface => Strategy::Surface(SurfaceCode::new(qec::DEFAULT_DISTANCE)),
            other => return Err(CryoqError::UnsupportedCode(other.to_string())),
        };
        Ok(Self {
            kind,
            strategy,
            seed: None,
        })
    }

    /// Repetition-code engine with explicit redundancy
    pub fn repetition(repetitions: usize) -> Self {
        Self {
            kind: CodeKind::Repetition,
            strategy: Strategy::Repetition(RepetitionCode::new(repetitions)),
            seed: None,
        }
    }

    /// Surface-code engine with explicit distance
    pub fn surface(distance: usize) -> Self {
        Self {
            kind: CodeKind::Surface,
            strategy: Strategy::Surface(SurfaceCode::new(distance)),
            seed: None,
        }
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Code kind the engine runs
    pub fn kind(&self) -> CodeKind {
        self.kind
    }

    /// Run one full cycle over a logical two-level state
    ///
    /// Validates the logical dimension before touching anything, then runs
    /// encode, syndrome measurement, detection, and correction, ending in
    /// the report.
    pub fn run_cycle(&self, logical: &[Complex64]) -> CryoqResult<(Vec<Complex64>, CycleReport)> {
        let logical: &[Complex64; 2] =
            logical
                .try_into()
                .map_err(|_| CryoqError::InvalidStateDimension {
                    expected: 2,
                    actual: logical.len(),
                })?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let (corrected, errors_detected) = match &self.strategy {
            Strategy::Repetition(code) => {
                let encoded = code.encode(logical);
                let syndrome = code.measure_syndrome(&encoded, &mut rng);
                let errors = code.detect_errors(&syndrome);
                debug!(code = %self.kind, errors = errors.len(), "syndrome processed");
                (code.correct(&encoded, &errors), errors.len())
            }
            Strategy::Surface(code) => {
                let encoded = code.encode(logical);
                let outcomes = code.measure_stabilizers(&mut rng);
                let defects = code.detect_errors(&outcomes);
                debug!(code = %self.kind, defects = defects.len(), "syndrome processed");
                (code.correct(&encoded, &defects), defects.len())
            }
        };

        let report = CycleReport {
            code: self.kind,
            errors_detected,
            logical_error_rate: self.kind.logical_error_rate(),
        };
        debug!(%report, "cycle complete");
        Ok((corrected, report))
    }
}

// ============================================================================
// Tests
// ============================================================================
