//! # cryoq QEC
//!
//! Quantum error correction cycles for the cryoq control stack. Two
//! interchangeable code strategies (bit-flip repetition and a simplified
//! surface code) run through a uniform
//! Encode -> MeasureSyndrome -> DetectErrors -> Correct -> Report cycle.
//!
//! The numerics are deliberately statistical models: syndrome outcomes are
//! sampled, not decoded, and correction is either report-only (repetition)
//! or a scalar fidelity-loss factor (surface).
//!
//! ## Quick Start
//!
//! ```rust
//! use cryoq_qec::{CodeKind, QecEngine};
//! use num_complex::Complex64;
//!
//! let engine = QecEngine::new(CodeKind::Surface).unwrap().with_seed(42);
//! let logical = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
//!
//! let (_corrected, report) = engine.run_cycle(&logical).unwrap();
//! assert_eq!(report.code, CodeKind::Surface);
//! assert!((report.logical_error_rate - 1e-4).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Code vocabulary and cycle reports
pub mod code;

/// Cycle engine
pub mod engine;

/// Bit-flip repetition code
pub mod repetition;

/// Simplified surface code
pub mod surface;

pub use code::{CodeKind, CycleReport, StabilizerKind};
pub use engine::QecEngine;
pub use repetition::RepetitionCode;
pub use surface::{StabilizerOutcome, SurfaceCode, SurfaceDefect};
