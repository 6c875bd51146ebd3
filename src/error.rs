//! Typed errors for the grading pipeline
//!
//! Rule evaluation itself never fails: bad data becomes a rubric violation.
//! These errors cover the harness around it (curve tables with inconsistent
//! shape, missing baselines, unsupported uploads).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradeError {
    #[error("curve '{label}' spans {curve} cells but the W/S axis spans {axis}")]
    CurveShape {
        label: String,
        axis: usize,
        curve: usize,
    },

    #[error("No reference baseline found for \"{0}\".")]
    BaselineNotFound(String),

    #[error("Only .xlsm or .xlsx files are supported (got \"{0}\").")]
    UnsupportedFile(String),
}
