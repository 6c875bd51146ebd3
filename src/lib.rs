//! Design Grader Rust Implementation
//!
//! Grades aircraft design records against a fixed engineering rubric and
//! produces a deterministic score plus an ordered feedback transcript.
//!
//! Layout:
//! - `data`: record model (tables of cells) and numeric coercion
//! - `utils/`: tolerances, curve interpolation, planform geometry, templates
//! - `rules/`: the ten rule modules (R1-R10)
//! - `bonus`: continuous bonus credit on secondary metrics
//! - `scorer`: score aggregation and transcript assembly
//! - `comparison`: transcript diff against reference baselines

pub mod bonus;
pub mod comparison;
pub mod config;
pub mod data;
pub mod error;
pub mod messages;
pub mod rules;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use bonus::{compute_bonuses, BonusResult};
pub use comparison::{compare_logs, verify, Baseline, BaselineSet, ComparisonResult, DiffRow, LogInput};
pub use config::RubricConfig;
pub use data::{CellValue, Table, TableName, Workbook};
pub use error::GradeError;
pub use rules::{CheckResult, RuleModule};
pub use scorer::{grade_workbook, DesignScorer, ScoreResult};
