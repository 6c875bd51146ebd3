//! Design Scorer - Main coordinator for grading design records
//!
//! Runs the ten rule modules in transcript order, folds their deltas into the
//! base score, adds the bonus, and assembles the feedback transcript.
//! Includes both sequential and parallel (Rayon) batch implementations.
//!
//! Scoring policy:
//!   - Base starts at 40; module deltas are summed in module order
//!   - The base is floored at 0 once, after every delta is applied
//!   - Bonus points are added after the floor; the final score is rounded to
//!     the nearest tenth

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::bonus::{compute_bonuses, MAX_BONUS};
use crate::config::RubricConfig;
use crate::data::Workbook;
use crate::rules::RuleModule;
use crate::utils::{render, round_tenth, Arg};

pub const BASE_SCORE: f64 = 40.0;
pub const MAX_SCORE: f64 = BASE_SCORE + MAX_BONUS;

/// Delta one module contributed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleDelta {
    pub module: RuleModule,
    pub delta: f64,
}

/// Graded record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub max_score: f64,
    /// Base after deductions, floored at zero
    pub base_score: f64,
    pub bonus_points: f64,
    pub score_line: String,
    pub bonus_line: String,
    /// Full transcript, newline-joined
    pub feedback_log: String,
    pub module_deltas: Vec<ModuleDelta>,
    pub rubric_version: String,
}

impl ScoreResult {
    /// Transcript split back into lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.feedback_log.split('\n')
    }
}

/// Whether the source file lost its macros by being saved as plain `.xlsx`
fn is_macro_free(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".xlsx")
}

/// Grade one record against `rubric`
pub fn grade_workbook(workbook: &Workbook, rubric: &RubricConfig) -> ScoreResult {
    let mut feedback: Vec<String> = Vec::new();

    if let Some(file_name) = workbook.file_name.as_deref().filter(|f| !f.is_empty()) {
        feedback.push(file_name.to_string());
        if is_macro_free(file_name) {
            feedback.push(rubric.macro_warning_text.clone());
        }
    }

    rubric.warn_missing_fallback_cells(workbook);

    let mut base = BASE_SCORE;
    let mut module_deltas = Vec::with_capacity(RuleModule::ALL.len());
    for module in RuleModule::ALL {
        let result = module.run(workbook, rubric);
        debug!(module = module.name(), delta = result.delta, lines = result.feedback.len(), "rule module evaluated");

        base += result.delta;
        feedback.extend(result.feedback);
        module_deltas.push(ModuleDelta { module, delta: result.delta });
    }

    let base_score = base.max(0.0);

    let bonus = compute_bonuses(workbook, rubric);
    feedback.extend(bonus.feedback);

    let score = round_tenth(base_score + bonus.points);

    let summary = &rubric.messages.summary;
    let score_line = render(&summary.base, &[Arg::from(base_score)]);
    let bonus_line = if bonus.points > 0.0 {
        render(&summary.bonus_earned, &[Arg::from(bonus.points), Arg::from(score)])
    } else {
        render(&summary.bonus_none, &[Arg::from(score)])
    };
    feedback.push(score_line.clone());
    feedback.push(bonus_line.clone());

    debug!(base = base_score, bonus = bonus.points, score, "record graded");

    ScoreResult {
        score,
        max_score: MAX_SCORE,
        base_score,
        bonus_points: bonus.points,
        score_line,
        bonus_line,
        feedback_log: feedback.join("\n"),
        module_deltas,
        rubric_version: rubric.version_label.clone(),
    }
}

/// Grader bound to one rubric version
#[derive(Debug, Clone, Default)]
pub struct DesignScorer {
    rubric: RubricConfig,
}

impl DesignScorer {
    pub fn new(rubric: RubricConfig) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &RubricConfig {
        &self.rubric
    }

    pub fn score(&self, workbook: &Workbook) -> ScoreResult {
        grade_workbook(workbook, &self.rubric)
    }

    /// Grade many records sequentially
    pub fn score_batch(&self, workbooks: &[Workbook]) -> Vec<ScoreResult> {
        workbooks.iter().map(|wb| self.score(wb)).collect()
    }

    /// Grade many records IN PARALLEL
    ///
    /// Each record still runs the sequential pipeline, so transcripts are
    /// identical to [`DesignScorer::score`]. Output order matches input order.
    pub fn score_batch_parallel(&self, workbooks: &[Workbook]) -> Vec<ScoreResult> {
        workbooks.par_iter().map(|wb| self.score(wb)).collect()
    }
}
