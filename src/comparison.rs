//! Transcript Comparison
//!
//! Line-by-line diff of a produced transcript against a reference baseline.
//! Lines are normalized first: two mis-encoded comparison signs are repaired,
//! carriage returns are removed and trailing whitespace is trimmed. Trailing
//! blank lines are dropped; interior blank lines are kept. Comparison is
//! strictly positional.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RubricConfig;
use crate::data::Workbook;
use crate::error::GradeError;
use crate::scorer::{grade_workbook, ScoreResult};

/// "≥" read as Windows-1252 and re-encoded
const MISENCODED_GE: &str = "\u{e2}\u{2030}\u{a5}";
/// "≤" read as Windows-1252 and re-encoded
const MISENCODED_LE: &str = "\u{e2}\u{2030}\u{a4}";

/// Either pre-split lines or one block of text
#[derive(Debug, Clone)]
pub enum LogInput {
    Lines(Vec<String>),
    Text(String),
}

impl LogInput {
    fn into_lines(self) -> Vec<String> {
        match self {
            LogInput::Lines(lines) => lines,
            LogInput::Text(text) => text
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect(),
        }
    }
}

impl From<Vec<String>> for LogInput {
    fn from(lines: Vec<String>) -> Self {
        LogInput::Lines(lines)
    }
}

impl From<Vec<&str>> for LogInput {
    fn from(lines: Vec<&str>) -> Self {
        LogInput::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for LogInput {
    fn from(lines: &[&str]) -> Self {
        LogInput::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LogInput {
    fn from(lines: [&str; N]) -> Self {
        LogInput::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl From<&str> for LogInput {
    fn from(text: &str) -> Self {
        LogInput::Text(text.to_string())
    }
}

impl From<String> for LogInput {
    fn from(text: String) -> Self {
        LogInput::Text(text)
    }
}

pub fn normalize_line(line: &str) -> String {
    line.replace(MISENCODED_GE, "≥")
        .replace(MISENCODED_LE, "≤")
        .replace('\r', "")
        .trim_end()
        .to_string()
}

pub fn normalize_log(log: impl Into<LogInput>) -> Vec<String> {
    let mut lines: Vec<String> = log
        .into()
        .into_lines()
        .iter()
        .map(|line| normalize_line(line))
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// One compared position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    /// 1-based line number
    pub index: usize,
    pub expected: String,
    pub actual: String,
    pub matched: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub rows: Vec<DiffRow>,
    pub mismatches: usize,
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        self.mismatches == 0
    }

    pub fn mismatched_rows(&self) -> impl Iterator<Item = &DiffRow> {
        self.rows.iter().filter(|row| !row.matched)
    }
}

pub fn compare_logs(expected: impl Into<LogInput>, actual: impl Into<LogInput>) -> ComparisonResult {
    let expected = normalize_log(expected);
    let actual = normalize_log(actual);
    let len = expected.len().max(actual.len());

    let rows: Vec<DiffRow> = (0..len)
        .map(|i| {
            let expected = expected.get(i).cloned().unwrap_or_default();
            let actual = actual.get(i).cloned().unwrap_or_default();
            DiffRow {
                index: i + 1,
                matched: expected == actual,
                expected,
                actual,
            }
        })
        .collect();

    let mismatches = rows.iter().filter(|row| !row.matched).count();
    ComparisonResult { rows, mismatches }
}

/// Reference transcript for one submitted file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Baseline {
    pub file: String,
    #[serde(rename = "logLines")]
    pub log_lines: Vec<String>,
}

/// Reference transcripts keyed by file name
#[derive(Debug, Clone, Default)]
pub struct BaselineSet {
    baselines: Vec<Baseline>,
    index: FxHashMap<String, usize>,
}

impl BaselineSet {
    pub fn new(baselines: Vec<Baseline>) -> Self {
        // Later entries win, as with a map built from the list
        let index = baselines
            .iter()
            .enumerate()
            .map(|(i, b)| (b.file.clone(), i))
            .collect();
        Self { baselines, index }
    }

    /// Load a JSON array of `{ "file", "logLines" }` records
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read baseline file: {:?}", path))?;

        let baselines: Vec<Baseline> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse baseline JSON")?;

        info!(count = baselines.len(), "loaded reference baselines");
        Ok(Self::new(baselines))
    }

    pub fn get(&self, file: &str) -> Option<&Baseline> {
        self.index.get(file).map(|&i| &self.baselines[i])
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Baseline> {
        self.baselines.iter()
    }
}

/// Only spreadsheet uploads have reference transcripts
pub fn check_file_type(file: &str) -> Result<(), GradeError> {
    let lower = file.to_ascii_lowercase();
    if lower.ends_with(".xlsm") || lower.ends_with(".xlsx") {
        Ok(())
    } else {
        Err(GradeError::UnsupportedFile(file.to_string()))
    }
}

/// Outcome of grading one record against its baseline
#[derive(Debug, Clone, Serialize)]
pub struct Verification {
    pub file: String,
    pub score: ScoreResult,
    pub comparison: ComparisonResult,
}

impl Verification {
    pub fn outcome_text(&self) -> String {
        outcome_text(&self.file, &self.comparison)
    }
}

pub fn outcome_text(file: &str, comparison: &ComparisonResult) -> String {
    if comparison.is_match() {
        format!("\u{2705} Match: {}", file)
    } else {
        format!("\u{274c} {} mismatched line(s) for {}", comparison.mismatches, file)
    }
}

/// Grade `workbook` and diff its transcript against the stored baseline
pub fn verify(
    workbook: &Workbook,
    rubric: &RubricConfig,
    baselines: &BaselineSet,
) -> Result<Verification, GradeError> {
    let file = workbook.file_name.clone().unwrap_or_default();
    check_file_type(&file)?;

    let baseline = baselines
        .get(&file)
        .ok_or_else(|| GradeError::BaselineNotFound(file.clone()))?;

    let score = grade_workbook(workbook, rubric);
    let comparison = compare_logs(baseline.log_lines.clone(), score.feedback_log.as_str());

    Ok(Verification { file, score, comparison })
}

/// Plain-text table of mismatched rows
pub fn render_mismatches(comparison: &ComparisonResult) -> String {
    comparison
        .mismatched_rows()
        .map(|row| format!("{:>4} | expected: {}\n     |   actual: {}", row.index, row.expected, row.actual))
        .collect::<Vec<_>>()
        .join("\n")
}
