//! Rubric Configuration
//!
//! One rubric version per grading run. The built-in rubric is returned by
//! `RubricConfig::default()`; a JSON file can override any subset of it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{warn, Level};

use crate::data::{TableName, Workbook};
use crate::messages::Messages;

/// Cells a table is expected to carry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetRules {
    pub table: Option<TableName>,
    pub fallback_cells: Vec<String>,
}

impl SheetRules {
    fn new(table: TableName, cells: &[&str]) -> Self {
        Self {
            table: Some(table),
            fallback_cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Immutable rubric passed by reference to every rule module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RubricConfig {
    pub version_label: String,
    /// Version of the reference grader whose transcripts we must reproduce
    pub reference_version: String,
    pub sheets: Vec<SheetRules>,
    pub macro_warning_text: String,
    pub messages: Messages,
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            version_label: "Final Project Grader 2025 v0_1".into(),
            reference_version: "GE5_autograde_Olmstead_Fall_2025_v01".into(),
            sheets: default_sheets(),
            macro_warning_text: "This workbook was saved as .xlsx; save as a macro-enabled (.xlsm) file outside Downloads to retain JET macros and Ps plotting.".into(),
            messages: Messages::default(),
        }
    }
}

impl RubricConfig {
    /// Load a rubric override from JSON; absent fields keep the built-in values
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rubric file: {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| "Failed to parse rubric JSON")
    }

    pub fn fallback_cells(&self, table: TableName) -> &[String] {
        self.sheets
            .iter()
            .find(|sheet| sheet.table == Some(table))
            .map(|sheet| sheet.fallback_cells.as_slice())
            .unwrap_or(&[])
    }

    /// Expected cells the record does not carry, as `(table, reference)`
    ///
    /// Absent cells are graded as NaN; this only reports them.
    pub fn missing_fallback_cells(&self, workbook: &Workbook) -> Vec<(TableName, String)> {
        let mut missing: Vec<(TableName, String)> = Vec::new();
        for table in TableName::ALL {
            let cells = workbook.table(table);
            for reference in self.fallback_cells(table) {
                if !cells.contains(reference) && !missing.iter().any(|(t, r)| *t == table && r == reference) {
                    missing.push((table, reference.clone()));
                }
            }
        }
        missing
    }

    /// Warn once per record about absent expected cells
    pub fn warn_missing_fallback_cells(&self, workbook: &Workbook) {
        if !tracing::enabled!(Level::WARN) {
            return;
        }
        let missing = self.missing_fallback_cells(workbook);
        if missing.is_empty() {
            return;
        }
        let cells = missing
            .iter()
            .map(|(table, reference)| format!("{}!{}", table, reference))
            .collect::<Vec<_>>()
            .join(", ");
        warn!(
            file = workbook.file_name.as_deref().unwrap_or("<unnamed>"),
            count = missing.len(),
            cells = %cells,
            "record is missing expected cells"
        );
    }
}

fn default_sheets() -> Vec<SheetRules> {
    vec![
        SheetRules::new(
            TableName::Aerodynamics,
            &["G3", "G4", "G10", "G11", "A15", "A16"],
        ),
        SheetRules::new(
            TableName::Mission,
            &[
                "C48", "D48", "E48", "F48", "G48", "H48", "I48", "J48", "K48", "L48", "M48", "N48",
                "C49", "D49", "E49", "F49", "G49", "H49", "I49", "J49", "K49", "L49", "M49", "N49",
            ],
        ),
        SheetRules::new(
            TableName::Main,
            &[
                "S3", "T3", "U3", "V3", "W3", "X3", "Y3",
                "S4", "T4", "U4", "V4", "W4", "X4", "Y4",
                "S5", "S6", "S7", "S8", "S9",
                "T6", "U6", "V6", "W6", "X6", "Y6",
                "T7", "U7", "V7", "W7", "X7", "Y7",
                "T8", "U8", "V8", "W8", "X8", "Y8",
                "T9", "U9", "V9", "W9", "X9", "Y9",
                "S12", "S13",
                "AB3", "AB4", "X12", "X13", "Y37",
                "M10", "O10", "P10", "Q10",
                "O18", "X40", "Q23", "Q31", "N31",
                "P13", "Q13",
                "B19", "C19", "D19", "H19",
                "B21", "C21", "D21", "H21",
                "B23", "C23", "D23", "H23",
                "C24", "D24", "H24",
                "C26", "D26", "H26",
                "B27", "C27", "D27", "H27",
                "F31", "F32", "H29", "I29",
                "E34", "E35", "E36", "E37", "E38", "E39", "E40", "E41", "E42", "E43",
                "E44", "E45", "E46", "E47", "E48", "E49", "E50", "E51", "E52", "E53",
                "K33", "L33", "M33", "N33", "P33", "R33", "S33", "V33", "W33",
                "K35", "L35", "M35", "N35", "P35", "R35", "S35", "V35", "W35",
                "K36", "L36", "M36", "N36", "P36", "R36", "S36", "V36", "W36",
                "K38", "L38", "M38", "N38", "P38", "R38", "S38", "V38", "W38",
                "K39", "L39", "M39", "N39", "P39", "R39", "S39", "V39", "W39",
                "B32", "C18", "C20", "C22", "C25",
                "D18", "D20", "D22", "D25",
                "H18", "H20", "H22", "H25",
                "D52", "F52", "E52",
            ],
        ),
        SheetRules::new(
            TableName::Constants,
            &["K22", "K23", "K24", "K26", "K27", "K28", "K29", "K32", "K33", "L33", "AO42", "AQ41"],
        ),
        SheetRules::new(
            TableName::Gear,
            &["J20", "L20", "L21", "M20", "M21", "N20"],
        ),
        SheetRules::new(
            TableName::Geometry,
            &["C8", "C10", "M152", "K15", "L155", "L38"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rubric_labels() {
        let rubric = RubricConfig::default();
        assert_eq!(rubric.version_label, "Final Project Grader 2025 v0_1");
        assert_eq!(rubric.reference_version, "GE5_autograde_Olmstead_Fall_2025_v01");
        assert!(rubric.macro_warning_text.contains(".xlsm"));
        assert_eq!(rubric.fallback_cells(TableName::Gear).len(), 6);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{
            "version_label": "Spring rubric",
            "messages": { "fuel": { "deduction": "-%d: Fuel" } }
        }"#;
        let rubric: RubricConfig = serde_json::from_str(json).unwrap();

        assert_eq!(rubric.version_label, "Spring rubric");
        assert_eq!(rubric.messages.fuel.deduction, "-%d: Fuel");
        // Untouched siblings keep built-in wording
        assert_eq!(rubric.messages.fuel.missing, Messages::default().fuel.missing);
        assert_eq!(rubric.sheets.len(), 6);
    }

    #[test]
    fn test_missing_fallback_cells() {
        let rubric = RubricConfig::default();
        let mut workbook = Workbook::new();
        for cell in ["J20", "L20", "L21", "M20", "M21"] {
            workbook.set(TableName::Gear, cell, 1.0);
        }

        let missing = rubric.missing_fallback_cells(&workbook);
        assert!(missing.contains(&(TableName::Gear, "N20".to_string())));
        assert!(!missing.contains(&(TableName::Gear, "J20".to_string())));
    }

    #[test]
    fn test_missing_cells_follow_overridden_sheet_lists() {
        let json = r#"{ "sheets": [ { "table": "gear", "fallback_cells": ["Z1", "J20"] } ] }"#;
        let rubric: RubricConfig = serde_json::from_str(json).unwrap();
        let mut workbook = Workbook::new();
        workbook.set(TableName::Gear, "J20", 90.0);

        assert_eq!(rubric.fallback_cells(TableName::Main), &[] as &[String]);
        assert_eq!(
            rubric.missing_fallback_cells(&workbook),
            vec![(TableName::Gear, "Z1".to_string())]
        );
    }
}
