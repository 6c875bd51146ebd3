//! Record Model and Cell Access
//!
//! A graded submission is a workbook: a set of named tables, each mapping a
//! cell reference ("B32", "AB3") to a raw value. The ingestion collaborator
//! produces it already keyed by lower-case table names.
//!
//! All numeric coercion goes through [`CellValue::as_number`], which never
//! fails: anything that is not a usable number becomes NaN, and every rule
//! treats NaN as a violation.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Tables the rubric reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableName {
    Main,
    Geometry,
    Constants,
    Gear,
    Mission,
    Aerodynamics,
}

impl TableName {
    pub const ALL: [TableName; 6] = [
        TableName::Main,
        TableName::Geometry,
        TableName::Constants,
        TableName::Gear,
        TableName::Mission,
        TableName::Aerodynamics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Main => "main",
            TableName::Geometry => "geometry",
            TableName::Constants => "constants",
            TableName::Gear => "gear",
            TableName::Mission => "mission",
            TableName::Aerodynamics => "aerodynamics",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value of a single cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

static EMPTY: CellValue = CellValue::Empty;

impl CellValue {
    /// Coerce to a number; NaN when the value is absent or not numeric
    pub fn as_number(&self) -> f64 {
        match self {
            CellValue::Number(v) => *v,
            CellValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return f64::NAN;
                }
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
            CellValue::Empty => f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Number(f64::from(v))
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

/// Convert a 1-based column index to spreadsheet letters (1 → "A", 28 → "AB")
pub fn column_letters(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        col = (col - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Build a cell reference from a row number and 1-based column index
pub fn cell_ref(row: u32, col: u32) -> String {
    format!("{}{}", column_letters(col), row)
}

/// A single table ("sheet") of the record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    cells: FxHashMap<String, CellValue>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value; references are upper-cased so lookups are case-insensitive
    pub fn insert(&mut self, reference: &str, value: impl Into<CellValue>) {
        self.cells.insert(reference.trim().to_ascii_uppercase(), value.into());
    }

    /// Raw value at `reference`, or [`CellValue::Empty`] when absent
    pub fn get(&self, reference: &str) -> &CellValue {
        if let Some(value) = self.cells.get(reference) {
            return value;
        }
        self.cells
            .get(&reference.trim().to_ascii_uppercase())
            .unwrap_or(&EMPTY)
    }

    /// Numeric value at `reference` (NaN when missing or non-numeric)
    pub fn number(&self, reference: &str) -> f64 {
        self.get(reference).as_number()
    }

    /// Raw value by row number and 1-based column index
    pub fn get_at(&self, row: u32, col: u32) -> &CellValue {
        self.get(&cell_ref(row, col))
    }

    /// Numeric value by row number and 1-based column index
    pub fn number_at(&self, row: u32, col: u32) -> f64 {
        self.get_at(row, col).as_number()
    }

    pub fn contains(&self, reference: &str) -> bool {
        !self.get(reference).is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The structured design record handed to the grader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    /// Original upload name, echoed as the first transcript line
    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub sheets: FxHashMap<String, Table>,
}

static EMPTY_TABLE: std::sync::OnceLock<Table> = std::sync::OnceLock::new();

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            sheets: FxHashMap::default(),
        }
    }

    /// Load a record serialized as JSON
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read record file: {:?}", path))?;

        Self::from_json_str(&contents)
            .with_context(|| format!("Failed to parse record JSON: {:?}", path))
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let mut workbook: Workbook = serde_json::from_str(contents)?;

        // Re-insert so every reference is normalized the same way as `Table::insert`
        for table in workbook.sheets.values_mut() {
            let cells = std::mem::take(&mut table.cells);
            for (reference, value) in cells {
                table.insert(&reference, value);
            }
        }

        Ok(workbook)
    }

    /// Table by name; an absent table behaves as an empty one
    pub fn table(&self, name: TableName) -> &Table {
        self.sheets
            .get(name.as_str())
            .unwrap_or_else(|| EMPTY_TABLE.get_or_init(Table::new))
    }

    pub fn table_mut(&mut self, name: TableName) -> &mut Table {
        self.sheets.entry(name.as_str().to_string()).or_default()
    }

    /// Set a cell value, creating the table if needed
    pub fn set(&mut self, name: TableName, reference: &str, value: impl Into<CellValue>) {
        self.table_mut(name).insert(reference, value);
    }

    /// Raw value of `name!reference`
    pub fn cell(&self, name: TableName, reference: &str) -> &CellValue {
        self.table(name).get(reference)
    }

    /// Numeric value of `name!reference` (NaN when missing or non-numeric)
    pub fn number(&self, name: TableName, reference: &str) -> f64 {
        self.table(name).number(reference)
    }

    pub fn number_at(&self, name: TableName, row: u32, col: u32) -> f64 {
        self.table(name).number_at(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(19), "S");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(28), "AB");
        assert_eq!(column_letters(31), "AE");
        assert_eq!(cell_ref(22, 11), "K22");
    }

    #[test]
    fn test_as_number_coercion() {
        assert_eq!(CellValue::Number(2.5).as_number(), 2.5);
        assert_eq!(CellValue::Text(" 410 ".into()).as_number(), 410.0);
        assert_eq!(CellValue::Bool(true).as_number(), 1.0);
        assert!(CellValue::Text("n/a".into()).as_number().is_nan());
        assert!(CellValue::Text("".into()).as_number().is_nan());
        assert!(CellValue::Empty.as_number().is_nan());
    }

    #[test]
    fn test_missing_table_and_cell() {
        let wb = Workbook::new();
        assert!(wb.cell(TableName::Gear, "J20").is_empty());
        assert!(wb.number(TableName::Gear, "J20").is_nan());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut wb = Workbook::new();
        wb.set(TableName::Main, "ab3", 8.0);
        assert_eq!(wb.number(TableName::Main, "AB3"), 8.0);
        assert_eq!(wb.number_at(TableName::Main, 3, 28), 8.0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "file_name": "Team7.xlsm",
            "sheets": {
                "main": { "b32": 60, "N31": "187", "C26": null },
                "gear": { "J20": 88.5 }
            }
        }"#;

        let wb = Workbook::from_json_str(json).unwrap();
        assert_eq!(wb.file_name.as_deref(), Some("Team7.xlsm"));
        assert_eq!(wb.number(TableName::Main, "B32"), 60.0);
        assert_eq!(wb.number(TableName::Main, "N31"), 187.0);
        assert!(wb.cell(TableName::Main, "C26").is_empty());
        assert_eq!(wb.number(TableName::Gear, "J20"), 88.5);
    }
}
