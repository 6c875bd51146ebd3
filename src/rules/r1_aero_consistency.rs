//! RULE 1: AERODYNAMIC CONSISTENCY
//!
//! The design template ships lift/drag polar cells whose paired entries hold
//! identical placeholder values. A submission that still has a pair of equal
//! cells has not updated its aero tab.
//!
//! Pairs are compared on the raw cell value, so two absent cells are equal.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;

const MAX_DEDUCTION: usize = 3;

const PAIRS: [(&str, &str); 3] = [("G3", "G4"), ("G10", "G11"), ("A15", "A16")];

pub fn check_aero_consistency(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let aero = workbook.table(TableName::Aerodynamics);

    let failures = PAIRS
        .iter()
        .filter(|(a, b)| aero.get(a) == aero.get(b))
        .count();

    CheckResult::capped(failures, MAX_DEDUCTION, Vec::new(), &rubric.messages.aero.mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updated_aero() -> Workbook {
        let mut wb = Workbook::new();
        for (cell, value) in [("G3", 0.5), ("G4", 0.6), ("G10", 0.02), ("G11", 0.03), ("A15", 1.0), ("A16", 2.0)] {
            wb.set(TableName::Aerodynamics, cell, value);
        }
        wb
    }

    #[test]
    fn test_distinct_pairs_pass() {
        let result = check_aero_consistency(&updated_aero(), &RubricConfig::default());
        assert_eq!(result.delta, 0.0);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_duplicate_pair_deducts_once() {
        let mut wb = updated_aero();
        wb.set(TableName::Aerodynamics, "G11", 0.02);

        let result = check_aero_consistency(&wb, &RubricConfig::default());
        assert_eq!(result.delta, -1.0);
        assert_eq!(result.feedback.len(), 1);
        assert!(result.feedback[0].starts_with("-1:"));
    }

    #[test]
    fn test_absent_pairs_count_as_equal() {
        let result = check_aero_consistency(&Workbook::new(), &RubricConfig::default());
        assert_eq!(result.delta, -3.0);
        assert!(result.feedback[0].starts_with("-3:"));
    }
}
