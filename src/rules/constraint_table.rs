//! Declarative constraint-table requirements
//!
//! Rows 3..13 of the main table describe the performance points the
//! constraint diagram is built from. Columns S..Y hold, in order, the weight
//! fraction, altitude, Mach, load factor, afterburner setting, specific excess
//! power and drag index used at that point. Each point pins some of these to
//! a value and sets minimums (with optional objectives) on others.

use crate::data::Table;
use crate::messages::ConstraintMessages;
use crate::utils::tolerance::{ALT_TOL, MACH_TOL, PS_TOL};
use crate::utils::{at_least, render, within, Arg};

const VALUE_TOL: f64 = 1e-3;
const CDX_TOL: f64 = 1e-3;

/// Mission fuel fraction at the start of combat
pub const BETA_COMBAT: f64 = 0.87620980519917;

const BETA_COLUMN: u32 = 19; // S
const ALTITUDE_COLUMN: u32 = 20; // T
const MACH_COLUMN: u32 = 21; // U
const LOAD_FACTOR_COLUMN: u32 = 22; // V
const AFTERBURNER_COLUMN: u32 = 23; // W
const PS_COLUMN: u32 = 24; // X
const CDX_COLUMN: u32 = 25; // Y

/// Requirement on one constraint-table quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    Equal(f64),
    Minimum { min: f64, objective: Option<f64> },
    OneOf(&'static [f64]),
}

/// Requirements for one performance point
#[derive(Debug, Clone, Copy)]
pub struct ConstraintSpec {
    pub label: &'static str,
    pub row: u32,
    pub beta: Requirement,
    pub altitude: Requirement,
    pub mach: Requirement,
    pub load_factor: Requirement,
    pub afterburner: Requirement,
    pub ps: Requirement,
    pub cdx: Requirement,
}

/// Takeoff and landing also read their field lengths from the Ps column, so
/// a nonzero field length there is reported as a Ps violation too.
pub const CONSTRAINT_SPECS: [ConstraintSpec; 8] = [
    ConstraintSpec {
        label: "MaxMach",
        row: 3,
        beta: Requirement::Equal(BETA_COMBAT),
        altitude: Requirement::Minimum { min: 35_000.0, objective: None },
        mach: Requirement::Minimum { min: 2.0, objective: Some(2.2) },
        load_factor: Requirement::Equal(1.0),
        afterburner: Requirement::Equal(100.0),
        ps: Requirement::Equal(0.0),
        cdx: Requirement::Equal(0.0),
    },
    ConstraintSpec {
        label: "CruiseMach",
        row: 4,
        beta: Requirement::Equal(BETA_COMBAT),
        altitude: Requirement::Minimum { min: 35_000.0, objective: None },
        mach: Requirement::Minimum { min: 1.5, objective: Some(1.8) },
        load_factor: Requirement::Equal(1.0),
        afterburner: Requirement::Equal(0.0),
        ps: Requirement::Equal(0.0),
        cdx: Requirement::Equal(0.0),
    },
    ConstraintSpec {
        label: "Cmbt Turn1",
        row: 6,
        beta: Requirement::Equal(BETA_COMBAT),
        altitude: Requirement::Equal(30_000.0),
        mach: Requirement::Equal(1.2),
        load_factor: Requirement::Minimum { min: 3.0, objective: Some(4.0) },
        afterburner: Requirement::Equal(100.0),
        ps: Requirement::Equal(0.0),
        cdx: Requirement::Equal(0.0),
    },
    ConstraintSpec {
        label: "Cmbt Turn2",
        row: 7,
        beta: Requirement::Equal(BETA_COMBAT),
        altitude: Requirement::Equal(10_000.0),
        mach: Requirement::Equal(0.9),
        load_factor: Requirement::Minimum { min: 4.0, objective: Some(4.5) },
        afterburner: Requirement::Equal(100.0),
        ps: Requirement::Equal(0.0),
        cdx: Requirement::Equal(0.0),
    },
    ConstraintSpec {
        label: "Ps1",
        row: 8,
        beta: Requirement::Equal(BETA_COMBAT),
        altitude: Requirement::Equal(30_000.0),
        mach: Requirement::Equal(1.15),
        load_factor: Requirement::Equal(1.0),
        afterburner: Requirement::Equal(100.0),
        ps: Requirement::Minimum { min: 400.0, objective: Some(500.0) },
        cdx: Requirement::Equal(0.0),
    },
    ConstraintSpec {
        label: "Ps2",
        row: 9,
        beta: Requirement::Equal(BETA_COMBAT),
        altitude: Requirement::Equal(10_000.0),
        mach: Requirement::Equal(0.9),
        load_factor: Requirement::Equal(1.0),
        afterburner: Requirement::Equal(0.0),
        ps: Requirement::Minimum { min: 400.0, objective: Some(500.0) },
        cdx: Requirement::Equal(0.0),
    },
    ConstraintSpec {
        label: "Takeoff",
        row: 12,
        beta: Requirement::Equal(1.0),
        altitude: Requirement::Equal(0.0),
        mach: Requirement::Equal(1.2),
        load_factor: Requirement::Equal(0.03),
        afterburner: Requirement::Equal(100.0),
        ps: Requirement::Equal(0.0),
        cdx: Requirement::OneOf(&[0.0, 0.035]),
    },
    ConstraintSpec {
        label: "Landing",
        row: 13,
        beta: Requirement::Equal(1.0),
        altitude: Requirement::Equal(0.0),
        mach: Requirement::Equal(1.3),
        load_factor: Requirement::Equal(0.5),
        afterburner: Requirement::Equal(0.0),
        ps: Requirement::Equal(0.0),
        cdx: Requirement::OneOf(&[0.0, 0.045]),
    },
];

/// Templates for one quantity: (equality, minimum, objective)
struct Templates<'a> {
    eq: &'a str,
    min: &'a str,
    obj: &'a str,
}

/// Checks one quantity, pushing its lines; returns the violation count
fn check_quantity(
    label: &str,
    requirement: Requirement,
    value: f64,
    tol: f64,
    templates: &Templates<'_>,
    feedback: &mut Vec<String>,
) -> usize {
    match requirement {
        Requirement::Equal(expected) => {
            if within(value, expected, tol) {
                0
            } else {
                feedback.push(render(templates.eq, &[label.into(), value.into(), expected.into()]));
                1
            }
        }
        Requirement::Minimum { min, objective } => {
            if !at_least(value, min, tol) {
                feedback.push(render(templates.min, &[label.into(), value.into(), min.into()]));
                return 1;
            }
            if let Some(objective) = objective.filter(|&obj| at_least(value, obj, tol)) {
                feedback.push(render(templates.obj, &[label.into(), objective.into(), value.into()]));
            }
            0
        }
        Requirement::OneOf(allowed) => {
            if allowed.iter().any(|&a| within(value, a, tol)) {
                0
            } else {
                let allowed_text = allowed
                    .iter()
                    .map(|a| format!("{:.3}", a))
                    .collect::<Vec<_>>()
                    .join(", ");
                feedback.push(render(
                    templates.eq,
                    &[label.into(), value.into(), Arg::Text(&allowed_text)],
                ));
                1
            }
        }
    }
}

impl ConstraintSpec {
    /// Check this point's row; returns the number of violations
    pub fn check(&self, main: &Table, messages: &ConstraintMessages, feedback: &mut Vec<String>) -> usize {
        let read = |col| main.number_at(self.row, col);
        let label = self.label;
        let mut violations = 0;

        violations += check_quantity(
            label,
            self.mach,
            read(MACH_COLUMN),
            MACH_TOL,
            &Templates { eq: &messages.mach_eq, min: &messages.mach_min, obj: &messages.mach_obj },
            feedback,
        );
        violations += check_quantity(
            label,
            self.altitude,
            read(ALTITUDE_COLUMN),
            ALT_TOL,
            &Templates { eq: &messages.alt_eq, min: &messages.alt_min, obj: "" },
            feedback,
        );
        violations += check_quantity(
            label,
            self.load_factor,
            read(LOAD_FACTOR_COLUMN),
            VALUE_TOL,
            &Templates { eq: &messages.n_eq, min: &messages.n_min, obj: &messages.n_obj },
            feedback,
        );
        violations += check_quantity(
            label,
            self.afterburner,
            read(AFTERBURNER_COLUMN),
            VALUE_TOL,
            &Templates { eq: &messages.ab_eq, min: "", obj: "" },
            feedback,
        );
        violations += check_quantity(
            label,
            self.ps,
            read(PS_COLUMN),
            PS_TOL,
            &Templates { eq: &messages.ps_eq, min: &messages.ps_min, obj: &messages.ps_obj },
            feedback,
        );
        violations += check_quantity(
            label,
            self.beta,
            read(BETA_COLUMN),
            VALUE_TOL,
            &Templates { eq: &messages.beta_eq, min: "", obj: "" },
            feedback,
        );

        let cdx_eq = match self.cdx {
            Requirement::OneOf(_) => &messages.cdx_allowed,
            _ => &messages.cdx_eq,
        };
        violations += check_quantity(
            label,
            self.cdx,
            read(CDX_COLUMN),
            CDX_TOL,
            &Templates { eq: cdx_eq, min: "", obj: "" },
            feedback,
        );

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cell_ref;

    fn row_values(spec: &ConstraintSpec, values: [f64; 7]) -> Table {
        let mut table = Table::new();
        for (offset, value) in values.iter().enumerate() {
            table.insert(&cell_ref(spec.row, BETA_COLUMN + offset as u32), *value);
        }
        table
    }

    #[test]
    fn test_max_mach_row_passes_with_objective_line() {
        let spec = &CONSTRAINT_SPECS[0];
        let table = row_values(spec, [BETA_COMBAT, 35_000.0, 2.2, 1.0, 100.0, 0.0, 0.0]);
        let messages = ConstraintMessages::default();
        let mut feedback = Vec::new();

        assert_eq!(spec.check(&table, &messages, &mut feedback), 0);
        assert_eq!(feedback, vec!["MaxMach: Mach objective of 2.20 met (2.20)"]);
    }

    #[test]
    fn test_takeoff_cdx_allowed_set() {
        let spec = &CONSTRAINT_SPECS[6];
        let messages = ConstraintMessages::default();

        let ok = row_values(spec, [1.0, 0.0, 1.2, 0.03, 100.0, 0.0, 0.035]);
        let mut feedback = Vec::new();
        assert_eq!(spec.check(&ok, &messages, &mut feedback), 0);
        assert!(feedback.is_empty());

        let bad = row_values(spec, [1.0, 0.0, 1.2, 0.03, 100.0, 0.0, 0.02]);
        let mut feedback = Vec::new();
        assert_eq!(spec.check(&bad, &messages, &mut feedback), 1);
        assert_eq!(feedback, vec!["Takeoff: CDx is 0.020, must be one of 0.000, 0.035"]);
    }

    #[test]
    fn test_missing_row_fails_every_checked_quantity() {
        let messages = ConstraintMessages::default();
        for spec in &CONSTRAINT_SPECS {
            let mut feedback = Vec::new();
            assert_eq!(spec.check(&Table::new(), &messages, &mut feedback), 7, "{}", spec.label);
            assert_eq!(feedback.len(), 7);
        }
    }

    #[test]
    fn test_field_rows_require_zero_ps() {
        let messages = ConstraintMessages::default();
        let takeoff = &CONSTRAINT_SPECS[6];
        let landing = &CONSTRAINT_SPECS[7];

        let table = row_values(takeoff, [1.0, 0.0, 1.2, 0.03, 100.0, 2500.0, 0.0]);
        let mut feedback = Vec::new();
        assert_eq!(takeoff.check(&table, &messages, &mut feedback), 1);
        assert_eq!(feedback, vec!["Takeoff: Ps is 2500 ft/s, should be 0 ft/s"]);

        let table = row_values(landing, [1.0, 0.0, 1.3, 0.5, 0.0, 3500.0, 0.045]);
        let mut feedback = Vec::new();
        assert_eq!(landing.check(&table, &messages, &mut feedback), 1);
        assert_eq!(feedback, vec!["Landing: Ps is 3500 ft/s, should be 0 ft/s"]);
    }

    #[test]
    fn test_turn_load_factor_below_threshold() {
        let spec = &CONSTRAINT_SPECS[2];
        let table = row_values(spec, [BETA_COMBAT, 30_000.0, 1.2, 2.5, 100.0, 0.0, 0.0]);
        let mut feedback = Vec::new();

        assert_eq!(spec.check(&table, &ConstraintMessages::default(), &mut feedback), 1);
        assert_eq!(feedback, vec!["Cmbt Turn1: n of 2.50 is below the 3.00 threshold"]);
    }
}
