//! RULE 4: PERFORMANCE CONSTRAINTS
//!
//! Three independent deduction channels:
//!   - **Table** (cap 2): combat radius, field lengths, the constraint-table
//!     rows and the presence of a design point
//!   - **Payload** (-4): fewer than eight AIM-120s
//!   - **Curves** (-4 for one failure, -8 for two or more): the design point
//!     (W/S, T/W) must sit on or above every constraint curve and inside the
//!     landing wing-loading limit
//!
//! Curves are tabulated on the constants table: W/S axis in row 22 (K..AE),
//! one required-T/W row per performance point.

use tracing::debug;

use crate::config::RubricConfig;
use crate::data::{CellValue, TableName, Workbook};
use crate::error::GradeError;
use crate::rules::constraint_table::CONSTRAINT_SPECS;
use crate::rules::CheckResult;
use crate::utils::tolerance::DIST_TOL;
use crate::utils::{at_least, at_most, interpolate_cells, render, Arg};

const TABLE_CAP: usize = 2;
const PAYLOAD_PENALTY: f64 = 4.0;
const SINGLE_CURVE_PENALTY: u32 = 4;
const MULTI_CURVE_PENALTY: u32 = 8;
/// More failures than this switch to the alternate closing phrase
const FEW_CURVE_FAILURES: usize = 6;

pub const RADIUS_THRESHOLD: f64 = 375.0;
pub const RADIUS_OBJECTIVE: f64 = 410.0;
pub const AIM120_REQUIRED: f64 = 8.0;
pub const AIM9_OBJECTIVE: f64 = 2.0;
pub const TAKEOFF_THRESHOLD: f64 = 3000.0;
pub const TAKEOFF_OBJECTIVE: f64 = 2500.0;
pub const LANDING_THRESHOLD: f64 = 5000.0;
pub const LANDING_OBJECTIVE: f64 = 3500.0;

const CURVE_AXIS_ROW: u32 = 22;
const CURVE_FIRST_COLUMN: u32 = 11; // K
const CURVE_LAST_COLUMN: u32 = 31; // AE

/// Required-T/W rows on the constants table
const CURVE_ROWS: [(u32, &str); 7] = [
    (23, "MaxMach"),
    (24, "Supercruise"),
    (26, "CombatTurn1"),
    (27, "CombatTurn2"),
    (28, "Ps1"),
    (29, "Ps2"),
    (32, "Takeoff"),
];

/// Per-channel outcome of the performance-constraint checks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintCheckResult {
    pub table_delta: f64,
    pub payload_delta: f64,
    pub curve_delta: f64,
    pub feedback: Vec<String>,
}

impl ConstraintCheckResult {
    pub fn total_delta(&self) -> f64 {
        self.table_delta + self.payload_delta + self.curve_delta
    }
}

impl From<ConstraintCheckResult> for CheckResult {
    fn from(result: ConstraintCheckResult) -> Self {
        CheckResult::new(result.total_delta(), result.feedback)
    }
}

pub fn check_performance_constraints(workbook: &Workbook, rubric: &RubricConfig) -> ConstraintCheckResult {
    let messages = &rubric.messages.constraint;
    let main = workbook.table(TableName::Main);
    let mut feedback = Vec::new();
    let mut table_errors = 0;

    // Combat radius
    let radius = main.number("Y37");
    if !at_least(radius, RADIUS_THRESHOLD, 0.0) {
        feedback.push(render(&messages.radius_low, &[radius.into()]));
        table_errors += 1;
    } else if at_least(radius, RADIUS_OBJECTIVE, DIST_TOL) {
        feedback.push(render(&messages.radius_obj, &[radius.into()]));
    }

    // Payload
    let aim120 = main.number("AB3");
    let aim9 = main.number("AB4");
    let mut payload_delta = 0.0;
    if !at_least(aim120, AIM120_REQUIRED, 0.0) {
        let shown = if aim120.is_finite() { aim120 } else { 0.0 };
        feedback.push(render(&messages.payload_penalty, &[shown.into()]));
        payload_delta -= PAYLOAD_PENALTY;
    } else if at_least(aim9, AIM9_OBJECTIVE, 0.0) {
        feedback.push(render(&messages.payload_obj, &[aim120.into(), aim9.into()]));
    }

    // Field lengths
    let takeoff = main.number("X12");
    if !at_most(takeoff, TAKEOFF_THRESHOLD, 0.0) {
        feedback.push(render(&messages.takeoff_high, &[takeoff.into()]));
        table_errors += 1;
    } else if at_most(takeoff, TAKEOFF_OBJECTIVE, DIST_TOL) {
        feedback.push(render(&messages.takeoff_obj, &[takeoff.into()]));
    }

    let landing = main.number("X13");
    if !at_most(landing, LANDING_THRESHOLD, 0.0) {
        feedback.push(render(&messages.landing_high, &[landing.into()]));
        table_errors += 1;
    } else if at_most(landing, LANDING_OBJECTIVE, DIST_TOL) {
        feedback.push(render(&messages.landing_obj, &[landing.into()]));
    }

    // Constraint table rows
    for spec in &CONSTRAINT_SPECS {
        table_errors += spec.check(main, messages, &mut feedback);
    }

    let ws_design = main.number("P13");
    let tw_design = main.number("Q13");
    let design_point = ws_design.is_finite() && tw_design.is_finite();
    if !design_point {
        feedback.push(messages.design_point_missing.clone());
        table_errors += 1;
    }

    let table_deduction = table_errors.min(TABLE_CAP);
    if table_deduction > 0 {
        feedback.push(render(&messages.summary, &[Arg::from(table_deduction)]));
    }

    // Constraint curves
    let curve_delta = if design_point {
        let curves = CurveSet::read(workbook);
        let landing_limit = workbook.number(TableName::Constants, "L33");
        curve_channel(&curves, ws_design, tw_design, landing_limit, rubric, &mut feedback)
    } else {
        0.0
    };

    let result = ConstraintCheckResult {
        table_delta: -(table_deduction as f64),
        payload_delta,
        curve_delta,
        feedback,
    };
    debug!(
        table = result.table_delta,
        payload = result.payload_delta,
        curve = result.curve_delta,
        "performance constraints evaluated"
    );
    result
}

/// W/S axis plus one required-T/W row per performance point
struct CurveSet {
    axis: Vec<CellValue>,
    curves: Vec<(&'static str, Vec<CellValue>)>,
}

impl CurveSet {
    fn read(workbook: &Workbook) -> Self {
        let consts = workbook.table(TableName::Constants);
        let row_cells = |row: u32| {
            (CURVE_FIRST_COLUMN..=CURVE_LAST_COLUMN)
                .map(|col| consts.get_at(row, col).clone())
                .collect::<Vec<_>>()
        };
        Self {
            axis: row_cells(CURVE_AXIS_ROW),
            curves: CURVE_ROWS.iter().map(|&(row, label)| (label, row_cells(row))).collect(),
        }
    }

    /// Labels of curves whose required T/W exceeds the design T/W
    ///
    /// A curve with fewer than two usable points is skipped.
    fn failures(&self, ws_design: f64, tw_design: f64) -> Result<Vec<&'static str>, GradeError> {
        let mut failures = Vec::new();
        for (label, curve) in &self.curves {
            if let Some(required) = interpolate_cells(label, &self.axis, curve, ws_design)? {
                if tw_design < required {
                    failures.push(*label);
                }
            }
        }
        Ok(failures)
    }
}

/// Curve channel delta; an evaluation error becomes a single feedback line
/// and no deduction
fn curve_channel(
    curves: &CurveSet,
    ws_design: f64,
    tw_design: f64,
    landing_limit: f64,
    rubric: &RubricConfig,
    feedback: &mut Vec<String>,
) -> f64 {
    let messages = &rubric.messages.constraint;
    let mut failures = match curves.failures(ws_design, tw_design) {
        Ok(failures) => failures,
        Err(err) => {
            let reason = err.to_string();
            feedback.push(render(&messages.curve_error, &[Arg::Text(&reason)]));
            return 0.0;
        }
    };

    if landing_limit.is_finite() && ws_design > landing_limit {
        failures.push("Landing");
        feedback.push(render(&messages.landing_curve, &[ws_design.into(), landing_limit.into()]));
    }

    match curve_failure_line(&failures, rubric) {
        Some((penalty, line)) => {
            feedback.push(line);
            -f64::from(penalty)
        }
        None => 0.0,
    }
}

fn curve_failure_line(failures: &[&str], rubric: &RubricConfig) -> Option<(u32, String)> {
    let messages = &rubric.messages.constraint;
    match failures.len() {
        0 => None,
        1 => {
            let line = render(
                &messages.curve_failure,
                &[SINGLE_CURVE_PENALTY.into(), "".into(), failures[0].into()],
            );
            Some((SINGLE_CURVE_PENALTY, line + &messages.curve_suffix_few))
        }
        count => {
            let joined = failures.join(", ");
            let suffix = if count > FEW_CURVE_FAILURES {
                &messages.curve_suffix_many
            } else {
                &messages.curve_suffix_few
            };
            let line = render(
                &messages.curve_failure,
                &[MULTI_CURVE_PENALTY.into(), "s".into(), Arg::Text(&joined)],
            );
            Some((MULTI_CURVE_PENALTY, line + suffix))
        }
    }
}
