//! RULE 3: THRUST MARGIN
//!
//! At every mission point (columns C..N of the mission table) available
//! thrust (row 49) must exceed drag (row 48). A missing value at either row
//! counts as a shortfall.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;
use crate::utils::{render, Arg};

const MAX_DEDUCTION: usize = 3;
const THRUST_TOL: f64 = 1e-3;

const DRAG_ROW: u32 = 48;
const THRUST_ROW: u32 = 49;
const FIRST_COLUMN: u32 = 3; // C
const LAST_COLUMN: u32 = 14; // N

pub fn check_thrust_margin(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let mission = workbook.table(TableName::Mission);

    let failures = (FIRST_COLUMN..=LAST_COLUMN)
        .filter(|&col| {
            let drag = mission.number_at(DRAG_ROW, col);
            let thrust = mission.number_at(THRUST_ROW, col);
            !(drag.is_finite() && thrust.is_finite() && thrust > drag + THRUST_TOL)
        })
        .count();

    let deduction = failures.min(MAX_DEDUCTION);
    if deduction == 0 {
        return CheckResult::default();
    }

    let line = render(
        &rubric.messages.thrust.shortfall,
        &[Arg::from(deduction), Arg::from(failures)],
    );
    CheckResult::new(-(deduction as f64), vec![line])
}
