//! RULE 9: LANDING GEAR
//!
//! Gear table checks: main-gear load share, tipback and rollover angles
//! against their limits, and takeoff rotation speed.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;
use crate::utils::tolerance::{ANGLE_TOL, PERCENT_TOL};
use crate::utils::{below, between, render, Arg};

const MAX_DEDUCTION: usize = 4;
const SPEED_TOL: f64 = 1e-3;

const LOAD_SHARE_MIN: f64 = 80.0;
const LOAD_SHARE_MAX: f64 = 95.0;
const ROTATION_SPEED_LIMIT: f64 = 200.0;

pub fn check_landing_gear(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let messages = &rubric.messages.gear;
    let gear = workbook.table(TableName::Gear);
    let mut feedback = Vec::new();
    let mut failures = 0;

    let load_share = gear.number("J20");
    if !between(load_share, LOAD_SHARE_MIN, LOAD_SHARE_MAX, PERCENT_TOL) {
        feedback.push(render(&messages.nose, &[Arg::from(load_share)]));
        failures += 1;
    }

    let tipback = gear.number("L20");
    let tipback_limit = gear.number("L21");
    if !(tipback_limit.is_finite() && below(tipback, tipback_limit, ANGLE_TOL)) {
        feedback.push(render(&messages.tipback, &[tipback.into(), tipback_limit.into()]));
        failures += 1;
    }

    let rollover = gear.number("M20");
    let rollover_limit = gear.number("M21");
    if !(rollover_limit.is_finite() && below(rollover, rollover_limit, ANGLE_TOL)) {
        feedback.push(render(&messages.rollover, &[rollover.into(), rollover_limit.into()]));
        failures += 1;
    }

    let rotation = gear.number("N20");
    if !below(rotation, ROTATION_SPEED_LIMIT, SPEED_TOL) {
        feedback.push(render(&messages.rotation, &[Arg::from(rotation)]));
        failures += 1;
    }

    CheckResult::capped(failures, MAX_DEDUCTION, feedback, &messages.deduction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gear(values: [(&str, f64); 6]) -> Workbook {
        let mut wb = Workbook::new();
        for (cell, value) in values {
            wb.set(TableName::Gear, cell, value);
        }
        wb
    }

    fn good_gear() -> Workbook {
        gear([("J20", 90.0), ("L20", 10.0), ("L21", 15.0), ("M20", 50.0), ("M21", 63.0), ("N20", 150.0)])
    }

    #[test]
    fn test_good_gear_passes() {
        assert_eq!(check_landing_gear(&good_gear(), &RubricConfig::default()), CheckResult::default());
    }

    #[test]
    fn test_load_share_tolerance() {
        let mut wb = good_gear();
        wb.set(TableName::Gear, "J20", 95.0005);
        assert_eq!(check_landing_gear(&wb, &RubricConfig::default()).delta, 0.0);

        wb.set(TableName::Gear, "J20", 96.0);
        let result = check_landing_gear(&wb, &RubricConfig::default());
        assert_eq!(result.delta, -1.0);
        assert_eq!(result.feedback[0], "Main gear load share of 96.0% is outside the 80% to 95% range");
    }

    #[test]
    fn test_angle_at_limit_fails() {
        let mut wb = good_gear();
        wb.set(TableName::Gear, "L20", 14.995);
        let result = check_landing_gear(&wb, &RubricConfig::default());
        assert_eq!(result.delta, -1.0);
    }

    #[test]
    fn test_missing_gear_caps_at_four() {
        let result = check_landing_gear(&Workbook::new(), &RubricConfig::default());
        assert_eq!(result.delta, -4.0);
        assert_eq!(result.feedback.len(), 5);
    }
}
