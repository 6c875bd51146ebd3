//! RULE 2: MISSION PROFILE
//!
//! The mission table lists nine legs across columns K..W of the main table
//! (takeoff, climb, two subsonic cruise legs, supercruise out, combat,
//! supercruise back, subsonic cruise, loiter). Each leg rule checks altitude,
//! Mach, afterburner, and where relevant distance or time. The combat radius
//! is checked here as well.
//!
//! Deduction: one per violated rule, capped at 2.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;
use crate::utils::tolerance::{ALT_TOL, DIST_TOL, MACH_TOL, PERCENT_TOL};
use crate::utils::{at_least, between, render, within, Arg};

const MAX_DEDUCTION: usize = 2;

/// Main-table columns of the nine legs (K, L, M, N, P, R, S, V, W)
pub const LEG_COLUMNS: [u32; 9] = [11, 12, 13, 14, 16, 18, 19, 22, 23];

const ALTITUDE_ROW: u32 = 33;
const MACH_ROW: u32 = 35;
const AFTERBURNER_ROW: u32 = 36;
const DISTANCE_ROW: u32 = 38;
const TIME_ROW: u32 = 39;

const CRUISE_ALTITUDE: f64 = 35_000.0;
const COMBAT_ALTITUDE: f64 = 30_000.0;
const LOITER_ALTITUDE: f64 = 10_000.0;
const SUBSONIC_MACH: f64 = 0.9;
const COMBAT_MACH: f64 = 1.2;
const LOITER_MACH: f64 = 0.4;
const SUPERCRUISE_DISTANCE: f64 = 150.0;
const COMBAT_TIME: f64 = 2.0;
const LOITER_TIME: f64 = 20.0;

/// Combat radius threshold, nm
pub const RADIUS_THRESHOLD: f64 = 375.0;

/// One mission row read across all nine legs
struct LegRow([f64; 9]);

impl LegRow {
    fn read(workbook: &Workbook, row: u32) -> Self {
        let main = workbook.table(TableName::Main);
        LegRow(LEG_COLUMNS.map(|col| main.number_at(row, col)))
    }
}

impl std::ops::Index<usize> for LegRow {
    type Output = f64;

    fn index(&self, leg: usize) -> &f64 {
        &self.0[leg]
    }
}

pub fn check_mission_profile(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let messages = &rubric.messages.mission;
    let main = workbook.table(TableName::Main);

    let alt = LegRow::read(workbook, ALTITUDE_ROW);
    let mach = LegRow::read(workbook, MACH_ROW);
    let ab = LegRow::read(workbook, AFTERBURNER_ROW);
    let dist = LegRow::read(workbook, DISTANCE_ROW);
    let time = LegRow::read(workbook, TIME_ROW);
    let supercruise_mach = main.number("U4");

    let subsonic_cruise = |leg: usize| {
        at_least(alt[leg], CRUISE_ALTITUDE, ALT_TOL)
            && within(mach[leg], SUBSONIC_MACH, MACH_TOL)
            && within(ab[leg], 0.0, PERCENT_TOL)
    };
    let supercruise = |leg: usize| {
        at_least(alt[leg], CRUISE_ALTITUDE, ALT_TOL)
            && supercruise_mach.is_finite()
            && within(mach[leg], supercruise_mach, MACH_TOL)
            && within(ab[leg], 0.0, PERCENT_TOL)
            && at_least(dist[leg], SUPERCRUISE_DISTANCE, DIST_TOL)
    };

    // Leg rules in transcript order; each entry is "rule satisfied"
    let rules = [
        within(alt[0], 0.0, ALT_TOL) && within(ab[0], 100.0, PERCENT_TOL),
        between(alt[1], alt[0], alt[2], ALT_TOL),
        between(mach[1], mach[0], mach[2], MACH_TOL),
        within(ab[1], 0.0, PERCENT_TOL),
        subsonic_cruise(2),
        subsonic_cruise(3),
        supercruise(4),
        at_least(alt[5], COMBAT_ALTITUDE, ALT_TOL)
            && at_least(mach[5], COMBAT_MACH, MACH_TOL)
            && within(ab[5], 100.0, PERCENT_TOL)
            && at_least(time[5], COMBAT_TIME, DIST_TOL),
        supercruise(6),
        subsonic_cruise(7),
        within(alt[8], LOITER_ALTITUDE, ALT_TOL)
            && within(mach[8], LOITER_MACH, MACH_TOL)
            && within(ab[8], 0.0, PERCENT_TOL)
            && within(time[8], LOITER_TIME, DIST_TOL),
    ];

    let mut feedback = Vec::new();
    let mut errors = 0;

    for (index, passed) in rules.iter().enumerate() {
        if !passed {
            feedback.push(messages.leg(index).to_string());
            errors += 1;
        }
    }

    let radius = main.number("Y37");
    if !at_least(radius, RADIUS_THRESHOLD, 0.0) {
        feedback.push(render(
            &rubric.messages.constraint.radius_low,
            &[Arg::from(radius)],
        ));
        errors += 1;
    }

    CheckResult::capped(errors, MAX_DEDUCTION, feedback, &messages.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALTITUDES: [f64; 9] = [0.0, 20_000.0, 35_000.0, 35_000.0, 35_000.0, 30_000.0, 35_000.0, 35_000.0, 10_000.0];
    const MACHS: [f64; 9] = [0.2, 0.6, 0.9, 0.9, 1.8, 1.2, 1.8, 0.9, 0.4];
    const AFTERBURNER: [f64; 9] = [100.0, 0.0, 0.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0];

    fn flown_mission() -> Workbook {
        let mut wb = Workbook::new();
        let main = wb.table_mut(TableName::Main);
        for (leg, &col) in LEG_COLUMNS.iter().enumerate() {
            main.insert(&crate::data::cell_ref(ALTITUDE_ROW, col), ALTITUDES[leg]);
            main.insert(&crate::data::cell_ref(MACH_ROW, col), MACHS[leg]);
            main.insert(&crate::data::cell_ref(AFTERBURNER_ROW, col), AFTERBURNER[leg]);
        }
        main.insert("P38", 150.0);
        main.insert("S38", 150.0);
        main.insert("R39", 2.0);
        main.insert("W39", 20.0);
        main.insert("U4", 1.8);
        main.insert("Y37", 410.0);
        wb
    }

    #[test]
    fn test_flown_mission_passes() {
        let result = check_mission_profile(&flown_mission(), &RubricConfig::default());
        assert_eq!(result.delta, 0.0, "{:?}", result.feedback);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_supercruise_mach_mismatch() {
        let mut wb = flown_mission();
        wb.set(TableName::Main, "P35", 1.6);

        let rubric = RubricConfig::default();
        let result = check_mission_profile(&wb, &rubric);
        assert_eq!(result.delta, -1.0);
        assert_eq!(result.feedback[0], rubric.messages.mission.leg(6));
        assert_eq!(result.feedback[1], "-1: Mission table errors");
    }

    #[test]
    fn test_missing_supercruise_mach_fails_both_legs() {
        let mut wb = flown_mission();
        wb.set(TableName::Main, "U4", "");

        let result = check_mission_profile(&wb, &RubricConfig::default());
        // Two leg failures, capped at 2
        assert_eq!(result.delta, -2.0);
        assert_eq!(result.feedback.len(), 3);
    }

    #[test]
    fn test_missing_radius_is_violation() {
        let mut wb = flown_mission();
        wb.set(TableName::Main, "Y37", "n/a");

        let result = check_mission_profile(&wb, &RubricConfig::default());
        assert_eq!(result.delta, -1.0);
        assert!(result.feedback[0].contains("NaN"));
    }

    #[test]
    fn test_loiter_within_tolerance() {
        let mut wb = flown_mission();
        wb.set(TableName::Main, "W35", 0.405);

        let result = check_mission_profile(&wb, &RubricConfig::default());
        assert_eq!(result.delta, 0.0);
    }
}
