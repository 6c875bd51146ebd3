//! Bonus Calculator
//!
//! Ten secondary performance metrics each earn up to one bonus point. Credit
//! grows linearly from 0 at the threshold to 1 at the objective (inverted for
//! lower-is-better metrics such as field length and cost), is rounded to the
//! nearest tenth, and is reported only when partial.
//!
//! Metrics:
//!   1. Combat radius (main Y37): 375 -> 410 nm
//!   2. Payload (AB3, AB4): binary, 8 AIM-120 and 2 AIM-9
//!   3. Takeoff distance (X12): 3000 -> 2500 ft
//!   4. Landing distance (X13): 5000 -> 3500 ft
//!   5. Max Mach (U3): 2.0 -> 2.2
//!   6. Supercruise Mach (U4): 1.5 -> 1.8
//!   7. Specific excess power (X8, X9): 400 -> 500 ft/s, the weaker point counts
//!   8. Combat turn 1 load factor (V6): 3.0 -> 4.0
//!   9. Combat turn 2 load factor (V7): 4.0 -> 4.5
//!  10. Recurring cost (Q31) by fleet size (N31): 115 -> 100 or 75 -> 63 $M

use serde::Serialize;

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::r8_recurring_cost::cost_target;
use crate::utils::format::format_number;
use crate::utils::tolerance::{DIST_TOL, MACH_TOL, PS_TOL, RATIO_TOL};
use crate::utils::{at_least, at_most, render, round_tenth, Arg};

/// Rounded fractions at or above this count as full credit
const FULL_CREDIT: f64 = 1.0 - 1e-9;
/// Rounded fractions at or below this are not reported
const DISPLAY_FLOOR: f64 = 1e-3;

/// Bonus ceiling: one point per metric
pub const MAX_BONUS: f64 = 10.0;

/// Graded range of one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusRange {
    pub threshold: f64,
    pub objective: f64,
    pub tol: f64,
}

impl BonusRange {
    pub const fn new(threshold: f64, objective: f64, tol: f64) -> Self {
        Self { threshold, objective, tol }
    }

    fn higher_is_better(&self) -> bool {
        self.objective >= self.threshold
    }

    fn meets_objective(&self, value: f64) -> bool {
        if self.higher_is_better() {
            at_least(value, self.objective, self.tol)
        } else {
            at_most(value, self.objective, self.tol)
        }
    }

    /// Unrounded credit in [0, 1]
    pub fn fraction(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        if self.meets_objective(value) {
            return 1.0;
        }
        let span = self.objective - self.threshold;
        if span == 0.0 {
            return 0.0;
        }
        ((value - self.threshold) / span).clamp(0.0, 1.0)
    }
}

pub const RADIUS_RANGE: BonusRange = BonusRange::new(375.0, 410.0, DIST_TOL);
pub const TAKEOFF_RANGE: BonusRange = BonusRange::new(3000.0, 2500.0, DIST_TOL);
pub const LANDING_RANGE: BonusRange = BonusRange::new(5000.0, 3500.0, DIST_TOL);
pub const MAX_MACH_RANGE: BonusRange = BonusRange::new(2.0, 2.2, MACH_TOL);
pub const SUPERCRUISE_RANGE: BonusRange = BonusRange::new(1.5, 1.8, MACH_TOL);
pub const PS_RANGE: BonusRange = BonusRange::new(400.0, 500.0, PS_TOL);
pub const TURN1_RANGE: BonusRange = BonusRange::new(3.0, 4.0, RATIO_TOL);
pub const TURN2_RANGE: BonusRange = BonusRange::new(4.0, 4.5, RATIO_TOL);

/// Credit earned on one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusAward {
    pub metric: &'static str,
    /// Value the credit was computed from
    pub value: f64,
    pub objective: f64,
    /// Tenth-rounded credit
    pub points: f64,
}

/// Combined bonus outcome
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BonusResult {
    pub points: f64,
    pub awards: Vec<BonusAward>,
    /// Partial-credit lines, in metric order
    pub feedback: Vec<String>,
}

fn payload_fraction(aim120: f64, aim9: f64) -> f64 {
    if at_least(aim120, 8.0, RATIO_TOL) && at_least(aim9, 2.0, RATIO_TOL) {
        1.0
    } else {
        0.0
    }
}

/// Unrounded credit for every metric, in report order
fn metric_fractions(workbook: &Workbook) -> Vec<(&'static str, f64, f64, f64)> {
    let main = workbook.table(TableName::Main);

    let radius = main.number("Y37");
    let aim120 = main.number("AB3");
    let aim9 = main.number("AB4");
    let takeoff = main.number("X12");
    let landing = main.number("X13");
    let max_mach = main.number("U3");
    let supercruise = main.number("U4");
    let ps_high = main.number("X8");
    let ps_low = main.number("X9");
    let turn1 = main.number("V6");
    let turn2 = main.number("V7");
    let cost = main.number("Q31");
    let fleet = main.number("N31");

    // Weaker Ps point sets the credit
    let (ps_value, ps_fraction) = {
        let high = PS_RANGE.fraction(ps_high);
        let low = PS_RANGE.fraction(ps_low);
        if high <= low {
            (ps_high, high)
        } else {
            (ps_low, low)
        }
    };

    let (cost_objective, cost_fraction) = match cost_target(fleet) {
        Some(target) => {
            let range = BonusRange::new(target.threshold, target.objective, RATIO_TOL);
            (target.objective, range.fraction(cost))
        }
        None => (f64::NAN, 0.0),
    };

    vec![
        ("combat radius", radius, RADIUS_RANGE.objective, RADIUS_RANGE.fraction(radius)),
        ("AIM-120 payload", aim120, 8.0, payload_fraction(aim120, aim9)),
        ("takeoff distance", takeoff, TAKEOFF_RANGE.objective, TAKEOFF_RANGE.fraction(takeoff)),
        ("landing distance", landing, LANDING_RANGE.objective, LANDING_RANGE.fraction(landing)),
        ("max Mach", max_mach, MAX_MACH_RANGE.objective, MAX_MACH_RANGE.fraction(max_mach)),
        ("supercruise Mach", supercruise, SUPERCRUISE_RANGE.objective, SUPERCRUISE_RANGE.fraction(supercruise)),
        ("specific excess power", ps_value, PS_RANGE.objective, ps_fraction),
        ("combat turn 1 load factor", turn1, TURN1_RANGE.objective, TURN1_RANGE.fraction(turn1)),
        ("combat turn 2 load factor", turn2, TURN2_RANGE.objective, TURN2_RANGE.fraction(turn2)),
        ("recurring cost", cost, cost_objective, cost_fraction),
    ]
}

pub fn compute_bonuses(workbook: &Workbook, rubric: &RubricConfig) -> BonusResult {
    let template = &rubric.messages.bonus.partial;
    let mut result = BonusResult::default();
    let mut total = 0.0;

    for (metric, value, objective, fraction) in metric_fractions(workbook) {
        let points = round_tenth(fraction);
        if points <= 0.0 {
            continue;
        }
        total += points;

        if points < FULL_CREDIT && points > DISPLAY_FLOOR {
            let value_text = format_number(value);
            let objective_text = format_number(objective);
            result.feedback.push(render(
                template,
                &[
                    Arg::from(points),
                    Arg::from(metric),
                    Arg::Text(&value_text),
                    Arg::Text(&objective_text),
                ],
            ));
        }

        result.awards.push(BonusAward { metric, value, objective, points });
    }

    result.points = round_tenth(total);
    result
}
