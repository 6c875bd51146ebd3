//! RULE 8: RECURRING COST
//!
//! The production run (main N31) must be 187 or 800 aircraft, each with its
//! own unit-cost threshold and objective (main Q31, $M). Any failure is a
//! flat 5-point deduction.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;
use crate::utils::format::format_number;
use crate::utils::{render, Arg};

const COST_PENALTY: f64 = 5.0;

/// Fleet size with its unit-cost threshold and objective
#[derive(Debug, Clone, Copy)]
pub struct CostTarget {
    pub fleet: f64,
    pub threshold: f64,
    pub objective: f64,
}

pub const SMALL_FLEET: CostTarget = CostTarget { fleet: 187.0, threshold: 115.0, objective: 100.0 };
pub const LARGE_FLEET: CostTarget = CostTarget { fleet: 800.0, threshold: 75.0, objective: 63.0 };

/// Cost target for a production run, if it is one the rubric recognizes
pub fn cost_target(fleet: f64) -> Option<CostTarget> {
    [SMALL_FLEET, LARGE_FLEET].into_iter().find(|t| t.fleet == fleet)
}

pub fn check_recurring_cost(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let messages = &rubric.messages.cost;
    let main = workbook.table(TableName::Main);

    let cost = main.number("Q31");
    let fleet = main.number("N31");

    let Some(target) = cost_target(fleet) else {
        let shown = format_number(fleet);
        return CheckResult::new(
            -COST_PENALTY,
            vec![render(&messages.invalid, &[Arg::Text(&shown)])],
        );
    };

    let (over, objective) = if target.fleet == SMALL_FLEET.fleet {
        (&messages.over_187, &messages.obj_187)
    } else {
        (&messages.over_800, &messages.obj_800)
    };

    if !(cost.is_finite() && cost <= target.threshold) {
        CheckResult::new(-COST_PENALTY, vec![render(over, &[Arg::from(cost)])])
    } else if cost <= target.objective {
        CheckResult::new(0.0, vec![render(objective, &[Arg::from(cost)])])
    } else {
        CheckResult::default()
    }
}
