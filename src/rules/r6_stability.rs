//! RULE 6: STABILITY
//!
//! Static margin, directional and lateral stability derivatives from the main
//! table. Bounds are applied exactly, with no tolerance.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;
use crate::utils::{render, Arg};

const MAX_DEDUCTION: usize = 3;

const STATIC_MARGIN_MIN: f64 = -0.1;
const STATIC_MARGIN_MAX: f64 = 0.11;
const CL_BETA_MAX: f64 = -0.001;
const CN_BETA_MIN: f64 = 0.002;
const RATIO_MIN: f64 = -1.0;
const RATIO_MAX: f64 = -0.3;

pub fn check_stability(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let messages = &rubric.messages.stability;
    let main = workbook.table(TableName::Main);
    let mut feedback = Vec::new();
    let mut failures = 0;

    let static_margin = main.number("M10");
    let cl_beta = main.number("O10");
    let cn_beta = main.number("P10");
    let ratio = main.number("Q10");

    // NaN fails every comparison below
    if !(STATIC_MARGIN_MIN..=STATIC_MARGIN_MAX).contains(&static_margin) {
        feedback.push(render(&messages.sm, &[Arg::from(static_margin)]));
        failures += 1;
    }
    if static_margin.is_finite() && static_margin < 0.0 {
        feedback.push(messages.sm_warn.clone());
    }

    if !(cl_beta < CL_BETA_MAX) {
        feedback.push(render(&messages.clb, &[Arg::from(cl_beta)]));
        failures += 1;
    }

    if !(cn_beta > CN_BETA_MIN) {
        feedback.push(render(&messages.cnb, &[Arg::from(cn_beta)]));
        failures += 1;
    }

    if !(RATIO_MIN..=RATIO_MAX).contains(&ratio) {
        feedback.push(render(&messages.ratio, &[Arg::from(ratio)]));
        failures += 1;
    }

    CheckResult::capped(failures, MAX_DEDUCTION, feedback, &messages.deduction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derivatives(sm: f64, clb: f64, cnb: f64, ratio: f64) -> Workbook {
        let mut wb = Workbook::new();
        wb.set(TableName::Main, "M10", sm);
        wb.set(TableName::Main, "O10", clb);
        wb.set(TableName::Main, "P10", cnb);
        wb.set(TableName::Main, "Q10", ratio);
        wb
    }

    #[test]
    fn test_stable_design_passes() {
        let result = check_stability(&derivatives(0.05, -0.002, 0.003, -0.5), &RubricConfig::default());
        assert_eq!(result, CheckResult::default());
    }

    #[test]
    fn test_relaxed_stability_warns_without_deduction() {
        let rubric = RubricConfig::default();
        let result = check_stability(&derivatives(-0.05, -0.002, 0.003, -0.5), &rubric);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.feedback, vec![rubric.messages.stability.sm_warn.clone()]);
    }

    #[test]
    fn test_unstable_margin_reports_and_warns() {
        let rubric = RubricConfig::default();
        let result = check_stability(&derivatives(-0.2, -0.002, 0.003, -0.5), &rubric);
        assert_eq!(result.delta, -1.0);
        assert_eq!(result.feedback.len(), 3);
        assert_eq!(result.feedback[1], rubric.messages.stability.sm_warn);
    }

    #[test]
    fn test_boundaries_are_strict() {
        let result = check_stability(&derivatives(0.11, -0.001, 0.002, -0.3), &RubricConfig::default());
        // Margin and ratio bounds are inclusive, derivative bounds exclusive
        assert_eq!(result.delta, -2.0);
    }

    #[test]
    fn test_missing_derivatives_cap_at_three() {
        let result = check_stability(&Workbook::new(), &RubricConfig::default());
        assert_eq!(result.delta, -3.0);
        assert_eq!(result.feedback.last().unwrap(), "-3: Stability errors");
    }
}
