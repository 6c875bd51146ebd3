//! RULE 7: FUEL VOLUME
//!
//! Available internal fuel volume (main F31) must cover the mission
//! requirement (F32). A shortfall within 10% costs one point, a larger one
//! three.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;
use crate::utils::{at_least, render, Arg};

const VOLUME_TOL: f64 = 1e-3;
const MINOR_SHORTFALL_RATIO: f64 = 0.9;
const MINOR_DEDUCTION: u32 = 1;
const MAJOR_DEDUCTION: u32 = 3;

pub fn check_fuel_volume(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let messages = &rubric.messages.fuel;
    let main = workbook.table(TableName::Main);

    let available = main.number("F31");
    let required = main.number("F32");

    let (deduction, line) = if !(available.is_finite() && required.is_finite()) {
        (MAJOR_DEDUCTION, messages.missing.clone())
    } else if at_least(available, required, VOLUME_TOL) {
        return CheckResult::default();
    } else {
        let args = [Arg::from(available), Arg::from(required)];
        if required > 0.0 && available / required >= MINOR_SHORTFALL_RATIO {
            (MINOR_DEDUCTION, render(&messages.short_minor, &args))
        } else {
            (MAJOR_DEDUCTION, render(&messages.short_major, &args))
        }
    };

    let summary = render(&messages.deduction, &[Arg::from(deduction)]);
    CheckResult::new(-f64::from(deduction), vec![line, summary])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volumes(available: f64, required: f64) -> Workbook {
        let mut wb = Workbook::new();
        wb.set(TableName::Main, "F31", available);
        wb.set(TableName::Main, "F32", required);
        wb
    }

    #[test]
    fn test_sufficient_volume_passes() {
        let rubric = RubricConfig::default();
        assert_eq!(check_fuel_volume(&volumes(500.0, 450.0), &rubric), CheckResult::default());
        assert_eq!(check_fuel_volume(&volumes(450.0, 450.0005), &rubric), CheckResult::default());
    }

    #[test]
    fn test_minor_shortfall() {
        let result = check_fuel_volume(&volumes(460.0, 500.0), &RubricConfig::default());
        assert_eq!(result.delta, -1.0);
        assert_eq!(
            result.feedback,
            vec![
                "Fuel volume available (460.0 ft^3) is slightly less than required (500.0 ft^3)",
                "-1: Fuel volume errors",
            ]
        );
    }

    #[test]
    fn test_major_shortfall() {
        let result = check_fuel_volume(&volumes(300.0, 500.0), &RubricConfig::default());
        assert_eq!(result.delta, -3.0);
    }

    #[test]
    fn test_missing_volume() {
        let rubric = RubricConfig::default();
        let result = check_fuel_volume(&volumes(f64::NAN, 500.0), &rubric);
        assert_eq!(result.delta, -3.0);
        assert_eq!(result.feedback[0], rubric.messages.fuel.missing);
    }
}
