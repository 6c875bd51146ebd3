//! Rule modules for design grading
//!
//! Each rubric area is implemented in its own module and returns a
//! [`CheckResult`]: a non-positive score delta plus the feedback lines it
//! produced, in the order they were found. Modules never fail; missing or
//! non-numeric cells are violations.

pub mod r1_aero_consistency;
pub mod r2_mission_profile;
pub mod r3_thrust_margin;
pub mod r4_performance_constraints;
pub mod r5_attachments;
pub mod r6_stability;
pub mod r7_fuel_volume;
pub mod r8_recurring_cost;
pub mod r9_landing_gear;
pub mod r10_stealth_shaping;
pub mod constraint_table;

// Re-export rule functions
pub use r1_aero_consistency::check_aero_consistency;
pub use r2_mission_profile::check_mission_profile;
pub use r3_thrust_margin::check_thrust_margin;
pub use r4_performance_constraints::{check_performance_constraints, ConstraintCheckResult};
pub use r5_attachments::check_attachments;
pub use r6_stability::check_stability;
pub use r7_fuel_volume::check_fuel_volume;
pub use r8_recurring_cost::check_recurring_cost;
pub use r9_landing_gear::check_landing_gear;
pub use r10_stealth_shaping::check_stealth_shaping;
pub use constraint_table::{ConstraintSpec, Requirement, CONSTRAINT_SPECS};

use serde::Serialize;

use crate::config::RubricConfig;
use crate::data::Workbook;
use crate::utils::{render, Arg};

/// Outcome of one rule module
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckResult {
    /// Score change, always <= 0
    pub delta: f64,
    pub feedback: Vec<String>,
}

impl CheckResult {
    pub fn new(delta: f64, feedback: Vec<String>) -> Self {
        Self { delta, feedback }
    }

    /// Apply `min(cap, violations)` and append the summary line when nonzero
    pub(crate) fn capped(
        violations: usize,
        cap: usize,
        mut feedback: Vec<String>,
        summary_template: &str,
    ) -> Self {
        let deduction = violations.min(cap);
        if deduction > 0 {
            feedback.push(render(summary_template, &[Arg::from(deduction)]));
        }
        Self {
            delta: -(deduction as f64),
            feedback,
        }
    }
}

/// The ten rubric areas, in transcript order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleModule {
    AeroConsistency,
    MissionProfile,
    ThrustMargin,
    PerformanceConstraints,
    Attachments,
    Stability,
    FuelVolume,
    RecurringCost,
    LandingGear,
    StealthShaping,
}

impl RuleModule {
    pub const ALL: [RuleModule; 10] = [
        RuleModule::AeroConsistency,
        RuleModule::MissionProfile,
        RuleModule::ThrustMargin,
        RuleModule::PerformanceConstraints,
        RuleModule::Attachments,
        RuleModule::Stability,
        RuleModule::FuelVolume,
        RuleModule::RecurringCost,
        RuleModule::LandingGear,
        RuleModule::StealthShaping,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleModule::AeroConsistency => "aero_consistency",
            RuleModule::MissionProfile => "mission_profile",
            RuleModule::ThrustMargin => "thrust_margin",
            RuleModule::PerformanceConstraints => "performance_constraints",
            RuleModule::Attachments => "attachments",
            RuleModule::Stability => "stability",
            RuleModule::FuelVolume => "fuel_volume",
            RuleModule::RecurringCost => "recurring_cost",
            RuleModule::LandingGear => "landing_gear",
            RuleModule::StealthShaping => "stealth_shaping",
        }
    }

    /// Largest deduction the module can produce
    ///
    /// Performance constraints combine three channels: table (2), payload
    /// (4) and curves (8).
    pub fn max_deduction(&self) -> f64 {
        match self {
            RuleModule::AeroConsistency => 3.0,
            RuleModule::MissionProfile => 2.0,
            RuleModule::ThrustMargin => 3.0,
            RuleModule::PerformanceConstraints => 14.0,
            RuleModule::Attachments => 2.0,
            RuleModule::Stability => 3.0,
            RuleModule::FuelVolume => 3.0,
            RuleModule::RecurringCost => 5.0,
            RuleModule::LandingGear => 4.0,
            RuleModule::StealthShaping => 5.0,
        }
    }

    pub fn run(&self, workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
        match self {
            RuleModule::AeroConsistency => check_aero_consistency(workbook, rubric),
            RuleModule::MissionProfile => check_mission_profile(workbook, rubric),
            RuleModule::ThrustMargin => check_thrust_margin(workbook, rubric),
            RuleModule::PerformanceConstraints => {
                check_performance_constraints(workbook, rubric).into()
            }
            RuleModule::Attachments => check_attachments(workbook, rubric),
            RuleModule::Stability => check_stability(workbook, rubric),
            RuleModule::FuelVolume => check_fuel_volume(workbook, rubric),
            RuleModule::RecurringCost => check_recurring_cost(workbook, rubric),
            RuleModule::LandingGear => check_landing_gear(workbook, rubric),
            RuleModule::StealthShaping => check_stealth_shaping(workbook, rubric),
        }
    }
}
