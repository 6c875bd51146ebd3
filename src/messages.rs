//! Feedback Message Catalog
//!
//! Every line the grader can emit comes from a template here, rendered with
//! [`crate::utils::render`]. The catalog travels inside
//! [`crate::config::RubricConfig`] and is never modified while grading, so a
//! course can reword feedback by shipping a rubric JSON without touching the
//! rule code.
//!
//! Deduction lines lead with the points removed (`-2: ...`).

use serde::{Deserialize, Serialize};

/// Complete template catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub aero: AeroMessages,
    pub mission: MissionMessages,
    pub thrust: ThrustMessages,
    pub constraint: ConstraintMessages,
    pub attachment: AttachmentMessages,
    pub stability: StabilityMessages,
    pub fuel: FuelMessages,
    pub cost: CostMessages,
    pub gear: GearMessages,
    pub stealth: StealthMessages,
    pub bonus: BonusMessages,
    pub summary: SummaryMessages,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroMessages {
    /// deduction
    pub mismatch: String,
}

impl Default for AeroMessages {
    fn default() -> Self {
        Self {
            mismatch: "-%d: Aero tab still holds template values (lift/drag entries left unchanged)".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionMessages {
    /// One line per leg rule, in evaluation order
    pub legs: Vec<String>,
    /// deduction
    pub summary: String,
}

impl Default for MissionMessages {
    fn default() -> Self {
        Self {
            legs: vec![
                "Mission leg 1 (takeoff) must start at 0 ft with 100% afterburner".into(),
                "Mission leg 2 (climb) altitude must lie between the takeoff and cruise altitudes".into(),
                "Mission leg 2 (climb) Mach must lie between the takeoff and cruise Mach numbers".into(),
                "Mission leg 2 (climb) must use 0% afterburner".into(),
                "Mission leg 3 (subsonic cruise) must be flown at ≥35,000 ft, Mach 0.9, 0% afterburner".into(),
                "Mission leg 4 (subsonic cruise) must be flown at ≥35,000 ft, Mach 0.9, 0% afterburner".into(),
                "Mission leg 5 (supercruise out) must be flown at ≥35,000 ft at the supercruise Mach, 0% afterburner, for ≥150 nm".into(),
                "Mission leg 6 (combat) must be flown at ≥30,000 ft, Mach ≥1.2, 100% afterburner, for ≥2 min".into(),
                "Mission leg 7 (supercruise back) must be flown at ≥35,000 ft at the supercruise Mach, 0% afterburner, for ≥150 nm".into(),
                "Mission leg 8 (subsonic cruise) must be flown at ≥35,000 ft, Mach 0.9, 0% afterburner".into(),
                "Mission leg 9 (loiter) must be flown at 10,000 ft, Mach 0.4, 0% afterburner, for 20 min".into(),
            ],
            summary: "-%d: Mission table errors".into(),
        }
    }
}

impl MissionMessages {
    /// Template for leg rule `index`; empty when the catalog is short
    pub fn leg(&self, index: usize) -> &str {
        self.legs.get(index).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrustMessages {
    /// deduction, failing points
    pub shortfall: String,
}

impl Default for ThrustMessages {
    fn default() -> Self {
        Self {
            shortfall: "-%d: Thrust does not exceed drag at %d mission point(s)".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintMessages {
    pub radius_low: String,
    pub radius_obj: String,
    pub payload_penalty: String,
    pub payload_obj: String,
    pub takeoff_high: String,
    pub takeoff_obj: String,
    pub landing_high: String,
    pub landing_obj: String,
    pub mach_eq: String,
    pub mach_min: String,
    pub mach_obj: String,
    pub alt_eq: String,
    pub alt_min: String,
    pub n_eq: String,
    pub n_min: String,
    pub n_obj: String,
    pub ab_eq: String,
    pub ps_eq: String,
    pub ps_min: String,
    pub ps_obj: String,
    pub beta_eq: String,
    pub cdx_allowed: String,
    pub cdx_eq: String,
    pub design_point_missing: String,
    pub landing_curve: String,
    /// deduction, plural suffix, failing curve labels
    pub curve_failure: String,
    pub curve_suffix_few: String,
    pub curve_suffix_many: String,
    pub curve_error: String,
    pub summary: String,
}

impl Default for ConstraintMessages {
    fn default() -> Self {
        Self {
            radius_low: "Combat radius of %.1f nm is below the 375 nm threshold".into(),
            radius_obj: "Combat radius of %.1f nm meets the 410 nm objective".into(),
            payload_penalty: "-4: Payload of %d AIM-120s is below the required 8".into(),
            payload_obj: "Payload objective met: %d AIM-120s and %d AIM-9s".into(),
            takeoff_high: "Takeoff distance of %.0f ft exceeds the 3,000 ft threshold".into(),
            takeoff_obj: "Takeoff distance of %.0f ft meets the 2,500 ft objective".into(),
            landing_high: "Landing distance of %.0f ft exceeds the 5,000 ft threshold".into(),
            landing_obj: "Landing distance of %.0f ft meets the 3,500 ft objective".into(),
            mach_eq: "%s: Mach is %.2f, should be %.2f".into(),
            mach_min: "%s: Mach %.2f is below the %.2f threshold".into(),
            mach_obj: "%s: Mach objective of %.2f met (%.2f)".into(),
            alt_eq: "%s: altitude is %.0f ft, should be %.0f ft".into(),
            alt_min: "%s: altitude of %.0f ft is below the %.0f ft minimum".into(),
            n_eq: "%s: n is %.2f, should be %.2f".into(),
            n_min: "%s: n of %.2f is below the %.2f threshold".into(),
            n_obj: "%s: load factor objective of %.2f met (%.2f)".into(),
            ab_eq: "%s: afterburner is %.0f%%, should be %.0f%%".into(),
            ps_eq: "%s: Ps is %.0f ft/s, should be %.0f ft/s".into(),
            ps_min: "%s: Ps of %.0f ft/s is below the %.0f ft/s threshold".into(),
            ps_obj: "%s: Ps objective of %.0f ft/s met (%.0f ft/s)".into(),
            beta_eq: "%s: weight fraction of %.4f does not match the mission fuel fraction".into(),
            cdx_allowed: "%s: CDx is %.3f, must be one of %s".into(),
            cdx_eq: "%s: CDx is %.3f, should be %.3f".into(),
            design_point_missing: "Unable to locate the design point (W/S, T/W) on the constraint diagram".into(),
            landing_curve: "Design wing loading of %.1f psf exceeds the landing limit of %.1f psf".into(),
            curve_failure: "-%d: Design point falls below the constraint curve%s for %s".into(),
            curve_suffix_few: ". Adjust W/S or T/W so the design point clears every curve.".into(),
            curve_suffix_many: ". The design point sits below most of the constraint diagram; revisit the sizing.".into(),
            curve_error: "Constraint curves could not be evaluated: %s".into(),
            summary: "-%d: Constraint table errors".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentMessages {
    pub pcs_x: String,
    pub vt_x: String,
    pub pcs_z: String,
    pub vt_y: String,
    pub strake: String,
    pub fuselage: String,
    pub pcs_x_missing: String,
    pub vt_x_missing: String,
    pub pcs_z_missing: String,
    pub vt_y_missing: String,
    pub strake_missing: String,
    pub deduction: String,
}

impl Default for AttachmentMessages {
    fn default() -> Self {
        Self {
            pcs_x: "PCS is too far aft; at least 25% of its root chord must overlap the fuselage".into(),
            vt_x: "Vertical tail is too far aft; at least 25% of its root chord must overlap the fuselage".into(),
            pcs_z: "PCS vertical location is outside the fuselage".into(),
            vt_y: "Vertical tail lateral location is outside the fuselage".into(),
            strake: "Strake does not attach to the wing leading edge".into(),
            fuselage: "A component is located at or beyond the end of the %.1f ft fuselage".into(),
            pcs_x_missing: "Unable to verify PCS placement due to missing geometry data".into(),
            vt_x_missing: "Unable to verify vertical tail placement due to missing geometry data".into(),
            pcs_z_missing: "Unable to verify PCS vertical placement due to missing geometry data".into(),
            vt_y_missing: "Unable to verify vertical tail lateral placement due to missing geometry data".into(),
            strake_missing: "Unable to verify strake attachment due to missing geometry data".into(),
            deduction: "-%d: Component attachment errors".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityMessages {
    pub sm: String,
    pub sm_warn: String,
    pub clb: String,
    pub cnb: String,
    pub ratio: String,
    pub deduction: String,
}

impl Default for StabilityMessages {
    fn default() -> Self {
        Self {
            sm: "Static margin of %.3f is outside the -0.10 to 0.11 range".into(),
            sm_warn: "Warning: a negative static margin requires a stability augmentation system".into(),
            clb: "Cl_beta of %.4f must be less than -0.001".into(),
            cnb: "Cn_beta of %.4f must be greater than 0.002".into(),
            ratio: "Cl_beta/Cn_beta ratio of %.2f is outside the -1.0 to -0.3 range".into(),
            deduction: "-%d: Stability errors".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelMessages {
    pub missing: String,
    /// available, required
    pub short_minor: String,
    /// available, required
    pub short_major: String,
    pub deduction: String,
}

impl Default for FuelMessages {
    fn default() -> Self {
        Self {
            missing: "Unable to verify fuel volume; available or required volume is missing".into(),
            short_minor: "Fuel volume available (%.1f ft^3) is slightly less than required (%.1f ft^3)".into(),
            short_major: "Fuel volume available (%.1f ft^3) is well short of required (%.1f ft^3)".into(),
            deduction: "-%d: Fuel volume errors".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CostMessages {
    pub over_187: String,
    pub obj_187: String,
    pub over_800: String,
    pub obj_800: String,
    pub invalid: String,
}

impl Default for CostMessages {
    fn default() -> Self {
        Self {
            over_187: "-5: Recurring cost of $%.1fM exceeds the $115M threshold for 187 aircraft".into(),
            obj_187: "Recurring cost of $%.1fM meets the $100M objective for 187 aircraft".into(),
            over_800: "-5: Recurring cost of $%.1fM exceeds the $75M threshold for 800 aircraft".into(),
            obj_800: "Recurring cost of $%.1fM meets the $63M objective for 800 aircraft".into(),
            invalid: "-5: Production quantity of %s aircraft must be 187 or 800".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GearMessages {
    pub nose: String,
    pub tipback: String,
    pub rollover: String,
    pub rotation: String,
    pub deduction: String,
}

impl Default for GearMessages {
    fn default() -> Self {
        Self {
            nose: "Main gear load share of %.1f%% is outside the 80%% to 95%% range".into(),
            tipback: "Tipback angle of %.1f° must be less than the %.1f° limit".into(),
            rollover: "Rollover angle of %.1f° must be less than the %.1f° limit".into(),
            rotation: "Takeoff rotation speed of %.1f kts must be below 200 kts".into(),
            deduction: "-%d: Landing gear errors".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StealthMessages {
    /// PCS angle, wing angle, tolerance
    pub pcs_sweep: String,
    /// trailing angle, tolerance
    pub wing_trailing: String,
    pub pcs_leading_parallel: String,
    pub pcs_trailing_parallel: String,
    pub strake_leading_parallel: String,
    pub strake_trailing_parallel: String,
    pub vt_leading_parallel: String,
    pub vt_trailing_parallel: String,
    pub missing_geom: String,
    pub deduction: String,
}

impl Default for StealthMessages {
    fn default() -> Self {
        Self {
            pcs_sweep: "PCS leading edge sweep (%.1f°) does not match the wing leading edge (%.1f°) within %.0f°".into(),
            wing_trailing: "Wing trailing edge (%.1f°) is neither parallel to the leading edge within %.0f° nor normal to the centerline".into(),
            pcs_leading_parallel: "Canted PCS leading edge (%.1f°) is not parallel to the wing leading edge (%.1f°) within %.0f°".into(),
            pcs_trailing_parallel: "Canted PCS trailing edge (%.1f°) is not parallel to the wing leading edge (%.1f°) within %.0f°".into(),
            strake_leading_parallel: "Strake leading edge (%.1f°) is not parallel to the wing leading edge (%.1f°) within %.0f°".into(),
            strake_trailing_parallel: "Strake trailing edge (%.1f°) is not parallel to the wing leading edge (%.1f°) within %.0f°".into(),
            vt_leading_parallel: "Canted vertical tail leading edge (%.1f°) is not parallel to the wing leading edge (%.1f°) within %.0f°".into(),
            vt_trailing_parallel: "Canted vertical tail trailing edge (%.1f°) is not parallel to the wing leading edge (%.1f°) within %.0f°".into(),
            missing_geom: "Unable to verify planform alignment due to missing geometry data".into(),
            deduction: "-%d: Stealth shaping errors".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusMessages {
    /// points, metric label, value, objective
    pub partial: String,
}

impl Default for BonusMessages {
    fn default() -> Self {
        Self {
            partial: "Partial bonus: +%.1f for %s of %s (objective %s)".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryMessages {
    /// clamped base
    pub base: String,
    /// bonus points, final score
    pub bonus_earned: String,
    /// final score
    pub bonus_none: String,
}

impl Default for SummaryMessages {
    fn default() -> Self {
        Self {
            base: "Base score: %.1f / 40".into(),
            bonus_earned: "Bonus points: %.1f, final score: %.1f".into(),
            bonus_none: "No bonus points earned, final score: %.1f".into(),
        }
    }
}
