//! RULE 10: STEALTH SHAPING
//!
//! Planform edge alignment. Every leading and trailing edge that can be seen
//! from the front quarter must be parallel (modulo 180°) to the wing leading
//! edge so the radar returns collapse into a few narrow spikes.
//!
//! Checks, each one violation:
//!   - PCS leading edge parallel to the wing leading edge
//!   - Wing trailing edge parallel to the leading edge, or shielded (one of
//!     its normals reaches the centerline aft of the tip)
//!   - Canted PCS (dihedral > 5°): both edges parallel
//!   - Active strake: both edges parallel
//!   - Canted vertical tail (tilt < 85°): both edges parallel
//!
//! A surface is active when its planform area is at least 1 ft² or unknown.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;
use crate::utils::{are_parallel, edge_angle, planform_point, render, Arg, PlanformPoint};

const MAX_DEDUCTION: usize = 5;

/// Degrees
pub const STEALTH_ANGLE_TOL: f64 = 5.0;
const PCS_DIHEDRAL_THRESHOLD: f64 = 5.0;
const VT_TILT_THRESHOLD: f64 = 85.0;
const ACTIVE_AREA: f64 = 1.0;
const EPS: f64 = 1e-6;

const WING_LE: (u32, u32) = (38, 39);
const WING_TE: (u32, u32) = (40, 41);
const PCS_LE: (u32, u32) = (115, 116);
const PCS_TE: (u32, u32) = (117, 118);
const STRAKE_LE: (u32, u32) = (152, 153);
const STRAKE_TE: (u32, u32) = (154, 155);
const VT_LE: (u32, u32) = (163, 164);
const VT_TE: (u32, u32) = (165, 166);

fn is_active(area: f64) -> bool {
    !area.is_finite() || area >= ACTIVE_AREA
}

/// Whether a normal to the edge `tip -> inner`, cast from the tip, crosses
/// the centerline (y = 0) ahead of it along the normal
fn normal_hits_centerline(tip: PlanformPoint, inner: PlanformPoint) -> bool {
    if !tip.is_finite() || !inner.is_finite() {
        return false;
    }

    let dx = inner.x - tip.x;
    let dy = inner.y - tip.y;
    let normals = [(dy, -dx), (-dy, dx)];

    normals.iter().any(|&(nx, ny)| {
        if ny.abs() < EPS {
            return false;
        }
        let t = -tip.y / ny;
        t > 0.0 && (tip.x + nx * t).is_finite()
    })
}

/// Violation lines collected in order
#[derive(Default)]
struct Tally {
    feedback: Vec<String>,
    failures: usize,
}

impl Tally {
    fn fail(&mut self, line: String) {
        self.feedback.push(line);
        self.failures += 1;
    }
}

pub fn check_stealth_shaping(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let messages = &rubric.messages.stealth;
    let main = workbook.table(TableName::Main);
    let geom = workbook.table(TableName::Geometry);
    let mut tally = Tally::default();

    let wing_active = is_active(main.number("B18"));
    let pcs_active = is_active(main.number("C18"));
    let strake_active = is_active(main.number("D18"));
    let vt_active = is_active(main.number("H18"));

    let angle = |(start, end): (u32, u32)| edge_angle(geom, start, end);
    let wing_le = angle(WING_LE);
    let wing_te = angle(WING_TE);
    let pcs_le = angle(PCS_LE);
    let pcs_dihedral = main.number("C26");
    let vt_tilt = main.number("H27");

    if pcs_active && wing_active && !are_parallel(pcs_le, wing_le, STEALTH_ANGLE_TOL) {
        tally.fail(render(
            &messages.pcs_sweep,
            &[pcs_le.into(), wing_le.into(), STEALTH_ANGLE_TOL.into()],
        ));
    }

    let wing_tip_te = planform_point(geom, WING_TE.0, true);
    let wing_center_te = planform_point(geom, WING_TE.1, true);
    let wing_shielded = wing_active
        && (are_parallel(wing_te, wing_le, STEALTH_ANGLE_TOL)
            || normal_hits_centerline(wing_tip_te, wing_center_te));
    if !wing_shielded {
        tally.fail(render(
            &messages.wing_trailing,
            &[wing_te.into(), STEALTH_ANGLE_TOL.into()],
        ));
    }

    let check_pair = |tally: &mut Tally, edge: (u32, u32), template: &str| {
        let edge_angle = angle(edge);
        if !edge_angle.is_finite() || !wing_le.is_finite() {
            tally.fail(messages.missing_geom.clone());
        } else if !are_parallel(edge_angle, wing_le, STEALTH_ANGLE_TOL) {
            tally.fail(render(
                template,
                &[Arg::from(edge_angle), wing_le.into(), STEALTH_ANGLE_TOL.into()],
            ));
        }
    };

    if pcs_active && pcs_dihedral.is_finite() && pcs_dihedral > PCS_DIHEDRAL_THRESHOLD {
        check_pair(&mut tally, PCS_LE, messages.pcs_leading_parallel.as_str());
        check_pair(&mut tally, PCS_TE, messages.pcs_trailing_parallel.as_str());
    }

    if strake_active {
        check_pair(&mut tally, STRAKE_LE, messages.strake_leading_parallel.as_str());
        check_pair(&mut tally, STRAKE_TE, messages.strake_trailing_parallel.as_str());
    }

    if vt_active {
        if !vt_tilt.is_finite() {
            tally.fail(messages.missing_geom.clone());
        } else if vt_tilt < VT_TILT_THRESHOLD {
            check_pair(&mut tally, VT_LE, messages.vt_leading_parallel.as_str());
            check_pair(&mut tally, VT_TE, messages.vt_trailing_parallel.as_str());
        }
    }

    CheckResult::capped(tally.failures, MAX_DEDUCTION, tally.feedback, &messages.deduction)
}
