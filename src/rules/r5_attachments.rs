//! RULE 5: COMPONENT ATTACHMENT
//!
//! Checks that the control surfaces and strake are physically attached to the
//! fuselage and wing:
//!   - PCS and vertical tail keep at least 25% of their root chord ahead of
//!     the fuselage end
//!   - PCS sits within the fuselage height, vertical tail within its half-width
//!   - An active strake meets the wing leading edge
//!   - No component starts at or beyond the fuselage end
//!
//! Root chords and the vertical-tail offset fall back to the planform vertices
//! when the summary cells are blank. Data that cannot be resolved is reported
//! and counted as a violation.

use crate::config::RubricConfig;
use crate::data::{TableName, Workbook};
use crate::rules::CheckResult;
use crate::utils::{chord_length, max_half_span, planform_point, render, Arg};

const MAX_DEDUCTION: usize = 2;
const ROOT_CHORD_OVERLAP: f64 = 0.25;
const STRAKE_AREA_THRESHOLD: f64 = 1.0;
const STRAKE_CLEARANCE: f64 = 0.5;

const PCS_ROOT_LE_ROW: u32 = 115;
const PCS_ROOT_TE_ROW: u32 = 118;
const VT_ROOT_LE_ROW: u32 = 163;
const VT_ROOT_TE_ROW: u32 = 166;
const VT_ROWS: [u32; 4] = [163, 164, 165, 166];
const WING_APEX_ROW: u32 = 38;
const STRAKE_TIP_ROW: u32 = 155;

/// Component x positions on the main table (row 23, columns B..H)
const COMPONENT_ROW: u32 = 23;
const COMPONENT_COLUMNS: std::ops::RangeInclusive<u32> = 2..=8;

fn finite_or(value: f64, fallback: impl FnOnce() -> f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback()
    }
}

pub fn check_attachments(workbook: &Workbook, rubric: &RubricConfig) -> CheckResult {
    let messages = &rubric.messages.attachment;
    let main = workbook.table(TableName::Main);
    let geom = workbook.table(TableName::Geometry);
    let mut feedback = Vec::new();
    let mut failures = 0;

    let mut fail = |line: String| {
        feedback.push(line);
        failures += 1;
    };

    let fuselage_length = main.number("B32");

    // PCS longitudinal placement
    let pcs_x = main.number("C23");
    let pcs_chord = finite_or(geom.number("C8"), || {
        chord_length(geom, PCS_ROOT_LE_ROW, PCS_ROOT_TE_ROW)
    });
    if !(fuselage_length.is_finite() && pcs_x.is_finite() && pcs_chord.is_finite()) {
        fail(messages.pcs_x_missing.clone());
    } else if pcs_x > fuselage_length - ROOT_CHORD_OVERLAP * pcs_chord {
        fail(messages.pcs_x.clone());
    }

    // Vertical tail longitudinal placement
    let vt_x = main.number("H23");
    let vt_chord = finite_or(geom.number("C10"), || {
        chord_length(geom, VT_ROOT_LE_ROW, VT_ROOT_TE_ROW)
    });
    if !(fuselage_length.is_finite() && vt_x.is_finite() && vt_chord.is_finite()) {
        fail(messages.vt_x_missing.clone());
    } else if vt_x > fuselage_length - ROOT_CHORD_OVERLAP * vt_chord {
        fail(messages.vt_x.clone());
    }

    // PCS vertical placement
    let pcs_z = main.number("C25");
    let fuselage_z = main.number("D52");
    let fuselage_height = main.number("F52");
    if !(pcs_z.is_finite() && fuselage_z.is_finite() && fuselage_height.is_finite()) {
        fail(messages.pcs_z_missing.clone());
    } else if (pcs_z - fuselage_z).abs() > fuselage_height / 2.0 {
        fail(messages.pcs_z.clone());
    }

    // Vertical tail lateral placement
    let vt_y = finite_or(main.number("H24"), || {
        max_half_span(geom, &VT_ROWS).unwrap_or(f64::NAN)
    });
    let fuselage_width = main.number("E52");
    if !(vt_y.is_finite() && fuselage_width.is_finite()) {
        fail(messages.vt_y_missing.clone());
    } else if vt_y > fuselage_width / 2.0 {
        fail(messages.vt_y.clone());
    }

    // Strake attachment
    let strake_area = main.number("D18");
    if strake_area.is_finite() && strake_area > STRAKE_AREA_THRESHOLD {
        let sweep = geom.number("K15");
        let strake_y = geom.number("M152");
        let strake_x = planform_point(geom, STRAKE_TIP_ROW, false).x;
        let apex_x = planform_point(geom, WING_APEX_ROW, false).x;

        if !(sweep.is_finite() && strake_y.is_finite() && strake_x.is_finite() && apex_x.is_finite()) {
            fail(messages.strake_missing.clone());
        } else {
            // Wing leading edge x at the strake's spanwise station
            let wing_x = strake_y / (90.0 - sweep).to_radians().tan() + apex_x;
            if !(wing_x < strake_x + STRAKE_CLEARANCE) {
                fail(messages.strake.clone());
            }
        }
    }

    // Components past the fuselage end
    if fuselage_length.is_finite() {
        let beyond_end = COMPONENT_COLUMNS
            .map(|col| main.number_at(COMPONENT_ROW, col))
            .any(|x| x.is_finite() && x >= fuselage_length);
        if beyond_end {
            fail(render(&messages.fuselage, &[Arg::from(fuselage_length)]));
        }
    }

    CheckResult::capped(failures, MAX_DEDUCTION, feedback, &messages.deduction)
}
