//! Planform Geometry Helpers
//!
//! The geometry table lists planform vertices one per row: x in column L,
//! left-side y in column M and right-side y in column N. Row numbers for each
//! surface are fixed by the design template (wing apex at row 38, PCS root
//! leading edge at row 115, and so on).

use crate::data::{cell_ref, Table};

const X_COLUMN: u32 = 12; // L
const LEFT_Y_COLUMN: u32 = 13; // M
const RIGHT_Y_COLUMN: u32 = 14; // N

/// A vertex of the planform view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanformPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanformPoint {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Read the vertex at `row`
///
/// The right-side y wins over the left-side y; when neither is numeric the
/// point sits on the centerline. x stays NaN when missing.
pub fn planform_point(geom: &Table, row: u32, absolute_y: bool) -> PlanformPoint {
    let x = geom.number(&cell_ref(row, X_COLUMN));
    let left_y = geom.number(&cell_ref(row, LEFT_Y_COLUMN));
    let right_y = geom.number(&cell_ref(row, RIGHT_Y_COLUMN));

    let mut y = if right_y.is_finite() { right_y } else { left_y };
    if !y.is_finite() {
        y = 0.0;
    }

    PlanformPoint {
        x: if x.is_finite() { x } else { f64::NAN },
        y: if absolute_y { y.abs() } else { y },
    }
}

/// Angle of the edge between two vertices, degrees in [0, 90]
///
/// Measured from the x axis using |Δy| over |Δx|. A degenerate edge is 0°;
/// NaN when either x is missing.
pub fn edge_angle(geom: &Table, start_row: u32, end_row: u32) -> f64 {
    let start = planform_point(geom, start_row, true);
    let end = planform_point(geom, end_row, true);
    if !start.x.is_finite() || !end.x.is_finite() {
        return f64::NAN;
    }

    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    dy.atan2(dx).to_degrees()
}

/// Streamwise distance from the leading-edge vertex to the trailing-edge vertex
pub fn chord_length(geom: &Table, leading_row: u32, trailing_row: u32) -> f64 {
    let leading = planform_point(geom, leading_row, false);
    let trailing = planform_point(geom, trailing_row, false);
    if !leading.x.is_finite() || !trailing.x.is_finite() {
        return f64::NAN;
    }
    trailing.x - leading.x
}

/// Largest |y| over rows that have a numeric x
pub fn max_half_span(geom: &Table, rows: &[u32]) -> Option<f64> {
    rows.iter()
        .map(|&row| planform_point(geom, row, true))
        .filter(|p| p.x.is_finite())
        .map(|p| p.y)
        .reduce(f64::max)
}

fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(180.0)
}

/// Two edge angles are parallel when they agree modulo 180° within `tol` degrees
pub fn are_parallel(angle: f64, reference: f64, tol: f64) -> bool {
    if !angle.is_finite() || !reference.is_finite() {
        return false;
    }
    let diff = (normalize_angle(angle) - normalize_angle(reference)).abs();
    diff.min(180.0 - diff) <= tol
}
