//! Piecewise-Linear Curve Interpolation
//!
//! Evaluates a tabulated performance curve (required T/W against W/S) at the
//! design wing loading.
//!
//! Algorithm:
//! 1. Drop pairs where either coordinate is not finite, sort by x
//! 2. At or below the first x: extrapolate along the first segment
//! 3. At or above the last x: extrapolate along the last segment
//! 4. Otherwise: linear interpolation between the bracketing pair
//!
//! Fewer than two usable points means the curve cannot be evaluated and the
//! result is `None`.

use crate::data::CellValue;
use crate::error::GradeError;

#[derive(Debug, Clone, Copy)]
struct CurvePoint {
    x: f64,
    y: f64,
}

fn slope(p0: CurvePoint, p1: CurvePoint) -> f64 {
    let dx = p1.x - p0.x;
    if dx == 0.0 {
        0.0
    } else {
        (p1.y - p0.y) / dx
    }
}

/// Interpolate `curve` (dependent) over `axis` (independent) at `x`
pub fn interpolate(axis: &[f64], curve: &[f64], x: f64) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }

    let mut points: Vec<CurvePoint> = axis
        .iter()
        .zip(curve.iter())
        .filter(|(px, py)| px.is_finite() && py.is_finite())
        .map(|(&x, &y)| CurvePoint { x, y })
        .collect();

    if points.len() < 2 {
        return None;
    }

    points.sort_by(|a, b| a.x.total_cmp(&b.x));

    let first = points[0];
    let last = points[points.len() - 1];

    if x <= first.x {
        let m = slope(first, points[1]);
        return Some(first.y + m * (x - first.x));
    }

    if x >= last.x {
        let m = slope(points[points.len() - 2], last);
        return Some(last.y + m * (x - last.x));
    }

    points
        .windows(2)
        .find(|pair| pair[0].x <= x && x <= pair[1].x)
        .map(|pair| pair[0].y + slope(pair[0], pair[1]) * (x - pair[0].x))
}

/// Interpolate a curve read straight from table cells
///
/// The axis and curve rows must span the same number of cells; a mismatch is
/// a caller error reported as [`GradeError::CurveShape`].
pub fn interpolate_cells(
    label: &str,
    axis: &[CellValue],
    curve: &[CellValue],
    x: f64,
) -> Result<Option<f64>, GradeError> {
    if axis.len() != curve.len() {
        return Err(GradeError::CurveShape {
            label: label.to_string(),
            axis: axis.len(),
            curve: curve.len(),
        });
    }

    let xs: Vec<f64> = axis.iter().map(CellValue::as_number).collect();
    let ys: Vec<f64> = curve.iter().map(CellValue::as_number).collect();

    Ok(interpolate(&xs, &ys, x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const XS: [f64; 3] = [0.0, 10.0, 20.0];
    const YS: [f64; 3] = [0.0, 10.0, 20.0];

    #[test]
    fn test_collinear_interpolation_and_extrapolation() {
        assert_relative_eq!(interpolate(&XS, &YS, 5.0).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(interpolate(&XS, &YS, -5.0).unwrap(), -5.0, epsilon = 1e-12);
        assert_relative_eq!(interpolate(&XS, &YS, 25.0).unwrap(), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoints_use_edge_segments() {
        let xs = [0.0, 10.0, 20.0];
        let ys = [1.0, 3.0, 4.0];
        // Below: slope of first segment (0.2)
        assert_relative_eq!(interpolate(&xs, &ys, -10.0).unwrap(), -1.0, epsilon = 1e-12);
        // Above: slope of last segment (0.1)
        assert_relative_eq!(interpolate(&xs, &ys, 30.0).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(interpolate(&xs, &ys, 15.0).unwrap(), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unsorted_and_non_finite_points_filtered() {
        let xs = [20.0, f64::NAN, 0.0, 10.0, 30.0];
        let ys = [20.0, 5.0, 0.0, 10.0, f64::NAN];
        assert_relative_eq!(interpolate(&xs, &ys, 12.5).unwrap(), 12.5, epsilon = 1e-12);
    }

    #[test]
    fn test_too_few_points_is_undefined() {
        assert!(interpolate(&[1.0], &[2.0], 1.0).is_none());
        assert!(interpolate(&[1.0, f64::NAN], &[2.0, 3.0], 1.0).is_none());
        assert!(interpolate(&[], &[], 1.0).is_none());
        assert!(interpolate(&XS, &YS, f64::NAN).is_none());
    }

    #[test]
    fn test_cells_shape_mismatch() {
        let axis = vec![CellValue::Number(0.0), CellValue::Number(1.0)];
        let curve = vec![CellValue::Number(0.0)];
        let err = interpolate_cells("Takeoff", &axis, &curve, 0.5).unwrap_err();
        assert!(err.to_string().contains("Takeoff"));
    }

    #[test]
    fn test_cells_with_text_entries() {
        let axis = vec![CellValue::Number(0.0), CellValue::Text("W/S".into()), CellValue::Number(10.0)];
        let curve = vec![CellValue::Number(1.0), CellValue::Number(9.0), CellValue::Number(2.0)];
        let y = interpolate_cells("MaxMach", &axis, &curve, 5.0).unwrap().unwrap();
        assert_relative_eq!(y, 1.5, epsilon = 1e-12);
    }
}
