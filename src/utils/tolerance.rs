//! Fail-closed threshold comparisons
//!
//! Every helper returns `false` when the value is not finite, so a missing or
//! non-numeric cell can never satisfy a requirement.

/// Generic ratio / dimensionless quantity
pub const RATIO_TOL: f64 = 1e-3;
pub const MACH_TOL: f64 = 1e-2;
pub const DIST_TOL: f64 = 1e-3;
pub const ANGLE_TOL: f64 = 1e-2;
pub const PERCENT_TOL: f64 = 1e-3;
/// Specific excess power, ft/s
pub const PS_TOL: f64 = 1.0;
/// Altitude, ft
pub const ALT_TOL: f64 = 1.0;

/// `value` equals `expected` within `tol`
pub fn within(value: f64, expected: f64, tol: f64) -> bool {
    value.is_finite() && (value - expected).abs() <= tol
}

/// `value >= min`, allowing `tol` below
pub fn at_least(value: f64, min: f64, tol: f64) -> bool {
    value.is_finite() && value >= min - tol
}

/// `value <= max`, allowing `tol` above
pub fn at_most(value: f64, max: f64, tol: f64) -> bool {
    value.is_finite() && value <= max + tol
}

/// `value < limit` with at least `tol` of clearance
pub fn below(value: f64, limit: f64, tol: f64) -> bool {
    value.is_finite() && value < limit - tol
}

/// `lo <= value <= hi`, widened by `tol` on both ends
pub fn between(value: f64, lo: f64, hi: f64, tol: f64) -> bool {
    at_least(value, lo, tol) && at_most(value, hi, tol)
}
