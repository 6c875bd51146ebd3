//! Utility modules for design grading
//!
//! Contains shared functionality used across multiple rule modules:
//! - Tolerance: fail-closed threshold comparisons
//! - Interpolation: piecewise-linear performance curves
//! - Geometry: planform points, edge angles, chords
//! - Format: printf-style rendering of feedback templates

pub mod format;
pub mod geometry;
pub mod interpolation;
pub mod tolerance;

// Re-export commonly used items
pub use format::{render, round_tenth, Arg};
pub use geometry::{are_parallel, chord_length, edge_angle, max_half_span, planform_point, PlanformPoint};
pub use interpolation::{interpolate, interpolate_cells};
pub use tolerance::{at_least, at_most, below, between, within};
