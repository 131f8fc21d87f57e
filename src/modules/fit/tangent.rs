//! Unit tangent estimates from the secants of neighbouring samples.
//!
//! When the two samples defining a tangent coincide the result is the zero
//! vector. The least squares solver copes with that through its heuristic
//! fallback.

use crate::data::Point;

/// Tangent at the start of the region, pointing into it.
pub fn left_tangent(points: &[Point], first: usize) -> Point {
    (points[first + 1] - points[first]).normalize()
}

/// Tangent at the end of the region, pointing back into it.
pub fn right_tangent(points: &[Point], last: usize) -> Point {
    (points[last - 1] - points[last]).normalize()
}

/// Tangent at an interior split point, pointing backwards along the stroke.
///
/// It closes the left half; its negation opens the right half.
pub fn center_tangent(points: &[Point], center: usize) -> Point {
    let incoming = points[center - 1] - points[center];
    let outgoing = points[center] - points[center + 1];
    ((incoming + outgoing) * 0.5).normalize()
}
