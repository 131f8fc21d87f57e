//! Least squares placement of the interior control points of a cubic
//!
//! The end anchors are pinned to the first and last sample and the end
//! tangents are given, so the only unknowns are two distances: `alpha_l` along
//! the left tangent and `alpha_r` along the right one. Minimizing the summed
//! squared distance between each sample `d_i` and `Q(u_i)` gives the 2x2 normal
//! equations
//!
//! ```text
//! | A1·A1  A1·A2 | | alpha_l |   | A1·r |
//! | A1·A2  A2·A2 | | alpha_r | = | A2·r |
//! ```
//!
//! with `A1 = t_l * B1(u)`, `A2 = t_r * B2(u)` and `r` the residual of the sample
//! from the curve whose interior control points sit on the anchors. The system
//! is solved by Cramer's rule.
//!
//! See "An Algorithm for Automatically Fitting Digitized Curves", Philip J.
//! Schneider, Graphics Gems, 1990.
//!
//! # Example
//!
//! ```rust
//! use sketch_fit::modules::fit::least_square_fit::generate_bezier;
//! use sketch_fit::modules::fit::t_heuristic::{estimate_t_values_with_heuristic, THeuristic};
//! use sketch_fit::{cubic, pt};
//!
//! let original = cubic!([(0, 0), (1, 1), (2, 2), (3, 3)]);
//! let samples = original.sample_points(10);
//! let u = estimate_t_values_with_heuristic(&samples, THeuristic::ChordLength);
//!
//! let left = (samples[1] - samples[0]).normalize();
//! let right = (samples[8] - samples[9]).normalize();
//! let fitted = generate_bezier(&samples, &u, left, right);
//! assert!(fitted.points[1].distance(&pt!(1, 1)) < 1e-9);
//! ```

use nalgebra::{Matrix2, Vector2};

use crate::constants::{ALPHA_EPSILON, SINGULAR_DETERMINANT_SCALE};
use crate::data::{BezierSegment, Point};

/// Cubic Bernstein basis functions
fn b0(u: f64) -> f64 {
    let tmp = 1.0 - u;
    tmp * tmp * tmp
}

fn b1(u: f64) -> f64 {
    let tmp = 1.0 - u;
    3.0 * u * tmp * tmp
}

fn b2(u: f64) -> f64 {
    let tmp = 1.0 - u;
    3.0 * u * u * tmp
}

fn b3(u: f64) -> f64 {
    u * u * u
}

/// Wu/Barsky placement: interior control points one third of the chord out
/// along each tangent.
pub fn heuristic_segment(first: Point, last: Point, tangent_left: Point, tangent_right: Point) -> BezierSegment {
    let dist = first.distance(&last) / 3.0;
    BezierSegment::cubic(
        first,
        first + tangent_left * dist,
        last + tangent_right * dist,
        last,
    )
}

/// Fit a cubic to the region `points` with parameters `u` and unit end tangents.
///
/// `tangent_left` points into the region from its first sample and
/// `tangent_right` points into it from its last sample. The anchors of the
/// result are exactly `points[0]` and `points[n - 1]`.
///
/// Regions of two points, and systems whose solution puts a control point at or
/// behind its anchor, get the [`heuristic_segment`] instead.
pub fn generate_bezier(points: &[Point], u: &[f64], tangent_left: Point, tangent_right: Point) -> BezierSegment {
    debug_assert_eq!(points.len(), u.len());
    debug_assert!(points.len() >= 2);

    let first = points[0];
    let last = points[points.len() - 1];

    if points.len() == 2 {
        return heuristic_segment(first, last, tangent_left, tangent_right);
    }

    let mut c = Matrix2::<f64>::zeros();
    let mut x = Vector2::<f64>::zeros();

    for (point, &t) in points.iter().zip(u) {
        let a1 = tangent_left * b1(t);
        let a2 = tangent_right * b2(t);

        c[(0, 0)] += a1.dot(&a1);
        c[(0, 1)] += a1.dot(&a2);
        c[(1, 1)] += a2.dot(&a2);

        let residual = *point - (first * (b0(t) + b1(t)) + last * (b2(t) + b3(t)));
        x[0] += a1.dot(&residual);
        x[1] += a2.dot(&residual);
    }
    c[(1, 0)] = c[(0, 1)];

    let mut det_c0_c1 = c.determinant();
    if det_c0_c1 == 0.0 {
        det_c0_c1 = c[(0, 0)] * c[(1, 1)] * SINGULAR_DETERMINANT_SCALE;
    }
    // Cramer's rule: replace one column of C with X
    let det_x_c1 = Matrix2::from_columns(&[x, c.column(1).into_owned()]).determinant();
    let det_c0_x = Matrix2::from_columns(&[c.column(0).into_owned(), x]).determinant();

    let alpha_l = det_x_c1 / det_c0_c1;
    let alpha_r = det_c0_x / det_c0_c1;

    // A zero alpha makes a control point coincide with its anchor, which would
    // zero the derivative that Newton-Raphson divides by.
    if !alpha_usable(alpha_l) || !alpha_usable(alpha_r) {
        log::trace!(
            "alpha_l = {}, alpha_r = {} over {} points, using heuristic control points",
            alpha_l,
            alpha_r,
            points.len()
        );
        return heuristic_segment(first, last, tangent_left, tangent_right);
    }

    BezierSegment::cubic(
        first,
        first + tangent_left * alpha_l,
        last + tangent_right * alpha_r,
        last,
    )
}

fn alpha_usable(alpha: f64) -> bool {
    alpha.is_finite() && alpha >= ALPHA_EPSILON
}
