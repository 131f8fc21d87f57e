//! Newton-Raphson refinement of sample parameters against a fitted cubic
//!
//! For a sample `P` and its current parameter `u`, the closest point of `Q`
//! satisfies `f(u) = (Q(u) - P)·Q'(u) = 0`. One Newton step is
//!
//! ```text
//! u' = u - f(u) / f'(u),   f'(u) = Q'(u)·Q'(u) + (Q(u) - P)·Q''(u)
//! ```

use crate::data::{BezierSegment, Point};
use crate::modules::eval::de_casteljau::de_casteljau;

/// One Newton-Raphson step for the parameter of `point` on `segment`.
///
/// A zero or non-finite `f'(u)`, as at a cusp, leaves `u` unchanged. The
/// updated parameter is clamped to `[0, 1]`.
pub fn newton_raphson_root_find(segment: &BezierSegment, point: Point, u: f64) -> f64 {
    let q1 = segment.first_derivative();
    let q2 = segment.second_derivative();
    newton_step(segment, &q1, &q2, point, u)
}

/// Refine every parameter of the region against the current fit.
pub fn reparameterize(segment: &BezierSegment, points: &[Point], u: &[f64]) -> Vec<f64> {
    let q1 = segment.first_derivative();
    let q2 = segment.second_derivative();
    points
        .iter()
        .zip(u)
        .map(|(&point, &t)| newton_step(segment, &q1, &q2, point, t))
        .collect()
}

fn newton_step(segment: &BezierSegment, q1: &[Point; 3], q2: &[Point; 2], point: Point, u: f64) -> f64 {
    let q_u = segment.point_at(u);
    let q1_u = de_casteljau(q1, u);
    let q2_u = de_casteljau(q2, u);

    let diff = q_u - point;
    let numerator = diff.dot(&q1_u);
    let denominator = q1_u.dot(&q1_u) + diff.dot(&q2_u);

    if denominator == 0.0 || !denominator.is_finite() {
        log::trace!("newton-raphson denominator {} at u = {}, keeping u", denominator, u);
        return u;
    }

    let u_prime = u - numerator / denominator;
    if !u_prime.is_finite() {
        return u;
    }
    u_prime.clamp(0.0, 1.0)
}
