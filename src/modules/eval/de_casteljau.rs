//! De Casteljau evaluation of a Bezier curve given by its control points
//!
//! A curve of degree `n` has `n + 1` control points. Evaluating at `t` runs `n`
//! rounds of affine interpolation between consecutive points, each round
//! shrinking the working set by one, until one point remains.
//!
//! The derivative of a degree `n` curve is a degree `n - 1` curve whose control
//! points are `n * (p[i + 1] - p[i])`, so the same routine evaluates `Q'` and `Q''`.
//!
//! # Example
//!
//! ```rust
//! use sketch_fit::modules::eval::de_casteljau::{de_casteljau, derivative_control_points};
//! use sketch_fit::pt;
//!
//! let control = [pt!(0, 0), pt!(1, 2), pt!(3, 2), pt!(4, 0)];
//! assert_eq!(de_casteljau(&control, 0.5), pt!(2, 1.5));
//!
//! let velocity = derivative_control_points(&control);
//! assert_eq!(velocity, vec![pt!(3, 6), pt!(6, 0), pt!(3, -6)]);
//! ```

use crate::data::Point;

/// Evaluate the Bezier curve with the given control points at parameter `t`.
///
/// An empty control polygon evaluates to the origin.
pub fn de_casteljau(control_points: &[Point], t: f64) -> Point {
    let n = control_points.len();
    if n <= 4 {
        // cubics and their derivatives stay on the stack
        let mut work = [Point::ZERO; 4];
        work[..n].copy_from_slice(control_points);
        reduce(&mut work[..n], t)
    } else {
        reduce(&mut control_points.to_vec(), t)
    }
}

fn reduce(work: &mut [Point], t: f64) -> Point {
    let degree = work.len().saturating_sub(1);
    for round in 1..=degree {
        for j in 0..=(degree - round) {
            work[j] = work[j].lerp(&work[j + 1], t);
        }
    }
    work.first().copied().unwrap_or_default()
}

/// Control points of the derivative curve, `n * (p[i + 1] - p[i])`.
pub fn derivative_control_points(control_points: &[Point]) -> Vec<Point> {
    let degree = control_points.len().saturating_sub(1) as f64;
    control_points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) * degree)
        .collect()
}
