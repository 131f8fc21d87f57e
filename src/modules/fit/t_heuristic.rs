//! Initial parameter values for the samples of a region
//!
//! Each sample gets a `t` in `[0, 1]`, non-decreasing along the stroke, with
//! the first sample at exactly 0 and the last at exactly 1.
//!
//! # Example
//!
//! ```rust
//! use sketch_fit::modules::fit::t_heuristic::{estimate_t_values_with_heuristic, THeuristic};
//! use sketch_fit::pt;
//!
//! let points = [pt!(0, 0), pt!(1, 0), pt!(4, 0)];
//! let t = estimate_t_values_with_heuristic(&points, THeuristic::ChordLength);
//! assert_eq!(t, vec![0.0, 0.25, 1.0]);
//! ```

use crate::data::Point;

/// Strategies for assigning parameter values to samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum THeuristic {
    /// Proportional to the cumulative distance travelled along the polyline
    #[default]
    ChordLength,
    /// Evenly spaced by sample index
    Uniform,
}

/// Assign a parameter value to every point of the region.
///
/// A region whose samples all coincide has no chord length to divide by; it is
/// parameterized uniformly instead.
pub fn estimate_t_values_with_heuristic(points: &[Point], heuristic: THeuristic) -> Vec<f64> {
    match heuristic {
        THeuristic::ChordLength => chord_length(points),
        THeuristic::Uniform => uniform(points.len()),
    }
}

fn chord_length(points: &[Point]) -> Vec<f64> {
    let mut t_values = Vec::with_capacity(points.len());
    let mut travelled = 0.0;
    t_values.push(0.0);
    for pair in points.windows(2) {
        travelled += pair[1].distance(&pair[0]);
        t_values.push(travelled);
    }

    let total = travelled;
    if total == 0.0 || !total.is_finite() {
        log::debug!(
            "zero chord length over {} points, using uniform parameterization",
            points.len()
        );
        return estimate_t_values_with_heuristic(points, THeuristic::Uniform);
    }

    for t in t_values.iter_mut().skip(1) {
        *t /= total;
    }
    t_values
}

fn uniform(len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (len - 1) as f64;
            (0..len).map(|i| i as f64 / last).collect()
        }
    }
}
