//! Fit a chain of cubic bezier segments to a sampled stroke
//!
//! Schneider's adaptive algorithm ("An Algorithm for Automatically Fitting
//! Digitized Curves", Graphics Gems, 1990):
//!
//! 1. Estimate unit tangents at both ends of the stroke.
//! 2. Parameterize the region by chord length and fit one cubic by least squares.
//! 3. If the maximum squared deviation is below the tolerance, accept the cubic.
//! 4. If it is below `tolerance²`, try a few rounds of Newton-Raphson
//!    reparameterization and refitting.
//! 5. Otherwise split the region at the worst sample, estimate the tangent
//!    there, and fit both halves.
//!
//! Pending regions live on an explicit stack rather than the call stack, and
//! the left half is always resolved before the right half, so segments come
//! out in stroke order. [`FitSegments`] yields them lazily.
//!
//! # Example
//!
//! ```rust
//! use sketch_fit::{fit_curve, pt};
//!
//! let stroke = vec![pt!(0, 0), pt!(0, 5), pt!(11, 14), pt!(21, 16), pt!(32, 11), pt!(40, 2), pt!(40, 0)];
//! let curve = fit_curve(&stroke, 4.0).unwrap();
//!
//! assert_eq!(curve.start(), Some(pt!(0, 0)));
//! assert_eq!(curve.end(), Some(pt!(40, 0)));
//! assert!(curve.is_contiguous());
//! ```

use std::iter::FusedIterator;

use crate::config::FitConfig;
use crate::data::{BezierCurve, BezierSegment, Point};
use crate::error::{BezierError, BezierResult};
use crate::modules::fit::least_square_fit::{generate_bezier, heuristic_segment};
use crate::modules::fit::newton_raphson::reparameterize;
use crate::modules::fit::t_heuristic::{estimate_t_values_with_heuristic, THeuristic};
use crate::modules::fit::tangent::{center_tangent, left_tangent, right_tangent};

/// An accepted segment together with the samples it represents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedSegment {
    pub segment: BezierSegment,
    /// Index of the sample at `P0`
    pub first: usize,
    /// Index of the sample at `P3`
    pub last: usize,
    /// Maximum squared distance of an interior sample to the curve, measured
    /// at the sample's parameter. Zero for two-point regions.
    pub max_error: f64,
}

/// Worst deviation of a region from its fitted curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxError {
    pub squared_distance: f64,
    /// Index of the worst sample, relative to the region
    pub split_index: usize,
}

/// Find the maximum squared distance of the region's interior samples to `segment`.
///
/// For a region of three or more points, `split_index` is strictly inside the
/// region, defaulting to the region midpoint. A non-finite distance counts as
/// infinite, so a curve that overflowed or went NaN is never accepted.
pub fn compute_max_error(points: &[Point], segment: &BezierSegment, u: &[f64]) -> MaxError {
    let last = points.len().saturating_sub(1);
    let mut max = MaxError {
        squared_distance: 0.0,
        split_index: last / 2,
    };

    for i in 1..last {
        let mut dist = segment.point_at(u[i]).squared_distance(&points[i]);
        if !dist.is_finite() {
            dist = f64::INFINITY;
        }
        if dist >= max.squared_distance {
            max.squared_distance = dist;
            max.split_index = i;
        }
    }
    max
}

/// A contiguous range of samples still waiting to be fitted
#[derive(Debug, Clone, Copy)]
struct Region {
    first: usize,
    last: usize,
    tangent_left: Point,
    tangent_right: Point,
}

enum RegionFit {
    Accepted(FittedSegment),
    Split { split_index: usize },
}

/// Lazily fitted segments of a stroke, in stroke order.
///
/// ```rust
/// use sketch_fit::{FitConfig, FitSegments, pt};
///
/// let stroke = [pt!(0, 0), pt!(5, 1), pt!(10, 0)];
/// let fitted: Vec<_> = FitSegments::new(&stroke, FitConfig::with_tolerance(1.0))
///     .unwrap()
///     .collect();
/// assert_eq!(fitted[0].first, 0);
/// assert_eq!(fitted.last().unwrap().last, 2);
/// ```
#[derive(Debug, Clone)]
pub struct FitSegments<'a> {
    points: &'a [Point],
    config: FitConfig,
    pending: Vec<Region>,
}

impl<'a> FitSegments<'a> {
    pub fn new(points: &'a [Point], config: FitConfig) -> BezierResult<Self> {
        config.validate()?;
        if points.len() < 2 {
            return Err(BezierError::TooFewPoints {
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(BezierError::NonFinitePoint { index });
        }

        let last = points.len() - 1;
        let whole = Region {
            first: 0,
            last,
            tangent_left: left_tangent(points, 0),
            tangent_right: right_tangent(points, last),
        };

        Ok(Self {
            points,
            config,
            pending: vec![whole],
        })
    }

    fn fit_region(&self, region: &Region) -> RegionFit {
        let points = &self.points[region.first..=region.last];
        let tolerance = self.config.tolerance;
        let accept = |segment: BezierSegment, max_error: f64| {
            RegionFit::Accepted(FittedSegment {
                segment,
                first: region.first,
                last: region.last,
                max_error,
            })
        };

        if points.len() == 2 {
            let segment = heuristic_segment(points[0], points[1], region.tangent_left, region.tangent_right);
            return accept(segment, 0.0);
        }

        let mut u = estimate_t_values_with_heuristic(points, THeuristic::ChordLength);
        let mut segment = generate_bezier(points, &u, region.tangent_left, region.tangent_right);
        let mut error = compute_max_error(points, &segment, &u);
        if error.squared_distance < tolerance {
            return accept(segment, error.squared_distance);
        }

        if error.squared_distance < self.config.iteration_error() {
            for attempt in 1..=self.config.max_iterations {
                let u_prime = reparameterize(&segment, points, &u);
                segment = generate_bezier(points, &u_prime, region.tangent_left, region.tangent_right);
                error = compute_max_error(points, &segment, &u_prime);
                if error.squared_distance < tolerance {
                    log::trace!(
                        "region {}..={} converged after {} reparameterizations",
                        region.first,
                        region.last,
                        attempt
                    );
                    return accept(segment, error.squared_distance);
                }
                u = u_prime;
            }
        }

        RegionFit::Split {
            split_index: region.first + error.split_index,
        }
    }
}

impl Iterator for FitSegments<'_> {
    type Item = FittedSegment;

    fn next(&mut self) -> Option<FittedSegment> {
        while let Some(region) = self.pending.pop() {
            match self.fit_region(&region) {
                RegionFit::Accepted(fitted) => return Some(fitted),
                RegionFit::Split { split_index } => {
                    debug_assert!(region.first < split_index && split_index < region.last);
                    log::debug!(
                        "splitting region {}..={} at {}",
                        region.first,
                        region.last,
                        split_index
                    );
                    let tangent_center = center_tangent(self.points, split_index);
                    // pushed right first so the left half pops first
                    self.pending.push(Region {
                        first: split_index,
                        last: region.last,
                        tangent_left: -tangent_center,
                        tangent_right: region.tangent_right,
                    });
                    self.pending.push(Region {
                        first: region.first,
                        last: split_index,
                        tangent_left: region.tangent_left,
                        tangent_right: tangent_center,
                    });
                }
            }
        }
        None
    }
}

impl FusedIterator for FitSegments<'_> {}

/// Fit cubic bezier segments to `points` within `tolerance` (a squared distance).
pub fn fit_curve(points: &[Point], tolerance: f64) -> BezierResult<BezierCurve> {
    fit_curve_with_config(points, FitConfig::with_tolerance(tolerance))
}

pub fn fit_curve_with_config(points: &[Point], config: FitConfig) -> BezierResult<BezierCurve> {
    let segments: Vec<BezierSegment> = FitSegments::new(points, config)?
        .map(|fitted| fitted.segment)
        .collect();
    log::debug!(
        "fitted {} points with {} segments (tolerance {})",
        points.len(),
        segments.len(),
        config.tolerance
    );
    Ok(BezierCurve::new(segments))
}
