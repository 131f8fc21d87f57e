//! Cubic bezier segment: two anchors and two interior control points

use serde::{Deserialize, Serialize};

use crate::data::point::Point;
use crate::modules::eval::de_casteljau::{de_casteljau, derivative_control_points};

/// A cubic bezier segment.
///
/// Serializes as a bare array of its four points, the shape the drawing
/// clients exchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BezierSegment {
    /// Control points: start point, control1, control2, end point
    pub points: [Point; 4],
}

impl BezierSegment {
    /// Create a cubic segment with 4 control points
    pub fn cubic(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self {
            points: [p1, p2, p3, p4],
        }
    }

    /// Get all control points for this segment
    pub fn points(&self) -> [Point; 4] {
        self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[3]
    }

    /// Get a point on the bezier curve at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point {
        de_casteljau(&self.points, t)
    }

    /// Control points of the quadratic `Q'`
    pub fn first_derivative(&self) -> [Point; 3] {
        let d = derivative_control_points(&self.points);
        [d[0], d[1], d[2]]
    }

    /// Control points of the linear `Q''`
    pub fn second_derivative(&self) -> [Point; 2] {
        let d = derivative_control_points(&self.first_derivative());
        [d[0], d[1]]
    }

    /// Generate a series of evenly spaced points along the bezier curve
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| {
                    let t = i as f64 / (num_points - 1) as f64;
                    self.point_at(t)
                })
                .collect(),
        }
    }
}
