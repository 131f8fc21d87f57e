//! A Bezier curve: a chain of cubic Bezier segments.

use serde::{Deserialize, Serialize};

use crate::data::point::Point;
use crate::data::segment::BezierSegment;

/// A Bezier curve consisting of one or more cubic segments.
///
/// This is what one fit of a stroke produces. Serializes as a bare array of
/// segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BezierCurve {
    pub segments: Vec<BezierSegment>,
}

impl BezierCurve {
    /// Create a new bezier curve from a list of segments
    pub fn new(segments: Vec<BezierSegment>) -> Self {
        Self { segments }
    }

    /// Create a bezier curve from a single segment
    pub fn from_segment(segment: &BezierSegment) -> Self {
        Self {
            segments: vec![*segment],
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First anchor of the first segment
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(BezierSegment::start)
    }

    /// Last anchor of the last segment
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(BezierSegment::end)
    }

    /// Whether every segment starts exactly where the previous one ends
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end() == pair[1].start())
    }

    /// A contiguous curve whose last anchor is its first anchor
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.is_contiguous() && self.start() == self.end()
    }
}

impl From<Vec<BezierSegment>> for BezierCurve {
    fn from(segments: Vec<BezierSegment>) -> Self {
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cubic, curve, curve_from};

    #[test]
    fn test_contiguity() {
        let joined = curve!([
            cubic!([(0, 0), (1, 1), (2, 1), (3, 0)]),
            cubic!([(3, 0), (4, -1), (5, -1), (6, 0)])
        ]);
        assert!(joined.is_contiguous());
        assert!(!joined.is_closed());
        assert_eq!(joined.start(), Some(Point::new(0.0, 0.0)));
        assert_eq!(joined.end(), Some(Point::new(6.0, 0.0)));

        let gap = curve!([
            cubic!([(0, 0), (1, 1), (2, 1), (3, 0)]),
            cubic!([(3, 0.5), (4, -1), (5, -1), (6, 0)])
        ]);
        assert!(!gap.is_contiguous());
    }

    #[test]
    fn test_closed() {
        let loop_curve = curve!([
            cubic!([(20, 20), (40, 20), (60, 40), (60, 60)]),
            cubic!([(60, 60), (60, 80), (40, 80), (20, 60)]),
            cubic!([(20, 60), (0, 40), (0, 20), (20, 20)])
        ]);
        assert!(loop_curve.is_closed());

        let single = curve_from!(cubic!([(0, 0), (1, 1), (2, 1), (3, 0)]));
        assert!(!single.is_closed());
        assert!(!BezierCurve::default().is_closed());
        assert_eq!(BezierCurve::default().start(), None);
    }
}
