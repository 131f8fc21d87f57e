//! This module provides convenient macros for creating points, segments, and curves.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a cubic bezier segment
#[macro_export]
macro_rules! cubic {
    ([$(($x:expr, $y:expr)),* $(,)?]) => {{
        let points = [$($crate::pt!($x, $y)),*];
        assert_eq!(points.len(), 4, "Cubic bezier requires exactly 4 points");
        $crate::data::BezierSegment::cubic(points[0], points[1], points[2], points[3])
    }};
}

/// Macro for creating a Bezier curve from segments
#[macro_export]
macro_rules! curve {
    // Create from a list of segments
    ([$($segment:expr),* $(,)?]) => {{
        let segments = vec![$($segment),*];
        $crate::data::BezierCurve::new(segments)
    }};

    // Create from an existing vector of segments
    ($segments:expr) => {
        $crate::data::BezierCurve::new($segments)
    };
}

/// Macro for creating a Bezier curve from a single segment
#[macro_export]
macro_rules! curve_from {
    ($segment:expr) => {
        $crate::data::BezierCurve::new(vec![$segment])
    };
}
