//! Geometric data types: points, cubic segments and the curves built from them.

pub mod curve;
pub mod macros;
pub mod point;
pub mod segment;

pub use curve::BezierCurve;
pub use point::Point;
pub use segment::BezierSegment;
