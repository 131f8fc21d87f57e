//! SVG path data for fitted curves
//!
//! The drawing instructions a renderer needs: move to the first anchor, then
//! one cubic curve-to per segment with its remaining three points.
//!
//! # Example
//!
//! ```rust
//! use sketch_fit::{cubic, curve, modules::export::svg_path::ToSvgPath};
//!
//! let stroke = curve!([
//!     cubic!([(10, 20), (20, 30), (30, 40), (40, 50)]),
//!     cubic!([(40, 50), (50, 60), (60, 70), (70, 80)])
//! ]);
//!
//! assert_eq!(stroke.to_svg_path(), "M10,20 C20,30,30,40,40,50 C50,60,60,70,70,80");
//! ```

use crate::data::{BezierCurve, BezierSegment};

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

impl ToSvgPath for BezierSegment {
    fn to_svg_path(&self) -> String {
        BezierCurve::from_segment(self).to_svg_path()
    }
}

impl ToSvgPath for BezierCurve {
    fn to_svg_path(&self) -> String {
        let Some(start) = self.start() else {
            return String::new();
        };

        let mut result = format!("M{},{}", start.x, start.y);
        for segment in &self.segments {
            let [_, c1, c2, end] = segment.points;
            result.push_str(&format!(
                " C{},{},{},{},{},{}",
                c1.x, c1.y, c2.x, c2.y, end.x, end.y
            ));
        }

        // Add closing command for closed curves
        if self.is_closed() {
            result.push('Z');
        }

        result
    }
}
