//! SVG export utilities for fitted curves
//!
//! Turns a fitted curve, the raw stroke samples, or both into an SVG document
//! for visual inspection.
//!
//! # Examples
//!
//! ## Exporting a fitted curve
//!
//! ```rust
//! use sketch_fit::{cubic, curve_from, modules::export::svg};
//!
//! let stroke = curve_from!(cubic!([
//!     (50.0, 200.0),    // Start point
//!     (100.0, 50.0),    // Control point 1
//!     (200.0, 50.0),    // Control point 2
//!     (250.0, 200.0)    // End point
//! ]));
//!
//! let svg_string = svg::to_svg(&stroke, 300, 300);
//! assert!(svg_string.contains("C100,50,200,50,250,200"));
//! ```
//!
//! ## Overlaying the samples on their fit
//!
//! ```rust
//! use sketch_fit::{fit_curve, modules::export::svg, pt};
//!
//! let samples = vec![pt!(10, 80), pt!(30, 40), pt!(50, 30), pt!(70, 40), pt!(90, 80)];
//! let fitted = fit_curve(&samples, 4.0).unwrap();
//!
//! let svg_string = svg::overlay_to_svg(&fitted, &samples, 100, 100);
//! assert!(svg_string.contains("<path"));
//! assert_eq!(svg_string.matches("<circle").count(), 5);
//! ```

use crate::data::{BezierCurve, Point};
use svg::node::element::{path::Data, Circle, Path};
use svg::Document;

fn document(width: u32, height: u32) -> Document {
    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height))
}

fn curve_path(curve: &BezierCurve) -> Option<Path> {
    let start = curve.start()?;
    let mut data = Data::new().move_to((start.x, start.y));
    for segment in &curve.segments {
        let [_, c1, c2, end] = segment.points;
        data = data.cubic_curve_to((c1.x, c1.y, c2.x, c2.y, end.x, end.y));
    }

    Some(
        Path::new()
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", 1)
            .set("d", data),
    )
}

fn sample_circles(points: &[Point]) -> impl Iterator<Item = Circle> + '_ {
    points.iter().map(|point| {
        Circle::new()
            .set("cx", point.x)
            .set("cy", point.y)
            .set("r", 2)
            .set("fill", "red")
    })
}

/// Export a fitted curve to an SVG document string.
///
/// An empty curve gives an empty document.
pub fn to_svg(curve: &BezierCurve, width: u32, height: u32) -> String {
    let mut document = document(width, height);
    if let Some(path) = curve_path(curve) {
        document = document.add(path);
    }
    document.to_string()
}

/// Export stroke samples as small red circles
pub fn points_to_svg(points: &[Point], width: u32, height: u32) -> String {
    sample_circles(points)
        .fold(document(width, height), |document, circle| document.add(circle))
        .to_string()
}

/// Export a fitted curve with the samples it was fitted to drawn on top
pub fn overlay_to_svg(curve: &BezierCurve, points: &[Point], width: u32, height: u32) -> String {
    let mut document = document(width, height);
    if let Some(path) = curve_path(curve) {
        document = document.add(path);
    }
    sample_circles(points)
        .fold(document, |document, circle| document.add(circle))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cubic, curve, curve_from, pt};

    #[test]
    fn test_points_export_to_svg() {
        let points = [pt!(10, 20), pt!(30, 40), pt!(50, 60)];
        let svg_string = points_to_svg(&points, 100, 100);

        assert!(svg_string.starts_with("<svg"));
        assert_eq!(svg_string.matches("<circle").count(), 3);
        assert!(svg_string.contains("cx=\"30\""));
        assert!(svg_string.contains("fill=\"red\""));
        assert!(!svg_string.contains("<path"));
    }

    #[test]
    fn test_curve_export_to_svg() {
        struct SvgExportTestCase<'a> {
            name: &'a str,
            curve: BezierCurve,
            expected_fragments: &'a [&'a str],
        }

        fn run_svg_export_test(test_case: SvgExportTestCase) {
            let svg_string = to_svg(&test_case.curve, 100, 100);
            for fragment in test_case.expected_fragments {
                assert!(
                    svg_string.contains(fragment),
                    "Test case: {}, missing {} in {}",
                    test_case.name,
                    fragment,
                    svg_string
                );
            }
        }

        let test_cases = [
            SvgExportTestCase {
                name: "cubic_segment",
                curve: curve_from!(cubic!([(10, 20), (20, 30), (30, 40), (40, 50)])),
                expected_fragments: &["<path", "M10,20", "C20,30,30,40,40,50", "fill=\"none\""],
            },
            SvgExportTestCase {
                name: "two_segments",
                curve: curve!([
                    cubic!([(10, 20), (20, 30), (30, 40), (40, 50)]),
                    cubic!([(40, 50), (50, 60), (60, 70), (70, 80)])
                ]),
                expected_fragments: &["C20,30,30,40,40,50", "C50,60,60,70,70,80"],
            },
            SvgExportTestCase {
                name: "canvas_size",
                curve: curve_from!(cubic!([(0, 0), (1, 1), (2, 1), (3, 0)])),
                expected_fragments: &["width=\"100\"", "height=\"100\"", "viewBox=\"0 0 100 100\""],
            },
        ];

        // Run all test cases
        for test_case in test_cases {
            run_svg_export_test(test_case);
        }
    }

    #[test]
    fn test_empty_curve_has_no_path() {
        let svg_string = to_svg(&BezierCurve::default(), 10, 10);
        assert!(svg_string.starts_with("<svg"));
        assert!(!svg_string.contains("<path"));
    }
}
