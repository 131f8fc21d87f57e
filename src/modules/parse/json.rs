//! Read a stroke from JSON
//!
//! A stroke is an array of pointer samples in drawing order:
//!
//! ```rust
//! use sketch_fit::{modules::parse::json::points_from_json, pt};
//!
//! let points = points_from_json(r#"[{"x": 0, "y": 0}, {"x": 10.5, "y": -2}]"#).unwrap();
//! assert_eq!(points, vec![pt!(0, 0), pt!(10.5, -2)]);
//! ```

use std::io::Read;

use crate::data::Point;
use crate::error::BezierResult;

/// Parse a JSON array of `{"x", "y"}` objects
pub fn points_from_json(data: &str) -> BezierResult<Vec<Point>> {
    Ok(serde_json::from_str(data)?)
}

/// Parse a JSON stroke from any reader, such as a file or stdin
pub fn points_from_reader<R: Read>(reader: R) -> BezierResult<Vec<Point>> {
    Ok(serde_json::from_reader(reader)?)
}
