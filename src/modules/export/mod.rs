//! Export fitted curves for rendering
//!
//! # Available Export Formats
//!
//! - [SVG path data](svg_path/index.html) - move-to and cubic curve-to drawing instructions
//! - [SVG](svg/index.html) - complete documents with the curve and the stroke samples

pub mod svg;
pub mod svg_path;
