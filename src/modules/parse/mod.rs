//! Parsing module for stroke input
//!
//! Now supported format:
//! - JSON:
//!     a stroke in the form of `[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.5}, ...]`,
//!     the pointer samples in drawing order. See the `json` module.

pub mod json;
