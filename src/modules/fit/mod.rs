//! Fitting cubic bezier curves to sampled strokes
//!
//! The pieces, leaves first:
//!
//! - [tangent](tangent/index.html) - unit tangents at region ends and split points
//! - [t_heuristic](t_heuristic/index.html) - initial parameter values for the samples
//! - [least_square_fit](least_square_fit/index.html) - interior control points by least squares
//! - [newton_raphson](newton_raphson/index.html) - parameter refinement against a fitted curve
//! - [schneider_fit](schneider_fit/index.html) - the adaptive split-and-fit driver

pub mod least_square_fit;
pub mod newton_raphson;
pub mod schneider_fit;
pub mod t_heuristic;
pub mod tangent;
