//! Numerical constants of the curve fitter.

/// Default fitting tolerance, compared directly against squared pixel error.
pub const DEFAULT_TOLERANCE: f64 = 40.0;

/// Maximum rounds of Newton-Raphson reparameterization before a region is split.
pub const MAX_REPARAMETERIZE_ITERATIONS: usize = 4;

/// Alpha values below this are rejected in favour of the one-third heuristic.
pub const ALPHA_EPSILON: f64 = 1.0e-6;

/// Scale applied to the diagonal product when the normal equations are singular.
pub const SINGULAR_DETERMINANT_SCALE: f64 = 10.0e-12;
