//! Error type shared by the fitter, the parsers and the protocol codec.

use thiserror::Error;

/// Errors that can be reported to the caller.
///
/// Numerical degeneracies met while fitting (zero tangents, singular systems,
/// zero chord length) are not errors: the fitter resolves them locally.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BezierError {
    #[error("at least 2 points are required for curve fitting, found {found}")]
    TooFewPoints { found: usize },

    #[error("tolerance must be finite and greater than zero, got {0}")]
    InvalidTolerance(f64),

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BezierResult<T> = Result<T, BezierError>;
