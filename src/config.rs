//! Fitting parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TOLERANCE, MAX_REPARAMETERIZE_ITERATIONS};
use crate::error::{BezierError, BezierResult};

/// Parameters of one fit invocation.
///
/// Deserializable with every field optional, so a config file only needs to
/// name what it changes:
///
/// ```rust
/// use sketch_fit::FitConfig;
///
/// let config: FitConfig = serde_json::from_str(r#"{"tolerance": 4.0}"#).unwrap();
/// assert_eq!(config.tolerance, 4.0);
/// assert_eq!(config.max_iterations, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Acceptance threshold for the maximum squared distance between a sample
    /// and the fitted curve. A pixel tolerance is passed as-is, not squared.
    pub tolerance: f64,
    /// Newton-Raphson rounds tried before a region is split.
    pub max_iterations: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: MAX_REPARAMETERIZE_ITERATIONS,
        }
    }
}

impl FitConfig {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Errors below this are worth reparameterizing instead of splitting.
    pub fn iteration_error(&self) -> f64 {
        self.tolerance * self.tolerance
    }

    pub fn validate(&self) -> BezierResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(BezierError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
