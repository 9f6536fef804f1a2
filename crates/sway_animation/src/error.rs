//! Animation error types

use thiserror::Error;

/// Errors raised while constructing curves and motions.
///
/// Evaluation never fails; every check happens up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A construction parameter is out of its valid range
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl CurveError {
    pub(crate) fn invalid(name: &'static str, value: f32, reason: &'static str) -> Self {
        CurveError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Result type for curve and motion construction
pub type Result<T> = std::result::Result<T, CurveError>;

/// Reject zero, negative, NaN and infinite durations
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CurveError::invalid(name, value, "must be a finite value > 0"))
    }
}

/// Reject NaN and infinite offsets, any finite value passes
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CurveError::invalid(name, value, "must be finite"))
    }
}
