//! Rate validation errors.

use thiserror::Error;

/// Reasons a conversion rate is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RateError {
    /// Rate is NaN or infinite.
    #[error("rate {0} is not a finite number")]
    NonFinite(f64),

    /// Rate is zero or negative.
    #[error("rate {0} must be greater than zero")]
    NonPositive(f64),

    /// Rate is so small that its reciprocal overflows.
    #[error("reciprocal of rate {0} is not finite")]
    ReciprocalOverflow(f64),
}
