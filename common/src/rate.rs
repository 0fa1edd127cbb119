//! Directed conversion rates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Currency, RateError};

/// A known conversion rate from one currency to another.
///
/// `amount_in_to = amount_in_from * rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEdge {
    /// Source currency.
    pub from: Currency,
    /// Destination currency.
    pub to: Currency,
    /// Multiplier applied to an amount in `from`.
    pub rate: f64,
}

impl RateEdge {
    /// Create a new rate edge.
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>, rate: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rate,
        }
    }

    /// Check that both this rate and its reciprocal are usable multipliers.
    pub fn validate(&self) -> Result<(), RateError> {
        if !self.rate.is_finite() {
            return Err(RateError::NonFinite(self.rate));
        }
        if self.rate <= 0.0 {
            return Err(RateError::NonPositive(self.rate));
        }
        if !self.rate.recip().is_finite() {
            return Err(RateError::ReciprocalOverflow(self.rate));
        }
        Ok(())
    }

    /// Get the reverse edge with the reciprocal rate.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            rate: 1.0 / self.rate,
        }
    }
}

impl fmt::Display for RateEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.from, self.to, self.rate)
    }
}

impl<F, T> From<(F, T, f64)> for RateEdge
where
    F: Into<Currency>,
    T: Into<Currency>,
{
    fn from((from, to, rate): (F, T, f64)) -> Self {
        Self::new(from, to, rate)
    }
}
