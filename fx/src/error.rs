//! FX engine error types.

use ratepath_common::{Currency, RateError};
use thiserror::Error;

/// Errors that can occur in the FX engine.
#[derive(Debug, Error)]
pub enum FxError {
    /// Currency has no rates loaded.
    #[error("Currency not configured: {0}")]
    CurrencyNotConfigured(Currency),

    /// Both currencies are known but no chain of rates connects them.
    #[error("No conversion path from {from} to {to}")]
    NoConversionPath { from: Currency, to: Currency },

    /// A rate offered for loading was rejected.
    #[error("Invalid rate for {from}/{to}: {reason}")]
    InvalidRate {
        from: Currency,
        to: Currency,
        #[source]
        reason: RateError,
    },

    /// A rate source could not produce its rates.
    #[error("Rate source {source_name} failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
