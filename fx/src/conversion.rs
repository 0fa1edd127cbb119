//! Currency conversion records.

use chrono::{DateTime, Utc};
use ratepath_common::Currency;
use serde::Serialize;
use uuid::Uuid;

use crate::path::Path;

/// One hop of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionLeg {
    pub from: Currency,
    pub to: Currency,
    /// Rate applied on this hop.
    pub rate: f64,
    /// Amount in `to` after rounding.
    pub amount: f64,
}

/// Represents a completed currency conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// Unique conversion ID.
    pub id: Uuid,
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Input amount.
    pub input: f64,
    /// Output amount.
    pub output: f64,
    /// Chain of currencies the amount went through.
    pub path: Path,
    /// Intermediate amounts, one per hop.
    pub legs: Vec<ConversionLeg>,
    /// When the conversion was executed.
    pub executed_at: DateTime<Utc>,
}

impl Conversion {
    /// Create a new conversion record.
    pub fn new(input: f64, path: Path, legs: Vec<ConversionLeg>) -> Self {
        let output = legs.last().map_or(input, |leg| leg.amount);
        Self {
            id: Uuid::now_v7(),
            from: path.source().clone(),
            to: path.destination().clone(),
            input,
            output,
            path,
            legs,
            executed_at: Utc::now(),
        }
    }

    /// Get the effective rate used.
    pub fn effective_rate(&self) -> f64 {
        if self.input == 0.0 {
            return 0.0;
        }
        self.output / self.input
    }

    /// Number of rates chained together.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_currency_conversion() {
        let conversion = Conversion::new(42.5, Path::single(Currency::usd()), Vec::new());

        assert_eq!(conversion.from, Currency::usd());
        assert_eq!(conversion.to, Currency::usd());
        assert_eq!(conversion.output, 42.5);
        assert_eq!(conversion.hop_count(), 0);
        assert_eq!(conversion.effective_rate(), 1.0);
    }

    #[test]
    fn test_serializes_path_and_legs() {
        let legs = vec![ConversionLeg {
            from: Currency::usd(),
            to: Currency::usd(),
            rate: 1.0,
            amount: 10.0,
        }];
        let conversion = Conversion::new(10.0, Path::single(Currency::usd()), legs);

        let json = serde_json::to_value(&conversion).unwrap();

        assert_eq!(json["from"], "USD");
        assert_eq!(json["output"], 10.0);
        assert_eq!(json["path"]["currencies"][0], "USD");
        assert_eq!(json["legs"][0]["amount"], 10.0);
    }

    #[test]
    fn test_effective_rate_of_zero_input() {
        let conversion = Conversion::new(0.0, Path::single(Currency::eur()), Vec::new());
        assert_eq!(conversion.effective_rate(), 0.0);
    }
}
