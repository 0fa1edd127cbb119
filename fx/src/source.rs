//! Rate sources that feed a converter.

use std::path::Path;

use ratepath_common::RateEdge;
use tracing::debug;

use crate::error::{FxError, FxResult};

/// Something that can produce a batch of rates to load.
pub trait RateSource: Send + Sync {
    /// Get the source name.
    fn name(&self) -> &str;

    /// Get every rate this source knows, in load order.
    fn rates(&self) -> FxResult<Vec<RateEdge>>;
}

/// A fixed, in-memory list of rates.
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    name: String,
    rates: Vec<RateEdge>,
}

impl StaticRateSource {
    /// Create a new static source.
    pub fn new(name: impl Into<String>, rates: Vec<RateEdge>) -> Self {
        Self {
            name: name.into(),
            rates,
        }
    }

    /// USD/CAD, CAD/GBP and USD/EUR, enough to exercise indirect conversions.
    pub fn demo() -> Self {
        Self::new(
            "demo",
            vec![
                RateEdge::new("USD", "CAD", 1.34),
                RateEdge::new("CAD", "GBP", 0.58),
                RateEdge::new("USD", "EUR", 0.86),
            ],
        )
    }
}

impl RateSource for StaticRateSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn rates(&self) -> FxResult<Vec<RateEdge>> {
        Ok(self.rates.clone())
    }
}

/// Rates held as a JSON array of `{"from", "to", "rate"}` objects.
#[derive(Debug, Clone)]
pub struct JsonRateSource {
    name: String,
    contents: String,
}

impl JsonRateSource {
    /// Create a source from a JSON document.
    pub fn from_json(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Read a JSON document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> FxResult<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| FxError::Source {
            source_name: name.clone(),
            message: e.to_string(),
        })?;

        debug!(path = %name, bytes = contents.len(), "Read rate file");
        Ok(Self::from_json(name, contents))
    }
}

impl RateSource for JsonRateSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn rates(&self) -> FxResult<Vec<RateEdge>> {
        serde_json::from_str(&self.contents).map_err(|e| FxError::Source {
            source_name: self.name.clone(),
            message: e.to_string(),
        })
    }
}
