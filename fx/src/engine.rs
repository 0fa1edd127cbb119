//! Main FX engine implementation.

use parking_lot::Mutex;
use ratepath_common::{round_dp, Currency, RateEdge};
use tracing::{debug, info, instrument};

use crate::config::ConverterConfig;
use crate::conversion::{Conversion, ConversionLeg};
use crate::error::{FxError, FxResult};
use crate::graph::RateGraph;
use crate::path::{shortest_path, Path};
use crate::source::RateSource;

/// The operations every currency converter offers.
pub trait CurrencyConverter: Send + Sync {
    /// Remove every known rate.
    fn clear(&self);

    /// Add or replace rates. Either every rate is applied or none is.
    fn load_rates(&self, rates: &[RateEdge]) -> FxResult<()>;

    /// Convert `amount` from one currency to another.
    fn convert(&self, from: &Currency, to: &Currency, amount: f64) -> FxResult<f64>;
}

/// Converts amounts by chaining known rates along the cheapest path.
///
/// All operations take one exclusive lock on the graph for their full
/// duration, so a conversion never sees a half-applied batch of rates.
pub struct RateGraphConverter {
    graph: Mutex<RateGraph>,
    config: ConverterConfig,
}

impl RateGraphConverter {
    /// Create an empty converter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Create an empty converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            graph: Mutex::new(RateGraph::new()),
            config,
        }
    }

    /// Remove every known rate.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        self.graph.lock().clear();
        debug!("Cleared rate graph");
    }

    /// Add or replace rates.
    ///
    /// Every rate is validated before any is applied; an invalid rate leaves
    /// the graph untouched. Rates apply in order, so a later entry for the
    /// same pair wins.
    #[instrument(skip(self, rates), fields(count = rates.len()))]
    pub fn load_rates(&self, rates: &[RateEdge]) -> FxResult<()> {
        for edge in rates {
            edge.validate().map_err(|reason| FxError::InvalidRate {
                from: edge.from.clone(),
                to: edge.to.clone(),
                reason,
            })?;
        }

        let mut graph = self.graph.lock();
        for edge in rates {
            graph.insert(edge);
        }

        debug!(
            currencies = graph.len(),
            edges = graph.edge_count(),
            "Loaded rates"
        );
        Ok(())
    }

    /// Load every rate a source provides.
    pub fn load_from(&self, source: &dyn RateSource) -> FxResult<()> {
        let rates = source.rates()?;
        debug!(source = source.name(), count = rates.len(), "Loading rates from source");
        self.load_rates(&rates)
    }

    /// Convert an amount to another currency.
    pub fn convert(&self, from: &Currency, to: &Currency, amount: f64) -> FxResult<f64> {
        if from == to {
            return Ok(amount);
        }
        Ok(self.convert_detailed(from, to, amount)?.output)
    }

    /// Convert an amount and keep the path and intermediate amounts.
    #[instrument(skip(self))]
    pub fn convert_detailed(
        &self,
        from: &Currency,
        to: &Currency,
        amount: f64,
    ) -> FxResult<Conversion> {
        if from == to {
            return Ok(Conversion::new(amount, Path::single(from.clone()), Vec::new()));
        }

        let graph = self.graph.lock();
        let path = Self::path_in(&graph, from, to)?;

        let mut running = amount;
        let legs: Vec<ConversionLeg> = path
            .hops()
            .map(|(hop_from, hop_to, rate)| {
                running = round_dp(running * rate, self.config.rounding_places);
                ConversionLeg {
                    from: hop_from.clone(),
                    to: hop_to.clone(),
                    rate,
                    amount: running,
                }
            })
            .collect();
        drop(graph);

        let conversion = Conversion::new(amount, path, legs);

        info!(
            conversion_id = %conversion.id,
            path = %conversion.path,
            output = conversion.output,
            "Conversion completed"
        );

        Ok(conversion)
    }

    /// Find the chain of rates a conversion would use.
    pub fn find_path(&self, from: &Currency, to: &Currency) -> FxResult<Path> {
        if from == to {
            return Ok(Path::single(from.clone()));
        }

        Self::path_in(&self.graph.lock(), from, to)
    }

    /// Get the direct rate between two currencies, if one was loaded.
    pub fn rate(&self, from: &Currency, to: &Currency) -> Option<f64> {
        self.graph.lock().rate(from, to)
    }

    /// Get all known currencies in code order.
    pub fn currencies(&self) -> Vec<Currency> {
        self.graph.lock().currencies().cloned().collect()
    }

    /// Get the converter configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Get graph statistics.
    pub fn stats(&self) -> GraphStats {
        let graph = self.graph.lock();
        GraphStats {
            currencies: graph.len(),
            edges: graph.edge_count(),
        }
    }

    fn path_in(graph: &RateGraph, from: &Currency, to: &Currency) -> FxResult<Path> {
        for currency in [from, to] {
            if !graph.contains(currency) {
                return Err(FxError::CurrencyNotConfigured(currency.clone()));
            }
        }

        let path = shortest_path(graph, from, to).ok_or_else(|| FxError::NoConversionPath {
            from: from.clone(),
            to: to.clone(),
        })?;

        debug!(path = %path, hops = path.hop_count(), "Found conversion path");
        Ok(path)
    }
}

impl Default for RateGraphConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyConverter for RateGraphConverter {
    fn clear(&self) {
        RateGraphConverter::clear(self)
    }

    fn load_rates(&self, rates: &[RateEdge]) -> FxResult<()> {
        RateGraphConverter::load_rates(self, rates)
    }

    fn convert(&self, from: &Currency, to: &Currency, amount: f64) -> FxResult<f64> {
        RateGraphConverter::convert(self, from, to, amount)
    }
}

/// Graph statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub currencies: usize,
    /// Directed edges; every loaded pair counts twice.
    pub edges: usize,
}
