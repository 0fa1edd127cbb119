//! Adjacency map of known conversion rates.

use std::collections::BTreeMap;

use ratepath_common::{Currency, RateEdge};

/// Directed, weighted graph of conversion rates.
///
/// Every inserted edge is stored in both directions, the reverse one with
/// the reciprocal rate. Maps are ordered by currency code so that iteration,
/// and therefore path selection, is reproducible.
#[derive(Debug, Clone, Default)]
pub struct RateGraph {
    edges: BTreeMap<Currency, BTreeMap<Currency, f64>>,
}

impl RateGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rate and its reciprocal, replacing any previous rate for the pair.
    ///
    /// A rate from a currency to itself only registers the currency.
    /// The rate is expected to have passed [`RateEdge::validate`].
    pub fn insert(&mut self, edge: &RateEdge) {
        if edge.from == edge.to {
            self.edges.entry(edge.from.clone()).or_default();
            return;
        }

        self.edges
            .entry(edge.from.clone())
            .or_default()
            .insert(edge.to.clone(), edge.rate);
        let inverse = edge.inverse();
        self.edges
            .entry(inverse.from)
            .or_default()
            .insert(inverse.to, inverse.rate);
    }

    /// Remove every currency and rate.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Check if the currency is a node of the graph.
    pub fn contains(&self, currency: &Currency) -> bool {
        self.edges.contains_key(currency)
    }

    /// Get the direct rate between two currencies.
    pub fn rate(&self, from: &Currency, to: &Currency) -> Option<f64> {
        self.edges.get(from)?.get(to).copied()
    }

    /// Iterate over the outgoing rates of a currency, ordered by destination.
    pub fn neighbors<'a>(
        &'a self,
        currency: &Currency,
    ) -> impl Iterator<Item = (&'a Currency, f64)> + 'a {
        self.edges
            .get(currency)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(to, rate)| (to, *rate)))
    }

    /// Iterate over all currencies in code order.
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.edges.keys()
    }

    /// Number of currencies.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no currencies.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }
}
