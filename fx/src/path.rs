//! Shortest-path search over the rate graph.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use ratepath_common::Currency;
use serde::Serialize;

use crate::graph::RateGraph;

/// A chain of currencies from a source to a destination, with the rate of
/// every hop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    currencies: Vec<Currency>,
    rates: Vec<f64>,
}

impl Path {
    /// A path that stays on a single currency.
    pub fn single(currency: Currency) -> Self {
        Self {
            currencies: vec![currency],
            rates: Vec::new(),
        }
    }

    /// Currencies visited, source first.
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Source currency.
    pub fn source(&self) -> &Currency {
        &self.currencies[0]
    }

    /// Destination currency.
    pub fn destination(&self) -> &Currency {
        &self.currencies[self.currencies.len() - 1]
    }

    /// Number of rate hops.
    pub fn hop_count(&self) -> usize {
        self.rates.len()
    }

    /// Iterate over `(from, to, rate)` for every hop.
    pub fn hops(&self) -> impl Iterator<Item = (&Currency, &Currency, f64)> {
        self.currencies
            .windows(2)
            .zip(&self.rates)
            .map(|(pair, rate)| (&pair[0], &pair[1], *rate))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, currency) in self.currencies.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", currency)?;
        }
        Ok(())
    }
}

/// Find the cheapest chain of rates from `from` to `to`.
///
/// The cost of a hop is the inverse of its rate. Accumulated costs saturate
/// at `f64::MAX`, so any connected currency stays reachable. Every iteration
/// scans the unvisited currencies for the smallest tentative distance; equal
/// distances go to the lexicographically smallest code. The search ends as soon as the
/// destination is settled, or when every remaining currency is unreachable.
///
/// Returns `None` when either currency is unknown or no chain connects them.
pub fn shortest_path(graph: &RateGraph, from: &Currency, to: &Currency) -> Option<Path> {
    if !graph.contains(from) || !graph.contains(to) {
        return None;
    }
    if from == to {
        return Some(Path::single(from.clone()));
    }

    let mut distances: HashMap<&Currency, f64> = graph
        .currencies()
        .map(|c| (c, if c == from { 0.0 } else { f64::INFINITY }))
        .collect();
    let mut previous: HashMap<&Currency, (&Currency, f64)> = HashMap::new();
    let mut unvisited: BTreeSet<&Currency> = graph.currencies().collect();

    while let Some(current) = nearest(&unvisited, &distances) {
        unvisited.remove(current);

        let distance = distances[current];
        if distance == f64::INFINITY {
            break;
        }
        if current == to {
            return Some(reconstruct(&previous, current));
        }

        for (neighbor, rate) in graph.neighbors(current) {
            let candidate = (distance + 1.0 / rate).min(f64::MAX);
            if candidate < distances[neighbor] {
                distances.insert(neighbor, candidate);
                previous.insert(neighbor, (current, rate));
            }
        }
    }

    None
}

/// Unvisited currency with the smallest distance, first in code order on ties.
fn nearest<'a>(
    unvisited: &BTreeSet<&'a Currency>,
    distances: &HashMap<&'a Currency, f64>,
) -> Option<&'a Currency> {
    let mut best: Option<(&'a Currency, f64)> = None;
    for &currency in unvisited {
        let distance = distances[currency];
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((currency, distance)),
        }
    }
    best.map(|(currency, _)| currency)
}

fn reconstruct(previous: &HashMap<&Currency, (&Currency, f64)>, target: &Currency) -> Path {
    let mut currencies = vec![target.clone()];
    let mut rates = Vec::new();

    let mut current = target;
    while let Some(&(prior, rate)) = previous.get(current) {
        currencies.push(prior.clone());
        rates.push(rate);
        current = prior;
    }

    currencies.reverse();
    rates.reverse();
    Path { currencies, rates }
}
