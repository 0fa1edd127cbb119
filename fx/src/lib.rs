//! ratepath FX Engine
//!
//! Converts amounts between currencies using a sparse set of known rates.
//! When no direct rate exists the converter chains known rates together,
//! picking the cheapest chain with a shortest-path search over the rate graph.
//!
//! # Features
//!
//! - Both directions of every loaded pair are available
//! - Indirect conversions through intermediate currencies
//! - Amounts rounded to a fixed number of decimal places after every hop
//! - Safe to share between threads; every operation is atomic
//!
//! # Example
//!
//! ```rust
//! use ratepath_common::{Currency, RateEdge};
//! use ratepath_fx::{CurrencyConverter, RateGraphConverter};
//!
//! let converter: &dyn CurrencyConverter = &RateGraphConverter::new();
//! converter.load_rates(&[
//!     RateEdge::new("USD", "CAD", 1.34),
//!     RateEdge::new("CAD", "GBP", 0.58),
//!     RateEdge::new("USD", "EUR", 0.86),
//! ])?;
//!
//! let eur = converter.convert(&Currency::cad(), &Currency::eur(), 134.0)?;
//! assert_eq!(eur, 86.0);
//! # Ok::<(), ratepath_fx::FxError>(())
//! ```

pub mod config;
pub mod conversion;
pub mod engine;
pub mod error;
pub mod graph;
pub mod path;
pub mod source;

pub use config::ConverterConfig;
pub use conversion::{Conversion, ConversionLeg};
pub use engine::{CurrencyConverter, GraphStats, RateGraphConverter};
pub use error::{FxError, FxResult};
pub use graph::RateGraph;
pub use path::Path;
pub use source::{JsonRateSource, RateSource, StaticRateSource};
