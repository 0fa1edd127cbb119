//! ratepath CLI
//!
//! Loads a set of rates and converts one amount between two currencies.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ratepath_common::Currency;
use ratepath_fx::{Conversion, JsonRateSource, RateGraphConverter, RateSource, StaticRateSource};

mod config;

use config::CliConfig;

/// ratepath CLI
#[derive(Parser, Debug)]
#[command(name = "ratepath")]
#[command(about = "Convert an amount between currencies through known rates")]
struct Args {
    /// Amount to convert
    #[arg(default_value = "134", allow_negative_numbers = true)]
    amount: f64,

    /// Currency the amount is in
    #[arg(short, long, default_value = "CAD")]
    from: String,

    /// Currency to convert to
    #[arg(short, long, default_value = "EUR")]
    to: String,

    /// JSON file of rates; the demo rates are used when omitted
    #[arg(short, long)]
    rates: Option<PathBuf>,

    /// Print the full conversion record as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    if let Err(e) = config.validate() {
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    // Initialize logging
    let json_logs = config.json_logs;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    let args = Args::parse();

    let source: Box<dyn RateSource> = match &args.rates {
        Some(path) => Box::new(JsonRateSource::from_path(path)?),
        None => Box::new(StaticRateSource::demo()),
    };
    info!(source = source.name(), "Loading rates");

    let converter = RateGraphConverter::with_config(config.converter);
    converter
        .load_from(&*source)
        .with_context(|| format!("Failed to load rates from {}", source.name()))?;

    let conversion = converter.convert_detailed(
        &Currency::new(args.from.as_str()),
        &Currency::new(args.to.as_str()),
        args.amount,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{}", summary(&conversion));
    }

    Ok(())
}

fn summary(conversion: &Conversion) -> String {
    format!(
        "{} {} equivalent {} {}",
        conversion.input, conversion.from, conversion.output, conversion.to
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_summary() {
        let converter = RateGraphConverter::new();
        converter.load_from(&StaticRateSource::demo()).unwrap();

        let conversion = converter
            .convert_detailed(&Currency::cad(), &Currency::eur(), 134.0)
            .unwrap();

        assert_eq!(summary(&conversion), "134 CAD equivalent 86 EUR");
    }

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["ratepath"]);

        assert_eq!(args.amount, 134.0);
        assert_eq!(args.from, "CAD");
        assert_eq!(args.to, "EUR");
        assert!(args.rates.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_explicit_args() {
        let args = Args::parse_from([
            "ratepath", "--from", "USD", "--to", "GBP", "--rates", "rates.json", "--json", "-12.5",
        ]);

        assert_eq!(args.amount, -12.5);
        assert_eq!(args.from, "USD");
        assert_eq!(args.to, "GBP");
        assert_eq!(args.rates, Some(PathBuf::from("rates.json")));
        assert!(args.json);
    }
}
