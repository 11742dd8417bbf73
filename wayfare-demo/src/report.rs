use std::io::Write;
use tracing::info;
use wayfare_catalog::{PriceQuote, TravelPackage};

use crate::app_config::{Config, OutputFormat};
use crate::error::{DemoError, DemoResult};

/// Price the configured package under each scheduled segment in turn,
/// writing one line per segment to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> DemoResult<Vec<PriceQuote>> {
    let segments = config.pricing.segments()?;
    let initial = segments.first().ok_or(DemoError::EmptySchedule)?.strategy();

    let mut package = if config.pricing.validate {
        TravelPackage::try_new(config.package.name.clone(), config.package.base_price, initial)?
    } else {
        TravelPackage::new(config.package.name.clone(), config.package.base_price, initial)
    };

    info!(
        "Pricing package {} (base {}) across {} segments",
        package.name(),
        package.base_price(),
        segments.len()
    );

    if config.output.format == OutputFormat::Text {
        writeln!(out, "Package: {}", package.name())?;
    }

    let mut quotes = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            package.set_pricing_strategy(segment.strategy());
        }

        let quote = package.quote();
        match config.output.format {
            OutputFormat::Text => writeln!(out, "{}", render_line(&quote))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&quote)?)?,
        }
        quotes.push(quote);
    }

    Ok(quotes)
}

pub fn render_line(quote: &PriceQuote) -> String {
    format!("{} price: ${:.2}", quote.strategy, quote.price)
}
