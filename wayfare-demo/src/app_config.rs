use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;
use wayfare_catalog::Segment;

use crate::error::{DemoError, DemoResult};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub package: PackageConfig,
    pub pricing: PricingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PackageConfig {
    pub name: String,
    pub base_price: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Segment names in the order they are applied; the first is the initial strategy
    pub schedule: Vec<String>,
    /// Reject blank names and negative prices instead of pricing them as given
    #[serde(default)]
    pub validate: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl PricingConfig {
    /// Parse the schedule into segments
    pub fn segments(&self) -> DemoResult<Vec<Segment>> {
        if self.schedule.is_empty() {
            return Err(DemoError::EmptySchedule);
        }

        self.schedule
            .iter()
            .map(|name| name.parse::<Segment>().map_err(DemoError::from))
            .collect()
    }
}

impl Config {
    /// Built-in values, overridden by every other source
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("package.name", "Tokyo Adventure")?
            .set_default("package.base_price", 1000.0)?
            .set_default("pricing.schedule", vec!["regular", "student", "senior", "vip"])?
            .set_default("pricing.validate", false)?
            .set_default("output.format", "text")
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `WAYFARE_PACKAGE__BASE_PRICE=1500`
            .add_source(
                config::Environment::with_prefix("WAYFARE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("pricing.schedule"),
            )
            .build()?;

        s.try_deserialize()
    }
}
