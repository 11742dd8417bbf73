use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::pricing::PricingStrategy;

/// A travel package priced through a swappable strategy
#[derive(Debug, Clone)]
pub struct TravelPackage {
    name: String,
    base_price: f64,
    strategy: Arc<dyn PricingStrategy>,
}

/// Snapshot of a package price under its current strategy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceQuote {
    pub package: String,
    pub strategy: String,
    pub base_price: f64,
    pub price: f64,
}

impl TravelPackage {
    /// Create a package. Name and base price are taken as given.
    pub fn new(name: impl Into<String>, base_price: f64, strategy: Arc<dyn PricingStrategy>) -> Self {
        Self {
            name: name.into(),
            base_price,
            strategy,
        }
    }

    /// Create a package, rejecting blank names and negative or non-finite prices
    pub fn try_new(
        name: impl Into<String>,
        base_price: f64,
        strategy: Arc<dyn PricingStrategy>,
    ) -> CatalogResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            tracing::warn!("Rejected package with blank name");
            return Err(CatalogError::InvalidArgument("package name must not be empty".to_string()));
        }

        if !base_price.is_finite() || base_price < 0.0 {
            tracing::warn!("Rejected package {} with base price {}", name, base_price);
            return Err(CatalogError::InvalidArgument(format!(
                "base price must be a finite non-negative number, got {}",
                base_price
            )));
        }

        Ok(Self::new(name, base_price, strategy))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn strategy(&self) -> &dyn PricingStrategy {
        self.strategy.as_ref()
    }

    /// Price under the currently assigned strategy
    pub fn price(&self) -> f64 {
        self.strategy.calculate(self.base_price)
    }

    /// Replace the pricing strategy for all subsequent price calls
    pub fn set_pricing_strategy(&mut self, strategy: Arc<dyn PricingStrategy>) {
        tracing::debug!(
            "Package {} switching pricing {} -> {}",
            self.name,
            self.strategy.label(),
            strategy.label()
        );
        self.strategy = strategy;
    }

    /// Consume the package and return it with a different strategy
    pub fn with_strategy(mut self, strategy: Arc<dyn PricingStrategy>) -> Self {
        self.set_pricing_strategy(strategy);
        self
    }

    pub fn quote(&self) -> PriceQuote {
        PriceQuote {
            package: self.name.clone(),
            strategy: self.strategy.label().to_string(),
            base_price: self.base_price,
            price: self.price(),
        }
    }
}
