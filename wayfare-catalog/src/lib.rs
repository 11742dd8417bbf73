pub mod error;
pub mod pricing;
pub mod package;

pub use error::{CatalogError, CatalogResult};
pub use pricing::{PricingStrategy, RegularPricing, Segment, SeniorPricing, StudentPricing, VipPricing};
pub use package::{PriceQuote, TravelPackage};
