use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::CatalogError;

/// Price adjustment applied to a package's base price.
///
/// Implementations are stateless, so one value can be shared by any number
/// of packages at the same time.
pub trait PricingStrategy: Send + Sync + fmt::Debug {
    /// Factor applied to the base price
    fn multiplier(&self) -> f64;

    /// Human-readable name used in quotes and console output
    fn label(&self) -> &'static str;

    /// Calculate the adjusted price. Inputs are not validated.
    fn calculate(&self, base_price: f64) -> f64 {
        base_price * self.multiplier()
    }
}

/// No adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegularPricing;

impl PricingStrategy for RegularPricing {
    fn multiplier(&self) -> f64 {
        1.0
    }

    fn label(&self) -> &'static str {
        "Regular"
    }

    fn calculate(&self, base_price: f64) -> f64 {
        base_price
    }
}

/// 20% discount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentPricing;

impl PricingStrategy for StudentPricing {
    fn multiplier(&self) -> f64 {
        0.8
    }

    fn label(&self) -> &'static str {
        "Student"
    }
}

/// 30% discount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeniorPricing;

impl PricingStrategy for SeniorPricing {
    fn multiplier(&self) -> f64 {
        0.7
    }

    fn label(&self) -> &'static str {
        "Senior"
    }
}

/// 20% surcharge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VipPricing;

impl PricingStrategy for VipPricing {
    fn multiplier(&self) -> f64 {
        1.2
    }

    fn label(&self) -> &'static str {
        "VIP"
    }
}

/// Customer segments, one per pricing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Regular,
    Student,
    Senior,
    Vip,
}

impl Segment {
    /// Every segment, in presentation order
    pub const ALL: [Segment; 4] = [
        Segment::Regular,
        Segment::Student,
        Segment::Senior,
        Segment::Vip,
    ];

    /// Shareable strategy object for this segment
    pub fn strategy(self) -> Arc<dyn PricingStrategy> {
        match self {
            Segment::Regular => Arc::new(RegularPricing),
            Segment::Student => Arc::new(StudentPricing),
            Segment::Senior => Arc::new(SeniorPricing),
            Segment::Vip => Arc::new(VipPricing),
        }
    }
}

impl PricingStrategy for Segment {
    fn multiplier(&self) -> f64 {
        match self {
            Segment::Regular => 1.0,
            Segment::Student => 0.8,
            Segment::Senior => 0.7,
            Segment::Vip => 1.2,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Segment::Regular => "Regular",
            Segment::Student => "Student",
            Segment::Senior => "Senior",
            Segment::Vip => "VIP",
        }
    }

    fn calculate(&self, base_price: f64) -> f64 {
        match self {
            Segment::Regular => base_price,
            _ => base_price * self.multiplier(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Segment {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Segment::Regular),
            "student" => Ok(Segment::Student),
            "senior" => Ok(Segment::Senior),
            "vip" => Ok(Segment::Vip),
            _ => Err(CatalogError::UnknownSegment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;
    const SAMPLES: [f64; 6] = [0.0, 1.0, 99.99, 1000.0, 123456.78, -50.0];

    #[test]
    fn test_multipliers_match_table() {
        let strategies: [(&dyn PricingStrategy, f64); 4] = [
            (&RegularPricing, 1.0),
            (&StudentPricing, 0.8),
            (&SeniorPricing, 0.7),
            (&VipPricing, 1.2),
        ];

        for (strategy, multiplier) in strategies {
            for base in SAMPLES {
                let price = strategy.calculate(base);
                assert!(
                    (price - base * multiplier).abs() < EPSILON,
                    "{} on {} gave {}",
                    strategy.label(),
                    base,
                    price
                );
            }
        }
    }

    #[test]
    fn test_regular_is_identity() {
        for base in SAMPLES {
            assert_eq!(RegularPricing.calculate(base), base);
        }
    }

    #[test]
    fn test_segment_agrees_with_strategy_objects() {
        for segment in Segment::ALL {
            let strategy = segment.strategy();
            assert_eq!(segment.label(), strategy.label());
            for base in SAMPLES {
                assert_eq!(segment.calculate(base), strategy.calculate(base));
            }
        }
    }

    #[test]
    fn test_zero_base_price() {
        for segment in Segment::ALL {
            assert_eq!(segment.calculate(0.0), 0.0);
        }
    }

    #[test]
    fn test_segment_parsing() {
        assert_eq!("vip".parse::<Segment>().unwrap(), Segment::Vip);
        assert_eq!(" Student ".parse::<Segment>().unwrap(), Segment::Student);
        assert_eq!("SENIOR".parse::<Segment>().unwrap(), Segment::Senior);
        assert_eq!(
            "platinum".parse::<Segment>(),
            Err(CatalogError::UnknownSegment("platinum".to_string()))
        );
    }

    #[test]
    fn test_segment_display() {
        assert_eq!(Segment::Vip.to_string(), "VIP");
        assert_eq!(Segment::Regular.to_string(), "Regular");
    }
}
