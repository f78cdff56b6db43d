//! Pricing assumptions: reference unit prices, quality and service
//! multipliers, and jurisdiction tax/markup multipliers

use crate::error::{PlannerError, Result};
use crate::event::{QualityTier, ServiceType};
use log::debug;
use std::collections::HashMap;

/// Multiplier applied when a jurisdiction code is not in the table
pub const DEFAULT_STATE_MULTIPLIER: f64 = 1.0;

/// (code, display name, price multiplier) for every US state and DC
pub const JURISDICTIONS: &[(&str, &str, f64)] = &[
    ("AL", "Alabama", 1.15),
    ("AK", "Alaska", 1.10),
    ("AZ", "Arizona", 1.05),
    ("AR", "Arkansas", 1.10),
    ("CA", "California", 1.15),
    ("CO", "Colorado", 1.05),
    ("CT", "Connecticut", 1.20),
    ("DE", "Delaware", 1.10),
    ("FL", "Florida", 1.05),
    ("GA", "Georgia", 1.10),
    ("HI", "Hawaii", 1.25),
    ("ID", "Idaho", 1.05),
    ("IL", "Illinois", 1.15),
    ("IN", "Indiana", 1.10),
    ("IA", "Iowa", 1.05),
    ("KS", "Kansas", 1.10),
    ("KY", "Kentucky", 1.10),
    ("LA", "Louisiana", 1.10),
    ("ME", "Maine", 1.15),
    ("MD", "Maryland", 1.15),
    ("MA", "Massachusetts", 1.15),
    ("MI", "Michigan", 1.10),
    ("MN", "Minnesota", 1.10),
    ("MS", "Mississippi", 1.10),
    ("MO", "Missouri", 1.05),
    ("MT", "Montana", 1.05),
    ("NE", "Nebraska", 1.05),
    ("NV", "Nevada", 1.10),
    ("NH", "New Hampshire", 1.00),
    ("NJ", "New Jersey", 1.15),
    ("NM", "New Mexico", 1.10),
    ("NY", "New York", 1.20),
    ("NC", "North Carolina", 1.15),
    ("ND", "North Dakota", 1.05),
    ("OH", "Ohio", 1.10),
    ("OK", "Oklahoma", 1.10),
    ("OR", "Oregon", 1.10),
    ("PA", "Pennsylvania", 1.20),
    ("RI", "Rhode Island", 1.15),
    ("SC", "South Carolina", 1.10),
    ("SD", "South Dakota", 1.05),
    ("TN", "Tennessee", 1.15),
    ("TX", "Texas", 1.05),
    ("UT", "Utah", 1.20),
    ("VT", "Vermont", 1.10),
    ("VA", "Virginia", 1.15),
    ("WA", "Washington", 1.35),
    ("WV", "West Virginia", 1.10),
    ("WI", "Wisconsin", 1.05),
    ("WY", "Wyoming", 1.02),
    ("DC", "Washington DC", 1.20),
];

/// Display name for a jurisdiction code
pub fn jurisdiction_name(code: &str) -> Option<&'static str> {
    JURISDICTIONS
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, name, _)| *name)
}

/// Reference prices at mid quality, BYOB
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePrices {
    pub beer_per_bottle: f64,
    pub wine_per_bottle: f64,
    pub spirit_per_bottle: f64,
}

impl Default for BasePrices {
    fn default() -> Self {
        Self {
            beer_per_bottle: 1.25,
            wine_per_bottle: 12.0,
            spirit_per_bottle: 25.0,
        }
    }
}

impl BasePrices {
    /// Override one price by item name (`beer`, `wine` or `spirits`)
    pub fn set(&mut self, item: &str, price: f64) -> Result<()> {
        match item {
            "beer" => self.beer_per_bottle = price,
            "wine" => self.wine_per_bottle = price,
            "spirits" => self.spirit_per_bottle = price,
            other => return Err(PlannerError::UnknownPriceItem(other.to_string())),
        }
        Ok(())
    }
}

/// Fractions of the point estimate bounding the quoted cost range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBand {
    pub low: f64,
    pub high: f64,
}

impl Default for CostBand {
    fn default() -> Self {
        Self { low: 0.9, high: 1.1 }
    }
}

/// Pricing model
#[derive(Debug, Clone, PartialEq)]
pub struct PricingModel {
    pub base_prices: BasePrices,

    /// Multiplier by jurisdiction code
    state_multipliers: HashMap<String, f64>,

    pub cost_band: CostBand,
}

impl Default for PricingModel {
    fn default() -> Self {
        Self {
            base_prices: BasePrices::default(),
            state_multipliers: JURISDICTIONS
                .iter()
                .map(|(code, _, mult)| (code.to_string(), *mult))
                .collect(),
            cost_band: CostBand::default(),
        }
    }
}

impl PricingModel {
    pub fn quality_multiplier(&self, quality_tier: QualityTier) -> f64 {
        match quality_tier {
            QualityTier::Budget => 0.6,
            QualityTier::Mid => 1.0,
            QualityTier::Premium => 1.8,
        }
    }

    pub fn service_multiplier(&self, service_type: ServiceType) -> f64 {
        match service_type {
            ServiceType::Byob => 1.0,
            ServiceType::Venue => 3.0,
        }
    }

    /// Multiplier for a jurisdiction code, 1.0 when the code is unknown
    pub fn state_multiplier(&self, code: &str) -> f64 {
        match self.state_multipliers.get(code) {
            Some(mult) => *mult,
            None => {
                debug!("no price multiplier for jurisdiction {:?}, using {}", code, DEFAULT_STATE_MULTIPLIER);
                DEFAULT_STATE_MULTIPLIER
            }
        }
    }

    /// Replace or add jurisdiction multipliers
    pub fn with_state_multipliers(mut self, overrides: HashMap<String, f64>) -> Self {
        self.state_multipliers.extend(overrides);
        self
    }

    /// Number of jurisdictions with an explicit multiplier
    pub fn jurisdiction_count(&self) -> usize {
        self.state_multipliers.len()
    }
}
