//! Planning assumptions: consumption rates, pricing and the vibe scale

mod consumption;
mod pricing;
mod vibe;
pub mod loader;

pub use consumption::{BarSplit, ConsumptionModel, DrinkUnits, SpiritMix};
pub use pricing::{
    jurisdiction_name, BasePrices, CostBand, PricingModel, DEFAULT_STATE_MULTIPLIER, JURISDICTIONS,
};
pub use vibe::{VibeScale, VibeTier};
pub use loader::LoadedPricing;

use crate::error::Result;
use std::path::Path;
use std::sync::LazyLock;

static STANDARD: LazyLock<Assumptions> = LazyLock::new(Assumptions::standard);

/// Process-wide standard tables, built on first use and never modified
pub fn standard_assumptions() -> &'static Assumptions {
    &STANDARD
}

/// Container for all planning assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub consumption: ConsumptionModel,
    pub pricing: PricingModel,
    pub vibes: VibeScale,
}

impl Assumptions {
    /// Compiled-in reference tables
    pub fn standard() -> Self {
        Self {
            consumption: ConsumptionModel::default(),
            pricing: PricingModel::default(),
            vibes: VibeScale::default(),
        }
    }

    /// Standard tables with pricing overrides from the default location (data/pricing/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_PRICING_PATH))
    }

    /// Standard tables with pricing overrides from a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedPricing::load_from(path)?;
        Self::standard().with_loaded(loaded)
    }

    fn with_loaded(mut self, loaded: LoadedPricing) -> Result<Self> {
        if let Some(states) = loaded.state_multipliers {
            self.pricing = self.pricing.with_state_multipliers(states);
        }
        if let Some(prices) = loaded.base_prices {
            for (item, price) in prices {
                self.pricing.base_prices.set(&item, price)?;
            }
        }
        Ok(self)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::standard()
    }
}
