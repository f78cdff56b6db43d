//! Consumption assumptions: drinking pace, crowd adjustment, bar splits and
//! serving units

use crate::event::{AgeSkew, BarStyle, Intensity};

/// Share of total drinks poured from each beverage category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSplit {
    pub beer: f64,
    pub wine: f64,
    pub spirits: f64,
}

/// Servings per purchasable unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkUnits {
    /// Bottles of beer in a case
    pub beer_per_case: u32,
    /// Glasses poured from a bottle of wine
    pub wine_glasses_per_bottle: u32,
    /// Shots poured from a bottle of spirits
    pub spirit_shots_per_bottle: u32,
}

impl Default for DrinkUnits {
    fn default() -> Self {
        Self {
            beer_per_case: 24,
            wine_glasses_per_bottle: 5,
            spirit_shots_per_bottle: 16,
        }
    }
}

/// How spirit bottles divide across types.
///
/// Each type is rounded up on its own, so the parts may exceed the whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiritMix {
    pub vodka: f64,
    pub whiskey: f64,
    pub rum: f64,
    pub tequila: f64,
}

impl Default for SpiritMix {
    fn default() -> Self {
        Self {
            vodka: 0.30,
            whiskey: 0.25,
            rum: 0.25,
            tequila: 0.20,
        }
    }
}

/// Consumption model combining pace, crowd, split and unit tables
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionModel {
    pub units: DrinkUnits,

    /// Fraction of wine bottles that are red (rounded up; white takes the rest)
    pub red_wine_share: f64,

    pub spirit_mix: SpiritMix,
}

impl Default for ConsumptionModel {
    fn default() -> Self {
        Self {
            units: DrinkUnits::default(),
            red_wine_share: 0.6,
            spirit_mix: SpiritMix::default(),
        }
    }
}

impl ConsumptionModel {
    /// Base drinks per person per hour for a drinking pace
    pub fn intensity_modifier(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::VeryLight => 0.4,
            Intensity::Light => 0.6,
            Intensity::Moderate => 0.85,
            Intensity::Heavy => 1.25,
            Intensity::VeryHeavy => 1.75,
        }
    }

    /// Multiplicative adjustment for crowd age
    pub fn age_modifier(&self, age_skew: AgeSkew) -> f64 {
        match age_skew {
            AgeSkew::Younger => 1.15,
            AgeSkew::Mixed => 1.0,
            AgeSkew::Older => 0.85,
        }
    }

    /// Combined drinks per person per hour
    pub fn drinks_per_hour(&self, intensity: Intensity, age_skew: AgeSkew) -> f64 {
        self.intensity_modifier(intensity) * self.age_modifier(age_skew)
    }

    pub fn bar_split(&self, bar_style: BarStyle) -> BarSplit {
        match bar_style {
            BarStyle::Beer => BarSplit { beer: 1.0, wine: 0.0, spirits: 0.0 },
            BarStyle::BeerWine => BarSplit { beer: 0.6, wine: 0.4, spirits: 0.0 },
            BarStyle::Full => BarSplit { beer: 0.4, wine: 0.35, spirits: 0.25 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_splits_sum_to_one() {
        let model = ConsumptionModel::default();
        for style in BarStyle::ALL {
            let split = model.bar_split(*style);
            assert_relative_eq!(split.beer + split.wine + split.spirits, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_spirit_mix_sums_to_one() {
        let mix = SpiritMix::default();
        assert_relative_eq!(mix.vodka + mix.whiskey + mix.rum + mix.tequila, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intensity_is_increasing() {
        let model = ConsumptionModel::default();
        let rates: Vec<f64> = Intensity::ALL
            .iter()
            .map(|i| model.intensity_modifier(*i))
            .collect();
        assert!(rates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_drinks_per_hour() {
        let model = ConsumptionModel::default();
        assert_eq!(model.drinks_per_hour(Intensity::Moderate, AgeSkew::Mixed), 0.85);
        assert_relative_eq!(
            model.drinks_per_hour(Intensity::Heavy, AgeSkew::Younger),
            1.4375,
            epsilon = 1e-12
        );
    }
}
