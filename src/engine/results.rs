//! Calculation output structures

use serde::{Deserialize, Serialize};

/// Drinks poured from each beverage category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkCounts {
    pub beer: u32,
    pub wine: u32,
    pub spirits: u32,
}

impl DrinkCounts {
    /// Sum of the category counts (may differ from the rounded total by a drink or two)
    pub fn total(&self) -> u32 {
        self.beer + self.wine + self.spirits
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerOrder {
    pub bottles: u32,
    pub cases: u32,
}

/// Wine bottles; `red + white == bottles` always holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineOrder {
    pub bottles: u32,
    pub red: u32,
    pub white: u32,
}

/// Bottles per spirit type, each rounded up independently
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritBreakdown {
    pub vodka: u32,
    pub whiskey: u32,
    pub rum: u32,
    pub tequila: u32,
}

impl SpiritBreakdown {
    pub fn total(&self) -> u32 {
        self.vodka + self.whiskey + self.rum + self.tequila
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritOrder {
    pub bottles: u32,
    pub breakdown: SpiritBreakdown,
}

/// Estimated spend in whole dollars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub low: i64,
    pub high: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vibe {
    /// 1 (calmest) to 5 (rowdiest)
    pub level: u8,
    pub name: String,
    pub description: String,
}

/// Complete plan for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    /// Drinks per guest per hour after the crowd adjustment
    pub drinks_per_hour: f64,

    /// Drinks poured over the whole event
    pub total_drinks: u32,

    pub drinks: DrinkCounts,

    pub beer: BeerOrder,

    pub wine: WineOrder,

    pub spirits: SpiritOrder,

    pub cost: CostRange,

    pub vibe: Vibe,
}
