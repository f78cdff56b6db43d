//! Event input record and its categorical choices

use crate::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Guest count range offered by the input form
pub const MIN_GUESTS: u32 = 10;
pub const MAX_GUESTS: u32 = 500;

/// Event duration range offered by the input form, in hours
pub const MIN_HOURS: f64 = 2.0;
pub const MAX_HOURS: f64 = 8.0;

/// Declares a closed set of literal tags with string conversions.
///
/// Tags are the exact strings used in share links, CSV files and JSON.
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $tag)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Literal tag for this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = PlannerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(PlannerError::unknown($field, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

categorical! {
    /// Which beverage categories the bar serves
    BarStyle, "bar style" {
        /// Beer only
        Beer => "beer",
        /// Beer and wine
        BeerWine => "beer-wine",
        /// Beer, wine and spirits
        Full => "full",
    }
}

categorical! {
    /// Drinking pace of the crowd
    Intensity, "intensity" {
        VeryLight => "very-light",
        Light => "light",
        Moderate => "moderate",
        Heavy => "heavy",
        VeryHeavy => "very-heavy",
    }
}

categorical! {
    /// Age composition of the crowd
    AgeSkew, "age" {
        Younger => "younger",
        Mixed => "mixed",
        Older => "older",
    }
}

categorical! {
    /// Who supplies the drinks
    ServiceType, "service" {
        /// Host buys retail
        Byob => "byob",
        /// Venue or caterer supplies and pours
        Venue => "venue",
    }
}

categorical! {
    /// Price level of the drinks
    QualityTier, "quality" {
        Budget => "budget",
        Mid => "mid",
        Premium => "premium",
    }
}

/// Everything the engine needs to plan one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInput {
    /// Expected number of guests
    pub guests: u32,

    /// Event duration in hours
    pub hours: f64,

    pub bar_style: BarStyle,

    pub intensity: Intensity,

    pub age_skew: AgeSkew,

    pub service_type: ServiceType,

    pub quality_tier: QualityTier,

    /// Two-letter jurisdiction code (US state or DC)
    pub state: String,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            guests: 100,
            hours: 4.0,
            bar_style: BarStyle::BeerWine,
            intensity: Intensity::Moderate,
            age_skew: AgeSkew::Mixed,
            service_type: ServiceType::Byob,
            quality_tier: QualityTier::Mid,
            state: "TX".to_string(),
        }
    }
}

impl CalculatorInput {
    /// Copy with guests and hours pulled into the ranges the input form
    /// offers and the state code trimmed and upper-cased.
    ///
    /// Non-finite hours become `MIN_HOURS`. The engine never clamps;
    /// collecting surfaces call this before calculating.
    pub fn clamped(&self) -> Self {
        let hours = if self.hours.is_finite() {
            self.hours.clamp(MIN_HOURS, MAX_HOURS)
        } else {
            MIN_HOURS
        };
        Self {
            guests: self.guests.clamp(MIN_GUESTS, MAX_GUESTS),
            hours,
            state: self.state.trim().to_uppercase(),
            ..self.clone()
        }
    }
}
