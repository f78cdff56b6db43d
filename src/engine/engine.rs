//! Core planning engine: input record to drink order, cost range and vibe

use crate::assumptions::{standard_assumptions, Assumptions};
use crate::event::CalculatorInput;
use super::results::{
    BeerOrder, CalculatorResult, CostRange, DrinkCounts, SpiritBreakdown, SpiritOrder, Vibe,
    WineOrder,
};
use log::debug;

/// Plan an event against the standard tables
pub fn calculate(input: &CalculatorInput) -> CalculatorResult {
    PlanningEngine::standard().calculate(input)
}

/// Planning engine over a fixed set of assumptions.
///
/// Holds no mutable state; one engine can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct PlanningEngine<'a> {
    assumptions: &'a Assumptions,
}

impl PlanningEngine<'static> {
    /// Engine over the process-wide standard tables
    pub fn standard() -> Self {
        Self::new(standard_assumptions())
    }
}

impl<'a> PlanningEngine<'a> {
    pub fn new(assumptions: &'a Assumptions) -> Self {
        Self { assumptions }
    }

    /// Run the calculation for one event
    pub fn calculate(&self, input: &CalculatorInput) -> CalculatorResult {
        let consumption = &self.assumptions.consumption;

        let drinks_per_hour = consumption.drinks_per_hour(input.intensity, input.age_skew);
        let total_drinks = round_count(input.guests as f64 * input.hours * drinks_per_hour);

        // Each category rounds on its own; the parts are not reconciled with the total
        let split = consumption.bar_split(input.bar_style);
        let drinks = DrinkCounts {
            beer: round_count(total_drinks as f64 * split.beer),
            wine: round_count(total_drinks as f64 * split.wine),
            spirits: round_count(total_drinks as f64 * split.spirits),
        };

        let beer = self.beer_order(drinks.beer);
        let wine = self.wine_order(drinks.wine);
        let spirits = self.spirit_order(drinks.spirits);
        let cost = self.cost_range(input, &beer, &wine, &spirits);

        let tier = self.assumptions.vibes.classify(drinks_per_hour);
        let vibe = Vibe {
            level: tier.level,
            name: tier.name.to_string(),
            description: tier.description.to_string(),
        };

        debug!(
            "{} guests x {}h at {:.4}/h: {} drinks -> {} beer cases, {} wine, {} spirits, ${}-${}, vibe {}",
            input.guests,
            input.hours,
            drinks_per_hour,
            total_drinks,
            beer.cases,
            wine.bottles,
            spirits.bottles,
            cost.low,
            cost.high,
            vibe.level,
        );

        CalculatorResult {
            drinks_per_hour,
            total_drinks,
            drinks,
            beer,
            wine,
            spirits,
            cost,
            vibe,
        }
    }

    /// One beer drink is one bottle
    fn beer_order(&self, beer_drinks: u32) -> BeerOrder {
        let units = &self.assumptions.consumption.units;
        BeerOrder {
            bottles: beer_drinks,
            cases: beer_drinks.div_ceil(units.beer_per_case),
        }
    }

    /// Red rounds up and white takes the remainder, so the colors always sum to the total
    fn wine_order(&self, wine_drinks: u32) -> WineOrder {
        let consumption = &self.assumptions.consumption;
        let bottles = wine_drinks.div_ceil(consumption.units.wine_glasses_per_bottle);
        let red = ceil_count(bottles as f64 * consumption.red_wine_share);
        WineOrder {
            bottles,
            red,
            white: bottles.saturating_sub(red),
        }
    }

    /// Each spirit type rounds up on its own and the sum may exceed `bottles`
    fn spirit_order(&self, spirit_drinks: u32) -> SpiritOrder {
        let consumption = &self.assumptions.consumption;
        let bottles = spirit_drinks.div_ceil(consumption.units.spirit_shots_per_bottle);
        let mix = &consumption.spirit_mix;
        let share = |fraction: f64| ceil_count(bottles as f64 * fraction);
        SpiritOrder {
            bottles,
            breakdown: SpiritBreakdown {
                vodka: share(mix.vodka),
                whiskey: share(mix.whiskey),
                rum: share(mix.rum),
                tequila: share(mix.tequila),
            },
        }
    }

    fn cost_range(
        &self,
        input: &CalculatorInput,
        beer: &BeerOrder,
        wine: &WineOrder,
        spirits: &SpiritOrder,
    ) -> CostRange {
        let pricing = &self.assumptions.pricing;
        let prices = &pricing.base_prices;

        let base_cost = beer.bottles as f64 * prices.beer_per_bottle
            + wine.bottles as f64 * prices.wine_per_bottle
            + spirits.bottles as f64 * prices.spirit_per_bottle;

        let adjusted_cost = base_cost
            * pricing.state_multiplier(&input.state)
            * pricing.quality_multiplier(input.quality_tier)
            * pricing.service_multiplier(input.service_type);

        CostRange {
            low: (adjusted_cost * pricing.cost_band.low).round() as i64,
            high: (adjusted_cost * pricing.cost_band.high).round() as i64,
        }
    }
}

/// Nearest whole count, halves rounded up
fn round_count(value: f64) -> u32 {
    value.round() as u32
}

fn ceil_count(value: f64) -> u32 {
    value.ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{AgeSkew, BarStyle, Intensity, QualityTier, ServiceType};
    use approx::assert_relative_eq;

    fn party(guests: u32, hours: f64) -> CalculatorInput {
        CalculatorInput {
            guests,
            hours,
            ..Default::default()
        }
    }

    fn every_input() -> Vec<CalculatorInput> {
        let mut inputs = Vec::new();
        for &guests in &[10, 15, 17, 55, 100, 333, 500] {
            for &hours in &[2.0, 3.0, 4.5, 8.0] {
                for &bar_style in BarStyle::ALL {
                    for &intensity in Intensity::ALL {
                        for &age_skew in AgeSkew::ALL {
                            inputs.push(CalculatorInput {
                                guests,
                                hours,
                                bar_style,
                                intensity,
                                age_skew,
                                ..Default::default()
                            });
                        }
                    }
                }
            }
        }
        inputs
    }

    #[test]
    fn test_beer_only_bar() {
        let input = CalculatorInput {
            bar_style: BarStyle::Beer,
            intensity: Intensity::Moderate,
            age_skew: AgeSkew::Mixed,
            ..party(100, 4.0)
        };
        let result = calculate(&input);

        // 100 guests * 4 hours * 0.85 = 340 drinks, 340 / 24 = 14.17 cases -> 15
        assert_eq!(result.drinks_per_hour, 0.85);
        assert_eq!(result.total_drinks, 340);
        assert_eq!(result.beer.bottles, 340);
        assert_eq!(result.beer.cases, 15);
        assert_eq!(result.wine.bottles, 0);
        assert_eq!(result.spirits.bottles, 0);
        assert_eq!(result.spirits.breakdown.total(), 0);
    }

    #[test]
    fn test_moderate_vibe() {
        let result = calculate(&party(100, 4.0));
        assert_eq!(result.vibe.level, 3);
        assert_eq!(result.vibe.name, "Social Sippers");
        assert_eq!(result.vibe.description, "Moderate, dinner-party vibes");
    }

    #[test]
    fn test_heavy_vibe() {
        let input = CalculatorInput {
            intensity: Intensity::Heavy,
            ..party(100, 4.0)
        };
        let result = calculate(&input);
        assert_eq!(result.drinks_per_hour, 1.25);
        assert_eq!(result.vibe.level, 4);
        assert_eq!(result.vibe.name, "We're Here to Party");
    }

    #[test]
    fn test_full_bar_split() {
        let input = CalculatorInput {
            bar_style: BarStyle::Full,
            ..party(100, 4.0)
        };
        let result = calculate(&input);

        // 340 drinks: 40% beer, 35% wine, 25% spirits
        assert_eq!(result.drinks, DrinkCounts { beer: 136, wine: 119, spirits: 85 });
        assert_eq!(result.drinks.total(), result.total_drinks);
        assert_eq!(result.beer.bottles, 136);
        assert_eq!(result.beer.cases, 6);
        // 119 glasses / 5 -> 24 bottles, 15 red + 9 white
        assert_eq!(result.wine, WineOrder { bottles: 24, red: 15, white: 9 });
        // 85 shots / 16 -> 6 bottles, each type rounds up to 2
        assert_eq!(result.spirits.bottles, 6);
        assert_eq!(
            result.spirits.breakdown,
            SpiritBreakdown { vodka: 2, whiskey: 2, rum: 2, tequila: 2 }
        );
        assert_eq!(result.spirits.breakdown.total(), 8);
    }

    #[test]
    fn test_default_cost_range() {
        // 204 beers * 1.25 + 28 wine * 12 = 591, * 1.05 TX = 620.55
        let result = calculate(&CalculatorInput::default());
        assert_eq!(result.cost, CostRange { low: 558, high: 683 });
    }

    #[test]
    fn test_state_multiplier_raises_cost() {
        let tx = calculate(&CalculatorInput::default());
        let wa = calculate(&CalculatorInput {
            state: "WA".to_string(),
            ..Default::default()
        });
        assert!(wa.cost.low > tx.cost.low);
        assert!(wa.cost.high > tx.cost.high);
        assert_eq!(wa.cost, CostRange { low: 718, high: 878 });
    }

    #[test]
    fn test_lowercase_link_state_prices_as_state() {
        let input = crate::event::resolve_input(Some("state=wa"), Default::default());
        assert_eq!(calculate(&input).cost, CostRange { low: 718, high: 878 });
    }

    #[test]
    fn test_clamped_nan_hours_plans_minimum_duration() {
        let input = CalculatorInput {
            hours: f64::NAN,
            ..Default::default()
        }
        .clamped();
        let result = calculate(&input);
        assert_eq!(result, calculate(&party(100, 2.0)));
        assert_eq!(result.total_drinks, 170);
        assert!(result.cost.low > 0);
    }

    #[test]
    fn test_unknown_state_uses_unit_multiplier() {
        let result = calculate(&CalculatorInput {
            state: "ZZ".to_string(),
            ..Default::default()
        });
        assert_eq!(result.cost, CostRange { low: 532, high: 650 });
    }

    #[test]
    fn test_quality_and_service_multipliers() {
        let base = calculate(&CalculatorInput {
            state: "NH".to_string(),
            ..Default::default()
        });
        let premium_venue = calculate(&CalculatorInput {
            state: "NH".to_string(),
            quality_tier: QualityTier::Premium,
            service_type: ServiceType::Venue,
            ..Default::default()
        });
        // 591 * 1.8 * 3.0 = 3191.4
        assert_eq!(premium_venue.cost, CostRange { low: 2872, high: 3511 });
        assert!(premium_venue.cost.low > base.cost.high);

        let budget = calculate(&CalculatorInput {
            quality_tier: QualityTier::Budget,
            ..Default::default()
        });
        assert!(budget.cost.high < calculate(&CalculatorInput::default()).cost.high);
    }

    #[test]
    fn test_zero_guests_or_hours() {
        for input in [party(0, 4.0), party(100, 0.0)] {
            let result = calculate(&CalculatorInput {
                bar_style: BarStyle::Full,
                ..input
            });
            assert_eq!(result.total_drinks, 0);
            assert_eq!(result.beer, BeerOrder::default());
            assert_eq!(result.wine, WineOrder::default());
            assert_eq!(result.spirits, SpiritOrder::default());
            assert_eq!(result.cost, CostRange::default());
        }
    }

    #[test]
    fn test_wine_colors_sum_to_bottles() {
        for input in every_input() {
            let wine = calculate(&input).wine;
            assert_eq!(wine.red + wine.white, wine.bottles, "{:?}", input);
            assert!(wine.red >= wine.white || wine.bottles == 0);
        }
    }

    #[test]
    fn test_spirit_types_cover_bottles() {
        let mix = standard_assumptions().consumption.spirit_mix;
        for input in every_input() {
            let spirits = calculate(&input).spirits;
            let b = spirits.bottles as f64;
            let parts = spirits.breakdown;
            assert!(parts.vodka as f64 >= (b * mix.vodka).ceil());
            assert!(parts.whiskey as f64 >= (b * mix.whiskey).ceil());
            assert!(parts.rum as f64 >= (b * mix.rum).ceil());
            assert!(parts.tequila as f64 >= (b * mix.tequila).ceil());
            assert!(parts.total() >= spirits.bottles, "{:?}", input);
        }
    }

    #[test]
    fn test_cost_band_ratio() {
        for input in every_input() {
            let cost = calculate(&input).cost;
            assert!(cost.high > cost.low, "{:?}", input);
            if cost.low >= 100 {
                assert_relative_eq!(
                    cost.high as f64 / cost.low as f64,
                    1.1 / 0.9,
                    epsilon = 0.02
                );
            }
        }
    }

    #[test]
    fn test_more_guests_or_hours_never_fewer_drinks() {
        for &intensity in Intensity::ALL {
            let mut previous = 0;
            for guests in (10..=500).step_by(5) {
                let input = CalculatorInput {
                    intensity,
                    ..party(guests, 4.0)
                };
                let total = calculate(&input).total_drinks;
                assert!(total >= previous);
                previous = total;
            }

            let mut previous = 0;
            for half_hours in 4..=16 {
                let input = CalculatorInput {
                    intensity,
                    ..party(100, half_hours as f64 / 2.0)
                };
                let total = calculate(&input).total_drinks;
                assert!(total >= previous);
                previous = total;
            }
        }
    }

    #[test]
    fn test_custom_assumptions_engine() {
        let mut assumptions = Assumptions::standard();
        assumptions.pricing.base_prices.beer_per_bottle = 2.5;
        let engine = PlanningEngine::new(&assumptions);

        let input = CalculatorInput {
            bar_style: BarStyle::Beer,
            state: "NH".to_string(),
            ..Default::default()
        };
        // 340 bottles * 2.50 = 850
        assert_eq!(engine.calculate(&input).cost, CostRange { low: 765, high: 935 });
        assert_eq!(calculate(&input).cost, CostRange { low: 383, high: 468 });
    }

    #[test]
    fn test_same_input_same_result() {
        let input = CalculatorInput {
            guests: 250,
            hours: 5.0,
            bar_style: BarStyle::Full,
            intensity: Intensity::Heavy,
            age_skew: AgeSkew::Younger,
            ..Default::default()
        };
        let first = calculate(&input);
        assert_eq!(first, calculate(&input));
        assert_eq!(first.total_drinks, 1797);
        assert_eq!(first.drinks, DrinkCounts { beer: 719, wine: 629, spirits: 449 });
        assert_eq!(first.wine.bottles, 126);
        assert_eq!(first.spirits.bottles, 29);
        assert_eq!(
            first.spirits.breakdown,
            SpiritBreakdown { vodka: 9, whiskey: 8, rum: 8, tequila: 6 }
        );
        assert_eq!(first.vibe.level, 4);
    }
}
