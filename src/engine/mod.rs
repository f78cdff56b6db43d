//! Planning engine and its result records

mod engine;
mod results;

pub use engine::{calculate, PlanningEngine};
pub use results::{
    BeerOrder, CalculatorResult, CostRange, DrinkCounts, SpiritBreakdown, SpiritOrder, Vibe,
    WineOrder,
};
