//! Plan every event listed in a CSV file
//!
//! Input columns: guests,hours,style,intensity,age,service,quality,state
//! Events are clamped to the web form's ranges before planning, the same as
//! the CLI and HTTP surfaces. Writes one output row per event with quantities,
//! cost range and vibe.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use pour_planner::event::{encode_query, load_inputs};
use pour_planner::{CalculatorInput, CalculatorResult, PlanRunner};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input events CSV file
    input: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "bar_plans.csv")]
    output: PathBuf,

    /// Directory with pricing override CSVs
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

/// Flattened plan, one per event
#[derive(Debug, Serialize)]
struct PlanRow {
    guests: u32,
    hours: f64,
    style: &'static str,
    intensity: &'static str,
    age: &'static str,
    service: &'static str,
    quality: &'static str,
    state: String,
    drinks_per_hour: f64,
    total_drinks: u32,
    beer_bottles: u32,
    beer_cases: u32,
    wine_bottles: u32,
    wine_red: u32,
    wine_white: u32,
    spirit_bottles: u32,
    vodka: u32,
    whiskey: u32,
    rum: u32,
    tequila: u32,
    cost_low: i64,
    cost_high: i64,
    vibe_level: u8,
    vibe_name: String,
    share_query: String,
}

impl PlanRow {
    fn new(input: &CalculatorInput, result: &CalculatorResult) -> Self {
        Self {
            guests: input.guests,
            hours: input.hours,
            style: input.bar_style.as_str(),
            intensity: input.intensity.as_str(),
            age: input.age_skew.as_str(),
            service: input.service_type.as_str(),
            quality: input.quality_tier.as_str(),
            state: input.state.clone(),
            drinks_per_hour: result.drinks_per_hour,
            total_drinks: result.total_drinks,
            beer_bottles: result.beer.bottles,
            beer_cases: result.beer.cases,
            wine_bottles: result.wine.bottles,
            wine_red: result.wine.red,
            wine_white: result.wine.white,
            spirit_bottles: result.spirits.bottles,
            vodka: result.spirits.breakdown.vodka,
            whiskey: result.spirits.breakdown.whiskey,
            rum: result.spirits.breakdown.rum,
            tequila: result.spirits.breakdown.tequila,
            cost_low: result.cost.low,
            cost_high: result.cost.high,
            vibe_level: result.vibe.level,
            vibe_name: result.vibe.name.clone(),
            share_query: encode_query(input),
        }
    }
}

/// Clamp each loaded event, logging the rows that changed
fn prepare_inputs(inputs: Vec<CalculatorInput>) -> Vec<CalculatorInput> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| {
            let clamped = input.clamped();
            if clamped != input {
                warn!("row {}: clamped {:?} to {:?}", i + 1, input, clamped);
            }
            clamped
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let runner = match &cli.assumptions {
        Some(dir) => PlanRunner::from_csv_path(dir)
            .with_context(|| format!("loading pricing overrides from {}", dir.display()))?,
        None => PlanRunner::new(),
    };

    let inputs = load_inputs(&cli.input)
        .with_context(|| format!("reading events from {}", cli.input.display()))?;
    let inputs = prepare_inputs(inputs);
    info!("loaded {} events in {:?}", inputs.len(), start.elapsed());

    let results = runner.run_batch(&inputs);

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    for (input, result) in inputs.iter().zip(&results) {
        writer.serialize(PlanRow::new(input, result))?;
    }
    writer.flush()?;

    let total_low: i64 = results.iter().map(|r| r.cost.low).sum();
    let total_high: i64 = results.iter().map(|r| r.cost.high).sum();

    println!("Planned {} events -> {}", results.len(), cli.output.display());
    println!("  Combined cost: ${} - ${}", total_low, total_high);
    println!("  Total time: {:?}", start.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pour_planner::event::load_inputs_from_reader;

    #[test]
    fn test_batch_inputs_are_clamped() {
        let csv = "guests,hours,style,intensity,age,service,quality,state\n\
                   2000,0.5,beer,moderate,mixed,byob,mid,wa\n\
                   100,4,beer-wine,moderate,mixed,byob,mid,TX\n";
        let inputs = prepare_inputs(load_inputs_from_reader(csv.as_bytes()).unwrap());

        assert_eq!(inputs[0].guests, 500);
        assert_eq!(inputs[0].hours, 2.0);
        assert_eq!(inputs[0].state, "WA");
        assert_eq!(inputs[1], CalculatorInput::default());
    }
}
