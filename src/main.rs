//! Pour Planner CLI
//!
//! Plans the bar for one event. Starts from the standard defaults, applies a
//! share link if given, then any explicit flags, and clamps guests and hours
//! to the ranges the web form offers.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pour_planner::{
    event::{resolve_input, share_url, PartialInput},
    AgeSkew, Assumptions, BarStyle, CalculatorInput, Intensity, PlanReport, PlanningEngine,
    QualityTier, ServiceType,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Share link or its query string, e.g. "guests=150&style=full&state=WA"
    #[arg(long)]
    link: Option<String>,

    /// Number of guests (10-500)
    #[arg(long)]
    guests: Option<u32>,

    /// Event duration in hours (2-8)
    #[arg(long)]
    hours: Option<f64>,

    /// Bar style: beer, beer-wine or full
    #[arg(long)]
    style: Option<BarStyle>,

    /// Drinking pace: very-light, light, moderate, heavy or very-heavy
    #[arg(long)]
    intensity: Option<Intensity>,

    /// Crowd age: younger, mixed or older
    #[arg(long)]
    age: Option<AgeSkew>,

    /// Service type: byob or venue
    #[arg(long)]
    service: Option<ServiceType>,

    /// Quality tier: budget, mid or premium
    #[arg(long)]
    quality: Option<QualityTier>,

    /// Two-letter state code (or DC)
    #[arg(long)]
    state: Option<String>,

    /// Directory with pricing override CSVs (state_multipliers.csv, base_prices.csv)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Print a share link rooted at this URL
    #[arg(long)]
    share_base: Option<String>,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    input: &'a CalculatorInput,
    result: &'a pour_planner::CalculatorResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_url: Option<String>,
}

impl Cli {
    /// Flags given on the command line; these win over the share link
    fn overrides(&self) -> PartialInput {
        PartialInput {
            guests: self.guests,
            hours: self.hours,
            bar_style: self.style,
            intensity: self.intensity,
            age_skew: self.age,
            service_type: self.service,
            quality_tier: self.quality,
            state: self.state.clone(),
        }
    }

    fn resolve_input(&self) -> CalculatorInput {
        resolve_input(self.link.as_deref(), self.overrides())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading pricing overrides from {}", dir.display()))?,
        None => Assumptions::standard(),
    };

    let input = cli.resolve_input();
    info!("planning {:?}", input);

    let engine = PlanningEngine::new(&assumptions);
    let result = engine.calculate(&input);
    let share = cli.share_base.as_deref().map(|base| share_url(base, &input));

    if cli.json {
        let output = PlanOutput {
            input: &input,
            result: &result,
            share_url: share,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let report = PlanReport::new(&input, &result).with_vibes(assumptions.vibes);
        println!("{}", report);
        if let Some(url) = share {
            println!("\nShare: {}", url);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_link() {
        let cli = Cli::parse_from([
            "pour_planner",
            "--link",
            "https://pour.example/?guests=150&hours=6&style=full&state=WA",
            "--guests",
            "40",
            "--state",
            "ny",
        ]);
        let input = cli.resolve_input();
        assert_eq!(input.guests, 40);
        assert_eq!(input.state, "NY");
        assert_eq!(input.hours, 6.0);
        assert_eq!(input.bar_style, BarStyle::Full);
    }

    #[test]
    fn test_flags_are_clamped() {
        let cli = Cli::parse_from(["pour_planner", "--guests", "5", "--hours", "20"]);
        let input = cli.resolve_input();
        assert_eq!(input.guests, 10);
        assert_eq!(input.hours, 8.0);
    }
}
