//! Plain-text rendering of a plan
//!
//! Shows the same sections as the web results panel: vibe meter, shopping
//! list (wine only when served, spirits only for a full bar) and the cost
//! range with the pricing basis it was quoted on.

use crate::assumptions::{jurisdiction_name, standard_assumptions, VibeScale};
use crate::engine::CalculatorResult;
use crate::event::{BarStyle, CalculatorInput, QualityTier, ServiceType};
use std::fmt;

/// Label used in the pricing basis line
pub fn quality_label(quality_tier: QualityTier) -> &'static str {
    match quality_tier {
        QualityTier::Budget => "budget",
        QualityTier::Mid => "mid-range",
        QualityTier::Premium => "premium",
    }
}

pub fn service_label(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Byob => "BYOB",
        ServiceType::Venue => "venue",
    }
}

/// Whole US dollars with thousands separators, e.g. `$12,345`
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// One cell per tier of `scale`, filled up to `level`
pub fn vibe_meter(scale: &VibeScale, level: u8) -> String {
    scale
        .tiers()
        .iter()
        .map(|tier| if tier.level <= level { '#' } else { '-' })
        .collect()
}

/// A plan paired with the inputs needed to label it
#[derive(Debug, Clone, Copy)]
pub struct PlanReport<'a> {
    input: &'a CalculatorInput,
    result: &'a CalculatorResult,
    vibes: VibeScale,
}

impl<'a> PlanReport<'a> {
    /// Report against the standard vibe scale
    pub fn new(input: &'a CalculatorInput, result: &'a CalculatorResult) -> Self {
        Self {
            input,
            result,
            vibes: standard_assumptions().vibes,
        }
    }

    /// Use the scale the plan was classified on
    pub fn with_vibes(mut self, vibes: VibeScale) -> Self {
        self.vibes = vibes;
        self
    }

    /// Jurisdiction display name, or the raw code when it is not in the table
    pub fn location(&self) -> &'a str {
        let code: &'a str = self.input.state.as_str();
        jurisdiction_name(code).unwrap_or(code)
    }

    pub fn shows_wine(&self) -> bool {
        self.input.bar_style != BarStyle::Beer
    }

    pub fn shows_spirits(&self) -> bool {
        self.input.bar_style == BarStyle::Full
    }

    /// `$low – $high`
    pub fn cost_line(&self) -> String {
        format!(
            "{} – {}",
            format_currency(self.result.cost.low),
            format_currency(self.result.cost.high)
        )
    }

    pub fn pricing_basis(&self) -> String {
        format!(
            "Based on {} {} pricing in {}",
            quality_label(self.input.quality_tier),
            service_label(self.input.service_type),
            self.location()
        )
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.input;
        let result = self.result;

        writeln!(f, "{} guests · {} hours · {}", input.guests, input.hours, self.location())?;
        writeln!(f)?;

        writeln!(f, "Party Vibe: {}/{}", result.vibe.level, self.vibes.max_level())?;
        writeln!(
            f,
            "  [{}] {}",
            vibe_meter(&self.vibes, result.vibe.level),
            result.vibe.name
        )?;
        writeln!(f, "  {}", result.vibe.description)?;
        writeln!(f)?;

        writeln!(f, "You'll Need")?;
        writeln!(
            f,
            "  Beer     {} cases ({} bottles)",
            result.beer.cases, result.beer.bottles
        )?;
        if self.shows_wine() {
            writeln!(
                f,
                "  Wine     {} bottles ({} red, {} white)",
                result.wine.bottles, result.wine.red, result.wine.white
            )?;
        }
        if self.shows_spirits() {
            let mix = &result.spirits.breakdown;
            writeln!(
                f,
                "  Spirits  {} bottles ({} vodka, {} whiskey, {} rum, {} tequila)",
                result.spirits.bottles, mix.vodka, mix.whiskey, mix.rum, mix.tequila
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Estimated Cost")?;
        writeln!(f, "  {}", self.cost_line())?;
        write!(f, "  {}", self.pricing_basis())
    }
}
