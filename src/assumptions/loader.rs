//! CSV-based pricing overrides
//!
//! Loads optional pricing tables from a directory (default `data/pricing/`).
//! Missing files leave the compiled-in tables untouched.

use crate::error::{PlannerError, Result};
use csv::StringRecord;
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Default path to the pricing override directory
pub const DEFAULT_PRICING_PATH: &str = "data/pricing";

pub const STATE_MULTIPLIERS_FILE: &str = "state_multipliers.csv";
pub const BASE_PRICES_FILE: &str = "base_prices.csv";

/// Load jurisdiction multipliers from CSV
/// Returns HashMap<code, multiplier>
pub fn load_state_multipliers(path: &Path) -> Result<HashMap<String, f64>> {
    let file = File::open(path.join(STATE_MULTIPLIERS_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut multipliers = HashMap::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let code = field(&record, STATE_MULTIPLIERS_FILE, row, 0)?.to_string();
        let multiplier: f64 = field(&record, STATE_MULTIPLIERS_FILE, row, 1)?.parse()?;
        multipliers.insert(code, multiplier);
    }

    Ok(multipliers)
}

/// Load reference unit prices from CSV
/// Returns Vec<(item, price)> in file order
pub fn load_base_prices(path: &Path) -> Result<Vec<(String, f64)>> {
    let file = File::open(path.join(BASE_PRICES_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut prices = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let item = field(&record, BASE_PRICES_FILE, row, 0)?.to_string();
        let price: f64 = field(&record, BASE_PRICES_FILE, row, 1)?.parse()?;
        prices.push((item, price));
    }

    Ok(prices)
}

/// Trimmed value of column `column` in data row `row` (both 0-based)
fn field<'r>(
    record: &'r StringRecord,
    file: &'static str,
    row: usize,
    column: usize,
) -> Result<&'r str> {
    record
        .get(column)
        .map(str::trim)
        .ok_or(PlannerError::MissingColumn {
            file,
            row: row + 1,
            column: column + 1,
        })
}

/// Pricing tables found in an override directory
#[derive(Debug, Default)]
pub struct LoadedPricing {
    pub state_multipliers: Option<HashMap<String, f64>>,
    pub base_prices: Option<Vec<(String, f64)>>,
}

impl LoadedPricing {
    /// Load overrides from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_PRICING_PATH))
    }

    /// Load whichever override files exist under `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let state_multipliers = if path.join(STATE_MULTIPLIERS_FILE).exists() {
            Some(load_state_multipliers(path)?)
        } else {
            None
        };

        let base_prices = if path.join(BASE_PRICES_FILE).exists() {
            Some(load_base_prices(path)?)
        } else {
            None
        };

        info!(
            "loaded pricing overrides from {}: {} jurisdictions, {} prices",
            path.display(),
            state_multipliers.as_ref().map_or(0, |m| m.len()),
            base_prices.as_ref().map_or(0, |p| p.len()),
        );

        Ok(Self {
            state_multipliers,
            base_prices,
        })
    }
}
