//! Load event inputs from CSV
//!
//! Columns use the same keys as share links:
//! `guests,hours,style,intensity,age,service,quality,state`

use super::CalculatorInput;
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Raw CSV row, one event per line
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    guests: u32,
    hours: f64,
    style: String,
    intensity: String,
    age: String,
    service: String,
    quality: String,
    state: String,
}

impl CsvRow {
    fn to_input(self) -> Result<CalculatorInput> {
        Ok(CalculatorInput {
            guests: self.guests,
            hours: self.hours,
            bar_style: self.style.trim().parse()?,
            intensity: self.intensity.trim().parse()?,
            age_skew: self.age.trim().parse()?,
            service_type: self.service.trim().parse()?,
            quality_tier: self.quality.trim().parse()?,
            state: self.state.trim().to_string(),
        })
    }
}

/// Load all event inputs from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<CalculatorInput>> {
    let mut reader = Reader::from_path(path)?;
    read_all(&mut reader)
}

/// Load event inputs from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CalculatorInput>> {
    let mut csv_reader = Reader::from_reader(reader);
    read_all(&mut csv_reader)
}

fn read_all<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<CalculatorInput>> {
    let mut inputs = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        inputs.push(row.to_input()?);
    }

    Ok(inputs)
}
