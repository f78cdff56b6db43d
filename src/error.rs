//! Error type for the surfaces around the calculation engine
//!
//! The engine itself is total and never fails. Errors only arise while
//! loading inputs or pricing overrides from files and while parsing
//! categorical values strictly.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("unknown {field} value: {value:?}")]
    UnknownValue { field: &'static str, value: String },

    #[error("unknown pricing item: {0:?}")]
    UnknownPriceItem(String),

    #[error("{file}: row {row} is missing column {column}")]
    MissingColumn {
        file: &'static str,
        row: usize,
        column: usize,
    },
}

impl PlannerError {
    pub(crate) fn unknown(field: &'static str, value: &str) -> Self {
        PlannerError::UnknownValue {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
