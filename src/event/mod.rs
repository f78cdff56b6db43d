//! Event input data structures, CSV loading and share links

mod data;
pub mod link;
pub mod loader;

pub use data::{
    AgeSkew, BarStyle, CalculatorInput, Intensity, QualityTier, ServiceType,
    MAX_GUESTS, MAX_HOURS, MIN_GUESTS, MIN_HOURS,
};
pub use link::{decode_query, encode_query, resolve_input, share_url, PartialInput};
pub use loader::{load_inputs, load_inputs_from_reader};
