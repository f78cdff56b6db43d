//! Pour Planner - event bar planning calculator
//!
//! This library provides:
//! - Drink quantities from guest count, duration and crowd (beer cases, wine by color, spirits by type)
//! - Cost range estimates adjusted for jurisdiction, quality tier and service type
//! - A party vibe rating from the expected drinking pace
//! - Shareable link encoding, CSV batch inputs and plain-text reports

pub mod error;
pub mod event;
pub mod assumptions;
pub mod engine;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::PlannerError;
pub use event::{CalculatorInput, BarStyle, Intensity, AgeSkew, ServiceType, QualityTier};
pub use assumptions::{Assumptions, standard_assumptions};
pub use engine::{calculate, PlanningEngine, CalculatorResult};
pub use report::PlanReport;
pub use scenario::PlanRunner;
