//! Plan runner for batches of events
//!
//! Pre-loads assumptions once, then plans many events (or sweeps one event
//! across guest counts) without re-reading pricing files.

use crate::assumptions::Assumptions;
use crate::engine::{CalculatorResult, PlanningEngine};
use crate::event::CalculatorInput;
use log::info;
use rayon::prelude::*;
use std::path::Path;

/// Pre-loaded plan runner for batch calculations
///
/// # Example
/// ```ignore
/// let runner = PlanRunner::from_csv()?;
///
/// for guests in [50, 100, 200] {
///     let input = CalculatorInput { guests, ..Default::default() };
///     let result = runner.run(&input);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlanRunner {
    /// Pre-loaded assumptions
    assumptions: Assumptions,
}

impl PlanRunner {
    /// Create runner with the standard in-memory tables
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::standard(),
        }
    }

    /// Create runner with pricing overrides from the default directory
    pub fn from_csv() -> crate::error::Result<Self> {
        Ok(Self {
            assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner with pricing overrides from a specific directory
    pub fn from_csv_path(path: &Path) -> crate::error::Result<Self> {
        Ok(Self {
            assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    fn engine(&self) -> PlanningEngine<'_> {
        PlanningEngine::new(&self.assumptions)
    }

    /// Plan a single event
    pub fn run(&self, input: &CalculatorInput) -> CalculatorResult {
        self.engine().calculate(input)
    }

    /// Plan many events in parallel; results keep the input order
    pub fn run_batch(&self, inputs: &[CalculatorInput]) -> Vec<CalculatorResult> {
        let engine = self.engine();
        let results: Vec<_> = inputs.par_iter().map(|input| engine.calculate(input)).collect();
        info!("planned {} events", results.len());
        results
    }

    /// Plan one event at every guest count from `from` to `to` inclusive
    pub fn guest_sweep(
        &self,
        base: &CalculatorInput,
        from: u32,
        to: u32,
        step: u32,
    ) -> Vec<(u32, CalculatorResult)> {
        let engine = self.engine();
        (from..=to)
            .step_by(step.max(1) as usize)
            .map(|guests| {
                let input = CalculatorInput {
                    guests,
                    ..base.clone()
                };
                (guests, engine.calculate(&input))
            })
            .collect()
    }

    /// Get reference to the assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get mutable reference to the assumptions for what-if pricing
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}

impl Default for PlanRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;
    use crate::event::{BarStyle, Intensity};

    #[test]
    fn test_batch_preserves_order() {
        let runner = PlanRunner::new();
        let inputs: Vec<_> = (1..=40)
            .map(|i| CalculatorInput {
                guests: i * 10,
                bar_style: BarStyle::Full,
                ..Default::default()
            })
            .collect();

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), inputs.len());
        for (input, result) in inputs.iter().zip(&results) {
            assert_eq!(*result, calculate(input));
        }
    }

    #[test]
    fn test_guest_sweep_is_monotonic() {
        let runner = PlanRunner::new();
        let base = CalculatorInput {
            intensity: Intensity::VeryHeavy,
            ..Default::default()
        };
        let sweep = runner.guest_sweep(&base, 10, 500, 5);
        assert_eq!(sweep.len(), 99);
        assert_eq!(sweep[0].0, 10);
        assert_eq!(sweep[98].0, 500);
        for pair in sweep.windows(2) {
            assert!(pair[1].1.total_drinks >= pair[0].1.total_drinks);
            assert!(pair[1].1.cost.low >= pair[0].1.cost.low);
        }
    }

    #[test]
    fn test_what_if_pricing() {
        let mut runner = PlanRunner::new();
        let input = CalculatorInput::default();
        let before = runner.run(&input);

        runner.assumptions_mut().pricing.base_prices.wine_per_bottle = 24.0;
        let after = runner.run(&input);

        assert_eq!(before.wine, after.wine);
        assert!(after.cost.low > before.cost.low);
    }
}
