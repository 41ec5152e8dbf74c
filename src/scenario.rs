//! Scenario runner for a loaded set of assumptions
//!
//! Wraps the three calculations behind one set of inputs, and runs batches
//! of independent projections in parallel for hosts that need many at once.

use rayon::prelude::*;

use crate::assumptions::{Assumptions, ScenarioLoadError};
use crate::break_even::{rent_sweep, BreakEvenReport, SweepPoint};
use crate::error::CalcError;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_json_path(Path::new("scenario.json"))?;
///
/// let report = runner.break_even()?;
/// for rent in [2_500.0, 3_000.0, 3_500.0] {
///     let result = runner.project_with_rent(rent)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with the calculator's default inputs
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_inputs(),
        }
    }

    /// Create runner from a JSON scenario file
    pub fn from_json_path(path: &std::path::Path) -> Result<Self, ScenarioLoadError> {
        Ok(Self {
            assumptions: Assumptions::from_json_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn monthly_payment(&self) -> Result<f64, CalcError> {
        self.assumptions.loan.monthly_payment()
    }

    /// Year-1 mortgage payment and break-even rent
    pub fn break_even(&self) -> Result<BreakEvenReport, CalcError> {
        BreakEvenReport::compute(&self.assumptions.loan, &self.assumptions.operating)
    }

    /// Break-even rent over the configured property value range
    pub fn sweep(&self) -> Result<Vec<SweepPoint>, CalcError> {
        rent_sweep(&self.assumptions.sweep, &self.assumptions.loan, &self.assumptions.operating)
    }

    /// Year-by-year projection at the configured base rent
    pub fn project(&self) -> Result<ProjectionResult, CalcError> {
        ProjectionEngine::from_assumptions(&self.assumptions).project()
    }

    /// Projection with a different Year-1 rent
    pub fn project_with_rent(&self, base_rent: f64) -> Result<ProjectionResult, CalcError> {
        let assumptions = Assumptions {
            base_rent,
            ..self.assumptions.clone()
        };
        ProjectionEngine::from_assumptions(&assumptions).project()
    }

    /// Project every rent in `rents` in parallel, keeping input order
    pub fn run_rent_grid(&self, rents: &[f64]) -> Vec<Result<ProjectionResult, CalcError>> {
        log::info!("Projecting {} rents in parallel", rents.len());
        rents
            .par_iter()
            .map(|&rent| self.project_with_rent(rent))
            .collect()
    }

    /// Run independent scenarios in parallel, keeping input order
    pub fn run_scenarios(scenarios: &[Assumptions]) -> Vec<Result<ProjectionResult, CalcError>> {
        scenarios
            .par_iter()
            .map(|a| ProjectionEngine::from_assumptions(a).project())
            .collect()
    }

    /// Get reference to assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get mutable reference to assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GrowthAssumptions;

    #[test]
    fn test_default_runner() {
        let runner = ScenarioRunner::new();

        let report = runner.break_even().unwrap();
        assert!((report.monthly_mortgage_payment - runner.monthly_payment().unwrap()).abs() < 1e-12);
        assert_eq!(runner.sweep().unwrap().len(), 50);
        assert_eq!(runner.project().unwrap().rows.len(), 10);
    }

    #[test]
    fn test_rent_grid_keeps_order() {
        let runner = ScenarioRunner::new();
        let rents = [2_000.0, 3_000.0, 4_000.0, 5_000.0];

        let results = runner.run_rent_grid(&rents);
        assert_eq!(results.len(), 4);

        let year_one: Vec<f64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().rows[0].net_annual_cash_flow)
            .collect();
        for pair in year_one.windows(2) {
            assert!(pair[1] > pair[0]);
        }

        // Parallel and sequential runs agree exactly
        let sequential = runner.project_with_rent(3_000.0).unwrap();
        assert_eq!(results[1].as_ref().unwrap(), &sequential);
    }

    #[test]
    fn test_break_even_rent_reaches_zero_cash_flow() {
        let mut runner = ScenarioRunner::new();
        runner.assumptions_mut().growth = GrowthAssumptions::default();

        let rent = runner.break_even().unwrap().required_monthly_rent;
        let result = runner.project_with_rent(rent).unwrap();
        assert!(result.rows[0].net_annual_cash_flow.abs() < 1e-6);
    }

    #[test]
    fn test_run_scenarios_reports_errors_per_item() {
        let good = Assumptions::default_inputs();
        let mut bad = Assumptions::default_inputs();
        bad.loan.term_years = 0;

        let results = ScenarioRunner::run_scenarios(&[good, bad]);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(CalcError::InvalidInput { .. })));
    }
}
