//! Investment assumptions: loan terms, operating costs, growth and scenario inputs

mod loan;
mod operating;
mod growth;
pub mod loader;

pub use loan::LoanTerms;
pub use operating::OperatingAssumptions;
pub use growth::GrowthAssumptions;
pub use loader::{InputBounds, ScenarioLoadError};

use crate::break_even::SweepRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for every input a calculation run needs
///
/// Missing fields in a scenario file fall back to [`Assumptions::default_inputs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub loan: LoanTerms,
    pub operating: OperatingAssumptions,
    pub growth: GrowthAssumptions,

    /// Actual monthly rent in Year 1
    pub base_rent: f64,

    /// One-off purchase costs paid in cash
    pub closing_costs: f64,

    /// Number of years to project
    pub projection_years: u32,

    /// Property value range for the break-even curve
    pub sweep: SweepRange,
}

impl Assumptions {
    /// Default inputs of the interactive calculator
    pub fn default_inputs() -> Self {
        Self {
            loan: LoanTerms::default(),
            operating: OperatingAssumptions::default(),
            growth: GrowthAssumptions::uniform(0.02),
            base_rent: 2_500.0,
            closing_costs: 14_400.0,
            projection_years: 10,
            sweep: SweepRange::default(),
        }
    }

    /// Load a scenario from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self, ScenarioLoadError> {
        loader::load_scenario(path)
    }

    /// Cash invested up front: down payment plus closing costs
    pub fn initial_investment(&self) -> f64 {
        self.loan.initial_investment(self.closing_costs)
    }

    /// Check loan, cost, growth and projection inputs against the calculator's input bounds
    pub fn validate(&self) -> Result<(), ScenarioLoadError> {
        InputBounds::default().check(self)
    }

    /// Check the break-even sweep range; only the sweep needs it
    pub fn validate_sweep(&self) -> Result<(), ScenarioLoadError> {
        InputBounds::default().check_sweep(self)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_inputs()
    }
}
