//! Core projection engine for year-by-year rental cash flows

use crate::assumptions::{Assumptions, GrowthAssumptions, LoanTerms, OperatingAssumptions};
use crate::error::{ensure_finite, CalcError};
use super::state::YearState;
use super::cashflows::{ProjectionResult, YearlyResult};

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub projection_years: u32,

    /// Actual monthly rent in Year 1
    pub base_rent: f64,

    /// Closing costs paid in cash at purchase
    pub closing_costs: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            projection_years: 10,
            base_rent: 2_500.0,
            closing_costs: 14_400.0,
        }
    }
}

/// Main projection engine
///
/// Holds no state between runs; projecting twice with the same inputs gives
/// bit-identical results.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    loan: LoanTerms,
    operating: OperatingAssumptions,
    growth: GrowthAssumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given inputs and config
    pub fn new(
        loan: LoanTerms,
        operating: OperatingAssumptions,
        growth: GrowthAssumptions,
        config: ProjectionConfig,
    ) -> Self {
        Self {
            loan,
            operating,
            growth,
            config,
        }
    }

    /// Build an engine from a full scenario
    pub fn from_assumptions(assumptions: &Assumptions) -> Self {
        Self::new(
            assumptions.loan,
            assumptions.operating,
            assumptions.growth,
            ProjectionConfig {
                projection_years: assumptions.projection_years,
                base_rent: assumptions.base_rent,
                closing_costs: assumptions.closing_costs,
            },
        )
    }

    /// Run the projection for every configured year
    pub fn project(&self) -> Result<ProjectionResult, CalcError> {
        let base_rent = ensure_finite("base_rent", self.config.base_rent)?;
        ensure_finite("closing_costs", self.config.closing_costs)?;
        self.operating.ensure_finite()?;
        self.growth.ensure_finite()?;

        // Fixed-rate loan on the purchase price: the payment never changes,
        // whatever happens to value and rent afterwards
        let monthly_payment = self.loan.monthly_payment()?;
        let annual_mortgage = 12.0 * monthly_payment;

        let initial_investment = self.loan.initial_investment(self.config.closing_costs);
        if initial_investment == 0.0 {
            log::warn!("Initial investment is zero, ROI reported as 0 for every year");
        }

        let mut result = ProjectionResult::new(monthly_payment, initial_investment);

        for year_index in 1..=self.config.projection_years {
            let state = YearState::grown(year_index, &self.loan, base_rent, &self.operating, &self.growth)?;
            let row = self.calculate_year(&state, annual_mortgage, initial_investment);

            log::debug!(
                "Year {}: rent {:.2}, expenses {:.2}, net {:.2}, ROI {:.2}%",
                row.year_index,
                row.annual_rent,
                row.total_expenses,
                row.net_annual_cash_flow,
                row.roi_percent
            );

            result.add_row(row);
        }

        Ok(result)
    }

    /// Calculate cash flow and ROI for a single year
    fn calculate_year(&self, state: &YearState, annual_mortgage: f64, initial_investment: f64) -> YearlyResult {
        let vacancy_capex = state.vacancy_capex(self.operating.vacancy_capex_rate);

        let total_expenses = state.annual_tax
            + state.annual_insurance
            + annual_mortgage
            + state.annual_hoa
            + vacancy_capex;

        let net_annual_cash_flow = state.annual_rent - total_expenses;

        let roi_percent = if initial_investment == 0.0 {
            0.0
        } else {
            net_annual_cash_flow / initial_investment * 100.0
        };

        YearlyResult {
            year_index: state.year_index,
            net_annual_cash_flow,
            roi_percent,
            property_value: state.property_value,
            annual_rent: state.annual_rent,
            property_tax: state.annual_tax,
            insurance: state.annual_insurance,
            hoa: state.annual_hoa,
            mortgage: annual_mortgage,
            vacancy_capex,
            total_expenses,
        }
    }
}

/// Project `years` years of cash flow and ROI
///
/// Convenience wrapper over [`ProjectionEngine`] returning only the rows.
pub fn project(
    years: u32,
    loan: &LoanTerms,
    base_rent: f64,
    ops: &OperatingAssumptions,
    growth: &GrowthAssumptions,
    closing_costs: f64,
) -> Result<Vec<YearlyResult>, CalcError> {
    let config = ProjectionConfig {
        projection_years: years,
        base_rent,
        closing_costs,
    };
    let engine = ProjectionEngine::new(*loan, *ops, *growth, config);
    Ok(engine.project()?.rows)
}
