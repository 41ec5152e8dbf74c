//! Grown income and cost figures for one projection year

use crate::assumptions::{GrowthAssumptions, LoanTerms, OperatingAssumptions};
use crate::error::CalcError;

/// Rent, value and non-mortgage costs for a single year after growth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearState {
    /// Projection year (1-indexed)
    pub year_index: u32,

    /// Property value after appreciation
    pub property_value: f64,

    /// Gross rent for the year
    pub annual_rent: f64,

    /// Property tax on the appreciated value
    pub annual_tax: f64,

    /// Insurance grown at the other-costs rate
    pub annual_insurance: f64,

    /// HOA dues grown at the other-costs rate
    pub annual_hoa: f64,
}

impl YearState {
    /// Scale Year-1 inputs to `year_index`
    ///
    /// Year 1 applies no growth. Year `i` compounds each rate `i - 1` times.
    /// Fails with `InvalidInput` once a compounded factor overflows.
    pub fn grown(
        year_index: u32,
        loan: &LoanTerms,
        base_rent: f64,
        ops: &OperatingAssumptions,
        growth: &GrowthAssumptions,
    ) -> Result<Self, CalcError> {
        let (rent_factor, prop_factor, cost_factor) = growth.factors(year_index);
        for (field, factor) in [
            ("rent_growth", rent_factor),
            ("appreciation", prop_factor),
            ("other_costs_growth", cost_factor),
        ] {
            if !factor.is_finite() {
                return Err(CalcError::invalid(
                    field,
                    format!("compounded growth is not finite in year {}", year_index),
                ));
            }
        }
        let property_value = loan.property_value * prop_factor;

        Ok(Self {
            year_index,
            property_value,
            annual_rent: 12.0 * base_rent * rent_factor,
            annual_tax: ops.annual_tax(property_value),
            annual_insurance: ops.annual_insurance * cost_factor,
            annual_hoa: ops.annual_hoa() * cost_factor,
        })
    }

    /// Vacancy and cap-ex reserve on this year's rent
    pub fn vacancy_capex(&self, vacancy_capex_rate: f64) -> f64 {
        vacancy_capex_rate * self.annual_rent
    }
}
