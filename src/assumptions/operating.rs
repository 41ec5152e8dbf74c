//! Recurring operating costs of a rental

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, CalcError};

/// Annual and monthly carrying costs other than the mortgage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingAssumptions {
    /// Property tax as a fraction of property value per year
    pub tax_rate_pct: f64,

    /// Insurance premium per year
    pub annual_insurance: f64,

    /// HOA dues per month
    pub monthly_hoa: f64,

    /// Combined vacancy and cap-ex reserve as a fraction of gross rent.
    /// Must stay below 1 for break-even rent to exist.
    pub vacancy_capex_rate: f64,
}

impl OperatingAssumptions {
    pub fn new(tax_rate_pct: f64, annual_insurance: f64, monthly_hoa: f64, vacancy_capex_rate: f64) -> Self {
        Self {
            tax_rate_pct,
            annual_insurance,
            monthly_hoa,
            vacancy_capex_rate,
        }
    }

    /// Year-1 property tax for a given value
    pub fn annual_tax(&self, property_value: f64) -> f64 {
        self.tax_rate_pct * property_value
    }

    pub fn annual_hoa(&self) -> f64 {
        12.0 * self.monthly_hoa
    }

    /// Fails with `InvalidInput` naming the first non-finite field
    pub fn ensure_finite(&self) -> Result<(), CalcError> {
        ensure_finite("tax_rate_pct", self.tax_rate_pct)?;
        ensure_finite("annual_insurance", self.annual_insurance)?;
        ensure_finite("monthly_hoa", self.monthly_hoa)?;
        ensure_finite("vacancy_capex_rate", self.vacancy_capex_rate)?;
        Ok(())
    }
}

impl Default for OperatingAssumptions {
    fn default() -> Self {
        Self::new(0.015, 1_000.0, 0.0, 0.10)
    }
}
