//! Annual growth rates for rent, value and costs

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, CalcError};

/// Independent annual growth rates applied from Year 2 onward
///
/// Defaults to zero growth, which reduces a projection to Year-1 economics
/// repeated every year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthAssumptions {
    /// Annual rent growth
    pub rent_growth: f64,

    /// Annual property appreciation (drives property tax)
    pub appreciation: f64,

    /// Annual growth of insurance and HOA
    pub other_costs_growth: f64,
}

impl GrowthAssumptions {
    pub fn new(rent_growth: f64, appreciation: f64, other_costs_growth: f64) -> Self {
        Self {
            rent_growth,
            appreciation,
            other_costs_growth,
        }
    }

    /// Same rate for every component
    pub fn uniform(rate: f64) -> Self {
        Self::new(rate, rate, rate)
    }

    /// Fails with `InvalidInput` naming the first non-finite rate
    pub fn ensure_finite(&self) -> Result<(), CalcError> {
        ensure_finite("rent_growth", self.rent_growth)?;
        ensure_finite("appreciation", self.appreciation)?;
        ensure_finite("other_costs_growth", self.other_costs_growth)?;
        Ok(())
    }

    /// Compounded factors for a 1-based year: (rent, property, costs)
    ///
    /// Year 1 has no growth applied, so all factors are 1.
    pub fn factors(&self, year_index: u32) -> (f64, f64, f64) {
        let exponent = year_index.saturating_sub(1);
        let compound = |rate: f64| match i32::try_from(exponent) {
            Ok(n) => (1.0 + rate).powi(n),
            Err(_) => (1.0 + rate).powf(f64::from(exponent)),
        };
        (
            compound(self.rent_growth),
            compound(self.appreciation),
            compound(self.other_costs_growth),
        )
    }
}
