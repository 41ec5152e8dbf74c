//! JSON scenario loader and input range checks
//!
//! The calculation engine only guards against mathematically undefined
//! inputs. Range checks on raw user input belong to the front end and live
//! here so every binary applies the same limits.

use super::Assumptions;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// Default scenario file looked up by the binaries
pub const DEFAULT_SCENARIO_PATH: &str = "scenario.json";

#[derive(Error, Debug)]
pub enum ScenarioLoadError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} = {value} is outside the allowed range {min}..={max}")]
    Invalid {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Load a scenario from a JSON file
pub fn load_scenario(path: &Path) -> Result<Assumptions, ScenarioLoadError> {
    let text = fs::read_to_string(path)?;
    let assumptions = parse_scenario(&text)?;
    log::info!("Loaded scenario from {}", path.display());
    Ok(assumptions)
}

/// Parse a scenario from JSON text
pub fn parse_scenario(text: &str) -> Result<Assumptions, ScenarioLoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Allowed range for each user-facing input
#[derive(Debug, Clone)]
pub struct InputBounds {
    pub property_value: RangeInclusive<f64>,
    pub down_payment_fraction: RangeInclusive<f64>,
    pub closing_costs: RangeInclusive<f64>,
    pub annual_interest_rate: RangeInclusive<f64>,
    pub term_years: RangeInclusive<u32>,
    pub tax_rate_pct: RangeInclusive<f64>,
    pub annual_insurance: RangeInclusive<f64>,
    pub vacancy_capex_rate: RangeInclusive<f64>,
    pub monthly_hoa: RangeInclusive<f64>,
    pub growth_rate: RangeInclusive<f64>,
    pub base_rent: RangeInclusive<f64>,
    pub projection_years: RangeInclusive<u32>,
    pub sweep_points: RangeInclusive<u32>,
    /// Sweep endpoints only need to be finite
    pub sweep_value: RangeInclusive<f64>,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            property_value: 50_000.0..=5_000_000.0,
            down_payment_fraction: 0.0..=1.0,
            closing_costs: 0.0..=50_000.0,
            annual_interest_rate: 0.0..=0.20,
            term_years: 1..=40,
            tax_rate_pct: 0.0..=0.05,
            annual_insurance: 0.0..=10_000.0,
            vacancy_capex_rate: 0.0..=0.30,
            monthly_hoa: 0.0..=2_000.0,
            growth_rate: 0.0..=0.10,
            base_rent: 0.0..=10_000.0,
            projection_years: 1..=30,
            sweep_points: 10..=200,
            sweep_value: f64::MIN..=f64::MAX,
        }
    }
}

impl InputBounds {
    /// Check the inputs every command uses, reporting the first field out of range
    pub fn check(&self, a: &Assumptions) -> Result<(), ScenarioLoadError> {
        in_range("property_value", a.loan.property_value, &self.property_value)?;
        in_range("down_payment_fraction", a.loan.down_payment_fraction, &self.down_payment_fraction)?;
        in_range("closing_costs", a.closing_costs, &self.closing_costs)?;
        in_range("annual_interest_rate", a.loan.annual_interest_rate, &self.annual_interest_rate)?;
        in_range("term_years", a.loan.term_years, &self.term_years)?;
        in_range("tax_rate_pct", a.operating.tax_rate_pct, &self.tax_rate_pct)?;
        in_range("annual_insurance", a.operating.annual_insurance, &self.annual_insurance)?;
        in_range("vacancy_capex_rate", a.operating.vacancy_capex_rate, &self.vacancy_capex_rate)?;
        in_range("monthly_hoa", a.operating.monthly_hoa, &self.monthly_hoa)?;
        in_range("rent_growth", a.growth.rent_growth, &self.growth_rate)?;
        in_range("appreciation", a.growth.appreciation, &self.growth_rate)?;
        in_range("other_costs_growth", a.growth.other_costs_growth, &self.growth_rate)?;
        in_range("base_rent", a.base_rent, &self.base_rent)?;
        in_range("projection_years", a.projection_years, &self.projection_years)?;
        Ok(())
    }

    /// Check the break-even sweep range
    pub fn check_sweep(&self, a: &Assumptions) -> Result<(), ScenarioLoadError> {
        in_range("sweep.points", a.sweep.points, &self.sweep_points)?;
        in_range("sweep.min_value", a.sweep.min_value, &self.sweep_value)?;
        in_range("sweep.max_value", a.sweep.max_value, &self.sweep_value)?;
        Ok(())
    }
}

fn in_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), ScenarioLoadError>
where
    T: PartialOrd + Copy + Into<f64>,
{
    // NaN fails `contains`
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ScenarioLoadError::Invalid {
            field,
            value: value.into(),
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        })
    }
}
