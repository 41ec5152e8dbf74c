//! Closed-form break-even rent for a single year
//!
//! Year-1 net cash flow is
//!
//! ```text
//! 12 * rent * (1 - vacancy_capex_rate) - fixed_costs
//! ```
//!
//! so the rent that makes it exactly zero is
//! `fixed_costs / (12 * (1 - vacancy_capex_rate))`. Growth plays no part.

use serde::{Deserialize, Serialize};

use crate::assumptions::{LoanTerms, OperatingAssumptions};
use crate::error::{ensure_finite, CalcError};

/// Year-1 figures shown side by side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenReport {
    pub monthly_mortgage_payment: f64,
    pub required_monthly_rent: f64,
}

impl BreakEvenReport {
    pub fn compute(loan: &LoanTerms, ops: &OperatingAssumptions) -> Result<Self, CalcError> {
        Ok(Self {
            monthly_mortgage_payment: loan.monthly_payment()?,
            required_monthly_rent: required_monthly_rent(loan, ops)?,
        })
    }
}

/// Year-1 costs that do not scale with rent: tax, insurance, mortgage and HOA
pub fn annual_fixed_costs(loan: &LoanTerms, ops: &OperatingAssumptions) -> Result<f64, CalcError> {
    ops.ensure_finite()?;

    let annual_mortgage = 12.0 * loan.monthly_payment()?;

    Ok(ops.annual_tax(loan.property_value) + ops.annual_insurance + annual_mortgage + ops.annual_hoa())
}

/// Monthly rent at which Year-1 net cash flow is zero
///
/// # Returns
/// * `Err(CalcError::DivisionByZero)` - `vacancy_capex_rate` is exactly 1
/// * `Err(CalcError::InvalidInput)` - `vacancy_capex_rate` outside [0, 1],
///   or invalid loan terms
pub fn required_monthly_rent(loan: &LoanTerms, ops: &OperatingAssumptions) -> Result<f64, CalcError> {
    let vacancy = ensure_finite("vacancy_capex_rate", ops.vacancy_capex_rate)?;
    if vacancy == 1.0 {
        return Err(CalcError::DivisionByZero {
            context: "vacancy_capex_rate = 1 leaves no collectible rent",
        });
    }
    if !(0.0..1.0).contains(&vacancy) {
        return Err(CalcError::invalid(
            "vacancy_capex_rate",
            format!("must be within [0, 1), got {}", vacancy),
        ));
    }

    let fixed = annual_fixed_costs(loan, ops)?;
    let rent = fixed / (12.0 * (1.0 - vacancy));

    log::debug!(
        "Break-even rent {:.2} for property value {:.2} (fixed costs {:.2})",
        rent,
        loan.property_value,
        fixed
    );

    Ok(rent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference() -> (LoanTerms, OperatingAssumptions) {
        (
            LoanTerms::new(480_000.0, 0.20, 0.0717, 30),
            OperatingAssumptions::new(0.015, 1_000.0, 0.0, 0.10),
        )
    }

    #[test]
    fn test_reference_rent() {
        let (loan, ops) = reference();
        let payment = loan.monthly_payment().unwrap();
        let expected = (480_000.0 * 0.015 + 1_000.0 + 12.0 * payment) / (12.0 * 0.90);

        let rent = required_monthly_rent(&loan, &ops).unwrap();
        assert_abs_diff_eq!(rent, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(rent, 3646.7624, epsilon = 1e-3);
    }

    #[test]
    fn test_hoa_adds_its_gross_up() {
        let (loan, ops) = reference();
        let base = required_monthly_rent(&loan, &ops).unwrap();
        let with_hoa = required_monthly_rent(&loan, &OperatingAssumptions { monthly_hoa: 250.0, ..ops }).unwrap();

        // $250/month of HOA needs 250 / 0.9 of extra rent
        assert_abs_diff_eq!(with_hoa - base, 250.0 / 0.9, epsilon = 1e-9);
    }

    #[test]
    fn test_full_vacancy_is_division_by_zero() {
        let (loan, ops) = reference();
        let err = required_monthly_rent(&loan, &OperatingAssumptions { vacancy_capex_rate: 1.0, ..ops }).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_vacancy_above_one_rejected() {
        let (loan, ops) = reference();
        let err = required_monthly_rent(&loan, &OperatingAssumptions { vacancy_capex_rate: 1.2, ..ops }).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "vacancy_capex_rate", .. }));
    }

    #[test]
    fn test_vacancy_below_zero_rejected() {
        let (loan, ops) = reference();
        let err = required_monthly_rent(&loan, &OperatingAssumptions { vacancy_capex_rate: -0.05, ..ops }).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "vacancy_capex_rate", .. }));
    }

    #[test]
    fn test_invalid_loan_propagates() {
        let (loan, ops) = reference();
        let loan = LoanTerms { term_years: 0, ..loan };
        assert!(matches!(
            required_monthly_rent(&loan, &ops),
            Err(CalcError::InvalidInput { field: "term_years", .. })
        ));
    }

    #[test]
    fn test_monotonic_in_cost_inputs() {
        let (loan, ops) = reference();
        let base = required_monthly_rent(&loan, &ops).unwrap();

        let bumped = [
            required_monthly_rent(&loan.with_property_value(520_000.0), &ops),
            required_monthly_rent(&loan, &OperatingAssumptions { tax_rate_pct: 0.02, ..ops }),
            required_monthly_rent(&loan, &OperatingAssumptions { annual_insurance: 1_500.0, ..ops }),
            required_monthly_rent(&loan, &OperatingAssumptions { monthly_hoa: 100.0, ..ops }),
            required_monthly_rent(&LoanTerms { annual_interest_rate: 0.08, ..loan }, &ops),
        ];
        for rent in bumped {
            assert!(rent.unwrap() >= base);
        }
    }

    #[test]
    fn test_monotonic_in_interest_rate_from_zero() {
        let (loan, ops) = reference();
        let mut prev = 0.0;
        for i in 0..=20 {
            let rate = i as f64 * 0.01;
            let rent = required_monthly_rent(&LoanTerms { annual_interest_rate: rate, ..loan }, &ops).unwrap();
            assert!(rent >= prev, "rate {} gave {} < {}", rate, rent, prev);
            prev = rent;
        }
    }

    #[test]
    fn test_report() {
        let (loan, ops) = reference();
        let report = BreakEvenReport::compute(&loan, &ops).unwrap();
        assert_abs_diff_eq!(report.monthly_mortgage_payment, 2598.7528, epsilon = 1e-3);
        assert_abs_diff_eq!(report.required_monthly_rent, 3646.7624, epsilon = 1e-3);
    }
}
