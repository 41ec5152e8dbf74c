//! Fixed-rate loan terms

use serde::{Deserialize, Serialize};

use crate::amortization;
use crate::error::CalcError;

/// Terms of a fixed-rate purchase loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanTerms {
    /// Purchase price / Year-1 property value
    pub property_value: f64,

    /// Down payment as a fraction of property value (0.20 = 20%)
    pub down_payment_fraction: f64,

    /// Annual nominal interest rate (0.0717 = 7.17%)
    pub annual_interest_rate: f64,

    /// Loan term in years
    pub term_years: u32,
}

impl LoanTerms {
    pub fn new(
        property_value: f64,
        down_payment_fraction: f64,
        annual_interest_rate: f64,
        term_years: u32,
    ) -> Self {
        Self {
            property_value,
            down_payment_fraction,
            annual_interest_rate,
            term_years,
        }
    }

    /// Same terms on a different property value
    pub fn with_property_value(&self, property_value: f64) -> Self {
        Self {
            property_value,
            ..*self
        }
    }

    /// Amount financed
    pub fn loan_amount(&self) -> f64 {
        amortization::loan_amount(self.property_value, self.down_payment_fraction)
    }

    /// Cash paid up front, excluding closing costs
    pub fn down_payment(&self) -> f64 {
        self.down_payment_fraction * self.property_value
    }

    /// Cash invested up front: down payment plus closing costs
    pub fn initial_investment(&self, closing_costs: f64) -> f64 {
        self.down_payment() + closing_costs
    }

    /// Number of monthly payments over the term
    pub fn num_payments(&self) -> Result<i32, CalcError> {
        amortization::num_payments(self.term_years)
    }

    /// Fixed monthly payment for these terms
    pub fn monthly_payment(&self) -> Result<f64, CalcError> {
        amortization::monthly_payment(
            self.property_value,
            self.down_payment_fraction,
            self.annual_interest_rate,
            self.term_years,
        )
    }
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self::new(480_000.0, 0.20, 0.0717, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_amounts() {
        let loan = LoanTerms::default();
        assert!((loan.loan_amount() - 384_000.0).abs() < 1e-9);
        assert!((loan.down_payment() - 96_000.0).abs() < 1e-9);
        assert_eq!(loan.num_payments().unwrap(), 360);
        assert!((loan.initial_investment(14_400.0) - 110_400.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_cash_investment_is_price_plus_closing() {
        let loan = LoanTerms::new(300_000.0, 1.0, 0.05, 30);
        assert!((loan.initial_investment(5_000.0) - 305_000.0).abs() < 1e-9);
        assert!((loan.initial_investment(0.0) - 300_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlong_term_has_no_payment_count() {
        let loan = LoanTerms::new(480_000.0, 0.20, 0.0717, 400_000_000);
        assert!(matches!(loan.num_payments(), Err(CalcError::InvalidInput { field: "term_years", .. })));
    }

    #[test]
    fn test_with_property_value_keeps_terms() {
        let loan = LoanTerms::default().with_property_value(600_000.0);
        assert_eq!(loan.property_value, 600_000.0);
        assert_eq!(loan.down_payment_fraction, 0.20);
        assert_eq!(loan.term_years, 30);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let loan: LoanTerms = serde_json::from_str(r#"{"term_years": 15}"#).unwrap();
        assert_eq!(loan.term_years, 15);
        assert_eq!(loan.property_value, 480_000.0);
    }
}
