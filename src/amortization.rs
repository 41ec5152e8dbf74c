//! Fixed-payment loan amortization
//!
//! Standard annuity formula for a fully amortizing fixed-rate loan with
//! monthly payments:
//!
//! ```text
//! P = L * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `L` is the loan amount, `r` the monthly rate and `n` the number of
//! monthly payments. A zero rate degenerates to `L / n`.

use crate::error::{ensure_finite, CalcError};

/// Amount financed after the down payment
pub fn loan_amount(property_value: f64, down_payment_fraction: f64) -> f64 {
    property_value * (1.0 - down_payment_fraction)
}

/// Number of monthly payments over `term_years`
///
/// Fails with `InvalidInput` for a zero term, or one whose payment count
/// does not fit the exponent of `powi`.
pub fn num_payments(term_years: u32) -> Result<i32, CalcError> {
    if term_years == 0 {
        return Err(CalcError::invalid("term_years", "must be greater than zero"));
    }
    term_years
        .checked_mul(12)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| CalcError::invalid("term_years", format!("{} years is too many monthly payments", term_years)))
}

/// Monthly payment for a fixed-rate loan
///
/// # Arguments
/// * `property_value` - Purchase price
/// * `down_payment_fraction` - Down payment as a fraction (0.20 for 20%)
/// * `annual_interest_rate` - Annual nominal rate as a decimal (0.0717 for 7.17%)
/// * `term_years` - Loan term in years
///
/// # Returns
/// * `Ok(payment)` - A down payment of 100% gives a loan of zero and a payment of zero
/// * `Err(CalcError::InvalidInput)` - Zero or overlong term, down payment
///   outside [0, 1], negative rate, or non-finite input
pub fn monthly_payment(
    property_value: f64,
    down_payment_fraction: f64,
    annual_interest_rate: f64,
    term_years: u32,
) -> Result<f64, CalcError> {
    ensure_finite("property_value", property_value)?;
    ensure_finite("down_payment_fraction", down_payment_fraction)?;
    ensure_finite("annual_interest_rate", annual_interest_rate)?;

    let n = num_payments(term_years)?;
    if !(0.0..=1.0).contains(&down_payment_fraction) {
        return Err(CalcError::invalid(
            "down_payment_fraction",
            format!("must be within [0, 1], got {}", down_payment_fraction),
        ));
    }
    if annual_interest_rate < 0.0 {
        return Err(CalcError::invalid(
            "annual_interest_rate",
            format!("must not be negative, got {}", annual_interest_rate),
        ));
    }

    let loan = loan_amount(property_value, down_payment_fraction);
    if loan == 0.0 {
        log::debug!("Loan amount is zero, monthly payment is zero");
        return Ok(0.0);
    }

    let monthly_rate = annual_interest_rate / 12.0;
    let growth = (1.0 + monthly_rate).powi(n);

    // A rate small enough to vanish in (1 + r)^n takes the zero-rate branch too.
    // Once (1 + r)^n overflows the payment has reached its limit of L * r.
    let payment = if monthly_rate == 0.0 || growth - 1.0 == 0.0 {
        loan / n as f64
    } else if growth.is_infinite() {
        loan * monthly_rate
    } else {
        loan * monthly_rate * growth / (growth - 1.0)
    };

    Ok(payment)
}

/// Sum of all payments over the life of the loan
pub fn total_of_payments(
    property_value: f64,
    down_payment_fraction: f64,
    annual_interest_rate: f64,
    term_years: u32,
) -> Result<f64, CalcError> {
    let payment = monthly_payment(property_value, down_payment_fraction, annual_interest_rate, term_years)?;
    Ok(payment * num_payments(term_years)? as f64)
}
