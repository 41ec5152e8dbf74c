//! Rental Economics - Calculation engine for buy-to-let property investments
//!
//! This library provides:
//! - Fixed-rate mortgage payments
//! - Year-1 break-even rent, for one property value or across a range
//! - Year-by-year cash flow and ROI projections with independent growth rates
//! - JSON scenario loading and parallel batch runs

pub mod error;
pub mod assumptions;
pub mod amortization;
pub mod break_even;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::CalcError;
pub use assumptions::{Assumptions, LoanTerms, OperatingAssumptions, GrowthAssumptions};
pub use amortization::monthly_payment;
pub use break_even::{required_monthly_rent, rent_sweep, BreakEvenReport, SweepPoint, SweepRange};
pub use projection::{project, ProjectionEngine, ProjectionResult, YearlyResult};
pub use scenario::ScenarioRunner;
