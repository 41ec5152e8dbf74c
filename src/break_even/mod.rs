//! Year-1 break-even rent and its sweep over property values

mod solver;
mod sweep;

pub use solver::{required_monthly_rent, annual_fixed_costs, BreakEvenReport};
pub use sweep::{rent_sweep, linspace, SweepPoint, SweepRange};
