//! Multi-year cash flow and ROI projection

mod state;
mod engine;
mod cashflows;

pub use state::YearState;
pub use engine::{project, ProjectionEngine, ProjectionConfig};
pub use cashflows::{YearlyResult, ProjectionResult, ProjectionSummary};
