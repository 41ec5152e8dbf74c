//! Projection output structures

use serde::{Deserialize, Serialize};

/// Cash flow and return for one projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyResult {
    /// Projection year (1-indexed)
    pub year_index: u32,

    /// Rent minus all expenses for the year
    pub net_annual_cash_flow: f64,

    /// Net cash flow over initial investment, in percent
    pub roi_percent: f64,

    // Breakdown
    pub property_value: f64,
    pub annual_rent: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub hoa: f64,
    pub mortgage: f64,
    pub vacancy_capex: f64,
    pub total_expenses: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Fixed monthly mortgage payment used for every year
    pub monthly_payment: f64,

    /// Down payment plus closing costs
    pub initial_investment: f64,

    /// One row per year, in year order
    pub rows: Vec<YearlyResult>,
}

impl ProjectionResult {
    pub fn new(monthly_payment: f64, initial_investment: f64) -> Self {
        Self {
            monthly_payment,
            initial_investment,
            rows: Vec::new(),
        }
    }

    /// Add a year row
    pub fn add_row(&mut self, row: YearlyResult) {
        self.rows.push(row);
    }

    /// Cumulative net cash flow at the end of each year
    pub fn cumulative_cash_flow(&self) -> Vec<f64> {
        self.rows
            .iter()
            .scan(0.0, |total, row| {
                *total += row.net_annual_cash_flow;
                Some(*total)
            })
            .collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_net_cash_flow: f64 = self.rows.iter().map(|r| r.net_annual_cash_flow).sum();
        let average_roi_percent = if self.rows.is_empty() {
            0.0
        } else {
            self.rows.iter().map(|r| r.roi_percent).sum::<f64>() / self.rows.len() as f64
        };

        ProjectionSummary {
            years: self.rows.len() as u32,
            total_net_cash_flow,
            average_roi_percent,
            final_roi_percent: self.rows.last().map(|r| r.roi_percent).unwrap_or(0.0),
            first_positive_year: self
                .rows
                .iter()
                .find(|r| r.net_annual_cash_flow >= 0.0)
                .map(|r| r.year_index),
            final_property_value: self.rows.last().map(|r| r.property_value).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub total_net_cash_flow: f64,
    pub average_roi_percent: f64,
    pub final_roi_percent: f64,
    /// First year whose net cash flow is non-negative
    pub first_positive_year: Option<u32>,
    pub final_property_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year_index: u32, net: f64, roi: f64) -> YearlyResult {
        YearlyResult {
            year_index,
            net_annual_cash_flow: net,
            roi_percent: roi,
            property_value: 100_000.0 * year_index as f64,
            annual_rent: 0.0,
            property_tax: 0.0,
            insurance: 0.0,
            hoa: 0.0,
            mortgage: 0.0,
            vacancy_capex: 0.0,
            total_expenses: 0.0,
        }
    }

    #[test]
    fn test_summary() {
        let mut result = ProjectionResult::new(1_000.0, 50_000.0);
        result.add_row(row(1, -1_000.0, -2.0));
        result.add_row(row(2, 500.0, 1.0));
        result.add_row(row(3, 2_000.0, 4.0));

        let summary = result.summary();
        assert_eq!(summary.years, 3);
        assert!((summary.total_net_cash_flow - 1_500.0).abs() < 1e-9);
        assert!((summary.average_roi_percent - 1.0).abs() < 1e-9);
        assert_eq!(summary.final_roi_percent, 4.0);
        assert_eq!(summary.first_positive_year, Some(2));
        assert_eq!(summary.final_property_value, 300_000.0);

        assert_eq!(result.cumulative_cash_flow(), vec![-1_000.0, -500.0, 1_500.0]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionResult::new(0.0, 0.0).summary();
        assert_eq!(summary.years, 0);
        assert_eq!(summary.average_roi_percent, 0.0);
        assert_eq!(summary.first_positive_year, None);
    }
}
