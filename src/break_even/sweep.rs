//! Break-even rent across a range of property values

use serde::{Deserialize, Serialize};

use super::solver::required_monthly_rent;
use crate::assumptions::{LoanTerms, OperatingAssumptions};
use crate::error::{ensure_finite, CalcError};

/// Linearly spaced property values, both ends included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepRange {
    pub min_value: f64,
    pub max_value: f64,
    pub points: u32,
}

impl SweepRange {
    pub fn new(min_value: f64, max_value: f64, points: u32) -> Self {
        Self {
            min_value,
            max_value,
            points,
        }
    }

    pub fn values(&self) -> Vec<f64> {
        linspace(self.min_value, self.max_value, self.points as usize)
    }
}

impl Default for SweepRange {
    fn default() -> Self {
        Self::new(400_000.0, 2_000_000.0, 50)
    }
}

/// One point on the break-even curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub property_value: f64,
    pub required_rent: f64,
}

/// `count` evenly spaced values from `start` to `end` inclusive
///
/// A count of 1 yields `[start]` and a count of 0 yields an empty vector.
/// The last value is exactly `end`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Required Year-1 rent at each property value in `range`
///
/// Down payment fraction, rate, term and operating costs are held fixed
/// while the property value varies.
pub fn rent_sweep(
    range: &SweepRange,
    loan: &LoanTerms,
    ops: &OperatingAssumptions,
) -> Result<Vec<SweepPoint>, CalcError> {
    ensure_finite("sweep.min_value", range.min_value)?;
    ensure_finite("sweep.max_value", range.max_value)?;

    range
        .values()
        .into_iter()
        .map(|property_value| {
            let required_rent = required_monthly_rent(&loan.with_property_value(property_value), ops)?;
            Ok(SweepPoint {
                property_value,
                required_rent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(0.0, 10.0, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);

        let values = linspace(400_000.0, 2_000_000.0, 50);
        assert_eq!(values.len(), 50);
        assert_eq!(values[0], 400_000.0);
        assert_eq!(values[49], 2_000_000.0);
    }

    #[test]
    fn test_sweep_matches_point_solver() {
        let loan = LoanTerms::default();
        let ops = OperatingAssumptions::default();
        let range = SweepRange::new(400_000.0, 800_000.0, 5);

        let points = rent_sweep(&range, &loan, &ops).unwrap();
        assert_eq!(points.len(), 5);

        let at_600k = required_monthly_rent(&loan.with_property_value(600_000.0), &ops).unwrap();
        assert_eq!(points[2].property_value, 600_000.0);
        assert!((points[2].required_rent - at_600k).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_is_increasing() {
        let points = rent_sweep(
            &SweepRange::default(),
            &LoanTerms::default(),
            &OperatingAssumptions::new(0.015, 1_000.0, 200.0, 0.10),
        )
        .unwrap();

        for pair in points.windows(2) {
            assert!(pair[1].required_rent > pair[0].required_rent);
        }
    }

    #[test]
    fn test_sweep_propagates_errors() {
        let ops = OperatingAssumptions {
            vacancy_capex_rate: 1.0,
            ..Default::default()
        };
        let err = rent_sweep(&SweepRange::default(), &LoanTerms::default(), &ops).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }
}
