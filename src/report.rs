//! Text and CSV rendering of calculation results

use std::io::Write;

use crate::break_even::SweepPoint;
use crate::projection::ProjectionResult;

/// Format a dollar amount with thousands separators: `-$12,385.03`
///
/// Non-finite amounts are printed as-is (`NaN`, `inf`).
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Year-by-year table as text
pub fn projection_table(result: &ProjectionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>5} {:>18} {:>10}\n", "Year", "Net Annual CF", "ROI (%)"));
    out.push_str(&format!("{}\n", "-".repeat(35)));
    for row in &result.rows {
        out.push_str(&format!(
            "{:>5} {:>18} {:>9.2}%\n",
            row.year_index,
            format_currency(row.net_annual_cash_flow),
            row.roi_percent
        ));
    }
    out
}

/// Write projection rows as CSV with a header
pub fn write_projection_csv<W: Write>(writer: W, result: &ProjectionResult) -> csv::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in &result.rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write break-even sweep points as CSV with a header
pub fn write_sweep_csv<W: Write>(writer: W, points: &[SweepPoint]) -> csv::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for point in points {
        csv.serialize(point)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScenarioRunner;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(2598.7528), "$2,598.75");
        assert_eq!(format_currency(1_234_567.8), "$1,234,567.80");
        assert_eq!(format_currency(-12_385.0336), "-$12,385.03");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "NaN");
        assert_eq!(format_currency(f64::INFINITY), "inf");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_projection_csv() {
        let result = ScenarioRunner::new().project().unwrap();
        let mut buf = Vec::new();
        write_projection_csv(&mut buf, &result).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("year_index,net_annual_cash_flow,roi_percent"));
        assert_eq!(lines.count(), 10);
    }

    #[test]
    fn test_sweep_csv() {
        let points = [SweepPoint { property_value: 400_000.0, required_rent: 3_000.5 }];
        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, &points).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "property_value,required_rent\n400000.0,3000.5\n");
    }

    #[test]
    fn test_projection_table() {
        let result = ScenarioRunner::new().project().unwrap();
        let table = projection_table(&result);
        assert_eq!(table.lines().count(), 12);
        assert!(table.contains("-$12,385.03"));
    }
}
