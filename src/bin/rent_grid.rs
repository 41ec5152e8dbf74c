//! Project a grid of Year-1 rents for one scenario
//!
//! Runs every rent in parallel and writes one CSV row per (rent, year) for
//! comparing how quickly each rent level reaches positive cash flow.

use anyhow::{Context, Result};
use clap::Parser;
use rental_economics::break_even::linspace;
use rental_economics::{Assumptions, ScenarioRunner};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rent_grid")]
#[command(about = "Project cash flow for a range of Year-1 rents")]
struct Args {
    /// Scenario JSON file (default: built-in inputs)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Lowest monthly rent ($)
    #[arg(long, default_value_t = 2_000.0)]
    min_rent: f64,

    /// Highest monthly rent ($)
    #[arg(long, default_value_t = 5_000.0)]
    max_rent: f64,

    /// Number of rent levels
    #[arg(long, default_value_t = 31)]
    levels: usize,

    /// Output CSV path
    #[arg(short, long, default_value = "rent_grid_output.csv")]
    output: PathBuf,
}

#[derive(Serialize)]
struct GridRow {
    base_rent: f64,
    year: u32,
    net_annual_cash_flow: f64,
    roi_percent: f64,
    cumulative_cash_flow: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let assumptions = match &args.scenario {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("Unable to load scenario {}", path.display()))?,
        None => Assumptions::default_inputs(),
    };
    assumptions.validate().context("Invalid input")?;

    let runner = ScenarioRunner::with_assumptions(assumptions);
    let rents = linspace(args.min_rent, args.max_rent, args.levels);

    println!("Running {} projections...", rents.len());
    let results = runner.run_rent_grid(&rents);
    println!("Projections complete in {:?}", start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;

    for (rent, result) in rents.iter().zip(results) {
        let result = result.with_context(|| format!("Projection failed at rent {:.2}", rent))?;
        let cumulative = result.cumulative_cash_flow();

        for (row, cumulative_cash_flow) in result.rows.iter().zip(cumulative) {
            writer.serialize(GridRow {
                base_rent: *rent,
                year: row.year_index,
                net_annual_cash_flow: row.net_annual_cash_flow,
                roi_percent: row.roi_percent,
                cumulative_cash_flow,
            })?;
        }

        let summary = result.summary();
        log::info!(
            "Rent {:.2}: year-1 ROI {:.2}%, first positive year {:?}",
            rent,
            result.rows.first().map(|r| r.roi_percent).unwrap_or(0.0),
            summary.first_positive_year
        );
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
