//! Rental Economics CLI
//!
//! Command-line front end: collects inputs, validates them against the
//! calculator's input bounds and prints or exports the results.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rental_economics::assumptions::loader::DEFAULT_SCENARIO_PATH;
use rental_economics::report::{format_currency, projection_table, write_projection_csv, write_sweep_csv};
use rental_economics::{Assumptions, ScenarioRunner};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "rental_economics")]
#[command(about = "Mortgage, break-even rent and cash flow projections for a rental property")]
struct Cli {
    /// Scenario JSON file (default: ./scenario.json if present, else built-in defaults)
    #[arg(short, long, global = true)]
    scenario: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Command,
}

/// Per-run overrides applied on top of the scenario
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Purchase price ($)
    #[arg(long, global = true)]
    price: Option<f64>,

    /// Down payment as a fraction (0.20 = 20%)
    #[arg(long, global = true)]
    down_payment: Option<f64>,

    /// Annual interest rate as a fraction (0.0717 = 7.17%)
    #[arg(long, global = true)]
    rate: Option<f64>,

    /// Loan term in years
    #[arg(long, global = true)]
    term: Option<u32>,

    /// Property tax as a fraction of value
    #[arg(long, global = true)]
    tax: Option<f64>,

    /// Annual insurance ($)
    #[arg(long, global = true)]
    insurance: Option<f64>,

    /// Monthly HOA ($)
    #[arg(long, global = true)]
    hoa: Option<f64>,

    /// Vacancy + cap-ex as a fraction of rent
    #[arg(long, global = true)]
    vacancy: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fixed monthly mortgage payment
    Payment,

    /// Year-1 mortgage payment and break-even rent
    BreakEven,

    /// Break-even rent across a range of property values
    Sweep {
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
        #[arg(long)]
        points: Option<u32>,
        /// Write the curve to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Year-by-year cash flow and ROI
    Project {
        /// Actual monthly rent in Year 1 ($)
        #[arg(long)]
        rent: Option<f64>,
        /// Number of years to project
        #[arg(long)]
        years: Option<u32>,
        /// Closing costs ($)
        #[arg(long)]
        closing_costs: Option<f64>,
        /// Write the rows to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn load_assumptions(path: Option<&Path>) -> Result<Assumptions> {
    match path {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("Unable to load scenario {}", path.display())),
        None if Path::new(DEFAULT_SCENARIO_PATH).exists() => {
            Assumptions::from_json_path(Path::new(DEFAULT_SCENARIO_PATH)).context("Unable to load default scenario")
        }
        None => Ok(Assumptions::default_inputs()),
    }
}

fn apply_overrides(a: &mut Assumptions, o: &Overrides) {
    if let Some(v) = o.price {
        a.loan.property_value = v;
    }
    if let Some(v) = o.down_payment {
        a.loan.down_payment_fraction = v;
    }
    if let Some(v) = o.rate {
        a.loan.annual_interest_rate = v;
    }
    if let Some(v) = o.term {
        a.loan.term_years = v;
    }
    if let Some(v) = o.tax {
        a.operating.tax_rate_pct = v;
    }
    if let Some(v) = o.insurance {
        a.operating.annual_insurance = v;
    }
    if let Some(v) = o.hoa {
        a.operating.monthly_hoa = v;
    }
    if let Some(v) = o.vacancy {
        a.operating.vacancy_capex_rate = v;
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut assumptions = load_assumptions(cli.scenario.as_deref())?;
    apply_overrides(&mut assumptions, &cli.overrides);

    match &cli.command {
        Command::Sweep { min, max, points, .. } => {
            if let Some(v) = min {
                assumptions.sweep.min_value = *v;
            }
            if let Some(v) = max {
                assumptions.sweep.max_value = *v;
            }
            if let Some(v) = points {
                assumptions.sweep.points = *v;
            }
        }
        Command::Project { rent, years, closing_costs, .. } => {
            if let Some(v) = rent {
                assumptions.base_rent = *v;
            }
            if let Some(v) = years {
                assumptions.projection_years = *v;
            }
            if let Some(v) = closing_costs {
                assumptions.closing_costs = *v;
            }
        }
        _ => {}
    }

    assumptions.validate().context("Invalid input")?;
    if matches!(cli.command, Command::Sweep { .. }) {
        assumptions.validate_sweep().context("Invalid sweep range")?;
    }
    log::debug!("Running with {:?}", assumptions);

    let runner = ScenarioRunner::with_assumptions(assumptions);

    match cli.command {
        Command::Payment => {
            let payment = runner.monthly_payment()?;
            if cli.json {
                println!("{}", serde_json::json!({ "monthly_mortgage_payment": payment }));
            } else {
                println!("Monthly Mortgage Payment (Fixed): {}", format_currency(payment));
            }
        }
        Command::BreakEven => {
            let report = runner.break_even()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Monthly Mortgage Payment (Fixed): {}", format_currency(report.monthly_mortgage_payment));
                println!(
                    "Required Monthly Rent (Year 1 Break Even): {}",
                    format_currency(report.required_monthly_rent)
                );
            }
        }
        Command::Sweep { csv, .. } => {
            let points = runner.sweep()?;
            if let Some(path) = csv {
                let file = File::create(&path).with_context(|| format!("Unable to create {}", path.display()))?;
                write_sweep_csv(file, &points)?;
                log::info!("Sweep written to {}", path.display());
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                println!("{:>16} {:>16}", "Property Value", "Required Rent");
                for p in &points {
                    println!("{:>16} {:>16}", format_currency(p.property_value), format_currency(p.required_rent));
                }
            }
        }
        Command::Project { csv, .. } => {
            let result = runner.project()?;
            if let Some(path) = csv {
                let file = File::create(&path).with_context(|| format!("Unable to create {}", path.display()))?;
                write_projection_csv(file, &result)?;
                log::info!("Projection written to {}", path.display());
            }
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "result": &result,
                        "summary": result.summary(),
                    }))?
                );
            } else {
                let summary = result.summary();
                println!("Year-by-Year Cash Flow & ROI");
                println!("  Monthly payment:    {}", format_currency(result.monthly_payment));
                println!("  Initial investment: {}\n", format_currency(result.initial_investment));
                print!("{}", projection_table(&result));
                println!("\nSummary:");
                println!("  Total net cash flow: {}", format_currency(summary.total_net_cash_flow));
                println!("  Average ROI:         {:.2}%", summary.average_roi_percent);
                match summary.first_positive_year {
                    Some(year) => println!("  Cash flow positive from year {}", year),
                    None => println!("  Cash flow negative in every projected year"),
                }
            }
        }
    }

    Ok(())
}
