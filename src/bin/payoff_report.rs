//! Batch extra-payment sweep report
//!
//! Runs both payoff methods across a range of extra monthly payments and
//! writes one CSV row per (method, extra) pair for charting.

use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use debt_planner::engine::PayoffMethod;
use debt_planner::scenario::{payment_grid, sweep_extra_payments};
use debt_planner::snapshot::{JsonFileStore, SnapshotStore};

#[derive(Parser, Debug)]
#[command(name = "payoff_report", about = "Sweep extra payments across payoff strategies")]
struct Args {
    /// Snapshot JSON file
    #[arg(short, long, default_value = "snapshot.json")]
    snapshot: String,

    /// Output CSV path
    #[arg(short, long, default_value = "payoff_report.csv")]
    output: String,

    /// Largest extra payment to sweep to
    #[arg(long, default_value_t = 20_000.0)]
    max_extra: f64,

    /// Sweep step size
    #[arg(long, default_value_t = 1_000.0)]
    step: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let snapshot = JsonFileStore::new(&args.snapshot)
        .load()
        .with_context(|| format!("loading snapshot from {}", args.snapshot))?;
    anyhow::ensure!(!snapshot.debts.is_empty(), "snapshot has no debts to simulate");
    anyhow::ensure!(args.step > 0.0, "step must be positive");

    let extras = payment_grid(args.max_extra, args.step);

    println!("Sweeping {} extra-payment levels over {} debts...", extras.len(), snapshot.debts.len());
    let start = Instant::now();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output))?;
    writer.write_record(["Method", "ExtraMonthly", "TotalMonths", "TotalInterest", "Converged"])?;

    for method in [PayoffMethod::Snowball, PayoffMethod::Avalanche] {
        for point in sweep_extra_payments(&snapshot.debts, &extras, method) {
            writer.write_record([
                format!("{method:?}"),
                format!("{:.2}", point.extra_monthly_payment),
                point.total_months.to_string(),
                format!("{:.2}", point.total_interest),
                point.converged.to_string(),
            ])?;
        }
    }
    writer.flush()?;

    println!("Report written to {} in {:?}", args.output, start.elapsed());
    Ok(())
}
