//! Debt Planner CLI
//!
//! Loads a snapshot from a JSON file, prints the DSR dashboard and
//! recommendations, and optionally writes amortization/payoff CSVs.

use anyhow::Context;
use clap::Parser;

use debt_planner::engine::{
    amortization_schedule, calculate_dsr, generate_recommendations, loan_installment,
    monthly_obligation,
};
use debt_planner::report::{write_amortization_file, write_payoff_csv};
use debt_planner::scenario::compare_strategies;
use debt_planner::snapshot::{DebtType, HistoricalSnapshot, JsonFileStore, SnapshotStore};

#[derive(Parser, Debug)]
#[command(name = "debt_planner", version, about = "Personal debt planning dashboard")]
struct Args {
    /// Snapshot JSON file
    #[arg(short, long, default_value = "snapshot.json")]
    snapshot: String,

    /// Extra monthly payment budget for the payoff comparison
    #[arg(short, long, default_value_t = 0.0)]
    extra: f64,

    /// Write the avalanche payoff timeline to this CSV file
    #[arg(long)]
    payoff_csv: Option<String>,

    /// Write the amortization schedule of the first home loan to this CSV file
    #[arg(long)]
    amortization_csv: Option<String>,

    /// Append a history record to this JSON file
    #[arg(long)]
    history: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = JsonFileStore::new(&args.snapshot);
    let snapshot = store
        .load()
        .with_context(|| format!("loading snapshot from {}", args.snapshot))?;

    println!("Debt Planner v0.1.0");
    println!("===================\n");

    let dsr = calculate_dsr(&snapshot);
    println!("Income:             {:>14.2}/mo", snapshot.gross_monthly_income);
    println!("Total debt:         {:>14.2}", dsr.total_debt);
    println!("Monthly obligation: {:>14.2}", dsr.total_monthly_obligation);
    println!("DSR:                {:>13.2}% [{:?}]", dsr.dsr_percent, dsr.status);

    if !snapshot.debts.is_empty() {
        println!("\nDebts:");
        println!("{:<20} {:>14} {:>14} {:>14}", "Lender", "Type", "Balance", "Obligation");
        println!("{}", "-".repeat(66));
        for debt in &snapshot.debts {
            println!(
                "{:<20} {:>14} {:>14.2} {:>14.2}",
                debt.lender_name,
                debt.debt_type.as_str(),
                debt.outstanding_balance,
                monthly_obligation(debt),
            );
        }
    }

    println!("\nRecommendations:");
    for rec in generate_recommendations(&snapshot) {
        println!("  [{:?}] {}", rec.priority, rec.title);
        println!("          {}", rec.description);
    }

    if snapshot.debts.len() > 1 || args.extra > 0.0 {
        let comparison = compare_strategies(&snapshot.debts, args.extra);
        println!("\nPayoff comparison (extra {:.0}/mo):", args.extra);
        println!(
            "  Snowball:  {:>4} months, {:>14.2} interest{}",
            comparison.snowball.total_months,
            comparison.snowball.total_interest,
            if comparison.snowball.converged { "" } else { " (did not converge)" },
        );
        println!(
            "  Avalanche: {:>4} months, {:>14.2} interest{}",
            comparison.avalanche.total_months,
            comparison.avalanche.total_interest,
            if comparison.avalanche.converged { "" } else { " (did not converge)" },
        );
        println!("  Avalanche saves: {:.2}", comparison.interest_savings);

        if let Some(path) = &args.payoff_csv {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating {path}"))?;
            write_payoff_csv(file, &comparison.avalanche)
                .with_context(|| format!("writing payoff timeline to {path}"))?;
            println!("\nAvalanche timeline written to: {path}");
        }
    }

    if let Some(path) = &args.amortization_csv {
        let terms = snapshot
            .debts
            .iter()
            .filter(|d| d.debt_type == DebtType::HomeLoan)
            .find_map(|d| d.amortization_terms());
        match terms {
            Some((balance, rate, years)) => {
                let schedule = amortization_schedule(balance, rate, years);
                write_amortization_file(path, &schedule)
                    .with_context(|| format!("writing amortization schedule to {path}"))?;
                println!(
                    "\nHome loan schedule written to: {path} ({} periods, installment {:.2})",
                    schedule.len(),
                    loan_installment(balance, rate, years),
                );
            }
            None => println!("\nNo home loan with a remaining term; amortization CSV skipped."),
        }
    }

    if let Some(path) = &args.history {
        let mut records: Vec<HistoricalSnapshot> = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)
                .with_context(|| format!("parsing history file {path}"))?,
            Err(_) => Vec::new(),
        };
        records.push(HistoricalSnapshot::capture(&snapshot));
        std::fs::write(path, serde_json::to_string_pretty(&records)?)
            .with_context(|| format!("writing history to {path}"))?;
        println!("History record appended to: {path}");
    }

    Ok(())
}
