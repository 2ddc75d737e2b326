//! CSV report writers for engine outputs

use std::io;
use std::path::Path;

use csv::Writer;

use crate::engine::amortization::AmortizationRow;
use crate::engine::payoff::PayoffPlan;

/// Write an amortization schedule as CSV
pub fn write_amortization_csv<W: io::Write>(
    writer: W,
    schedule: &[AmortizationRow],
) -> csv::Result<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(["Period", "Payment", "Principal", "Interest", "RemainingBalance"])?;
    for row in schedule {
        out.write_record([
            row.period.to_string(),
            format!("{:.2}", row.payment),
            format!("{:.2}", row.principal),
            format!("{:.2}", row.interest),
            format!("{:.2}", row.remaining_balance),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write an amortization schedule to a file
pub fn write_amortization_file<P: AsRef<Path>>(
    path: P,
    schedule: &[AmortizationRow],
) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_amortization_csv(file, schedule)
}

/// Write a payoff timeline as CSV, one row per debt per month
pub fn write_payoff_csv<W: io::Write>(writer: W, plan: &PayoffPlan) -> csv::Result<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(["Month", "Debt", "Payment", "Principal", "Interest", "Balance"])?;
    for event in &plan.timeline {
        out.write_record([
            event.month.to_string(),
            event.debt_name.clone(),
            format!("{:.2}", event.payment),
            format!("{:.2}", event.principal),
            format!("{:.2}", event.interest),
            format!("{:.2}", event.balance),
        ])?;
    }
    out.flush()?;
    Ok(())
}
