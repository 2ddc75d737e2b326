//! Strategy comparison and extra-payment sweeps
//!
//! Thin batch layer over the payoff simulator: run both targeting methods
//! side by side, or sweep a range of extra payments in parallel to show
//! how budget changes move the payoff date.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::payoff::{simulate_payoff, PayoffMethod, PayoffPlan};
use crate::snapshot::Debt;

/// Snowball and avalanche plans for the same debts and budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub snowball: PayoffPlan,
    pub avalanche: PayoffPlan,
    /// Interest saved by avalanche relative to snowball (negative when
    /// snowball happens to be cheaper, e.g. single-debt cases)
    pub interest_savings: f64,
}

/// Run both payoff methods on the same inputs
pub fn compare_strategies(debts: &[Debt], extra_monthly_payment: f64) -> StrategyComparison {
    let snowball = simulate_payoff(debts, extra_monthly_payment, PayoffMethod::Snowball);
    let avalanche = simulate_payoff(debts, extra_monthly_payment, PayoffMethod::Avalanche);
    let interest_savings = snowball.total_interest - avalanche.total_interest;

    StrategyComparison {
        snowball,
        avalanche,
        interest_savings,
    }
}

/// One point of an extra-payment sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPoint {
    pub extra_monthly_payment: f64,
    pub total_months: u32,
    pub total_interest: f64,
    pub converged: bool,
}

/// Evenly spaced extra-payment levels from 0 to `max_extra` inclusive
///
/// Each level is computed as `i * step` from an integer counter, so a
/// step like 0.1 cannot accumulate error and drop the final level the
/// way a running float sum would.
pub fn payment_grid(max_extra: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max_extra < 0.0 {
        return vec![0.0];
    }
    let mut count = (max_extra / step).floor();
    // Admit the top level when i * step lands on max_extra up to rounding
    if (count + 1.0) * step <= max_extra + step * 1e-9 {
        count += 1.0;
    }
    (0..=count as u32).map(|i| f64::from(i) * step).collect()
}

/// Simulate a payoff method across a range of extra payments in parallel
pub fn sweep_extra_payments(
    debts: &[Debt],
    extra_payments: &[f64],
    method: PayoffMethod,
) -> Vec<SweepPoint> {
    info!(
        "sweeping {} extra-payment levels across {} debts",
        extra_payments.len(),
        debts.len()
    );

    extra_payments
        .par_iter()
        .map(|&extra| {
            let plan = simulate_payoff(debts, extra, method);
            SweepPoint {
                extra_monthly_payment: extra,
                total_months: plan.total_months,
                total_interest: plan.total_interest,
                converged: plan.converged,
            }
        })
        .collect()
}
