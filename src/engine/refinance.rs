//! Refinance vs retention comparison for a home loan
//!
//! Compares three rate scenarios over the remaining term: keeping the
//! current rate, refinancing to a new lender (with one-time switching
//! costs), and a retention rate renegotiated with the current lender
//! (zero cost).

use serde::{Deserialize, Serialize};

use crate::assumptions::refinance::refinance_cost;

/// Sentinel for "never breaks even within the modeled horizon"
pub const BREAK_EVEN_NEVER: f64 = 999.0;

/// Projection horizon for total-saving comparison
const PROJECTION_MONTHS: f64 = 36.0;

/// Recommended course of action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefinanceAction {
    Refinance,
    Retention,
    Wait,
}

/// Full comparison output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceComparison {
    /// One-time switching cost for the refinance scenario
    pub refinance_cost: f64,
    pub monthly_saving_refi: f64,
    pub monthly_saving_retention: f64,
    /// Months for refinance savings to recover the switching cost,
    /// or BREAK_EVEN_NEVER when there is no monthly saving
    pub break_even_months: f64,
    /// 36-month saving net of switching cost
    pub total_saving_3_years_refi: f64,
    /// 36-month saving, no cost to subtract
    pub total_saving_3_years_retention: f64,
    pub recommendation: RefinanceAction,
}

/// Level monthly payment over a remaining term
fn level_payment(balance: f64, annual_rate_percent: f64, remaining_months: u32) -> f64 {
    let r = annual_rate_percent / 100.0 / 12.0;
    if r == 0.0 {
        return balance / remaining_months as f64;
    }
    balance * r / (1.0 - (1.0 + r).powi(-(remaining_months as i32)))
}

/// Compare current, refinance, and retention rates over the remaining term
///
/// Callers guard for meaningful input (positive balance, rates, term);
/// this function assumes it.
pub fn compare_refinance(
    outstanding_balance: f64,
    current_annual_rate: f64,
    refinance_annual_rate: f64,
    retention_annual_rate: f64,
    remaining_months: u32,
) -> RefinanceComparison {
    let cost = refinance_cost(outstanding_balance);

    let pmt_current = level_payment(outstanding_balance, current_annual_rate, remaining_months);
    let pmt_refi = level_payment(outstanding_balance, refinance_annual_rate, remaining_months);
    let pmt_retention = level_payment(outstanding_balance, retention_annual_rate, remaining_months);

    let monthly_saving_refi = pmt_current - pmt_refi;
    let monthly_saving_retention = pmt_current - pmt_retention;

    let break_even_months = if monthly_saving_refi > 0.0 {
        cost / monthly_saving_refi
    } else {
        BREAK_EVEN_NEVER
    };

    let total_saving_3_years_refi = monthly_saving_refi * PROJECTION_MONTHS - cost;
    let total_saving_3_years_retention = monthly_saving_retention * PROJECTION_MONTHS;

    // Equal 3-year savings favor retention: it is the zero-cost option, so
    // refinancing must be strictly better to be worth the switch
    let recommendation = if total_saving_3_years_refi > total_saving_3_years_retention
        && total_saving_3_years_refi > 0.0
    {
        RefinanceAction::Refinance
    } else if total_saving_3_years_retention > 0.0 {
        RefinanceAction::Retention
    } else {
        RefinanceAction::Wait
    };

    RefinanceComparison {
        refinance_cost: cost,
        monthly_saving_refi,
        monthly_saving_retention,
        break_even_months,
        total_saving_3_years_refi,
        total_saving_3_years_retention,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_no_saving_yields_sentinel() {
        // Refinance rate at or above the current rate can never break even
        let result = compare_refinance(2_000_000.0, 3.5, 3.5, 3.5, 240);
        assert_eq!(result.break_even_months, BREAK_EVEN_NEVER);
        assert_eq!(result.recommendation, RefinanceAction::Wait);

        let worse = compare_refinance(2_000_000.0, 3.5, 4.5, 3.5, 240);
        assert_eq!(worse.break_even_months, BREAK_EVEN_NEVER);
    }

    #[test]
    fn test_large_rate_cut_recommends_refinance() {
        // 2M balance, 6% -> 3% refi with retention only down to 5.5%
        let result = compare_refinance(2_000_000.0, 6.0, 3.0, 5.5, 240);

        assert!(result.monthly_saving_refi > result.monthly_saving_retention);
        assert!(result.total_saving_3_years_refi > 0.0);
        assert_eq!(result.recommendation, RefinanceAction::Refinance);
        assert!(result.break_even_months < BREAK_EVEN_NEVER);
        assert!(result.break_even_months > 0.0);
    }

    #[test]
    fn test_small_cut_recommends_retention() {
        // Refi saves slightly per month but the switching cost eats the
        // 3-year benefit; retention keeps a modest cost-free saving
        let result = compare_refinance(2_000_000.0, 4.0, 3.9, 3.8, 240);

        assert!(result.total_saving_3_years_retention > 0.0);
        assert!(result.total_saving_3_years_refi < result.total_saving_3_years_retention);
        assert_eq!(result.recommendation, RefinanceAction::Retention);
    }

    #[test]
    fn test_equal_savings_favor_retention() {
        // Identical refi and retention rates: the cost-free option wins the
        // strict-greater-than check
        let result = compare_refinance(2_000_000.0, 5.0, 4.0, 4.0, 240);
        assert!(result.total_saving_3_years_retention > result.total_saving_3_years_refi);
        assert_eq!(result.recommendation, RefinanceAction::Retention);
    }

    #[test]
    fn test_cost_model() {
        let result = compare_refinance(1_000_000.0, 5.0, 4.0, 4.5, 120);
        // 10,000 registration + 500 stamp + 3,000 valuation
        assert_abs_diff_eq!(result.refinance_cost, 13_500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_break_even_definition() {
        let result = compare_refinance(3_000_000.0, 5.5, 4.0, 5.0, 300);
        assert_abs_diff_eq!(
            result.break_even_months * result.monthly_saving_refi,
            result.refinance_cost,
            epsilon = 1e-6
        );
    }
}
