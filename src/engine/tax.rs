//! Mortgage-interest tax shield estimate
//!
//! A preview figure: the deduction is priced at the single marginal rate of
//! the estimated net income, not integrated bracket by bracket. The
//! approximation is intentional and documented; do not replace it with an
//! exact computation.

use crate::assumptions::tax::{
    marginal_rate, ESTIMATED_STANDARD_DEDUCTION, HOME_INTEREST_DEDUCTION_CAP,
};

/// Estimated annual tax saving from deducting home-loan interest
///
/// Floored to a whole currency unit. Zero for non-positive interest or
/// income.
pub fn calculate_tax_saving(annual_home_loan_interest: f64, annual_gross_income: f64) -> f64 {
    if annual_home_loan_interest <= 0.0 || annual_gross_income <= 0.0 {
        return 0.0;
    }

    let deductible = annual_home_loan_interest.min(HOME_INTEREST_DEDUCTION_CAP);
    let estimated_net_income = (annual_gross_income - ESTIMATED_STANDARD_DEDUCTION).max(0.0);
    let rate = marginal_rate(estimated_net_income);

    (deductible * rate).floor()
}
