//! Thai personal income tax assumptions (2024 brackets)
//!
//! Used by the tax shield estimator. The bracket lookup returns a single
//! marginal rate; the estimator applies it to the whole deductible amount
//! as a preview figure, not a filing-grade computation.

/// Statutory cap on the home-loan interest deduction (THB per year)
pub const HOME_INTEREST_DEDUCTION_CAP: f64 = 100_000.0;

/// Rough standard deduction: 50% expense allowance capped at 100k plus the
/// 60k personal allowance
pub const ESTIMATED_STANDARD_DEDUCTION: f64 = 160_000.0;

/// Progressive bracket table: (net income floor, marginal rate)
///
/// A net income strictly above a floor is taxed at that bracket's rate.
const BRACKETS: [(f64, f64); 7] = [
    (5_000_000.0, 0.35),
    (2_000_000.0, 0.30),
    (1_000_000.0, 0.25),
    (750_000.0, 0.20),
    (500_000.0, 0.15),
    (300_000.0, 0.10),
    (150_000.0, 0.05),
];

/// Marginal tax rate for an estimated net taxable income
pub fn marginal_rate(net_income: f64) -> f64 {
    for &(floor, rate) in &BRACKETS {
        if net_income > floor {
            return rate;
        }
    }
    0.0
}
