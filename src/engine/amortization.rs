//! Fixed-payment (annuity) amortization schedules

use serde::{Deserialize, Serialize};

/// One period of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based period number
    pub period: u32,
    /// Total payment for the period
    pub payment: f64,
    /// Principal portion of the payment
    pub principal: f64,
    /// Interest portion of the payment
    pub interest: f64,
    /// Balance remaining after the payment, floored at zero
    pub remaining_balance: f64,
}

/// Build the full monthly schedule for a fixed-rate, fixed-term loan
///
/// Returns `term_years * 12` rows. A zero rate degenerates to straight-line
/// principal with zero interest per row. Invalid input (non-positive
/// principal or term) returns an empty schedule; the whole engine uses this
/// permissive total-function contract rather than error returns.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Vec<AmortizationRow> {
    if principal <= 0.0 || term_years == 0 {
        return Vec::new();
    }

    let total_months = term_years * 12;
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;

    let payment = if annual_rate_percent == 0.0 {
        principal / total_months as f64
    } else {
        let factor = (1.0 + monthly_rate).powi(total_months as i32);
        principal * monthly_rate * factor / (factor - 1.0)
    };

    let mut schedule = Vec::with_capacity(total_months as usize);
    let mut balance = principal;

    for period in 1..=total_months {
        let interest = balance * monthly_rate;
        let principal_portion = payment - interest;
        balance -= principal_portion;

        // Absorb floating-point drift on the final payment
        if period == total_months && balance.abs() < 1.0 {
            balance = 0.0;
        }

        schedule.push(AmortizationRow {
            period,
            payment,
            principal: principal_portion,
            interest,
            remaining_balance: balance.max(0.0),
        });
    }

    schedule
}

/// Fixed monthly installment for a loan, rounded up to the next currency unit
///
/// Input-time helper for deriving a stored installment from a term entered
/// on a debt form. Returns 0 for non-positive principal or term.
pub fn loan_installment(principal: f64, annual_rate_percent: f64, years: u32) -> f64 {
    if principal <= 0.0 || years == 0 {
        return 0.0;
    }
    let total_months = (years * 12) as f64;
    if annual_rate_percent <= 0.0 {
        return (principal / total_months).ceil();
    }

    let r = annual_rate_percent / 100.0 / 12.0;
    let factor = (1.0 + r).powi((years * 12) as i32);
    (principal * r * factor / (factor - 1.0)).ceil()
}
