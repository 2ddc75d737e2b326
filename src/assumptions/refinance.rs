//! One-time switching cost model for mortgage refinancing (Thai convention)

/// Mortgage registration fee as a fraction of the outstanding balance
pub const MORTGAGE_REGISTRATION_FEE_RATE: f64 = 0.01;

/// Stamp duty as a fraction of the outstanding balance
pub const STAMP_DUTY_RATE: f64 = 0.0005;

/// Cap on the stamp duty (THB)
pub const STAMP_DUTY_CAP: f64 = 10_000.0;

/// Flat property valuation fee (THB, estimate)
pub const VALUATION_FEE: f64 = 3_000.0;

/// Total one-time cost of refinancing a balance to a new lender
///
/// Retention (renegotiating with the current lender) costs nothing.
pub fn refinance_cost(outstanding_balance: f64) -> f64 {
    let registration = outstanding_balance * MORTGAGE_REGISTRATION_FEE_RATE;
    let stamp_duty = (outstanding_balance * STAMP_DUTY_RATE).min(STAMP_DUTY_CAP);
    registration + stamp_duty + VALUATION_FEE
}
