//! Planning assumptions: rate estimates, DSR thresholds, tax brackets,
//! and refinance cost constants
//!
//! Each consuming component owns its table; the estimated-rate table used
//! for payoff simulation is not a shared "true" rate model.

pub mod rates;
pub mod refinance;
pub mod tax;
pub mod thresholds;

pub use rates::EstimatedRateTable;
pub use thresholds::{thresholds_for_income, DsrThresholds};
