//! Debt Planner - calculation engine for personal debt planning
//!
//! This library provides:
//! - Debt service ratio (DSR) analysis with income-tiered thresholds
//! - Fixed-payment amortization schedules
//! - Snowball/avalanche payoff simulation with strategy comparison
//! - Refinance vs retention comparison for home loans
//! - Mortgage-interest tax shield estimates
//! - Rule-based recommendations

pub mod assumptions;
pub mod engine;
pub mod report;
pub mod scenario;
pub mod snapshot;

// Re-export commonly used types
pub use engine::{
    amortization_schedule, calculate_dsr, calculate_tax_saving, compare_refinance,
    monthly_obligation, simulate_payoff, DsrResult, DsrStatus, PayoffMethod, PayoffPlan,
    RefinanceComparison,
};
pub use scenario::{compare_strategies, StrategyComparison};
pub use snapshot::{Debt, DebtType, IncomeSource, UserSnapshot};
