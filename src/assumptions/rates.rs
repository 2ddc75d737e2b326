//! Rate assumptions for payoff simulation and minimum-payment heuristics
//!
//! The estimated annual rates are a type-keyed lookup used for payoff
//! ordering and interest accrual when a debt carries no contractual rate.
//! They are deliberately independent of any rate stored on the debt.

use crate::snapshot::DebtType;

/// Minimum monthly payment as a fraction of balance for revolving credit
pub const CREDIT_CARD_MIN_PAYMENT_RATE: f64 = 0.08;

/// Minimum monthly payment as a fraction of balance for personal loans
pub const PERSONAL_LOAN_MIN_PAYMENT_RATE: f64 = 0.05;

/// Fallback minimum payment fraction used by the payoff simulator when a
/// debt has no stored installment
pub const SIMULATION_MIN_PAYMENT_RATE: f64 = 0.03;

/// Estimated annual interest rates by debt category
///
/// Used by the payoff simulator for both avalanche ordering and monthly
/// interest accrual. Not a market rate model.
#[derive(Debug, Clone)]
pub struct EstimatedRateTable {
    pub credit_card: f64,
    pub personal_loan: f64,
    pub car_loan: f64,
    pub home_loan: f64,
    pub other: f64,
}

impl Default for EstimatedRateTable {
    fn default() -> Self {
        Self {
            credit_card: 0.24,
            personal_loan: 0.15,
            car_loan: 0.07,
            home_loan: 0.04,
            other: 0.18,
        }
    }
}

impl EstimatedRateTable {
    /// Annual rate for a debt category
    pub fn annual_rate(&self, debt_type: DebtType) -> f64 {
        match debt_type {
            DebtType::CreditCard => self.credit_card,
            DebtType::PersonalLoan => self.personal_loan,
            DebtType::CarLoan => self.car_loan,
            DebtType::HomeLoan => self.home_loan,
            DebtType::Other => self.other,
        }
    }

    /// Monthly rate for a debt category
    pub fn monthly_rate(&self, debt_type: DebtType) -> f64 {
        self.annual_rate(debt_type) / 12.0
    }
}
