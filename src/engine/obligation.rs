//! Effective monthly obligation for a single debt

use crate::assumptions::rates::{CREDIT_CARD_MIN_PAYMENT_RATE, PERSONAL_LOAN_MIN_PAYMENT_RATE};
use crate::snapshot::{Debt, DebtType};

/// Resolve the current monthly cash obligation of a debt
///
/// Installment loans (car, home, other) with a stored positive installment
/// are trusted: those come from contractual schedules. Revolving and
/// personal debts always recompute a minimum-payment heuristic from the
/// balance, because stored installments there are often stale estimates.
pub fn monthly_obligation(debt: &Debt) -> f64 {
    if let Some(installment) = debt.monthly_installment {
        if installment > 0.0 && debt.debt_type.is_installment_loan() {
            return installment;
        }
    }

    match debt.debt_type {
        DebtType::CreditCard => (debt.outstanding_balance * CREDIT_CARD_MIN_PAYMENT_RATE).ceil(),
        DebtType::PersonalLoan => (debt.outstanding_balance * PERSONAL_LOAN_MIN_PAYMENT_RATE).ceil(),
        _ => debt.monthly_installment.unwrap_or(0.0),
    }
}
