//! Multi-debt payoff simulation (snowball / avalanche)
//!
//! Simulates month-by-month repayment across all debts: minimum payments
//! on every open debt, then the full extra payment as principal against the
//! current target. Interest accrues at the estimated annual rate for the
//! debt's category, not any rate stored on the debt.

use serde::{Deserialize, Serialize};

use crate::assumptions::rates::SIMULATION_MIN_PAYMENT_RATE;
use crate::assumptions::EstimatedRateTable;
use crate::snapshot::Debt;

/// Extra-payment targeting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoffMethod {
    /// Smallest outstanding balance first
    Snowball,
    /// Highest estimated interest rate first
    Avalanche,
}

/// One debt's payment in one simulated month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEvent {
    /// 1-based simulation month
    pub month: u32,
    pub debt_id: String,
    pub debt_name: String,
    /// Total paid this month (interest + principal, including extra)
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Balance remaining after the payment, floored at zero
    pub balance: f64,
}

/// Full simulation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub method: PayoffMethod,
    pub timeline: Vec<PaymentEvent>,
    /// Sum of every interest component applied during the simulation
    pub total_interest: f64,
    /// Number of simulated months executed
    pub total_months: u32,
    /// Original balances plus total interest, computed independently of
    /// the timeline
    pub total_paid: f64,
    /// False when the safety cap was hit with balance still outstanding
    pub converged: bool,
}

/// Safety cap on simulated months (50 years)
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// Working state for one debt during simulation
struct ActiveDebt {
    id: String,
    name: String,
    balance: f64,
    /// Fixed minimum payment, resolved once at simulation start
    minimum_payment: f64,
    monthly_rate: f64,
}

/// Run a payoff simulation with the given targeting method
pub fn simulate_payoff(debts: &[Debt], extra_monthly_payment: f64, method: PayoffMethod) -> PayoffPlan {
    let rates = EstimatedRateTable::default();

    // Sort once up front; paid-off debts are skipped each month, so the
    // waterfall advances to the next target without re-sorting. Ties keep
    // the original order (stable sort).
    let mut ordered: Vec<&Debt> = debts.iter().collect();
    match method {
        PayoffMethod::Snowball => {
            ordered.sort_by(|a, b| {
                a.outstanding_balance
                    .partial_cmp(&b.outstanding_balance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        PayoffMethod::Avalanche => {
            ordered.sort_by(|a, b| {
                rates
                    .annual_rate(b.debt_type)
                    .partial_cmp(&rates.annual_rate(a.debt_type))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }

    let mut active: Vec<ActiveDebt> = ordered
        .iter()
        .map(|d| ActiveDebt {
            id: d.id.clone(),
            name: d.lender_name.clone(),
            balance: d.outstanding_balance,
            minimum_payment: match d.monthly_installment {
                Some(p) if p > 0.0 => p,
                _ => d.outstanding_balance * SIMULATION_MIN_PAYMENT_RATE,
            },
            monthly_rate: rates.monthly_rate(d.debt_type),
        })
        .collect();

    let mut timeline = Vec::new();
    let mut total_interest = 0.0;
    let mut month = 0;

    while active.iter().any(|d| d.balance > 0.0) {
        if month >= MAX_SIMULATION_MONTHS {
            break;
        }
        month += 1;

        // Minimum payments on every open debt
        for debt in active.iter_mut().filter(|d| d.balance > 0.0) {
            let interest = debt.balance * debt.monthly_rate;
            let principal = (debt.minimum_payment - interest).min(debt.balance);
            let payment = interest + principal;

            debt.balance -= principal;
            total_interest += interest;

            timeline.push(PaymentEvent {
                month,
                debt_id: debt.id.clone(),
                debt_name: debt.name.clone(),
                payment,
                principal,
                interest,
                balance: debt.balance.max(0.0),
            });
        }

        // Entire extra payment goes to the first open debt in sorted order
        if extra_monthly_payment > 0.0 {
            if let Some(target) = active.iter_mut().find(|d| d.balance > 0.0) {
                let extra_principal = extra_monthly_payment.min(target.balance);
                target.balance -= extra_principal;

                // Fold the extra into this month's event for the target
                if let Some(event) = timeline
                    .iter_mut()
                    .rev()
                    .find(|e| e.month == month && e.debt_id == target.id)
                {
                    event.principal += extra_principal;
                    event.payment += extra_principal;
                    event.balance = target.balance.max(0.0);
                }
            }
        }
    }

    let converged = active.iter().all(|d| d.balance <= 0.0);
    let original_total: f64 = debts.iter().map(|d| d.outstanding_balance).sum();

    PayoffPlan {
        method,
        timeline,
        total_interest,
        total_months: month,
        total_paid: original_total + total_interest,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::DebtType;
    use approx::assert_abs_diff_eq;

    fn debt(id: &str, debt_type: DebtType, balance: f64) -> Debt {
        Debt::new(id, id, debt_type, balance).unwrap()
    }

    /// Months until a debt is fully paid, from the timeline
    fn payoff_month(plan: &PayoffPlan, id: &str) -> u32 {
        plan.timeline
            .iter()
            .filter(|e| e.debt_id == id && e.balance == 0.0)
            .map(|e| e.month)
            .min()
            .expect("debt never paid off")
    }

    #[test]
    fn test_empty_debt_list() {
        let plan = simulate_payoff(&[], 5_000.0, PayoffMethod::Snowball);
        assert_eq!(plan.total_months, 0);
        assert_eq!(plan.total_interest, 0.0);
        assert_eq!(plan.total_paid, 0.0);
        assert!(plan.converged);
        assert!(plan.timeline.is_empty());
    }

    #[test]
    fn test_single_debt_pays_off() {
        let debts = vec![debt("cc", DebtType::CreditCard, 50_000.0)];
        let plan = simulate_payoff(&debts, 0.0, PayoffMethod::Snowball);

        assert!(plan.converged);
        assert!(plan.total_months > 0);
        assert!(plan.total_interest > 0.0);
        assert_abs_diff_eq!(plan.total_paid, 50_000.0 + plan.total_interest, epsilon = 1e-6);

        let last = plan.timeline.last().unwrap();
        assert_eq!(last.balance, 0.0);
    }

    #[test]
    fn test_avalanche_targets_highest_rate_first() {
        // Credit card at 24% beats personal loan at 15% for the extra
        // payment, despite the card's smaller minimum
        let debts = vec![
            debt("pl", DebtType::PersonalLoan, 200_000.0).with_installment(10_000.0),
            debt("cc", DebtType::CreditCard, 50_000.0).with_installment(4_000.0),
        ];
        let plan = simulate_payoff(&debts, 5_000.0, PayoffMethod::Avalanche);

        assert!(plan.converged);
        assert!(payoff_month(&plan, "cc") < payoff_month(&plan, "pl"));

        // Month 1: card pays minimum plus the full extra
        let cc_first = plan
            .timeline
            .iter()
            .find(|e| e.debt_id == "cc" && e.month == 1)
            .unwrap();
        assert_abs_diff_eq!(cc_first.payment, 4_000.0 + 5_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_snowball_targets_smallest_balance_first() {
        let debts = vec![
            debt("big", DebtType::PersonalLoan, 200_000.0).with_installment(10_000.0),
            debt("small", DebtType::PersonalLoan, 30_000.0).with_installment(3_000.0),
        ];
        let plan = simulate_payoff(&debts, 2_000.0, PayoffMethod::Snowball);

        let small_first = plan
            .timeline
            .iter()
            .find(|e| e.debt_id == "small" && e.month == 1)
            .unwrap();
        assert_abs_diff_eq!(small_first.payment, 5_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_snowball_tie_keeps_original_order() {
        let debts = vec![
            debt("first", DebtType::PersonalLoan, 50_000.0).with_installment(5_000.0),
            debt("second", DebtType::PersonalLoan, 50_000.0).with_installment(5_000.0),
        ];
        let plan = simulate_payoff(&debts, 1_000.0, PayoffMethod::Snowball);

        let target = plan
            .timeline
            .iter()
            .find(|e| e.month == 1 && e.payment > 5_500.0)
            .unwrap();
        assert_eq!(target.debt_id, "first");
    }

    #[test]
    fn test_zero_extra_months_match_slowest_debt() {
        // With no extra payment, the combined simulation runs exactly as
        // long as the slowest debt takes on its own
        let debts = vec![
            debt("cc", DebtType::CreditCard, 80_000.0),
            debt("pl", DebtType::PersonalLoan, 150_000.0),
            debt("car", DebtType::CarLoan, 50_000.0).with_installment(5_000.0),
        ];

        let combined = simulate_payoff(&debts, 0.0, PayoffMethod::Snowball);
        let slowest = debts
            .iter()
            .map(|d| simulate_payoff(std::slice::from_ref(d), 0.0, PayoffMethod::Snowball).total_months)
            .max()
            .unwrap();
        assert_eq!(combined.total_months, slowest);
    }

    #[test]
    fn test_extra_payment_monotonicity() {
        let debts = vec![
            debt("cc", DebtType::CreditCard, 80_000.0),
            debt("pl", DebtType::PersonalLoan, 150_000.0),
        ];

        let mut prev_months = u32::MAX;
        let mut prev_interest = f64::INFINITY;
        for extra in [0.0, 1_000.0, 5_000.0, 20_000.0] {
            let plan = simulate_payoff(&debts, extra, PayoffMethod::Avalanche);
            assert!(plan.converged);
            assert!(plan.total_months <= prev_months);
            assert!(plan.total_interest <= prev_interest);
            prev_months = plan.total_months;
            prev_interest = plan.total_interest;
        }
    }

    #[test]
    fn test_waterfall_rolls_to_next_debt() {
        // After the small debt clears, the extra payment moves to the next
        // target in sorted order
        let debts = vec![
            debt("small", DebtType::PersonalLoan, 10_000.0).with_installment(5_000.0),
            debt("big", DebtType::PersonalLoan, 100_000.0).with_installment(6_000.0),
        ];
        let plan = simulate_payoff(&debts, 10_000.0, PayoffMethod::Snowball);

        let small_done = payoff_month(&plan, "small");
        let first_big_boost = plan
            .timeline
            .iter()
            .find(|e| e.debt_id == "big" && e.payment > 6_000.0 + 1e-9)
            .map(|e| e.month)
            .expect("extra never reached the second debt");
        assert!(first_big_boost >= small_done);
    }

    #[test]
    fn test_cap_reported_as_non_convergence() {
        // Minimum below interest accrual: balance never shrinks, the
        // 600-month cap fires and is surfaced on the plan
        let debts = vec![debt("stuck", DebtType::CreditCard, 1_000_000.0).with_installment(100.0)];
        let plan = simulate_payoff(&debts, 0.0, PayoffMethod::Avalanche);

        assert_eq!(plan.total_months, MAX_SIMULATION_MONTHS);
        assert!(!plan.converged);
        assert!(plan.timeline.last().unwrap().balance > 0.0);
    }

    #[test]
    fn test_total_paid_independent_of_timeline() {
        let debts = vec![
            debt("cc", DebtType::CreditCard, 40_000.0),
            debt("pl", DebtType::PersonalLoan, 60_000.0),
        ];
        let plan = simulate_payoff(&debts, 3_000.0, PayoffMethod::Snowball);
        assert_abs_diff_eq!(plan.total_paid, 100_000.0 + plan.total_interest, epsilon = 1e-6);
    }

    #[test]
    fn test_final_payment_does_not_overshoot() {
        let debts = vec![debt("cc", DebtType::CreditCard, 5_000.0).with_installment(4_900.0)];
        let plan = simulate_payoff(&debts, 0.0, PayoffMethod::Snowball);

        for event in &plan.timeline {
            assert!(event.balance >= 0.0);
        }
        assert!(plan.converged);
    }
}
