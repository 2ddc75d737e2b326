//! Rule-based financial recommendations derived from a snapshot

use serde::{Deserialize, Serialize};

use crate::engine::dsr::calculate_dsr;
use crate::snapshot::{DebtType, UserSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single actionable recommendation
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Stable identifier for the rule that produced this
    pub id: &'static str,
    pub severity: Severity,
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

/// Generate recommendations for a snapshot, sorted high priority first
pub fn generate_recommendations(snapshot: &UserSnapshot) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let dsr = calculate_dsr(snapshot);

    // DSR position
    if dsr.dsr_percent > 40.0 {
        recommendations.push(Recommendation {
            id: "high-dsr",
            severity: Severity::Warning,
            priority: Priority::High,
            title: "High Debt Service Ratio".into(),
            description: format!(
                "Your DSR is {:.1}%, which exceeds the recommended 40% limit. \
                 Consider debt consolidation or increasing income.",
                dsr.dsr_percent
            ),
        });
    } else if dsr.dsr_percent > 30.0 {
        recommendations.push(Recommendation {
            id: "moderate-dsr",
            severity: Severity::Info,
            priority: Priority::Medium,
            title: "Moderate DSR".into(),
            description: format!(
                "Your DSR is {:.1}%. You're approaching the 40% threshold. \
                 Monitor your debt levels closely.",
                dsr.dsr_percent
            ),
        });
    } else {
        recommendations.push(Recommendation {
            id: "healthy-dsr",
            severity: Severity::Success,
            priority: Priority::Low,
            title: "Healthy Financial Position".into(),
            description: format!(
                "Your DSR is {:.1}%, which is well within the safe range.",
                dsr.dsr_percent
            ),
        });
    }

    // Expensive revolving debt relative to income
    let card_total: f64 = snapshot
        .debts
        .iter()
        .filter(|d| d.debt_type == DebtType::CreditCard)
        .map(|d| d.outstanding_balance)
        .sum();
    if card_total > 0.0 && card_total > snapshot.gross_monthly_income * 0.5 {
        recommendations.push(Recommendation {
            id: "high-cc-debt",
            severity: Severity::Warning,
            priority: Priority::High,
            title: "High Credit Card Debt".into(),
            description: format!(
                "You have {card_total:.0} in credit card debt (typically 18-24% interest). \
                 Consider balance transfer or consolidation."
            ),
        });
    }

    // Many scattered debts
    if snapshot.debts.len() > 3 && dsr.total_debt > snapshot.gross_monthly_income * 2.0 {
        recommendations.push(Recommendation {
            id: "consolidation",
            severity: Severity::Info,
            priority: Priority::Medium,
            title: "Consider Debt Consolidation".into(),
            description: format!(
                "You have {} active debts totaling {:.0}. Consolidation could \
                 simplify payments and reduce interest.",
                snapshot.debts.len(),
                dsr.total_debt
            ),
        });
    }

    // Thin buffer against obligations
    if snapshot.gross_monthly_income > 0.0
        && dsr.total_monthly_obligation / snapshot.gross_monthly_income > 0.3
    {
        recommendations.push(Recommendation {
            id: "emergency-fund",
            severity: Severity::Info,
            priority: Priority::Medium,
            title: "Build Emergency Fund".into(),
            description: "With significant debt obligations, having 3-6 months of expenses \
                          in savings is crucial for financial stability."
                .into(),
        });
    }

    // Strategy nudge for multi-debt positions
    if snapshot.debts.len() > 1 {
        recommendations.push(Recommendation {
            id: "payoff-strategy",
            severity: Severity::Info,
            priority: Priority::Low,
            title: "Optimize Debt Payoff Strategy".into(),
            description: "Consider the avalanche method (highest interest first) or the \
                          snowball method (smallest balance first) to pay off debts efficiently."
                .into(),
        });
    }

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}
