//! Debt service ratio aggregation and classification

use serde::{Deserialize, Serialize};

use crate::assumptions::thresholds_for_income;
use crate::engine::obligation::monthly_obligation;
use crate::snapshot::UserSnapshot;

/// Health classification of a debt service ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DsrStatus {
    Healthy,
    Warning,
    Critical,
}

/// Aggregated DSR result for a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsrResult {
    /// Sum of resolved monthly obligations across all debts
    pub total_monthly_obligation: f64,
    /// Obligations as a percentage of gross monthly income, 2 decimals
    pub dsr_percent: f64,
    /// Sum of outstanding balances
    pub total_debt: f64,
    pub status: DsrStatus,
    pub is_healthy: bool,
}

/// Compute the debt service ratio for a snapshot
///
/// Zero or negative income short-circuits to an all-zero healthy result
/// rather than dividing by zero.
pub fn calculate_dsr(snapshot: &UserSnapshot) -> DsrResult {
    if snapshot.gross_monthly_income <= 0.0 {
        return DsrResult {
            total_monthly_obligation: 0.0,
            dsr_percent: 0.0,
            total_debt: 0.0,
            status: DsrStatus::Healthy,
            is_healthy: true,
        };
    }

    let total_monthly_obligation: f64 = snapshot.debts.iter().map(monthly_obligation).sum();
    let total_debt = snapshot.total_debt();

    let raw = total_monthly_obligation / snapshot.gross_monthly_income * 100.0;
    let dsr_percent = (raw * 100.0).round() / 100.0;

    let thresholds = thresholds_for_income(snapshot.gross_monthly_income);
    let status = if dsr_percent > thresholds.critical {
        DsrStatus::Critical
    } else if dsr_percent > thresholds.warning {
        DsrStatus::Warning
    } else {
        DsrStatus::Healthy
    };

    DsrResult {
        total_monthly_obligation,
        dsr_percent,
        total_debt,
        status,
        is_healthy: status == DsrStatus::Healthy,
    }
}
