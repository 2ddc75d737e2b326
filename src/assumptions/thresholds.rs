//! Income-tiered DSR thresholds (Thai banking convention)
//!
//! Higher earners are allowed a higher debt service ratio before a lender
//! flags the position. Tiers follow Bank of Thailand retail guidance.

/// Warning/critical DSR percentage thresholds for an income tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DsrThresholds {
    pub warning: f64,
    pub critical: f64,
}

/// Income tier boundaries in THB per month
const HIGH_INCOME_FLOOR: f64 = 70_000.0;
const MID_INCOME_FLOOR: f64 = 30_000.0;

/// Thresholds for a given gross monthly income
pub fn thresholds_for_income(gross_monthly_income: f64) -> DsrThresholds {
    if gross_monthly_income > HIGH_INCOME_FLOOR {
        DsrThresholds { warning: 60.0, critical: 70.0 }
    } else if gross_monthly_income >= MID_INCOME_FLOOR {
        DsrThresholds { warning: 50.0, critical: 60.0 }
    } else {
        DsrThresholds { warning: 40.0, critical: 50.0 }
    }
}
