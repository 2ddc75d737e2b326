//! Timestamped history of derived financial positions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::dsr::calculate_dsr;
use crate::snapshot::UserSnapshot;

/// A point-in-time record of the derived position, for trend tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalSnapshot {
    pub timestamp: DateTime<Utc>,
    pub dsr_percent: f64,
    pub total_debt: f64,
    pub monthly_obligation: f64,
}

impl HistoricalSnapshot {
    /// Capture the current derived position of a snapshot
    pub fn capture(snapshot: &UserSnapshot) -> Self {
        Self::capture_at(snapshot, Utc::now())
    }

    /// Capture with an explicit timestamp
    pub fn capture_at(snapshot: &UserSnapshot, timestamp: DateTime<Utc>) -> Self {
        let dsr = calculate_dsr(snapshot);
        Self {
            timestamp,
            dsr_percent: dsr.dsr_percent,
            total_debt: dsr.total_debt,
            monthly_obligation: dsr.total_monthly_obligation,
        }
    }
}
