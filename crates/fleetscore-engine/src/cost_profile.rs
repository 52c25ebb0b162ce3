//! Per-service cost history: latest/average cost, budget posture, and a
//! two-point trend classification.
//!
//! Key behaviors:
//! - Entries are chronological; the last entry is the current month.
//! - Empty history degrades to neutral (0.0 cost, Stable trend) rather than
//!   erroring.
//! - Trend compares only the last two entries against a fixed ±10% band,
//!   which ignores routine billing noise while catching real shocks.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Relative delta beyond which the last two entries classify as Spiking
/// (above) or Decreasing (below the negated band).
pub const TREND_BAND: f64 = 0.10;

// ---------------------------------------------------------------------------
// CostTrend
// ---------------------------------------------------------------------------

/// Month-over-month cost trend classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTrend {
    /// Latest cost rose more than the band over the previous entry.
    Spiking,
    /// Within the band, or not enough history to compare.
    Stable,
    /// Latest cost fell more than the band below the previous entry.
    Decreasing,
}

impl CostTrend {
    /// Canonical string tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spiking => "spiking",
            Self::Stable => "stable",
            Self::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for CostTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CostEntry / CostProfile
// ---------------------------------------------------------------------------

/// One billing-period cost observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Billing-period label, e.g. `2026-07`.
    pub label: String,
    /// Cost amount for the period (>= 0).
    pub amount: f64,
}

impl CostEntry {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Ordered cost history for one service with an optional monthly budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    /// Chronological entries, oldest first.
    pub entries: Vec<CostEntry>,
    /// Monthly budget, if one is set for the service.
    pub budget_monthly: Option<f64>,
}

impl CostProfile {
    pub fn new(entries: Vec<CostEntry>, budget_monthly: Option<f64>) -> Self {
        Self {
            entries,
            budget_monthly,
        }
    }

    /// Last entry's amount; 0.0 with no history.
    pub fn latest_cost(&self) -> f64 {
        self.entries.last().map(|entry| entry.amount).unwrap_or(0.0)
    }

    /// Mean of all amounts; 0.0 with no history.
    pub fn average_cost(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let total: f64 = self.entries.iter().map(|entry| entry.amount).sum();
        total / self.entries.len() as f64
    }

    /// Whether a budget is set and the latest cost exceeds it.
    pub fn over_budget(&self) -> bool {
        match self.budget_monthly {
            Some(budget) => self.latest_cost() > budget,
            None => false,
        }
    }

    /// Classify the last two entries against the ±[`TREND_BAND`] band.
    ///
    /// Fewer than two entries, or a zero previous amount (undefined relative
    /// delta), classify as Stable.
    pub fn trend(&self) -> CostTrend {
        if self.entries.len() < 2 {
            return CostTrend::Stable;
        }
        let last = self.entries[self.entries.len() - 1].amount;
        let previous = self.entries[self.entries.len() - 2].amount;
        if previous == 0.0 {
            return CostTrend::Stable;
        }
        let delta_pct = (last - previous) / previous;
        if delta_pct > TREND_BAND {
            CostTrend::Spiking
        } else if delta_pct < -TREND_BAND {
            CostTrend::Decreasing
        } else {
            CostTrend::Stable
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
