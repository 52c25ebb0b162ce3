//! SLO definitions and error-budget arithmetic.
//!
//! One SLO definition yields two derived values: a compliance flag and the
//! remaining error budget on a uniform 0–100 axis.  Normalizing the budget
//! makes a 99.9% and a 99.0% SLO directly comparable regardless of the
//! absolute target.
//!
//! Key behaviors:
//! - `is_met` is total: no validation of out-of-range inputs.
//! - `budget_remaining_pct` is always in [0, 100].
//! - A zero-width budget (target 100%) counts as fully consumed the moment
//!   the target is breached.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SloDefinition
// ---------------------------------------------------------------------------

/// A single service-level objective: a named target percentage and the
/// currently measured percentage for the same indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SloDefinition {
    /// Indicator name, e.g. `availability` or `p99_latency`.
    pub name: String,
    /// Target compliance percentage (0–100).
    pub target_pct: f64,
    /// Currently measured percentage.
    pub current_pct: f64,
}

impl SloDefinition {
    pub fn new(name: impl Into<String>, target_pct: f64, current_pct: f64) -> Self {
        Self {
            name: name.into(),
            target_pct,
            current_pct,
        }
    }

    /// Whether the measured value meets the target.
    pub fn is_met(&self) -> bool {
        self.current_pct >= self.target_pct
    }

    /// Remaining error budget on a uniform 0–100 axis.
    ///
    /// The total budget is `100 - target_pct`.  A met SLO has its full
    /// budget unconsumed (100.0).  A breached SLO consumes
    /// `target_pct - current_pct` of that budget, clamped to the budget
    /// width; a zero-width budget is fully consumed once breached.
    pub fn budget_remaining_pct(&self) -> f64 {
        if self.current_pct >= self.target_pct {
            return 100.0;
        }
        let total_budget = 100.0 - self.target_pct;
        let consumed = self.target_pct - self.current_pct;
        let consumed_fraction = if total_budget <= 0.0 {
            1.0
        } else {
            (consumed / total_budget).clamp(0.0, 1.0)
        };
        (1.0 - consumed_fraction) * 100.0
    }
}

// ===========================================================================
// Tests
// ===========================================================================
