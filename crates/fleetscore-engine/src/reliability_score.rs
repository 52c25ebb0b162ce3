//! Composite reliability scoring over four raw operational metrics.
//!
//! Each axis passes through its own saturating normalizer into [0, 1]; a
//! fixed-weight sum is scaled to 100 and clamped.  Availability dominates
//! the weighting, but any single catastrophic axis still drags the
//! composite down sharply.
//!
//! Axis policy:
//! - Availability: full credit at >= 99.9% uptime, zero at <= 99.0%.
//! - Recovery speed: full credit at <= 5 min MTTR, zero at >= 30 min.
//! - Incident load: full credit at 0 incidents/30d, zero at >= 5.
//! - Change safety: full credit at <= 5% CFR, zero at >= 15%.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const AVAILABILITY_WEIGHT: f64 = 0.35;
const RECOVERY_SPEED_WEIGHT: f64 = 0.25;
const INCIDENT_LOAD_WEIGHT: f64 = 0.20;
const CHANGE_SAFETY_WEIGHT: f64 = 0.20;

// ---------------------------------------------------------------------------
// ReliabilityAxis — the four scored axes
// ---------------------------------------------------------------------------

/// One axis of the composite reliability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityAxis {
    /// Uptime percentage over the window.
    Availability,
    /// Mean time to recovery.
    RecoverySpeed,
    /// Incident count over the last 30 days.
    IncidentLoad,
    /// Change failure rate.
    ChangeSafety,
}

impl ReliabilityAxis {
    /// All axes in canonical order.
    pub const ALL: [ReliabilityAxis; 4] = [
        ReliabilityAxis::Availability,
        ReliabilityAxis::RecoverySpeed,
        ReliabilityAxis::IncidentLoad,
        ReliabilityAxis::ChangeSafety,
    ];

    /// Canonical string tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Availability => "availability",
            Self::RecoverySpeed => "recovery_speed",
            Self::IncidentLoad => "incident_load",
            Self::ChangeSafety => "change_safety",
        }
    }

    /// Fixed weight of this axis in the composite.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Availability => AVAILABILITY_WEIGHT,
            Self::RecoverySpeed => RECOVERY_SPEED_WEIGHT,
            Self::IncidentLoad => INCIDENT_LOAD_WEIGHT,
            Self::ChangeSafety => CHANGE_SAFETY_WEIGHT,
        }
    }
}

impl fmt::Display for ReliabilityAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReliabilityMetrics
// ---------------------------------------------------------------------------

/// Raw operational metrics for one service over the reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityMetrics {
    /// Uptime percentage (0–100).
    pub uptime_pct: f64,
    /// Mean time to recovery in minutes (>= 0).
    pub mttr_minutes: f64,
    /// Incident count over the last 30 days.
    pub incidents_30d: u32,
    /// Change failure rate percentage (0–100).
    pub change_failure_rate_pct: f64,
}

impl ReliabilityMetrics {
    pub fn new(
        uptime_pct: f64,
        mttr_minutes: f64,
        incidents_30d: u32,
        change_failure_rate_pct: f64,
    ) -> Self {
        Self {
            uptime_pct,
            mttr_minutes,
            incidents_30d,
            change_failure_rate_pct,
        }
    }

    /// Normalized [0, 1] value for one axis.
    pub fn normalized(&self, axis: ReliabilityAxis) -> f64 {
        let raw = match axis {
            ReliabilityAxis::Availability => (self.uptime_pct - 99.0) / 0.9,
            ReliabilityAxis::RecoverySpeed => (30.0 - self.mttr_minutes) / 25.0,
            ReliabilityAxis::IncidentLoad => 1.0 - f64::from(self.incidents_30d) / 5.0,
            ReliabilityAxis::ChangeSafety => (15.0 - self.change_failure_rate_pct) / 10.0,
        };
        raw.clamp(0.0, 1.0)
    }

    /// Composite score in [0, 100].
    pub fn score(&self) -> u64 {
        let weighted_sum: f64 = ReliabilityAxis::ALL
            .iter()
            .map(|axis| axis.weight() * self.normalized(*axis))
            .sum();
        (100.0 * weighted_sum).round().clamp(0.0, 100.0) as u64
    }

    /// Per-axis breakdown of the composite, in canonical axis order.
    pub fn axis_breakdown(&self) -> Vec<AxisScore> {
        ReliabilityAxis::ALL
            .iter()
            .map(|axis| AxisScore::compute(*axis, self))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// AxisScore — scored result for one axis
// ---------------------------------------------------------------------------

/// Scored result for one reliability axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScore {
    /// Which axis was scored.
    pub axis: ReliabilityAxis,
    /// Normalized value in [0, 1].
    pub normalized: f64,
    /// Fixed axis weight.
    pub weight: f64,
    /// Contribution to the composite (weight × normalized × 100).
    pub weighted_points: f64,
}

impl AxisScore {
    /// Compute the scored contribution of one axis.
    pub fn compute(axis: ReliabilityAxis, metrics: &ReliabilityMetrics) -> Self {
        let normalized = metrics.normalized(axis);
        let weight = axis.weight();
        Self {
            axis,
            normalized,
            weight,
            weighted_points: 100.0 * weight * normalized,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
