//! Per-service health and governance state determination.
//!
//! Combines three signals — SLO compliance ratio, composite reliability
//! score, and governance status — into a three-way health classification.
//!
//! Key invariants:
//! - A severe signal dominates: a breach paired with low reliability is
//!   Critical no matter how good the other numbers are.
//! - Healthy requires simultaneous compliance on all three axes.
//! - Everything in between surfaces as Degraded rather than being hidden.
//! - Missing signals are neutral: no SLOs means fully compliant, an empty
//!   check list means vacuously compliant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cost_profile::CostProfile;
use crate::governance_checklist::GovernanceCheckResult;
use crate::reliability_score::ReliabilityMetrics;
use crate::slo_tracker::SloDefinition;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Below this reliability score, a breached SLO or a non-compliant posture
/// escalates straight to Critical.
pub const CRITICAL_RELIABILITY_FLOOR: u64 = 50;

/// Minimum reliability score for a Healthy classification.
pub const HEALTHY_RELIABILITY_FLOOR: u64 = 80;

// ---------------------------------------------------------------------------
// HealthStatus / GovernanceStatus
// ---------------------------------------------------------------------------

/// Three-way summary of a service's overall state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// All three signals compliant.
    Healthy,
    /// Partial problems; the explicit middle ground.
    Degraded,
    /// A severe breach that must not be masked.
    Critical,
}

impl HealthStatus {
    /// Canonical string tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Governance posture summary for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernanceStatus {
    /// Every check in the service's list passed.
    Compliant,
    /// At least one check failed.
    NonCompliant,
}

impl GovernanceStatus {
    /// Canonical string tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::NonCompliant => "non_compliant",
        }
    }

    pub const fn is_compliant(self) -> bool {
        matches!(self, Self::Compliant)
    }
}

impl fmt::Display for GovernanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PlatformService
// ---------------------------------------------------------------------------

/// One registered service and its operational signals.
///
/// "Updating" a service means registering a replacement under the same name;
/// the record itself is never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformService {
    /// Registry key.
    pub name: String,
    /// Owning team.
    pub team: String,
    /// SLO definitions; may be empty.
    pub slos: Vec<SloDefinition>,
    /// Cost history; may be empty.
    pub cost: CostProfile,
    /// Raw reliability metrics.
    pub reliability: ReliabilityMetrics,
    /// Governance check results; may be empty.
    pub governance_checks: Vec<GovernanceCheckResult>,
}

impl PlatformService {
    /// Fraction of this service's SLOs that are met; 1.0 when none defined.
    pub fn slo_compliance_ratio(&self) -> f64 {
        if self.slos.is_empty() {
            return 1.0;
        }
        let met = self.slos.iter().filter(|slo| slo.is_met()).count();
        met as f64 / self.slos.len() as f64
    }

    /// Compliant iff every check passed; vacuously Compliant when empty.
    pub fn governance_status(&self) -> GovernanceStatus {
        if self.governance_checks.iter().all(|check| check.passed) {
            GovernanceStatus::Compliant
        } else {
            GovernanceStatus::NonCompliant
        }
    }

    /// Three-signal health determination, first match wins.
    ///
    /// 1. Critical if a breached SLO or non-compliant posture coincides with
    ///    a reliability score below [`CRITICAL_RELIABILITY_FLOOR`].
    /// 2. Healthy if all SLOs are met, the score reaches
    ///    [`HEALTHY_RELIABILITY_FLOOR`], and governance is compliant.
    /// 3. Degraded otherwise.
    pub fn health(&self) -> HealthStatus {
        let score = self.reliability.score();
        let any_slo_breached = self.slos.iter().any(|slo| !slo.is_met());
        let governance = self.governance_status();

        if score < CRITICAL_RELIABILITY_FLOOR
            && (any_slo_breached || !governance.is_compliant())
        {
            return HealthStatus::Critical;
        }
        if !any_slo_breached
            && score >= HEALTHY_RELIABILITY_FLOOR
            && governance.is_compliant()
        {
            return HealthStatus::Healthy;
        }
        HealthStatus::Degraded
    }
}

// ===========================================================================
// Tests
// ===========================================================================
