//! Governance posture checklist: five named pass/fail checks over five
//! independent boolean attestations.
//!
//! Key behaviors:
//! - `run_governance_checks` is a pure function: no hidden state, safe to
//!   call repeatedly, always exactly five results in canonical order.
//! - No flag defaults to true; the all-default posture fails every check.
//! - A failed check carries a non-empty corrective message.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GovernanceCheck — the five canonical checks
// ---------------------------------------------------------------------------

/// The five canonical governance checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernanceCheck {
    /// An operational runbook is linked.
    Runbook,
    /// Dashboards and alerting are wired up.
    Monitoring,
    /// An owning team is recorded.
    Ownership,
    /// Service documentation exists.
    Documentation,
    /// An incident response process is defined.
    IncidentResponse,
}

impl GovernanceCheck {
    /// All checks in canonical order.
    pub const ALL: [GovernanceCheck; 5] = [
        GovernanceCheck::Runbook,
        GovernanceCheck::Monitoring,
        GovernanceCheck::Ownership,
        GovernanceCheck::Documentation,
        GovernanceCheck::IncidentResponse,
    ];

    /// Canonical string tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Runbook => "runbook",
            Self::Monitoring => "monitoring",
            Self::Ownership => "ownership",
            Self::Documentation => "documentation",
            Self::IncidentResponse => "incident_response",
        }
    }
}

impl fmt::Display for GovernanceCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GovernanceFlags — raw posture attestations
// ---------------------------------------------------------------------------

/// The five independent posture attestations for one service.
///
/// `Default` is all-false: an unattested service fails every check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceFlags {
    pub has_runbook: bool,
    pub has_monitoring: bool,
    pub has_owner: bool,
    pub has_documentation: bool,
    pub has_incident_response: bool,
}

// ---------------------------------------------------------------------------
// GovernanceCheckResult
// ---------------------------------------------------------------------------

/// Result of one governance check: stable name, pass flag, and a message
/// that is corrective when failed, affirmative when passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceCheckResult {
    pub name: GovernanceCheck,
    pub passed: bool,
    pub message: String,
}

// ---------------------------------------------------------------------------
// run_governance_checks
// ---------------------------------------------------------------------------

/// Evaluate all five checks against the given flags, in canonical order.
pub fn run_governance_checks(flags: GovernanceFlags) -> Vec<GovernanceCheckResult> {
    GovernanceCheck::ALL
        .iter()
        .map(|check| {
            let passed = flag_for(*check, flags);
            GovernanceCheckResult {
                name: *check,
                passed,
                message: message_for(*check, passed).to_string(),
            }
        })
        .collect()
}

fn flag_for(check: GovernanceCheck, flags: GovernanceFlags) -> bool {
    match check {
        GovernanceCheck::Runbook => flags.has_runbook,
        GovernanceCheck::Monitoring => flags.has_monitoring,
        GovernanceCheck::Ownership => flags.has_owner,
        GovernanceCheck::Documentation => flags.has_documentation,
        GovernanceCheck::IncidentResponse => flags.has_incident_response,
    }
}

fn message_for(check: GovernanceCheck, passed: bool) -> &'static str {
    match (check, passed) {
        (GovernanceCheck::Runbook, true) => "runbook linked",
        (GovernanceCheck::Runbook, false) => {
            "no runbook linked; add an operational runbook for on-call response"
        }
        (GovernanceCheck::Monitoring, true) => "monitoring configured",
        (GovernanceCheck::Monitoring, false) => {
            "no monitoring configured; wire dashboards and alerts before production traffic"
        }
        (GovernanceCheck::Ownership, true) => "owning team recorded",
        (GovernanceCheck::Ownership, false) => {
            "no owning team recorded; assign an owner for escalation"
        }
        (GovernanceCheck::Documentation, true) => "documentation present",
        (GovernanceCheck::Documentation, false) => {
            "no service documentation; document interfaces and dependencies"
        }
        (GovernanceCheck::IncidentResponse, true) => "incident response process defined",
        (GovernanceCheck::IncidentResponse, false) => {
            "no incident response process; define paging and escalation policy"
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
