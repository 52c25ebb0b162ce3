//! Platform toolkit and fleet-wide report generation.
//!
//! The toolkit owns the sole piece of mutable state in the engine: a
//! name-keyed service registry with insert-or-replace semantics.  Report
//! generation partitions the registry by health, aggregates cost, and
//! returns an immutable snapshot with a deterministic content-derived id.
//!
//! Key behaviors:
//! - Reports are recomputed on every call, never cached; identical registry
//!   state produces deep-equal reports with identical ids.
//! - Nothing in report generation errors; missing sub-records degrade to
//!   neutral values.  The typed error covers only the artifact boundary
//!   (JSON serialization, history timestamps).
//! - Structured log entries are serializable records, one per service.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::cost_profile::CostTrend;
use crate::governance_checklist::GovernanceCheckResult;
use crate::service_health::{GovernanceStatus, HealthStatus, PlatformService};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Component name for structured logging.
pub const PLATFORM_REPORT_COMPONENT: &str = "platform_report";

/// Schema version string.
pub const PLATFORM_REPORT_SCHEMA_VERSION: &str = "fleetscore.platform-report.v1";

const ERROR_SERIALIZATION: &str = "FS-REPORT-4001";
const ERROR_TIMESTAMP: &str = "FS-REPORT-4002";

// ---------------------------------------------------------------------------
// ReportError — typed error contract
// ---------------------------------------------------------------------------

/// Errors at the report artifact boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("serialization failure: {0}")]
    SerializationFailure(String),
    #[error("invalid RFC-3339 timestamp `{value}`")]
    InvalidTimestamp { value: String },
}

impl ReportError {
    /// Stable machine-readable error code.
    pub fn stable_code(&self) -> &'static str {
        match self {
            Self::SerializationFailure(_) => ERROR_SERIALIZATION,
            Self::InvalidTimestamp { .. } => ERROR_TIMESTAMP,
        }
    }
}

// ---------------------------------------------------------------------------
// Report entries
// ---------------------------------------------------------------------------

/// One SLO's derived view inside a service report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SloReportEntry {
    pub name: String,
    pub target_pct: f64,
    pub current_pct: f64,
    pub is_met: bool,
    pub budget_remaining_pct: f64,
}

/// One service's derived view inside the fleet report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceReportEntry {
    pub name: String,
    pub team: String,
    pub health: HealthStatus,
    pub governance_status: GovernanceStatus,
    pub slo_compliance_ratio: f64,
    pub reliability_score: u64,
    pub latest_cost: f64,
    pub average_cost: f64,
    pub cost_trend: CostTrend,
    pub over_budget: bool,
    pub slos: Vec<SloReportEntry>,
    pub governance_checks: Vec<GovernanceCheckResult>,
}

impl ServiceReportEntry {
    fn from_service(service: &PlatformService) -> Self {
        Self {
            name: service.name.clone(),
            team: service.team.clone(),
            health: service.health(),
            governance_status: service.governance_status(),
            slo_compliance_ratio: service.slo_compliance_ratio(),
            reliability_score: service.reliability.score(),
            latest_cost: service.cost.latest_cost(),
            average_cost: service.cost.average_cost(),
            cost_trend: service.cost.trend(),
            over_budget: service.cost.over_budget(),
            slos: service
                .slos
                .iter()
                .map(|slo| SloReportEntry {
                    name: slo.name.clone(),
                    target_pct: slo.target_pct,
                    current_pct: slo.current_pct,
                    is_met: slo.is_met(),
                    budget_remaining_pct: slo.budget_remaining_pct(),
                })
                .collect(),
            governance_checks: service.governance_checks.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// PlatformReport — ephemeral fleet snapshot
// ---------------------------------------------------------------------------

/// Immutable fleet-wide snapshot produced by [`PlatformToolkit::generate_report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformReport {
    /// Schema version for forward compatibility.
    pub schema_version: String,
    /// Deterministic content-derived identifier.
    pub report_id: String,
    pub total_services: u64,
    pub healthy_count: u64,
    pub degraded_count: u64,
    pub critical_count: u64,
    /// Sum of every service's latest cost.
    pub total_monthly_cost: f64,
    /// Per-service entries in registry (name) order.
    pub services: Vec<ServiceReportEntry>,
}

impl PlatformReport {
    /// Flatten the report into a plain serializable mapping with lowercase
    /// string tags for every enum.
    pub fn to_value(&self) -> Result<serde_json::Value, ReportError> {
        serde_json::to_value(self)
            .map_err(|err| ReportError::SerializationFailure(err.to_string()))
    }

    /// Pretty-printed JSON artifact.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ReportError::SerializationFailure(err.to_string()))
    }

    /// Human-readable markdown rendering of the report.
    pub fn to_markdown_report(&self) -> String {
        let mut out = String::new();
        out.push_str("# Platform Report\n\n");
        out.push_str(&format!("- Report ID: `{}`\n", self.report_id));
        out.push_str(&format!("- Total services: {}\n", self.total_services));
        out.push_str(&format!(
            "- Healthy: {} / Degraded: {} / Critical: {}\n",
            self.healthy_count, self.degraded_count, self.critical_count
        ));
        out.push_str(&format!(
            "- Total monthly cost: {:.2}\n\n",
            self.total_monthly_cost
        ));

        out.push_str("## Services\n\n");
        out.push_str(
            "| Service | Team | Health | Governance | Reliability | Latest Cost | Trend |\n",
        );
        out.push_str("|---|---|---|---|---:|---:|---|\n");
        for entry in &self.services {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {:.2} | {} |\n",
                entry.name,
                entry.team,
                entry.health,
                entry.governance_status,
                entry.reliability_score,
                entry.latest_cost,
                entry.cost_trend,
            ));
        }
        out.push('\n');
        out
    }
}

// ---------------------------------------------------------------------------
// PlatformToolkit — the service registry
// ---------------------------------------------------------------------------

/// Owns the name-keyed service registry and produces fleet reports.
///
/// The registry is the only mutable state in the engine.  Independent
/// toolkits do not interfere; callers sharing one instance across threads
/// must serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformToolkit {
    services: BTreeMap<String, PlatformService>,
}

impl PlatformToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-replace a service under its name.  No other validation.
    pub fn register_service(&mut self, service: PlatformService) {
        self.services.insert(service.name.clone(), service);
    }

    /// Registered service by name.
    pub fn service(&self, name: &str) -> Option<&PlatformService> {
        self.services.get(name)
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Partition the registry by health, aggregate cost, and snapshot.
    ///
    /// Recomputed from scratch on every call: a later call after new
    /// registrations reflects the new state.
    pub fn generate_report(&self) -> PlatformReport {
        let mut healthy_count = 0u64;
        let mut degraded_count = 0u64;
        let mut critical_count = 0u64;
        let mut total_monthly_cost = 0.0f64;
        let mut entries = Vec::with_capacity(self.services.len());

        for service in self.services.values() {
            let entry = ServiceReportEntry::from_service(service);
            match entry.health {
                HealthStatus::Healthy => healthy_count += 1,
                HealthStatus::Degraded => degraded_count += 1,
                HealthStatus::Critical => critical_count += 1,
            }
            total_monthly_cost += entry.latest_cost;
            entries.push(entry);
        }

        let report_id = derive_report_id(&entries, total_monthly_cost);

        PlatformReport {
            schema_version: PLATFORM_REPORT_SCHEMA_VERSION.to_string(),
            report_id,
            total_services: self.services.len() as u64,
            healthy_count,
            degraded_count,
            critical_count,
            total_monthly_cost,
            services: entries,
        }
    }
}

// ---------------------------------------------------------------------------
// ReportLogEntry — structured logging
// ---------------------------------------------------------------------------

/// Structured log entry for one service in a generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLogEntry {
    pub trace_id: String,
    pub component: String,
    pub schema_version: String,
    pub service: String,
    pub health: HealthStatus,
    pub governance_status: GovernanceStatus,
    pub reliability_score: u64,
    pub latest_cost: f64,
    pub cost_trend: CostTrend,
}

/// Generate structured log entries for a report, one per service.
pub fn generate_log_entries(trace_id: &str, report: &PlatformReport) -> Vec<ReportLogEntry> {
    report
        .services
        .iter()
        .map(|entry| ReportLogEntry {
            trace_id: trace_id.to_string(),
            component: PLATFORM_REPORT_COMPONENT.to_string(),
            schema_version: report.schema_version.clone(),
            service: entry.name.clone(),
            health: entry.health,
            governance_status: entry.governance_status,
            reliability_score: entry.reliability_score,
            latest_cost: entry.latest_cost,
            cost_trend: entry.cost_trend,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ReportHistory — labelled snapshots for trend analysis
// ---------------------------------------------------------------------------

/// A single labelled entry in the report history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportHistoryEntry {
    /// Caller-chosen label, e.g. a reporting-period tag.
    pub label: String,
    /// Normalized UTC timestamp (RFC-3339, second precision).
    pub timestamp_utc: String,
    pub report: PlatformReport,
}

/// Append-only report history for fleet-level trend analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportHistory {
    /// Entries in append order (newest last).
    pub entries: Vec<ReportHistoryEntry>,
}

impl ReportHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot.  The timestamp must be RFC-3339 and is normalized
    /// to UTC at second precision.
    pub fn append(
        &mut self,
        label: impl Into<String>,
        timestamp: &str,
        report: PlatformReport,
    ) -> Result<(), ReportError> {
        let timestamp_utc = normalize_utc_timestamp(timestamp)?;
        self.entries.push(ReportHistoryEntry {
            label: label.into(),
            timestamp_utc,
            report,
        });
        Ok(())
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&ReportHistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the latest snapshot regressed from the previous one: fewer
    /// healthy services or more critical ones.
    pub fn has_regression(&self) -> bool {
        if self.entries.len() < 2 {
            return false;
        }
        let previous = &self.entries[self.entries.len() - 2].report;
        let current = &self.entries[self.entries.len() - 1].report;
        current.healthy_count < previous.healthy_count
            || current.critical_count > previous.critical_count
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalize_utc_timestamp(value: &str) -> Result<String, ReportError> {
    let parsed = DateTime::parse_from_rfc3339(value).map_err(|_| ReportError::InvalidTimestamp {
        value: value.to_string(),
    })?;
    Ok(parsed
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn derive_report_id(entries: &[ServiceReportEntry], total_monthly_cost: f64) -> String {
    let mut hasher = Sha256::new();
    hash_update(&mut hasher, PLATFORM_REPORT_SCHEMA_VERSION);
    hash_update(&mut hasher, &format!("{total_monthly_cost:.6}"));
    for entry in entries {
        hash_update(&mut hasher, &entry.name);
        hash_update(&mut hasher, &entry.team);
        hash_update(&mut hasher, entry.health.as_str());
        hash_update(&mut hasher, entry.governance_status.as_str());
        hash_update(&mut hasher, &entry.reliability_score.to_string());
        hash_update(&mut hasher, &format!("{:.6}", entry.latest_cost));
        hash_update(&mut hasher, entry.cost_trend.as_str());
    }
    let digest = hex::encode(hasher.finalize());
    format!("fleet-report-{}", &digest[..20])
}

fn hash_update(hasher: &mut Sha256, value: &str) {
    hasher.update(value.as_bytes());
    hasher.update([0x1f]);
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_profile::{CostEntry, CostProfile};
    use crate::governance_checklist::{GovernanceFlags, run_governance_checks};
    use crate::reliability_score::ReliabilityMetrics;
    use crate::slo_tracker::SloDefinition;

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn healthy_service(name: &str) -> PlatformService {
        PlatformService {
            name: name.to_string(),
            team: "platform".to_string(),
            slos: vec![SloDefinition::new("availability", 99.9, 99.95)],
            cost: CostProfile::new(vec![CostEntry::new("2026-07", 500.0)], Some(1_000.0)),
            reliability: ReliabilityMetrics::new(99.9, 10.0, 1, 5.0),
            governance_checks: run_governance_checks(GovernanceFlags {
                has_runbook: true,
                has_monitoring: true,
                has_owner: true,
                has_documentation: true,
                has_incident_response: true,
            }),
        }
    }

    fn critical_service(name: &str) -> PlatformService {
        PlatformService {
            name: name.to_string(),
            team: "legacy".to_string(),
            slos: vec![SloDefinition::new("availability", 99.9, 98.0)],
            cost: CostProfile::new(vec![CostEntry::new("2026-07", 1_200.0)], Some(1_000.0)),
            reliability: ReliabilityMetrics::new(95.0, 120.0, 10, 50.0),
            governance_checks: run_governance_checks(GovernanceFlags::default()),
        }
    }

    fn bare_service(name: &str) -> PlatformService {
        PlatformService {
            name: name.to_string(),
            team: "unknown".to_string(),
            slos: vec![],
            cost: CostProfile::default(),
            reliability: ReliabilityMetrics::new(99.5, 20.0, 2, 10.0),
            governance_checks: vec![],
        }
    }

    // -----------------------------------------------------------------------
    // Registry
    // -----------------------------------------------------------------------

    #[test]
    fn new_toolkit_is_empty() {
        let toolkit = PlatformToolkit::new();
        assert!(toolkit.is_empty());
        assert_eq!(toolkit.len(), 0);
    }

    #[test]
    fn register_inserts_by_name() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        assert_eq!(toolkit.len(), 1);
        assert!(toolkit.service("checkout").is_some());
        assert!(toolkit.service("missing").is_none());
    }

    #[test]
    fn register_replaces_same_name() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        toolkit.register_service(critical_service("checkout"));
        assert_eq!(toolkit.len(), 1);
        assert_eq!(toolkit.service("checkout").unwrap().team, "legacy");
    }

    // -----------------------------------------------------------------------
    // generate_report
    // -----------------------------------------------------------------------

    #[test]
    fn empty_report_has_zero_counts() {
        let report = PlatformToolkit::new().generate_report();
        assert_eq!(report.total_services, 0);
        assert_eq!(
            report.healthy_count + report.degraded_count + report.critical_count,
            0
        );
        assert_eq!(report.total_monthly_cost, 0.0);
        assert!(report.services.is_empty());
    }

    #[test]
    fn counts_partition_the_registry() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        toolkit.register_service(critical_service("billing"));
        toolkit.register_service(bare_service("search"));
        let report = toolkit.generate_report();
        assert_eq!(report.total_services, 3);
        assert_eq!(report.healthy_count, 1);
        assert_eq!(report.degraded_count, 1);
        assert_eq!(report.critical_count, 1);
        assert_eq!(
            report.healthy_count + report.degraded_count + report.critical_count,
            report.total_services
        );
    }

    #[test]
    fn total_cost_sums_latest_costs() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        let report = toolkit.generate_report();
        assert_eq!(report.total_monthly_cost, 500.0);
    }

    #[test]
    fn services_with_no_cost_contribute_zero() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        toolkit.register_service(bare_service("search"));
        let report = toolkit.generate_report();
        assert_eq!(report.total_monthly_cost, 500.0);
    }

    #[test]
    fn entries_follow_registry_name_order() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("zeta"));
        toolkit.register_service(healthy_service("alpha"));
        let report = toolkit.generate_report();
        let names: Vec<&str> = report
            .services
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[test]
    fn consecutive_reports_are_deep_equal() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        toolkit.register_service(critical_service("billing"));
        let first = toolkit.generate_report();
        let second = toolkit.generate_report();
        assert_eq!(first, second);
    }

    #[test]
    fn report_reflects_later_registrations() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        let before = toolkit.generate_report();
        toolkit.register_service(critical_service("billing"));
        let after = toolkit.generate_report();
        assert_eq!(before.total_services, 1);
        assert_eq!(after.total_services, 2);
        assert_ne!(before.report_id, after.report_id);
    }

    #[test]
    fn report_id_is_deterministic() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        let first = toolkit.generate_report();
        let second = toolkit.generate_report();
        assert_eq!(first.report_id, second.report_id);
        assert!(first.report_id.starts_with("fleet-report-"));
    }

    // -----------------------------------------------------------------------
    // to_value / to_json_pretty
    // -----------------------------------------------------------------------

    #[test]
    fn value_has_required_top_level_keys() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        let value = toolkit.generate_report().to_value().unwrap();
        for key in [
            "total_services",
            "healthy_count",
            "degraded_count",
            "critical_count",
            "total_monthly_cost",
            "services",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["total_monthly_cost"], 500.0);
    }

    #[test]
    fn value_renders_lowercase_enum_tags() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        let value = toolkit.generate_report().to_value().unwrap();
        let entry = &value["services"][0];
        assert_eq!(entry["health"], "healthy");
        assert_eq!(entry["governance_status"], "compliant");
        assert_eq!(entry["cost_trend"], "stable");
        assert_eq!(entry["slos"][0]["is_met"], true);
    }

    #[test]
    fn json_pretty_is_parseable() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(critical_service("billing"));
        let json = toolkit.generate_report().to_json_pretty().unwrap();
        let back: PlatformReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.critical_count, 1);
    }

    // -----------------------------------------------------------------------
    // to_markdown_report
    // -----------------------------------------------------------------------

    #[test]
    fn markdown_contains_counts_and_rows() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        toolkit.register_service(critical_service("billing"));
        let markdown = toolkit.generate_report().to_markdown_report();
        assert!(markdown.contains("# Platform Report"));
        assert!(markdown.contains("Healthy: 1 / Degraded: 0 / Critical: 1"));
        assert!(markdown.contains("| checkout |"));
        assert!(markdown.contains("| billing |"));
    }

    // -----------------------------------------------------------------------
    // generate_log_entries
    // -----------------------------------------------------------------------

    #[test]
    fn log_entries_one_per_service() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        toolkit.register_service(critical_service("billing"));
        let report = toolkit.generate_report();
        let entries = generate_log_entries("trace-7", &report);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.trace_id == "trace-7"));
        assert!(
            entries
                .iter()
                .all(|entry| entry.component == PLATFORM_REPORT_COMPONENT)
        );
    }

    #[test]
    fn log_entries_reflect_health() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(critical_service("billing"));
        let report = toolkit.generate_report();
        let entries = generate_log_entries("t1", &report);
        assert_eq!(entries[0].health, HealthStatus::Critical);
        assert_eq!(entries[0].governance_status, GovernanceStatus::NonCompliant);
    }

    // -----------------------------------------------------------------------
    // ReportHistory
    // -----------------------------------------------------------------------

    #[test]
    fn history_append_and_latest() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        let mut history = ReportHistory::new();
        assert!(history.is_empty());
        history
            .append("2026-07", "2026-07-31T00:00:00Z", toolkit.generate_report())
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().label, "2026-07");
    }

    #[test]
    fn history_normalizes_offset_to_utc() {
        let mut history = ReportHistory::new();
        history
            .append(
                "offset",
                "2026-07-31T02:00:00+02:00",
                PlatformToolkit::new().generate_report(),
            )
            .unwrap();
        assert_eq!(history.latest().unwrap().timestamp_utc, "2026-07-31T00:00:00Z");
    }

    #[test]
    fn history_rejects_invalid_timestamp() {
        let mut history = ReportHistory::new();
        let err = history
            .append("bad", "yesterday", PlatformToolkit::new().generate_report())
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidTimestamp { .. }));
        assert_eq!(err.stable_code(), "FS-REPORT-4002");
        assert!(history.is_empty());
    }

    #[test]
    fn history_no_regression_with_short_history() {
        let mut history = ReportHistory::new();
        assert!(!history.has_regression());
        history
            .append(
                "only",
                "2026-07-31T00:00:00Z",
                PlatformToolkit::new().generate_report(),
            )
            .unwrap();
        assert!(!history.has_regression());
    }

    #[test]
    fn history_detects_regression() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        let mut history = ReportHistory::new();
        history
            .append("before", "2026-06-30T00:00:00Z", toolkit.generate_report())
            .unwrap();
        toolkit.register_service(critical_service("checkout"));
        history
            .append("after", "2026-07-31T00:00:00Z", toolkit.generate_report())
            .unwrap();
        assert!(history.has_regression());
    }

    #[test]
    fn history_no_regression_when_improving() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(critical_service("checkout"));
        let mut history = ReportHistory::new();
        history
            .append("before", "2026-06-30T00:00:00Z", toolkit.generate_report())
            .unwrap();
        toolkit.register_service(healthy_service("checkout"));
        history
            .append("after", "2026-07-31T00:00:00Z", toolkit.generate_report())
            .unwrap();
        assert!(!history.has_regression());
    }

    // -----------------------------------------------------------------------
    // ReportError
    // -----------------------------------------------------------------------

    #[test]
    fn error_display_and_codes() {
        let serialization = ReportError::SerializationFailure("boom".to_string());
        assert!(serialization.to_string().contains("boom"));
        assert_eq!(serialization.stable_code(), "FS-REPORT-4001");

        let timestamp = ReportError::InvalidTimestamp {
            value: "nope".to_string(),
        };
        assert!(timestamp.to_string().contains("nope"));
        assert_eq!(timestamp.stable_code(), "FS-REPORT-4002");
    }

    // -----------------------------------------------------------------------
    // Serde
    // -----------------------------------------------------------------------

    #[test]
    fn report_serde_roundtrip() {
        let mut toolkit = PlatformToolkit::new();
        toolkit.register_service(healthy_service("checkout"));
        let report = toolkit.generate_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: PlatformReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn history_serde_roundtrip() {
        let mut history = ReportHistory::new();
        history
            .append(
                "2026-07",
                "2026-07-31T00:00:00Z",
                PlatformToolkit::new().generate_report(),
            )
            .unwrap();
        let json = serde_json::to_string(&history).unwrap();
        let back: ReportHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
