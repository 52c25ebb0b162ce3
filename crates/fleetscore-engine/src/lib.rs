#![forbid(unsafe_code)]
//! Platform reliability-and-governance scorecard engine.
//!
//! Ingests per-service operational signals — SLO compliance, cost history,
//! reliability metrics, governance posture — and produces a fleet-wide
//! report classifying each service as healthy, degraded, or critical,
//! alongside aggregated cost and compliance figures.
//!
//! Key behaviors:
//! - Every derived value (`is_met`, `budget_remaining_pct`,
//!   `reliability_score`, `health`, `governance_status`) is a pure computed
//!   accessor over immutable records, never a cached field.
//! - The engine is total: missing signals degrade to neutral fallbacks
//!   instead of erroring, so partially-populated services still classify.
//! - The only mutable state is the [`platform_report::PlatformToolkit`]
//!   registry, an owned `BTreeMap` keyed by service name with
//!   insert-or-replace semantics.
//! - Reports are ephemeral snapshots, recomputed on every call and carrying
//!   a deterministic content-derived `report_id`.
//!
//! All collections use `BTreeMap`/`Vec` for deterministic iteration.

pub mod cost_profile;
pub mod governance_checklist;
pub mod platform_report;
pub mod reliability_score;
pub mod service_health;
pub mod slo_tracker;
