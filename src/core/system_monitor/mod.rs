//! System monitoring core functionality.
//!
//! This module provides the business logic for sampling system metrics,
//! evaluating them against thresholds, and delivering alerts.

pub mod alerts;
mod collector;
mod export;
mod metrics;
mod notifier;

pub use alerts::{evaluate_alerts, Alert, AlertCategory};
pub use collector::{MetricSource, SysinfoSource};
pub use export::JsonExporter;
pub use metrics::{
    CpuMetrics, DiskMetrics, HostMetrics, MemoryMetrics, NetworkMetrics, Snapshot,
};
pub use notifier::notify;
