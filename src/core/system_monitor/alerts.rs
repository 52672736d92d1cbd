//! Alert evaluation.
//!
//! Compares one snapshot against the configured thresholds and generates
//! alerts for CPU, memory and disk. Network and process metrics have no
//! thresholds and never alert.

use serde::{Deserialize, Serialize};

use crate::core::config::Thresholds;
use crate::ui::formatters::bytes_to_gb;

use super::metrics::Snapshot;

/// A single threshold breach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub category: AlertCategory,
    pub value: f32,
    pub threshold: f32,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    Cpu,
    Memory,
    Disk,
}

/// Evaluate a snapshot against the configured thresholds.
///
/// A metric alerts only when it is strictly above its threshold. The output
/// order is always cpu, memory, disk regardless of which subset triggers.
pub fn evaluate_alerts(snapshot: &Snapshot, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if snapshot.cpu.usage_percent > thresholds.cpu {
        alerts.push(Alert {
            category: AlertCategory::Cpu,
            value: snapshot.cpu.usage_percent,
            threshold: thresholds.cpu,
            message: format!(
                "CPU usage: {:.1}% (threshold: {}%)",
                snapshot.cpu.usage_percent, thresholds.cpu
            ),
        });
    }

    if snapshot.memory.usage_percent > thresholds.memory {
        alerts.push(Alert {
            category: AlertCategory::Memory,
            value: snapshot.memory.usage_percent,
            threshold: thresholds.memory,
            message: format!(
                "Memory usage: {:.1}% (threshold: {}%) - {:.1}GB used",
                snapshot.memory.usage_percent,
                thresholds.memory,
                bytes_to_gb(snapshot.memory.used_bytes)
            ),
        });
    }

    if snapshot.disk.usage_percent > thresholds.disk {
        alerts.push(Alert {
            category: AlertCategory::Disk,
            value: snapshot.disk.usage_percent,
            threshold: thresholds.disk,
            message: format!(
                "Disk usage: {:.1}% (threshold: {}%) - {:.1}GB used",
                snapshot.disk.usage_percent,
                thresholds.disk,
                bytes_to_gb(snapshot.disk.used_bytes)
            ),
        });
    }

    alerts
}
