//! Console report rendering.
//!
//! Renders one snapshot plus its alerts into a fixed-width text block. Pure
//! presentation: inputs are never mutated and missing optional data renders
//! as "N/A". The same renderer produces the plain-text body for alert
//! emails, so color is opt-in.

use chrono::{DateTime, Local};
use colored::*;

use crate::core::config::Thresholds;
use crate::core::system_monitor::{Alert, Snapshot};

use super::formatters::{format_count, format_gb, format_uptime};

const REPORT_WIDTH: usize = 60;

/// Render the full console report for one monitoring cycle.
pub fn render_report(
    snapshot: &Snapshot,
    alerts: &[Alert],
    thresholds: &Thresholds,
    color: bool,
) -> String {
    let border = "=".repeat(REPORT_WIDTH);
    let mut out = String::new();

    let title = format!("SYSTEM HEALTH MONITOR - {}", format_timestamp(snapshot.captured_at));
    out.push_str(&border);
    out.push('\n');
    if color {
        out.push_str(&title.bold().bright_cyan().to_string());
    } else {
        out.push_str(&title);
    }
    out.push('\n');
    out.push_str(&border);
    out.push('\n');

    let cpu = &snapshot.cpu;
    let load = match cpu.load_average {
        Some((one, _, _)) => format!("{:.2}", one),
        None => "N/A".to_string(),
    };
    let cores = if cpu.physical_cores > 0 {
        cpu.physical_cores.to_string()
    } else {
        "N/A".to_string()
    };
    out.push_str(&format!(
        "{} CPU Usage: {:.1}% (Load: {}) [{} cores, {} threads]\n",
        status_marker(cpu.usage_percent > thresholds.cpu, color),
        cpu.usage_percent,
        load,
        cores,
        cpu.logical_cores,
    ));

    let memory = &snapshot.memory;
    out.push_str(&format!(
        "{} Memory Usage: {:.1}% ({} / {})\n",
        status_marker(memory.usage_percent > thresholds.memory, color),
        memory.usage_percent,
        format_gb(memory.used_bytes),
        format_gb(memory.total_bytes),
    ));

    let disk = &snapshot.disk;
    out.push_str(&format!(
        "{} Disk Usage: {:.1}% ({} / {})\n",
        status_marker(disk.usage_percent > thresholds.disk, color),
        disk.usage_percent,
        format_gb(disk.used_bytes),
        format_gb(disk.total_bytes),
    ));

    out.push_str(&format!("Uptime: {}\n", format_uptime(snapshot.host.uptime_secs)));
    out.push_str(&format!("Active Processes: {}\n", snapshot.host.process_count));
    out.push_str(&format!(
        "Network: {} bytes sent, {} bytes received\n",
        format_count(snapshot.network.bytes_sent),
        format_count(snapshot.network.bytes_received),
    ));

    if alerts.is_empty() {
        out.push_str("\nAll systems normal - no alerts\n");
    } else {
        out.push('\n');
        out.push_str(&"-".repeat(REPORT_WIDTH));
        out.push('\n');
        let header = format!("ACTIVE ALERTS ({}):", alerts.len());
        if color {
            out.push_str(&header.red().bold().to_string());
        } else {
            out.push_str(&header);
        }
        out.push('\n');
        for alert in alerts {
            out.push_str("  ");
            out.push_str(&alert.message);
            out.push('\n');
        }
        out.push_str(&"-".repeat(REPORT_WIDTH));
        out.push('\n');
    }

    out.push_str(&border);
    out.push('\n');
    out
}

fn format_timestamp(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0)
        .map(|t| {
            t.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "N/A".to_string())
}

fn status_marker(breached: bool, color: bool) -> String {
    if breached {
        if color {
            "[ALERT]".red().bold().to_string()
        } else {
            "[ALERT]".to_string()
        }
    } else if color {
        "[ OK  ]".green().to_string()
    } else {
        "[ OK  ]".to_string()
    }
}
