use sysguard::core::config::Thresholds;
use sysguard::core::system_monitor::{
    evaluate_alerts, CpuMetrics, DiskMetrics, HostMetrics, MemoryMetrics, NetworkMetrics, Snapshot,
};
use sysguard::ui::report::render_report;

fn healthy_snapshot() -> Snapshot {
    const GIB: u64 = 1024 * 1024 * 1024;
    Snapshot {
        captured_at: 1_754_000_000,
        cpu: CpuMetrics {
            usage_percent: 45.2,
            load_average: Some((0.52, 0.48, 0.31)),
            physical_cores: 8,
            logical_cores: 16,
        },
        memory: MemoryMetrics {
            usage_percent: 67.8,
            used_bytes: 11 * GIB,
            total_bytes: 16 * GIB,
            available_bytes: 5 * GIB,
        },
        disk: DiskMetrics {
            mount_point: "/".to_string(),
            usage_percent: 40.0,
            used_bytes: 80 * GIB,
            total_bytes: 200 * GIB,
            free_bytes: 120 * GIB,
        },
        network: NetworkMetrics {
            bytes_sent: 1_234_567,
            bytes_received: 7_654_321,
            packets_sent: 9_001,
            packets_received: 12_345,
        },
        host: HostMetrics {
            process_count: 312,
            uptime_secs: 3 * 86_400 + 4 * 3600,
            boot_time: 1_753_726_400,
        },
    }
}

#[test]
fn test_healthy_report_has_no_alert_section() {
    let snapshot = healthy_snapshot();
    let report = render_report(&snapshot, &[], &Thresholds::default(), false);

    assert!(!report.contains("ACTIVE ALERTS"));
    assert!(report.contains("All systems normal - no alerts"));
    assert!(report.contains("SYSTEM HEALTH MONITOR"));
    assert!(report.contains("CPU Usage: 45.2%"));
    assert!(report.contains("Memory Usage: 67.8% (11.0GB / 16.0GB)"));
    assert!(report.contains("Uptime: 3 days, 4 hours"));
    assert!(report.contains("Active Processes: 312"));
    assert!(report.contains("1,234,567 bytes sent"));
    assert!(report.contains("7,654,321 bytes received"));
}

#[test]
fn test_alert_section_counts_alerts() {
    let mut snapshot = healthy_snapshot();
    snapshot.cpu.usage_percent = 91.0;
    snapshot.disk.usage_percent = 95.0;

    let thresholds = Thresholds::default();
    let alerts = evaluate_alerts(&snapshot, &thresholds);
    assert_eq!(alerts.len(), 2);

    let report = render_report(&snapshot, &alerts, &thresholds, false);
    assert!(report.contains("ACTIVE ALERTS (2):"));
    assert!(report.contains("CPU usage: 91.0%"));
    assert!(report.contains("Disk usage: 95.0%"));
    assert!(!report.contains("All systems normal"));
}

#[test]
fn test_missing_load_average_renders_na() {
    let mut snapshot = healthy_snapshot();
    snapshot.cpu.load_average = None;

    let report = render_report(&snapshot, &[], &Thresholds::default(), false);
    assert!(report.contains("(Load: N/A)"));
}

#[test]
fn test_breached_metric_is_marked() {
    let mut snapshot = healthy_snapshot();
    snapshot.memory.usage_percent = 99.0;

    let thresholds = Thresholds::default();
    let alerts = evaluate_alerts(&snapshot, &thresholds);
    let report = render_report(&snapshot, &alerts, &thresholds, false);

    assert!(report.contains("[ALERT] Memory Usage: 99.0%"));
    assert!(report.contains("[ OK  ] CPU Usage: 45.2%"));
}

#[test]
fn test_report_does_not_mutate_inputs() {
    let snapshot = healthy_snapshot();
    let thresholds = Thresholds::default();
    let alerts = evaluate_alerts(&snapshot, &thresholds);

    let before = snapshot.clone();
    let _ = render_report(&snapshot, &alerts, &thresholds, false);
    assert_eq!(snapshot, before);
}
