use serde_json::Value;
use sysguard::core::config::Thresholds;
use sysguard::core::system_monitor::{
    evaluate_alerts, DiskMetrics, JsonExporter, MemoryMetrics, Snapshot,
};
use tempfile::TempDir;

fn snapshot_with_disk_alert() -> Snapshot {
    const GIB: u64 = 1024 * 1024 * 1024;
    Snapshot {
        captured_at: 1_754_000_000,
        memory: MemoryMetrics {
            usage_percent: 50.0,
            used_bytes: 8 * GIB,
            total_bytes: 16 * GIB,
            available_bytes: 8 * GIB,
        },
        disk: DiskMetrics {
            mount_point: "/".to_string(),
            usage_percent: 95.0,
            used_bytes: 190 * GIB,
            total_bytes: 200 * GIB,
            free_bytes: 10 * GIB,
        },
        ..Default::default()
    }
}

#[test]
fn test_export_record_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");

    let snapshot = snapshot_with_disk_alert();
    let alerts = evaluate_alerts(&snapshot, &Thresholds::default());
    assert_eq!(alerts.len(), 1);

    let exporter = JsonExporter::new(&path);
    exporter.write(&snapshot, &alerts).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let record: Value = serde_json::from_str(&data).unwrap();

    assert_eq!(record["timestamp"], "2025-07-31T22:13:20+00:00");
    assert_eq!(record["snapshot"]["disk"]["usage_percent"], 95.0);
    assert_eq!(record["alerts"].as_array().unwrap().len(), 1);

    let parsed: Snapshot = serde_json::from_value(record["snapshot"].clone()).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_export_overwrites_previous_cycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");
    let exporter = JsonExporter::new(&path);

    let first = snapshot_with_disk_alert();
    exporter.write(&first, &[]).unwrap();

    let mut second = snapshot_with_disk_alert();
    second.captured_at += 60;
    second.disk.usage_percent = 10.0;
    exporter.write(&second, &[]).unwrap();

    // One record per file, mirroring only the latest cycle
    let record: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(record["snapshot"]["disk"]["usage_percent"], 10.0);
}

#[test]
fn test_export_to_unwritable_path_is_an_error() {
    let exporter = JsonExporter::new("/nonexistent/dir/stats.json");
    let err = exporter
        .write(&Snapshot::default(), &[])
        .unwrap_err();
    assert!(err.to_string().contains("Export error"));
}
