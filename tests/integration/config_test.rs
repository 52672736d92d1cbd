use std::fs;
use std::path::Path;

use sysguard::core::config::Config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
thresholds:
  cpu: 70
  memory: 75
  disk: 95
check_interval: 30
email:
  enabled: true
  smtp_server: mail.example.com
  port: 465
  from: monitor@example.com
  to: ops@example.com
  username: monitor
  password: hunter2
logging:
  level: debug
  file: /tmp/monitor.log
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.thresholds.cpu, 70.0);
    assert_eq!(config.thresholds.disk, 95.0);
    assert_eq!(config.check_interval, 30);
    assert!(config.email.enabled);
    assert_eq!(config.email.smtp_server, "mail.example.com");
    assert_eq!(config.email.port, 465);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "thresholds:\n  cpu: 50\n");

    let config = Config::load(&path).unwrap();
    assert_eq!(config.thresholds.cpu, 50.0);
    assert_eq!(config.thresholds.memory, 85.0);
    assert_eq!(config.thresholds.disk, 90.0);
    assert_eq!(config.check_interval, 60);
    assert!(!config.email.enabled);
    assert_eq!(config.logging.file, "sysguard.log");
}

#[test]
fn test_missing_file_is_an_error() {
    let err = Config::load(Path::new("/nonexistent/sysguard/config.yaml")).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "thresholds: [not, a, mapping\n");

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_unknown_key_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "treshold:\n  cpu: 50\n");

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_invalid_threshold_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "thresholds:\n  cpu: 150\n");

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_zero_check_interval_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "check_interval: 0\n");

    assert!(Config::load(&path).is_err());
}
