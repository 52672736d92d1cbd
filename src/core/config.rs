//! Monitor configuration.
//!
//! Loaded once at startup from a YAML file and immutable for the process
//! lifetime. Missing fields fall back to documented defaults; a missing or
//! malformed file is a hard error so the monitor never runs on a guessed
//! configuration.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{MonitorError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub thresholds: Thresholds,
    /// Seconds between monitoring cycles in continuous mode
    pub check_interval: u64,
    pub email: EmailConfig,
    pub logging: LoggingConfig,
}

/// Percentage thresholds above which a metric is considered unhealthy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub cpu: f32,
    pub memory: f32,
    pub disk: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailConfig {
    pub enabled: bool,
    pub smtp_server: String,
    pub port: u16,
    pub from: String,
    pub to: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            check_interval: 60,
            email: EmailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu: 80.0,
            memory: 85.0,
            disk: 90.0,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_server: "smtp.gmail.com".to_string(),
            port: 587,
            from: "monitoring@example.com".to_string(),
            to: "admin@example.com".to_string(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "sysguard.log".to_string(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            MonitorError::config(format!("cannot read config file {}: {}", path.display(), e))
        })?;

        let config: Config = serde_yaml::from_str(&data).map_err(|e| {
            MonitorError::config(format!("invalid config file {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values instead of silently coercing them.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;

        if self.check_interval == 0 {
            return Err(MonitorError::config("check_interval must be greater than 0"));
        }

        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(MonitorError::config(format!(
                "unknown logging level {:?} (expected one of: error, warn, info, debug, trace)",
                self.logging.level
            )));
        }

        if self.email.enabled {
            if self.email.smtp_server.is_empty() {
                return Err(MonitorError::config(
                    "email.smtp_server is required when email alerts are enabled",
                ));
            }
            if self.email.from.is_empty() || self.email.to.is_empty() {
                return Err(MonitorError::config(
                    "email.from and email.to are required when email alerts are enabled",
                ));
            }
        }

        Ok(())
    }
}

impl Thresholds {
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("cpu", self.cpu),
            ("memory", self.memory),
            ("disk", self.disk),
        ] {
            if !(value > 0.0 && value <= 100.0) {
                return Err(MonitorError::config(format!(
                    "thresholds.{} must be a percentage in (0, 100], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl LoggingConfig {
    /// Parsed verbosity level; validated at load time.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}
