//! JSON snapshot export.
//!
//! When a target path is given, each cycle's snapshot and alerts are written
//! as one pretty-printed JSON object, overwriting the previous cycle's file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::DateTime;
use log::info;
use serde::Serialize;

use crate::error::{MonitorError, Result};

use super::alerts::Alert;
use super::metrics::Snapshot;

/// One exported record per monitoring cycle
#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    /// Sample time as an ISO-8601 timestamp
    timestamp: String,
    snapshot: &'a Snapshot,
    alerts: &'a [Alert],
}

pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Serialize the cycle's snapshot and alerts to the target file.
    pub fn write(&self, snapshot: &Snapshot, alerts: &[Alert]) -> Result<()> {
        let timestamp = DateTime::from_timestamp(snapshot.captured_at, 0)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| snapshot.captured_at.to_string());

        let record = ExportRecord {
            timestamp,
            snapshot,
            alerts,
        };

        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| MonitorError::export(format!("failed to serialize snapshot: {}", e)))?;

        fs::write(&self.path, json).map_err(|e| {
            MonitorError::export(format!("cannot write {}: {}", self.path.display(), e))
        })?;

        info!("Statistics saved to {}", self.path.display());
        Ok(())
    }
}
