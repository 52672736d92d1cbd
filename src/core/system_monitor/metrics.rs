use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of all monitored system metrics.
///
/// Created fresh on every sampling cycle and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Unix timestamp of the sample
    pub captured_at: i64,
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub disk: DiskMetrics,
    pub network: NetworkMetrics,
    pub host: HostMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuMetrics {
    pub usage_percent: f32,
    /// 1, 5 and 15 minute load averages; `None` on platforms without getloadavg
    pub load_average: Option<(f64, f64, f64)>,
    pub physical_cores: usize,
    pub logical_cores: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub usage_percent: f32,
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

/// Usage of the root filesystem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskMetrics {
    pub mount_point: String,
    pub usage_percent: f32,
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Cumulative traffic counters summed over all interfaces (totals since boot,
/// not per-cycle deltas)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostMetrics {
    pub process_count: usize,
    pub uptime_secs: u64,
    /// Unix timestamp of system boot
    pub boot_time: i64,
}
