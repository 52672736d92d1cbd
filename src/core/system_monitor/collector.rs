use std::path::Path;

use log::warn;
use sysinfo::{
    CpuRefreshKind, Disks, MemoryRefreshKind, Networks, ProcessRefreshKind, RefreshKind, System,
};

use crate::error::{MonitorError, Result};

use super::metrics::*;

/// Source of system metric snapshots.
///
/// The run loop depends only on this trait; the sysinfo-backed implementation
/// is injected at startup so tests can substitute canned readings.
pub trait MetricSource {
    /// Take one snapshot. Individual subsystems that yield no data are
    /// zeroed and logged rather than failing the whole sample.
    fn sample(&mut self) -> Result<Snapshot>;
}

/// Production [`MetricSource`] backed by the sysinfo crate.
pub struct SysinfoSource {
    system: System,
    disks: Disks,
    networks: Networks,
}

impl SysinfoSource {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything())
            .with_processes(ProcessRefreshKind::nothing());

        let system = System::new_with_specifics(refresh_kind);
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();

        // CPU usage is measured against the previous refresh, so give the
        // first sample a baseline to compare with
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

        Self {
            system,
            disks,
            networks,
        }
    }

    fn collect_cpu(&self) -> CpuMetrics {
        let load = System::load_average();
        // sysinfo reports an all-zero load on platforms without getloadavg
        let load_average = (load.one > 0.0 || load.five > 0.0 || load.fifteen > 0.0)
            .then_some((load.one, load.five, load.fifteen));

        CpuMetrics {
            usage_percent: self.system.global_cpu_usage(),
            load_average,
            physical_cores: System::physical_core_count().unwrap_or(0),
            logical_cores: self.system.cpus().len(),
        }
    }

    fn collect_memory(&self) -> MemoryMetrics {
        let total = self.system.total_memory();
        let used = self.system.used_memory();

        MemoryMetrics {
            usage_percent: if total > 0 {
                (used as f32 / total as f32) * 100.0
            } else {
                0.0
            },
            used_bytes: used,
            total_bytes: total,
            available_bytes: self.system.available_memory(),
        }
    }

    fn collect_disk(&self) -> DiskMetrics {
        // Monitor the root filesystem; fall back to the first listed disk
        let disk = self
            .disks
            .iter()
            .find(|d| d.mount_point() == Path::new("/"))
            .or_else(|| self.disks.iter().next());

        let Some(disk) = disk else {
            warn!("No disks found; disk metrics unavailable");
            return DiskMetrics::default();
        };

        let total = disk.total_space();
        let free = disk.available_space();
        let used = total.saturating_sub(free);

        DiskMetrics {
            mount_point: disk.mount_point().to_string_lossy().to_string(),
            usage_percent: if total > 0 {
                (used as f32 / total as f32) * 100.0
            } else {
                0.0
            },
            used_bytes: used,
            total_bytes: total,
            free_bytes: free,
        }
    }

    fn collect_network(&self) -> NetworkMetrics {
        let mut network = NetworkMetrics::default();
        for (_, data) in self.networks.iter() {
            network.bytes_sent += data.total_transmitted();
            network.bytes_received += data.total_received();
            network.packets_sent += data.total_packets_transmitted();
            network.packets_received += data.total_packets_received();
        }
        network
    }

    fn collect_host(&self) -> HostMetrics {
        HostMetrics {
            process_count: self.system.processes().len(),
            uptime_secs: System::uptime(),
            boot_time: System::boot_time() as i64,
        }
    }
}

impl MetricSource for SysinfoSource {
    fn sample(&mut self) -> Result<Snapshot> {
        self.system.refresh_all();
        self.disks.refresh(true);
        self.networks.refresh(true);

        let snapshot = Snapshot {
            captured_at: chrono::Utc::now().timestamp(),
            cpu: self.collect_cpu(),
            memory: self.collect_memory(),
            disk: self.collect_disk(),
            network: self.collect_network(),
            host: self.collect_host(),
        };

        if snapshot.cpu.logical_cores == 0 && snapshot.memory.total_bytes == 0 {
            return Err(MonitorError::sampling(
                "no CPU or memory metrics available on this host",
            ));
        }

        Ok(snapshot)
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}
