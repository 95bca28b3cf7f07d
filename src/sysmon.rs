//! Host process and system statistics enumeration.
//!
//! Thin read-only adapter over [`sysinfo`]. The simulation core never
//! calls into this module; callers use it when they want to drive a run
//! from live process pids instead of a literal reference string (see
//! [`crate::input::pages_from_processes`]).

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// One running process, as shown in a process picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Executable name.
    pub name: String,

    /// Process identifier; doubles as a page reference value.
    pub pid: u32,

    /// Resident memory in megabytes.
    pub memory_usage_mb: f64,
}

/// Point-in-time memory and CPU statistics for the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_memory_bytes: u64,
    pub free_memory_bytes: u64,
    pub cpu_usage_percent: f32,
}

/// Owns the [`sysinfo::System`] handle and refreshes it before each read.
///
/// Both reads are snapshots; callers that want a live view poll at their
/// own cadence.
pub struct SystemMonitor {
    system: System,
}

impl SystemMonitor {
    /// Create a monitor with a fully refreshed view of the host.
    pub fn new() -> Self {
        Self {
            system: System::new_all(),
        }
    }

    /// List current processes with their resident memory usage.
    ///
    /// Results are sorted by pid; the underlying map iterates in
    /// arbitrary order.
    pub fn list_processes(&mut self) -> Vec<ProcessInfo> {
        self.system.refresh_all();

        let mut processes: Vec<ProcessInfo> = self
            .system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessInfo {
                name: process.name().to_string_lossy().into_owned(),
                pid: pid.as_u32(),
                memory_usage_mb: process.memory() as f64 / (1024.0 * 1024.0),
            })
            .collect();

        processes.sort_by_key(|p| p.pid);

        log::debug!("enumerated {} processes", processes.len());
        processes
    }

    /// Read total/free memory and aggregate CPU usage.
    pub fn system_stats(&mut self) -> SystemStats {
        self.system.refresh_all();

        let stats = SystemStats {
            total_memory_bytes: self.system.total_memory(),
            free_memory_bytes: self.system.free_memory(),
            cpu_usage_percent: self.system.global_cpu_usage(),
        };

        log::debug!(
            "system stats: {}/{} bytes free, cpu {:.1}%",
            stats.free_memory_bytes,
            stats.total_memory_bytes,
            stats.cpu_usage_percent
        );
        stats
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemMonitor").finish_non_exhaustive()
    }
}
