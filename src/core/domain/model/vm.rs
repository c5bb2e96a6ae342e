//! Domain models for QEMU virtual machine operations.
//!
//! This module defines the structures used when interacting with VMs via the Proxmox API.

use super::serde_helpers::{f64_lenient, u64_lenient};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A virtual machine as returned by the `/nodes/{node}/qemu` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VmListItem {
    /// The VM identifier (unique per cluster).
    #[serde(deserialize_with = "u64_lenient")]
    pub vmid: u64,
    /// Human-readable name.
    pub name: String,
    /// Current status (e.g., "running", "stopped").
    pub status: String,
    /// CPU usage (0.0 to 1.0).
    #[serde(deserialize_with = "f64_lenient")]
    pub cpu: f64,
    /// Number of virtual CPUs.
    pub cpus: u32,
    pub maxcpu: u32,
    /// Memory usage in bytes.
    #[serde(deserialize_with = "u64_lenient")]
    pub mem: u64,
    /// Maximum memory in bytes.
    #[serde(deserialize_with = "u64_lenient")]
    pub maxmem: u64,
    /// Disk usage in bytes.
    #[serde(deserialize_with = "u64_lenient")]
    pub disk: u64,
    /// Maximum disk space in bytes.
    #[serde(deserialize_with = "u64_lenient")]
    pub maxdisk: u64,
    /// Uptime in seconds (if running).
    #[serde(deserialize_with = "u64_lenient")]
    pub uptime: u64,
    /// The Proxmox node where this VM resides.
    pub node: String,
}

/// Detailed runtime status of a VM from `/nodes/{node}/qemu/{vmid}/status/current`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VmStatusCurrent {
    /// Current VM status (e.g., "running", "stopped").
    pub status: String,
    #[serde(deserialize_with = "u64_lenient")]
    pub vmid: u64,
    #[serde(deserialize_with = "f64_lenient")]
    pub cpu: f64,
    pub cpus: u32,
    #[serde(deserialize_with = "u64_lenient")]
    pub mem: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub maxmem: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub uptime: u64,
    pub name: String,
    /// QEMU monitor status (e.g., "running", "paused").
    pub qmpstatus: String,
}

/// VM configuration from `/nodes/{node}/qemu/{vmid}/config`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VmConfig {
    pub name: String,
    /// Memory in MiB.
    #[serde(deserialize_with = "u64_lenient")]
    pub memory: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub cores: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub sockets: u64,
    /// OS type (e.g., "l26", "win11").
    pub ostype: String,
    /// Boot order.
    pub boot: String,
    pub bootdisk: String,
    pub description: String,
}

/// Power-state transitions accepted by `/nodes/{node}/qemu/{vmid}/status/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmAction {
    Start,
    Stop,
    Shutdown,
    Reboot,
    Reset,
    Suspend,
    Resume,
}

impl VmAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            VmAction::Start => "start",
            VmAction::Stop => "stop",
            VmAction::Shutdown => "shutdown",
            VmAction::Reboot => "reboot",
            VmAction::Reset => "reset",
            VmAction::Suspend => "suspend",
            VmAction::Resume => "resume",
        }
    }
}

impl fmt::Display for VmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
