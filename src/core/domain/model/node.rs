//! Domain models for the `/nodes` family of endpoints.

use super::serde_helpers::{f64_lenient, f64_vec_lenient, u64_lenient};
use serde::{Deserialize, Serialize};

/// A node in the Proxmox cluster.
///
/// This struct represents a node as returned by the `/api2/json/nodes` endpoint.
/// Fields the server omits are left at their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Node {
    /// The node name (e.g., "pve1").
    pub node: String,
    /// Current node status (e.g., "online", "offline", "unknown").
    pub status: String,
    /// CPU usage (0.0 to 1.0).
    #[serde(deserialize_with = "f64_lenient")]
    pub cpu: f64,
    /// Number of logical CPUs.
    pub maxcpu: u32,
    /// Memory usage in bytes.
    #[serde(deserialize_with = "u64_lenient")]
    pub mem: u64,
    /// Maximum memory in bytes.
    #[serde(deserialize_with = "u64_lenient")]
    pub maxmem: u64,
    /// System uptime in seconds.
    #[serde(deserialize_with = "u64_lenient")]
    pub uptime: u64,
    /// Support subscription level.
    pub level: String,
}

/// Detailed status information for a Proxmox node.
///
/// Returned by the `/api2/json/nodes/{node}/status` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeStatus {
    #[serde(deserialize_with = "f64_lenient")]
    pub cpu: f64,
    pub cpuinfo: NodeCpuInfo,
    pub memory: MemoryInfo,
    pub rootfs: FilesystemInfo,
    pub swap: MemoryInfo,
    #[serde(deserialize_with = "u64_lenient")]
    pub uptime: u64,
    /// Load average over 1, 5, and 15 minutes.
    #[serde(deserialize_with = "f64_vec_lenient")]
    pub loadavg: Vec<f64>,
    pub kversion: String,
    /// IO delay (0.0 to 1.0).
    #[serde(deserialize_with = "f64_lenient")]
    pub wait: f64,
    pub pveversion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeCpuInfo {
    pub cpus: u32,
    pub model: String,
    pub sockets: u32,
    pub mhz: String,
}

/// Memory usage information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MemoryInfo {
    #[serde(deserialize_with = "u64_lenient")]
    pub used: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub total: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub free: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilesystemInfo {
    #[serde(deserialize_with = "u64_lenient")]
    pub used: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub total: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub avail: u64,
}

/// Version information from `/api2/json/nodes/{node}/version`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeVersion {
    pub version: String,
    pub release: String,
    pub repoid: String,
}
