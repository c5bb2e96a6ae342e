//! Domain models for cluster-wide resources.
//!
//! `/cluster/resources` returns a heterogeneous list (VMs, containers, storage,
//! nodes, pools, SDN zones, ...), each identified by a `type` field. The list
//! is modelled as one flat struct so that types this client does not know yet
//! still decode.

use super::serde_helpers::{f64_lenient, u64_lenient};
use serde::{Deserialize, Serialize};

/// A resource discovered in the Proxmox cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterResource {
    /// Unique resource identifier (e.g., `qemu/100`, `storage/pve1/local`).
    pub id: String,
    /// Resource type (`qemu`, `lxc`, `node`, `storage`, `pool`, `sdn`, ...).
    #[serde(rename = "type")]
    pub resource_type: String,
    pub node: String,
    pub status: String,
    pub name: String,
    #[serde(deserialize_with = "u64_lenient")]
    pub vmid: u64,
    pub maxcpu: u32,
    #[serde(deserialize_with = "f64_lenient")]
    pub cpu: f64,
    #[serde(deserialize_with = "u64_lenient")]
    pub maxmem: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub mem: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub maxdisk: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub disk: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub uptime: u64,
    pub level: String,
    /// Storage identifier, for `storage` entries.
    pub storage: String,
    /// Storage plugin type, for `storage` entries.
    pub plugintype: String,
}

/// One entry of `/cluster/status`: either the cluster itself or a member node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterStatus {
    /// `cluster` or `node`.
    #[serde(rename = "type")]
    pub status_type: String,
    pub id: String,
    pub name: String,
    pub nodes: u32,
    pub quorate: u8,
    pub version: u32,
    pub ip: String,
    pub online: u8,
    pub local: u8,
}

impl ClusterStatus {
    pub fn is_cluster(&self) -> bool {
        self.status_type == "cluster"
    }
}
