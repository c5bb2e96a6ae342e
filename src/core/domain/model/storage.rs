//! Domain models for storage definitions and their content.

use super::serde_helpers::u64_lenient;
use serde::{Deserialize, Serialize};

/// A storage definition from `/api2/json/storage`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Storage {
    /// Storage identifier (e.g., `local`, `nfs-backup`).
    pub storage: String,
    /// Storage plugin type (e.g., `dir`, `zfspool`, `lvmthin`).
    #[serde(rename = "type")]
    pub storage_type: String,
    /// Comma separated list of content types (e.g., `iso,vztmpl,backup`).
    pub content: String,
    pub shared: u8,
    pub active: u8,
    pub enabled: u8,
}

impl Storage {
    pub fn is_shared(&self) -> bool {
        self.shared == 1
    }

    pub fn is_active(&self) -> bool {
        self.active == 1
    }
}

/// A volume listed by `/nodes/{node}/storage/{storage}/content`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageContent {
    pub volid: String,
    pub format: String,
    /// Volume size in bytes.
    #[serde(deserialize_with = "u64_lenient")]
    pub size: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub used: u64,
    /// Owning VM, zero when the volume is not attached to one.
    #[serde(deserialize_with = "u64_lenient")]
    pub vmid: u64,
    /// Creation time as a UNIX timestamp.
    #[serde(deserialize_with = "u64_lenient")]
    pub ctime: u64,
}
