pub mod cluster_resource;
pub mod node;
pub mod proxmox_auth;
pub mod serde_helpers;
pub mod session;
pub mod storage;
pub mod vm;
