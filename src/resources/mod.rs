//! Typed read and action operations on Proxmox resources.
//!
//! Each submodule extends [`ProxmoxClient`](crate::ProxmoxClient) with the
//! calls for one resource family.

mod cluster;
mod nodes;
mod storage;
mod vms;
