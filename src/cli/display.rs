//! Text rendering for command output.
//!
//! Lists become `comfy-table` tables, single objects become aligned
//! `Label: value` lines. Every renderer returns a `String` so output can be
//! asserted on directly.

use crate::{
    ClusterResource, ClusterStatus, Node, NodeStatus, NodeVersion, Storage, StorageContent,
    VmConfig, VmListItem, VmStatusCurrent,
};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};

const SEPARATOR: &str =
    "================================================================================";

/// Formats a byte count with binary units, e.g. `1.50 GB`.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp < PREFIXES.len() - 1 {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.2} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Formats seconds as `Nd Nh Nm`, dropping leading zero units. Zero is `N/A`.
pub fn format_uptime(seconds: u64) -> String {
    if seconds == 0 {
        return "N/A".to_string();
    }
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Usage as a percentage of capacity; empty when capacity is unknown.
fn usage_percent(used: u64, total: u64) -> String {
    if total == 0 {
        String::new()
    } else {
        format_percent(used as f64 / total as f64)
    }
}

fn usage_line(used: u64, total: u64) -> String {
    let line = format!("{} / {}", format_bytes(used), format_bytes(total));
    match usage_percent(used, total) {
        pct if pct.is_empty() => line,
        pct => format!("{} ({})", line, pct),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(*h).set_alignment(CellAlignment::Left))
                .collect::<Vec<_>>(),
        );
    table
}

fn details(title: &str, rows: &[(&str, String)]) -> String {
    let mut out = format!("{}\n{}\n", title, SEPARATOR);
    for (label, value) in rows {
        out.push_str(&format!("{:<17}{}\n", format!("{}:", label), value));
    }
    out
}

pub fn render_nodes(nodes: &[Node]) -> String {
    if nodes.is_empty() {
        return "No nodes found".to_string();
    }
    let mut table = new_table(&["NODE", "STATUS", "CPU %", "MEMORY", "UPTIME"]);
    for node in nodes {
        table.add_row(vec![
            node.node.clone(),
            node.status.clone(),
            format_percent(node.cpu),
            usage_percent(node.mem, node.maxmem),
            format_uptime(node.uptime),
        ]);
    }
    table.to_string()
}

pub fn render_node(node: &Node) -> String {
    details(
        &format!("Node: {}", node.node),
        &[
            ("Status", node.status.clone()),
            ("CPU Usage", format_percent(node.cpu)),
            ("CPUs", node.maxcpu.to_string()),
            ("Memory Used", usage_line(node.mem, node.maxmem)),
            ("Uptime", format_uptime(node.uptime)),
            ("Support Level", node.level.clone()),
        ],
    )
}

pub fn render_node_status(name: &str, status: &NodeStatus) -> String {
    let loadavg = status
        .loadavg
        .iter()
        .map(|l| format!("{:.2}", l))
        .collect::<Vec<_>>()
        .join(", ");
    details(
        &format!("Node Status for: {}", name),
        &[
            ("CPU Usage", format_percent(status.cpu)),
            ("CPU Model", status.cpuinfo.model.clone()),
            ("CPU Cores", status.cpuinfo.cpus.to_string()),
            ("Memory Used", usage_line(status.memory.used, status.memory.total)),
            (
                "Swap Used",
                format!(
                    "{} / {}",
                    format_bytes(status.swap.used),
                    format_bytes(status.swap.total)
                ),
            ),
            ("Root FS Used", usage_line(status.rootfs.used, status.rootfs.total)),
            ("Uptime", format_uptime(status.uptime)),
            ("Load Average", loadavg),
            ("IO Delay", format_percent(status.wait)),
            ("Kernel Version", status.kversion.clone()),
            ("PVE Version", status.pveversion.clone()),
        ],
    )
}

pub fn render_node_version(name: &str, version: &NodeVersion) -> String {
    details(
        &format!("Node: {}", name),
        &[
            ("Version", version.version.clone()),
            ("Release", version.release.clone()),
            ("Repo ID", version.repoid.clone()),
        ],
    )
}

pub fn render_vms(node: &str, vms: &[VmListItem]) -> String {
    if vms.is_empty() {
        return format!("No VMs found on node: {}", node);
    }
    let mut table = new_table(&["VMID", "NAME", "STATUS", "CPU %", "MEMORY", "UPTIME"]);
    for vm in vms {
        table.add_row(vec![
            vm.vmid.to_string(),
            vm.name.clone(),
            vm.status.clone(),
            format_percent(vm.cpu),
            usage_percent(vm.mem, vm.maxmem),
            format_uptime(vm.uptime),
        ]);
    }
    table.to_string()
}

pub fn render_vm_status(vmid: u64, status: &VmStatusCurrent) -> String {
    let mut rows = vec![
        ("Name", status.name.clone()),
        ("Status", status.status.clone()),
        ("QMP Status", status.qmpstatus.clone()),
        ("CPU Usage", format_percent(status.cpu)),
        ("CPU Cores", status.cpus.to_string()),
    ];
    if status.maxmem > 0 {
        rows.push(("Memory Used", usage_line(status.mem, status.maxmem)));
    }
    rows.push(("Uptime", format_uptime(status.uptime)));
    details(&format!("VM Status for VMID: {}", vmid), &rows)
}

pub fn render_vm_config(vmid: u64, config: &VmConfig) -> String {
    details(
        &format!("VM Config for VMID: {}", vmid),
        &[
            ("Name", config.name.clone()),
            ("Memory", format!("{} MiB", config.memory)),
            ("Cores", config.cores.to_string()),
            ("Sockets", config.sockets.to_string()),
            ("OS Type", config.ostype.clone()),
            ("Boot", config.boot.clone()),
            ("Boot Disk", config.bootdisk.clone()),
            ("Description", config.description.clone()),
        ],
    )
}

pub fn render_storages(storages: &[Storage]) -> String {
    if storages.is_empty() {
        return "No storage found".to_string();
    }
    let mut table = new_table(&["STORAGE", "TYPE", "SHARED", "ACTIVE", "CONTENT"]);
    for storage in storages {
        table.add_row(vec![
            storage.storage.clone(),
            storage.storage_type.clone(),
            yes_no(storage.is_shared()).to_string(),
            yes_no(storage.is_active()).to_string(),
            storage.content.clone(),
        ]);
    }
    table.to_string()
}

pub fn render_storage_content(storage: &str, contents: &[StorageContent]) -> String {
    if contents.is_empty() {
        return format!("No content found in storage: {}", storage);
    }
    let mut table = new_table(&["VOLUME ID", "FORMAT", "SIZE", "VMID"]);
    for content in contents {
        let vmid = if content.vmid == 0 {
            "-".to_string()
        } else {
            content.vmid.to_string()
        };
        table.add_row(vec![
            content.volid.clone(),
            content.format.clone(),
            format_bytes(content.size),
            vmid,
        ]);
    }
    table.to_string()
}

/// Renders cluster resources, keeping only `resource_type` when given.
pub fn render_cluster_resources(resources: &[ClusterResource], resource_type: Option<&str>) -> String {
    let filtered: Vec<&ClusterResource> = resources
        .iter()
        .filter(|r| resource_type.is_none_or(|t| r.resource_type == t))
        .collect();

    if filtered.is_empty() {
        return match resource_type {
            Some(t) => format!("No resources found of type: {}", t),
            None => "No resources found".to_string(),
        };
    }

    let mut table = new_table(&["TYPE", "ID", "NAME", "NODE", "STATUS", "UPTIME"]);
    for resource in filtered {
        table.add_row(vec![
            resource.resource_type.clone(),
            resource.id.clone(),
            resource.name.clone(),
            resource.node.clone(),
            resource.status.clone(),
            format_uptime(resource.uptime),
        ]);
    }
    table.to_string()
}

pub fn render_cluster_status(statuses: &[ClusterStatus]) -> String {
    if statuses.is_empty() {
        return "No cluster status found".to_string();
    }
    let mut out = format!("Cluster Status:\n{}\n", SEPARATOR);
    for status in statuses {
        out.push_str(&format!("Type: {}\n", status.status_type));
        if !status.name.is_empty() {
            out.push_str(&format!("Name: {}\n", status.name));
        }
        if status.is_cluster() {
            out.push_str(&format!("Nodes: {}\n", status.nodes));
            out.push_str(&format!("Quorate: {}\n", yes_no(status.quorate == 1)));
            out.push_str(&format!("Version: {}\n", status.version));
        }
        if !status.ip.is_empty() {
            out.push_str(&format!("IP: {}\n", status.ip));
        }
        if !status.is_cluster() {
            out.push_str(&format!("Online: {}\n", yes_no(status.online == 1)));
        }
        out.push_str("---\n");
    }
    out
}
