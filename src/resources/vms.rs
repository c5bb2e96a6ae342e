use crate::{
    ProxmoxClient, ProxmoxResult, SessionStore, Transport, VmAction, VmConfig, VmListItem,
    VmStatusCurrent,
};

impl<T, S> ProxmoxClient<T, S>
where
    T: Transport,
    S: SessionStore,
{
    /// Lists all QEMU VMs on a node.
    ///
    /// # Errors
    /// Returns `ProxmoxError` if the session is unusable, the request fails or
    /// the response cannot be parsed.
    pub async fn vms(&self, node: &str) -> ProxmoxResult<Vec<VmListItem>> {
        self.api_client.get(&format!("nodes/{}/qemu", node)).await
    }

    /// Retrieves the current runtime status of a VM.
    pub async fn vm_status(&self, node: &str, vmid: u64) -> ProxmoxResult<VmStatusCurrent> {
        self.api_client
            .get(&format!("nodes/{}/qemu/{}/status/current", node, vmid))
            .await
    }

    /// Retrieves the configuration of a VM.
    pub async fn vm_config(&self, node: &str, vmid: u64) -> ProxmoxResult<VmConfig> {
        self.api_client
            .get(&format!("nodes/{}/qemu/{}/config", node, vmid))
            .await
    }

    /// Requests a power-state change.
    ///
    /// Returns the task identifier (UPID) of the asynchronous job. The task is
    /// not polled.
    pub async fn vm_action(&self, node: &str, vmid: u64, action: VmAction) -> ProxmoxResult<String> {
        self.api_client
            .post_action(&format!("nodes/{}/qemu/{}/status/{}", node, vmid, action))
            .await
    }

    pub async fn start_vm(&self, node: &str, vmid: u64) -> ProxmoxResult<String> {
        self.vm_action(node, vmid, VmAction::Start).await
    }

    /// Hard stop, equivalent to pulling the power.
    pub async fn stop_vm(&self, node: &str, vmid: u64) -> ProxmoxResult<String> {
        self.vm_action(node, vmid, VmAction::Stop).await
    }

    /// ACPI shutdown.
    pub async fn shutdown_vm(&self, node: &str, vmid: u64) -> ProxmoxResult<String> {
        self.vm_action(node, vmid, VmAction::Shutdown).await
    }

    pub async fn reboot_vm(&self, node: &str, vmid: u64) -> ProxmoxResult<String> {
        self.vm_action(node, vmid, VmAction::Reboot).await
    }

    pub async fn reset_vm(&self, node: &str, vmid: u64) -> ProxmoxResult<String> {
        self.vm_action(node, vmid, VmAction::Reset).await
    }

    pub async fn suspend_vm(&self, node: &str, vmid: u64) -> ProxmoxResult<String> {
        self.vm_action(node, vmid, VmAction::Suspend).await
    }

    pub async fn resume_vm(&self, node: &str, vmid: u64) -> ProxmoxResult<String> {
        self.vm_action(node, vmid, VmAction::Resume).await
    }

    /// Destroys a VM and its disks. Returns the task identifier.
    pub async fn delete_vm(&self, node: &str, vmid: u64) -> ProxmoxResult<String> {
        self.api_client
            .delete_action(&format!("nodes/{}/qemu/{}", node, vmid))
            .await
    }
}
