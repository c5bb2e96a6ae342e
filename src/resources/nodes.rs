use crate::{
    Node, NodeStatus, NodeVersion, ProxmoxClient, ProxmoxError, ProxmoxResult, SessionStore,
    Transport,
};

impl<T, S> ProxmoxClient<T, S>
where
    T: Transport,
    S: SessionStore,
{
    /// Lists all nodes in the cluster.
    ///
    /// # Errors
    /// Returns `ProxmoxError` if the session is unusable, the request fails or
    /// the response cannot be parsed.
    pub async fn nodes(&self) -> ProxmoxResult<Vec<Node>> {
        self.api_client.get("nodes").await
    }

    /// Looks up a single node by name.
    ///
    /// # Errors
    /// Returns `ProxmoxError::NotFound` if the cluster has no such node.
    pub async fn node(&self, name: &str) -> ProxmoxResult<Node> {
        self.nodes()
            .await?
            .into_iter()
            .find(|n| n.node == name)
            .ok_or_else(|| ProxmoxError::NotFound(format!("node '{}'", name)))
    }

    /// Retrieves detailed status for a node (CPU, memory, root filesystem, load).
    pub async fn node_status(&self, node: &str) -> ProxmoxResult<NodeStatus> {
        self.api_client.get(&format!("nodes/{}/status", node)).await
    }

    /// Retrieves the Proxmox VE version running on a node.
    pub async fn node_version(&self, node: &str) -> ProxmoxResult<NodeVersion> {
        self.api_client.get(&format!("nodes/{}/version", node)).await
    }
}
