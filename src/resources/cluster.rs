use crate::{ClusterResource, ClusterStatus, ProxmoxClient, ProxmoxResult, SessionStore, Transport};

impl<T, S> ProxmoxClient<T, S>
where
    T: Transport,
    S: SessionStore,
{
    /// Lists every resource in the cluster (VMs, containers, storage, nodes, pools, ...).
    ///
    /// # Errors
    /// Returns `ProxmoxError` if the session is unusable, the request fails or
    /// the response cannot be parsed.
    pub async fn cluster_resources(&self) -> ProxmoxResult<Vec<ClusterResource>> {
        self.api_client.get("cluster/resources").await
    }

    /// Retrieves quorum and membership information.
    pub async fn cluster_status(&self) -> ProxmoxResult<Vec<ClusterStatus>> {
        self.api_client.get("cluster/status").await
    }
}
