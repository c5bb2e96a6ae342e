use crate::{ProxmoxClient, ProxmoxResult, SessionStore, Storage, StorageContent, Transport};

impl<T, S> ProxmoxClient<T, S>
where
    T: Transport,
    S: SessionStore,
{
    /// Lists the storage definitions of the cluster.
    pub async fn storages(&self) -> ProxmoxResult<Vec<Storage>> {
        self.api_client.get("storage").await
    }

    /// Lists the volumes held by one storage, as seen from `node`.
    pub async fn storage_content(
        &self,
        node: &str,
        storage: &str,
    ) -> ProxmoxResult<Vec<StorageContent>> {
        self.api_client
            .get(&format!("nodes/{}/storage/{}/content", node, storage))
            .await
    }
}
