mod auth;
pub mod cli;
mod core;
mod resources;


pub use crate::core::domain::error::{ProxmoxError, ProxmoxResult, SessionDefect, ValidationError};
pub use crate::core::domain::model::{
    cluster_resource::{ClusterResource, ClusterStatus},
    node::{FilesystemInfo, MemoryInfo, Node, NodeCpuInfo, NodeStatus, NodeVersion},
    proxmox_auth::ProxmoxAuth,
    session::{Session, SessionUpdate},
    storage::{Storage, StorageContent},
    vm::{VmAction, VmConfig, VmListItem, VmStatusCurrent},
};
pub use crate::core::domain::value_object::{
    DEFAULT_PORT, HttpScheme, ProxmoxCSRFToken, ProxmoxTicket,
};
pub use crate::core::infrastructure::{
    session_store::{FileSessionStore, SessionStore},
    transport::{Cookie, Headers, HttpTransport, Transport},
};

use crate::{
    auth::application::service::auth_service::AuthService,
    core::infrastructure::api_client::ApiClient,
};
use std::path::{Path, PathBuf};

/// A client for a Proxmox VE cluster backed by a persisted login session.
///
/// `login` stores a ticket on disk; every other call reads that session,
/// presents its credentials and decodes the `{ "data": ... }` envelope.
///
/// # Examples
///
/// ```no_run
/// use proxmox_cli::{HttpScheme, ProxmoxClient, ProxmoxResult};
///
/// #[tokio::main]
/// async fn main() -> ProxmoxResult<()> {
///     let client = ProxmoxClient::builder()
///         .accept_invalid_certs(true)
///         .build()?;
///
///     client
///         .login("pve.example.com", 8006, HttpScheme::Https, "root", "password")
///         .await?;
///
///     for node in client.nodes().await? {
///         println!("{} {}", node.node, node.status);
///     }
///     Ok(())
/// }
/// ```
pub struct ProxmoxClient<T = HttpTransport, S = FileSessionStore> {
    pub(crate) api_client: ApiClient<T, S>,
    pub(crate) config: ClientConfig,
}

/// Settings fixed when the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Skip TLS certificate validation (self-signed clusters).
    pub accept_invalid_certs: bool,
    /// Location of the session file.
    pub session_path: PathBuf,
}

/// Builder for ProxmoxClient configuration
#[derive(Debug, Default)]
pub struct ProxmoxClientBuilder {
    accept_invalid_certs: bool,
    session_path: Option<PathBuf>,
}

impl ProxmoxClientBuilder {
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Overrides the default `~/.proxmox/session` location.
    pub fn session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self
    }

    /// # Errors
    /// Returns `ProxmoxError::Persistence` if no session path was given and the
    /// home directory cannot be determined, or `ProxmoxError::Connection` if
    /// the HTTP client cannot be built.
    pub fn build(self) -> ProxmoxResult<ProxmoxClient> {
        let session_path = match self.session_path {
            Some(path) => path,
            None => FileSessionStore::default_path()?,
        };
        let config = ClientConfig {
            accept_invalid_certs: self.accept_invalid_certs,
            session_path,
        };

        let transport = HttpTransport::new(config.accept_invalid_certs)?;
        let store = FileSessionStore::new(config.session_path.clone());
        Ok(ProxmoxClient::with_parts(transport, store, config))
    }
}

impl ProxmoxClient {
    /// Creates a new builder for ProxmoxClient configuration
    pub fn builder() -> ProxmoxClientBuilder {
        ProxmoxClientBuilder::default()
    }
}

impl<T, S> ProxmoxClient<T, S>
where
    T: Transport,
    S: SessionStore,
{
    /// Assembles a client from an explicit transport and session store.
    pub fn with_parts(transport: T, store: S, config: ClientConfig) -> Self {
        Self {
            api_client: ApiClient::new(transport, store),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session_path(&self) -> &Path {
        &self.config.session_path
    }

    /// Authenticates with a password and stores a new session.
    ///
    /// Only PAM accounts are supported; the realm is always `pam`.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The server or port is invalid
    /// - The server is unreachable or rejects the credentials
    /// - The response carries no ticket
    /// - The session file cannot be written
    pub async fn login(
        &self,
        server: &str,
        port: u16,
        scheme: HttpScheme,
        username: &str,
        password: &str,
    ) -> ProxmoxResult<Session> {
        self.auth_service()
            .login(server, port, scheme, username, password)
            .await
    }

    /// Renews the stored ticket. Returns `true` only if every step succeeded.
    pub async fn validate(&self) -> bool {
        self.auth_service().validate().await
    }

    /// Returns the stored session, if it is complete.
    pub async fn session(&self) -> ProxmoxResult<Session> {
        self.api_client.store().read().await
    }

    fn auth_service(&self) -> AuthService<'_, T, S> {
        AuthService::new(self.api_client.transport(), self.api_client.store())
    }
}
