//! The persisted session: where the cluster is and which credentials to present.

use crate::core::domain::{
    error::{ProxmoxError, ProxmoxResult, SessionDefect},
    model::proxmox_auth::{AuthEnvelope, ProxmoxAuth},
    value_object::{HttpScheme, api_url, port_from_stored, validate_host, validate_port},
};
use serde::{Deserialize, Serialize};

/// A complete, validated session.
///
/// Values of this type only exist when all six required fields are present,
/// so holders never need to re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    server: String,
    port: u16,
    scheme: HttpScheme,
    auth: ProxmoxAuth,
}

/// One mutation of a stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    SetServer(String),
    SetPort(u16),
    SetScheme(HttpScheme),
    /// Replaces the authentication payload with a raw ticket response body.
    ReplaceAuth(String),
}

impl Session {
    pub fn new(server: impl Into<String>, port: u16, scheme: HttpScheme, auth: ProxmoxAuth) -> Self {
        Self {
            server: server.into(),
            port,
            scheme,
            auth,
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn scheme(&self) -> HttpScheme {
        self.scheme
    }

    pub fn auth(&self) -> &ProxmoxAuth {
        &self.auth
    }

    /// Absolute URL of an API route, e.g. `nodes/pve1/qemu`.
    pub fn api_url(&self, path: &str) -> ProxmoxResult<String> {
        Ok(api_url(self.scheme, &self.server, self.port, path)?)
    }

    /// Applies an update in place. On error the session is unchanged.
    pub fn apply(&mut self, update: SessionUpdate) -> ProxmoxResult<()> {
        match update {
            SessionUpdate::SetServer(server) => {
                validate_host(&server)?;
                self.server = server;
            }
            SessionUpdate::SetPort(port) => {
                validate_port(port)?;
                self.port = port;
            }
            SessionUpdate::SetScheme(scheme) => self.scheme = scheme,
            SessionUpdate::ReplaceAuth(body) => {
                let envelope: AuthEnvelope = serde_json::from_str(&body).map_err(|e| {
                    ProxmoxError::Decode(format!("Failed to parse ticket response: {}", e))
                })?;
                self.auth = envelope.into_auth()?;
            }
        }
        Ok(())
    }
}

/// On-disk shape of the session file.
///
/// Every field defaults so that a partial file still decodes and can be
/// reported field by field instead of as a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SessionRecord {
    pub server: String,
    pub port: i64,
    #[serde(rename = "httpScheme")]
    pub http_scheme: String,
    pub response: AuthEnvelope,
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        SessionRecord {
            server: session.server.clone(),
            port: i64::from(session.port),
            http_scheme: session.scheme.as_str().to_string(),
            response: AuthEnvelope::from(&session.auth),
        }
    }
}

impl TryFrom<SessionRecord> for Session {
    type Error = SessionDefect;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if record.server.is_empty() {
            return Err(SessionDefect::MissingServer);
        }
        let port = port_from_stored(record.port).ok_or(SessionDefect::InvalidPort)?;
        let scheme = HttpScheme::from_stored(&record.http_scheme)?;
        let auth = record.response.into_auth()?;
        Ok(Session {
            server: record.server,
            port,
            scheme,
            auth,
        })
    }
}
