//! Authentication payload issued by the `/access/ticket` endpoint.

use crate::core::domain::{
    error::SessionDefect,
    value_object::{ProxmoxCSRFToken, ProxmoxTicket},
};
use serde::{Deserialize, Serialize};

/// Wire shape of a ticket response, `{ "data": { ... } }`.
///
/// The same shape is nested under `response` in the session file. Extra keys
/// the server sends (`cap`, `clustername`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEnvelope {
    pub data: Option<AuthData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthData {
    pub username: String,
    pub ticket: String,
    #[serde(rename = "CSRFPreventionToken")]
    pub csrf_token: String,
}

impl AuthEnvelope {
    /// Validates the payload into a [`ProxmoxAuth`].
    pub fn into_auth(self) -> Result<ProxmoxAuth, SessionDefect> {
        ProxmoxAuth::try_from(self.data.unwrap_or_default())
    }
}

/// A complete set of credentials: username, ticket and anti-forgery token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxAuth {
    username: String,
    ticket: ProxmoxTicket,
    csrf_token: ProxmoxCSRFToken,
}

impl ProxmoxAuth {
    pub fn new(
        username: impl Into<String>,
        ticket: ProxmoxTicket,
        csrf_token: ProxmoxCSRFToken,
    ) -> Self {
        Self {
            username: username.into(),
            ticket,
            csrf_token,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn ticket(&self) -> &ProxmoxTicket {
        &self.ticket
    }

    pub fn csrf_token(&self) -> &ProxmoxCSRFToken {
        &self.csrf_token
    }
}

impl TryFrom<AuthData> for ProxmoxAuth {
    type Error = SessionDefect;

    fn try_from(data: AuthData) -> Result<Self, Self::Error> {
        if data.username.is_empty() {
            return Err(SessionDefect::MissingUsername);
        }
        if data.ticket.is_empty() {
            return Err(SessionDefect::MissingTicket);
        }
        if data.csrf_token.is_empty() {
            return Err(SessionDefect::MissingCsrfToken);
        }
        Ok(Self {
            username: data.username,
            ticket: ProxmoxTicket::new_unchecked(data.ticket),
            csrf_token: ProxmoxCSRFToken::new_unchecked(data.csrf_token),
        })
    }
}

impl From<&ProxmoxAuth> for AuthEnvelope {
    fn from(auth: &ProxmoxAuth) -> Self {
        AuthEnvelope {
            data: Some(AuthData {
                username: auth.username.clone(),
                ticket: auth.ticket.as_str().to_string(),
                csrf_token: auth.csrf_token.as_str().to_string(),
            }),
        }
    }
}
