//! Session-backed HTTP client for the `/api2/json` routes.

use crate::core::{
    domain::{
        error::{ProxmoxError, ProxmoxResult},
        model::session::Session,
        value_object::AUTH_COOKIE_NAME,
    },
    infrastructure::{
        session_store::{FileSessionStore, SessionStore},
        transport::{Cookie, FORM_CONTENT_TYPE, Headers, HttpTransport, Transport},
    },
};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, de::DeserializeOwned};

/// Every Proxmox response wraps its payload as `{ "data": ... }`.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Internal HTTP client that resolves the stored session and presents its credentials.
///
/// Reads carry only the `PVEAuthCookie` cookie. Actions also carry the
/// `CSRFPreventionToken` header. The session is read from the store on each
/// call, so a missing or invalid session aborts before any network access.
#[derive(Debug)]
pub struct ApiClient<T = HttpTransport, S = FileSessionStore> {
    transport: T,
    store: S,
}

impl<T, S> ApiClient<T, S>
where
    T: Transport,
    S: SessionStore,
{
    pub fn new(transport: T, store: S) -> Self {
        Self { transport, store }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Performs an authenticated GET and decodes the `data` payload.
    ///
    /// # Errors
    /// Returns the store's error unchanged if the session is unusable,
    /// `ProxmoxError::Api` on a non-success status and `ProxmoxError::Decode`
    /// if the body does not match `{ "data": R }`.
    pub async fn get<R>(&self, path: &str) -> ProxmoxResult<R>
    where
        R: DeserializeOwned,
    {
        let session = self.session().await?;
        let url = session.api_url(path)?;

        let response = self
            .transport
            .get(&url, &Headers::new(), &[auth_cookie(&session)])
            .await?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProxmoxError::Connection(format!("Failed to read response: {}", e)))?;
        tracing::debug!(url = %url, status = status.as_u16(), body = %text, "API response");

        if !status.is_success() {
            tracing::error!(url = %url, status = status.as_u16(), "API error response");
            return Err(ProxmoxError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        decode_data(&text)
    }

    /// Performs an authenticated POST with an empty form body.
    ///
    /// Returns the task identifier (UPID) exactly as the server sent it.
    pub async fn post_action(&self, path: &str) -> ProxmoxResult<String> {
        let session = self.session().await?;
        let url = session.api_url(path)?;

        let body = self
            .transport
            .post(&url, String::new(), &action_headers(&session), &[auth_cookie(&session)])
            .await?;
        decode_data(&body)
    }

    /// Performs an authenticated DELETE.
    ///
    /// Returns the task identifier (UPID) exactly as the server sent it.
    pub async fn delete_action(&self, path: &str) -> ProxmoxResult<String> {
        let session = self.session().await?;
        let url = session.api_url(path)?;

        let body = self
            .transport
            .delete(&url, &action_headers(&session), &[auth_cookie(&session)])
            .await?;
        decode_data(&body)
    }

    async fn session(&self) -> ProxmoxResult<Session> {
        self.store.read().await.inspect_err(|e| {
            tracing::error!(error = %e, "Unable to load session");
        })
    }
}

pub(crate) fn auth_cookie(session: &Session) -> Cookie {
    Cookie::new(AUTH_COOKIE_NAME, session.auth().ticket().url_encoded())
}

fn action_headers(session: &Session) -> Headers {
    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE.to_string(), FORM_CONTENT_TYPE.to_string());
    let (name, value) = session.auth().csrf_token().as_header();
    headers.insert(name, value);
    headers
}

fn decode_data<R>(text: &str) -> ProxmoxResult<R>
where
    R: DeserializeOwned,
{
    serde_json::from_str::<DataEnvelope<R>>(text)
        .map(|envelope| envelope.data)
        .map_err(|e| {
            tracing::error!(error = %e, body = %text, "Failed to decode response");
            ProxmoxError::Decode(format!("Failed to parse response: {}", e))
        })
}
