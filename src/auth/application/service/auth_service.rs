use crate::{
    auth::application::request::ticket_request::TicketRequest,
    core::{
        domain::{
            error::{ProxmoxError, ProxmoxResult},
            model::{
                proxmox_auth::AuthEnvelope,
                session::{Session, SessionUpdate},
            },
            value_object::{HttpScheme, api_url, validate_host, validate_port},
        },
        infrastructure::{
            api_client::auth_cookie,
            session_store::SessionStore,
            transport::{FORM_CONTENT_TYPE, Headers, Transport},
        },
    },
};
use reqwest::header::CONTENT_TYPE;

const TICKET_PATH: &str = "access/ticket";

/// Obtains and renews tickets, and records them in the session store.
pub struct AuthService<'a, T, S> {
    transport: &'a T,
    store: &'a S,
}

impl<'a, T, S> AuthService<'a, T, S>
where
    T: Transport,
    S: SessionStore,
{
    pub fn new(transport: &'a T, store: &'a S) -> Self {
        Self { transport, store }
    }

    /// Logs in with a password and writes a brand-new session.
    ///
    /// Nothing is written unless the server returned a complete ticket.
    ///
    /// # Errors
    /// - `ProxmoxError::Validation` for a bad server or port, before any request is sent
    /// - `ProxmoxError::Connection` / `ProxmoxError::Api` if the request fails
    /// - `ProxmoxError::Decode` if the response is not JSON
    /// - `ProxmoxError::Authentication` if the response carries no usable ticket
    /// - `ProxmoxError::Persistence` if the session cannot be written
    pub async fn login(
        &self,
        server: &str,
        port: u16,
        scheme: HttpScheme,
        username: &str,
        password: &str,
    ) -> ProxmoxResult<Session> {
        self.try_login(server, port, scheme, username, password)
            .await
            .inspect_err(|e| tracing::error!(server, username, error = %e, "Login failed"))
    }

    async fn try_login(
        &self,
        server: &str,
        port: u16,
        scheme: HttpScheme,
        username: &str,
        password: &str,
    ) -> ProxmoxResult<Session> {
        validate_host(server)?;
        validate_port(port)?;
        let url = api_url(scheme, server, port, TICKET_PATH)?;

        let body = self
            .transport
            .post(
                &url,
                TicketRequest::login(username, password).to_form(),
                &form_headers(),
                &[],
            )
            .await?;

        let envelope: AuthEnvelope = serde_json::from_str(&body).map_err(|e| {
            ProxmoxError::Decode(format!("Failed to parse login response: {}", e))
        })?;
        let auth = envelope
            .into_auth()
            .map_err(|defect| ProxmoxError::Authentication(defect.to_string()))?;

        let session = Session::new(server, port, scheme, auth);
        self.store.write(&session).await?;
        tracing::info!(server, port, username, "Logged in");
        Ok(session)
    }

    /// Renews the stored ticket.
    ///
    /// Presents the current ticket as the password, together with its
    /// `PVEAuthCookie` cookie and `CSRFPreventionToken` header, and replaces the
    /// stored authentication payload with the response. Returns `false` on any
    /// failure, leaving the stored session as it was.
    pub async fn validate(&self) -> bool {
        match self.renew().await {
            Ok(session) => {
                tracing::info!(server = session.server(), "Session renewed");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Session validation failed");
                false
            }
        }
    }

    async fn renew(&self) -> ProxmoxResult<Session> {
        let session = self.store.read().await?;
        let url = session.api_url(TICKET_PATH)?;

        let mut headers = form_headers();
        let (name, value) = session.auth().csrf_token().as_header();
        headers.insert(name, value);
        let request = TicketRequest::renewal(
            session.auth().username(),
            session.auth().ticket().as_str(),
        );

        let body = self
            .transport
            .post(&url, request.to_form(), &headers, &[auth_cookie(&session)])
            .await?;

        self.store.update(SessionUpdate::ReplaceAuth(body)).await
    }
}

fn form_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE.to_string(), FORM_CONTENT_TYPE.to_string());
    headers
}
