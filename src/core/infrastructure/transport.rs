//! HTTP transport used by every component that talks to the Proxmox API.

use crate::core::domain::error::{ProxmoxError, ProxmoxResult};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, header::COOKIE};
use std::collections::BTreeMap;

/// Content type of the login and renewal bodies, and of every action request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Request headers, by name.
pub type Headers = BTreeMap<String, String>;

/// A cookie sent with a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Performs one HTTP request per call.
///
/// Reads hand the response back open so the caller decides how to consume the
/// body; writes return the body text and fail on any non-2xx status. Nothing
/// is retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> ProxmoxResult<reqwest::Response>;

    async fn post(
        &self,
        url: &str,
        payload: String,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> ProxmoxResult<String>;

    async fn put(
        &self,
        url: &str,
        payload: String,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> ProxmoxResult<String>;

    async fn delete(&self, url: &str, headers: &Headers, cookies: &[Cookie])
    -> ProxmoxResult<String>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Creates a transport. `accept_invalid_certs` is fixed for its lifetime.
    ///
    /// # Errors
    /// Returns `ProxmoxError::Connection` if the HTTP client cannot be built.
    pub fn new(accept_invalid_certs: bool) -> ProxmoxResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| ProxmoxError::Connection(e.to_string()))?;
        Ok(Self { http_client })
    }

    fn request(
        &self,
        method: Method,
        url: &str,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> RequestBuilder {
        tracing::info!(
            method = %method,
            url,
            headers = ?headers,
            cookies = ?cookies,
            "Sending request"
        );

        let mut builder = self.http_client.request(method, url);
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !cookies.is_empty() {
            builder = builder.header(COOKIE, cookie_header(cookies));
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> ProxmoxResult<reqwest::Response> {
        builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "HTTP request failed");
            ProxmoxError::Connection(format!("HTTP request failed: {}", e))
        })
    }

    async fn write(
        &self,
        method: Method,
        url: &str,
        payload: Option<String>,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> ProxmoxResult<String> {
        let mut builder = self.request(method, url, headers, cookies);
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }

        let response = self.send(builder).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProxmoxError::Connection(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %text, "API error response");
            return Err(ProxmoxError::Api {
                status: status.as_u16(),
                message: text,
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> ProxmoxResult<reqwest::Response> {
        let builder = self.request(Method::GET, url, headers, cookies);
        self.send(builder).await
    }

    async fn post(
        &self,
        url: &str,
        payload: String,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> ProxmoxResult<String> {
        self.write(Method::POST, url, Some(payload), headers, cookies)
            .await
    }

    async fn put(
        &self,
        url: &str,
        payload: String,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> ProxmoxResult<String> {
        self.write(Method::PUT, url, Some(payload), headers, cookies)
            .await
    }

    async fn delete(
        &self,
        url: &str,
        headers: &Headers,
        cookies: &[Cookie],
    ) -> ProxmoxResult<String> {
        self.write(Method::DELETE, url, None, headers, cookies)
            .await
    }
}

fn cookie_header(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join("; ")
}
