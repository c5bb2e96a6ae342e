use crate::core::domain::error::{SessionDefect, ValidationError};
use crate::core::domain::value_object::proxmox_host::host_for_url;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Root of every JSON API route.
pub const API_ROOT: &str = "/api2/json";

/// URL scheme used to reach the Proxmox API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpScheme {
    Http,
    #[default]
    Https,
}

impl HttpScheme {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpScheme::Http => "http",
            HttpScheme::Https => "https",
        }
    }

    /// Parses the scheme as stored in the session file.
    pub(crate) fn from_stored(value: &str) -> Result<Self, SessionDefect> {
        match value {
            "" => Err(SessionDefect::MissingScheme),
            other => other
                .parse()
                .map_err(|_| SessionDefect::UnsupportedScheme(other.to_string())),
        }
    }
}

impl fmt::Display for HttpScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpScheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(HttpScheme::Http),
            "https" => Ok(HttpScheme::Https),
            _ => Err(ValidationError::Field {
                field: "httpScheme".to_string(),
                message: format!("'{}' is not one of: http, https", s),
            }),
        }
    }
}

/// Builds `scheme://host:port/api2/json/<path>` and checks that it parses as a URL.
pub(crate) fn api_url(
    scheme: HttpScheme,
    host: &str,
    port: u16,
    path: &str,
) -> Result<String, ValidationError> {
    let url = format!(
        "{}://{}:{}{}/{}",
        scheme,
        host_for_url(host),
        port,
        API_ROOT,
        path.trim_start_matches('/')
    );
    url::Url::parse(&url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    Ok(url)
}
