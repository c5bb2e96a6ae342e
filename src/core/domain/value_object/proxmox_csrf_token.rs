use serde::{Deserialize, Serialize};

/// Header the API expects the anti-forgery token in.
pub const CSRF_HEADER_NAME: &str = "CSRFPreventionToken";

/// A Proxmox CSRF protection token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxmoxCSRFToken(String);

impl ProxmoxCSRFToken {
    /// Creates a new CSRF token without validation.
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the token as a `(name, value)` header pair.
    #[must_use]
    pub fn as_header(&self) -> (String, String) {
        (CSRF_HEADER_NAME.to_string(), self.0.clone())
    }
}
