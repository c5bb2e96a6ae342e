use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the cookie the API expects the ticket in.
pub const AUTH_COOKIE_NAME: &str = "PVEAuthCookie";

/// A Proxmox authentication ticket.
///
/// The ticket is opaque; the only thing checked locally is that it is present.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxmoxTicket(String);

impl ProxmoxTicket {
    /// Creates a new ticket without validation.
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the ticket value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ticket value URL-encoded for use as a cookie value or form field.
    #[must_use]
    pub fn url_encoded(&self) -> String {
        url::form_urlencoded::byte_serialize(self.0.as_bytes()).collect()
    }
}

// Tickets end up in logs through `Debug`; keep only a prefix.
impl fmt::Debug for ProxmoxTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(12).collect();
        write!(f, "ProxmoxTicket({prefix}…)")
    }
}
