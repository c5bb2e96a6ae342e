mod http_scheme;
mod proxmox_csrf_token;
mod proxmox_host;
mod proxmox_port;
mod proxmox_ticket;

pub use http_scheme::HttpScheme;
pub use proxmox_csrf_token::ProxmoxCSRFToken;
pub use proxmox_port::DEFAULT_PORT;
pub use proxmox_ticket::{AUTH_COOKIE_NAME, ProxmoxTicket};

// Re-export validation functions for internal use
pub(crate) use http_scheme::api_url;
pub(crate) use proxmox_host::validate_host;
pub(crate) use proxmox_port::{port_from_stored, validate_port};
