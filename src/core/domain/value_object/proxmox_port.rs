use crate::core::domain::error::ValidationError;

/// Port the Proxmox API listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 8006;

/// Validates a port number.
pub(crate) fn validate_port(port: u16) -> Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::Field {
            field: "port".to_string(),
            message: "Port cannot be 0".to_string(),
        });
    }
    // All ports 1-65535 are valid.
    Ok(())
}

/// Converts a port read from the session file, rejecting anything outside `1..=65535`.
pub(crate) fn port_from_stored(port: i64) -> Option<u16> {
    u16::try_from(port).ok().filter(|p| *p > 0)
}
