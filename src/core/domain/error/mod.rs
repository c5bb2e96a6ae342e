use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Proxmox CLI operations.
///
/// Every component returns the first error it encounters; nothing in the
/// session or resource plumbing retries.
#[derive(Error, Debug)]
pub enum ProxmoxError {
    /// No usable session file exists yet
    ///
    /// # Fields
    /// * `path` - Location the session was expected at
    #[error("No session found at {}; run `login` first", path.display())]
    SessionMissing { path: PathBuf },

    /// The session file exists but one of its required fields is unusable
    #[error("Invalid session: {0}")]
    SessionInvalid(#[from] SessionDefect),

    /// Represents errors that occur while talking to the server
    /// (DNS, connect, TLS, or a request that could not be built)
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server answered with a non-success HTTP status
    ///
    /// # Fields
    /// * `status` - HTTP status code
    /// * `message` - Response body, if any
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not JSON or did not match the expected envelope
    #[error("Decode error: {0}")]
    Decode(String),

    /// Filesystem failure while reading or writing the session file
    #[error("Session file error at {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Represents authentication failures
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// A looked-up resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Represents validation failures of caller-supplied input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ProxmoxError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProxmoxError::Persistence {
            path: path.into(),
            source,
        }
    }
}

/// Why a stored session was rejected.
///
/// Each required field has its own variant so diagnostics name the exact
/// field that was missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionDefect {
    #[error("missing server")]
    MissingServer,
    #[error("missing or invalid port")]
    InvalidPort,
    #[error("missing httpScheme")]
    MissingScheme,
    #[error("unsupported httpScheme '{0}'")]
    UnsupportedScheme(String),
    #[error("missing 'username' field in data")]
    MissingUsername,
    #[error("missing 'ticket' field in data")]
    MissingTicket,
    #[error("missing 'CSRFPreventionToken' field in data")]
    MissingCsrfToken,
    #[error("malformed session file: {0}")]
    Malformed(String),
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),
}

/// Type alias for Results that may fail with a ProxmoxError
pub type ProxmoxResult<T> = Result<T, ProxmoxError>;
