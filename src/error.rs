use thiserror::Error;

/// Error type for collaborator failures (hub API, remote spaces, data sources).
///
/// These never reach the MCP client directly: the space router converts every
/// variant into an error summary that names the attempted operation.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// HTTP transport failed (DNS, TLS, connection reset, body decode).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Remote endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    /// The requested space does not exist or is not visible with this token.
    #[error("Space '{0}' not found")]
    NotFound(String),

    /// Could not open an MCP session with a space.
    #[error("Failed to connect to space '{space}': {message}")]
    Connection { space: String, message: String },

    /// The remote tool call itself failed at the protocol level.
    #[error("Tool call on '{space}' failed: {message}")]
    ToolCall { space: String, message: String },

    /// A remote call exceeded its deadline.
    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    /// Caller-supplied parameters could not be used.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The space's declared schema is missing or unusable.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration is missing or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local file access failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for SpaceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return SpaceError::Http(format!("request timed out ({})", err));
        }
        match err.status() {
            Some(status) => SpaceError::RemoteStatus {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => SpaceError::Http(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SpaceError {
    fn from(err: serde_json::Error) -> Self {
        SpaceError::InvalidParameters(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for SpaceError {
    fn from(err: std::io::Error) -> Self {
        SpaceError::Io(err.to_string())
    }
}
