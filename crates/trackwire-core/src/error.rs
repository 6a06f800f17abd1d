//! Shared error type across trackwire crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed payload.
    BadRequest,
    /// An upstream collaborator (sink or store) failed or rejected the call.
    UpstreamFailed,
    /// A probed endpoint was unreachable or returned a non-success status.
    Unreachable,
    /// Configuration rejected at startup.
    BadConfig,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UpstreamFailed => "UPSTREAM_FAILED",
            ClientCode::Unreachable => "UNREACHABLE",
            ClientCode::BadConfig => "BAD_CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TrackWireError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum TrackWireError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("external service failed: {0}")]
    ExternalService(String),
    #[error("unreachable: {0}")]
    Unreachable(String),
    #[error("config: {0}")]
    Config(String),
}

impl TrackWireError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TrackWireError::Validation(_) => ClientCode::BadRequest,
            TrackWireError::ExternalService(_) => ClientCode::UpstreamFailed,
            TrackWireError::Unreachable(_) => ClientCode::Unreachable,
            TrackWireError::Config(_) => ClientCode::BadConfig,
        }
    }
}
