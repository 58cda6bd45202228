//! Shared error type across demohub crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Requested record does not exist.
    NotFound,
    /// Backing file could not be read, parsed, or written.
    Storage,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Storage => "STORAGE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status the code maps to. Kept numeric so core stays HTTP-crate free.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => 400,
            ClientCode::NotFound => 404,
            ClientCode::Storage | ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Unified error type used by core and both services.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Raw text of the underlying I/O or parse failure, surfaced verbatim.
    #[error("{0}")]
    Storage(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl DemoError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            DemoError::BadRequest(_) => ClientCode::BadRequest,
            DemoError::NotFound(_) => ClientCode::NotFound,
            DemoError::Storage(_) => ClientCode::Storage,
            DemoError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            DemoError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_message_is_raw() {
        let err = DemoError::Storage("No such file or directory (os error 2)".into());
        assert_eq!(err.to_string(), "No such file or directory (os error 2)");
        assert_eq!(err.client_code().http_status(), 500);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(DemoError::NotFound("Data not found".into()).client_code().http_status(), 404);
        assert_eq!(DemoError::UnsupportedVersion.client_code().as_str(), "UNSUPPORTED_VERSION");
        assert_eq!(DemoError::BadRequest("x".into()).client_code().http_status(), 400);
    }
}
