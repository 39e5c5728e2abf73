//! Post publication errors.

/// Specific publish error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PublishErrorKind {
    /// Platform credentials were not configured
    #[display("Missing credentials: {}", _0)]
    MissingCredentials(String),

    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Platform rejected the post
    #[display("Post rejected with status {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    Parse(String),

    /// Request could not be signed
    #[display("Failed to sign request: {}", _0)]
    Signing(String),
}

/// Publish error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The specific error kind
    pub kind: PublishErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new publish error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;
