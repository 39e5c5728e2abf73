//! Photo-search provider errors.

/// Specific photo provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Access key was not configured
    #[display("Missing credentials: {}", _0)]
    MissingCredentials(String),

    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Provider answered with a non-success status
    #[display("Provider returned status {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    Parse(String),

    /// A required field was absent or empty
    #[display("Response is missing usable field '{}'", _0)]
    MissingField(&'static str),
}

/// Photo provider error with location tracking.
///
/// # Examples
///
/// ```
/// use verdant_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::MissingField("urls.raw"));
/// assert!(format!("{}", err).contains("urls.raw"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The specific error kind
    pub kind: ProviderErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for photo provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
