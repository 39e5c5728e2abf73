//! Media upload errors.

/// Specific media upload error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UploadErrorKind {
    /// Platform credentials were not configured
    #[display("Missing credentials: {}", _0)]
    MissingCredentials(String),

    /// Staged file could not be read
    #[display("Failed to read {}: {}", path, message)]
    Io {
        /// Path being read
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Platform rejected the upload
    #[display("Upload rejected with status {}: {}", status, message)]
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

    /// Platform accepted the bytes but could not process the media
    #[display("Media processing failed: {}", _0)]
    Processing(String),
}

/// Media upload error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The specific error kind
    pub kind: UploadErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
