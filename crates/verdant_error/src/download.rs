//! Image download and staging errors.

/// Specific download error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DownloadErrorKind {
    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Image host answered with a non-success status
    #[display("Download returned status {}", _0)]
    Status(u16),

    /// Response body could not be read to completion
    #[display("Failed to read body: {}", _0)]
    Body(String),

    /// Staging file could not be written
    #[display("Failed to stage {}: {}", path, message)]
    Io {
        /// Path being written
        path: String,
        /// Underlying I/O message
        message: String,
    },
}

/// Download error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Download Error: {} at line {} in {}", kind, line, file)]
pub struct DownloadError {
    /// The specific error kind
    pub kind: DownloadErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl DownloadError {
    /// Create a new download error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DownloadErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for download operations.
pub type DownloadResult<T> = Result<T, DownloadError>;
