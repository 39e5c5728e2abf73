//! Caption generation errors.

/// Specific caption model error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CaptionErrorKind {
    /// API key was not configured
    #[display("Missing credentials: {}", _0)]
    MissingCredentials(String),

    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Model API answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    Parse(String),

    /// Completion contained no choices
    #[display("Completion contained no choices")]
    NoChoices,

    /// First choice carried something other than text
    #[display("Completion content is not text: {}", _0)]
    NonTextContent(String),
}

/// Caption model error with location tracking.
///
/// # Examples
///
/// ```
/// use verdant_error::{CaptionError, CaptionErrorKind};
///
/// let err = CaptionError::new(CaptionErrorKind::NoChoices);
/// assert!(format!("{}", err).contains("no choices"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Caption Error: {} at line {} in {}", kind, line, file)]
pub struct CaptionError {
    /// The specific error kind
    pub kind: CaptionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl CaptionError {
    /// Create a new caption error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CaptionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for caption operations.
pub type CaptionResult<T> = Result<T, CaptionError>;
