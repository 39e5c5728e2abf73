//! Top-level error wrapper types.

use crate::{CaptionError, ConfigError, DownloadError, ProviderError, PublishError, UploadError};

/// Every failure the posting pipeline can raise.
///
/// # Examples
///
/// ```
/// use verdant_error::{CaptionError, CaptionErrorKind, VerdantError};
///
/// let err: VerdantError = CaptionError::new(CaptionErrorKind::NoChoices).into();
/// assert!(format!("{}", err).contains("Caption Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VerdantErrorKind {
    /// Photo search failed
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Image download or staging failed
    #[from(DownloadError)]
    Download(DownloadError),
    /// Caption generation failed
    #[from(CaptionError)]
    Caption(CaptionError),
    /// Media upload failed
    #[from(UploadError)]
    Upload(UploadError),
    /// Post creation failed
    #[from(PublishError)]
    Publish(PublishError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Verdant error with kind discrimination.
///
/// # Examples
///
/// ```
/// use verdant_error::{ConfigError, VerdantResult};
///
/// fn check_backoff(backoff_ms: u64) -> VerdantResult<()> {
///     if backoff_ms > 60_000 {
///         Err(ConfigError::new("posting.backoff_ms exceeds one minute"))?
///     }
///     Ok(())
/// }
///
/// assert!(check_backoff(2_000).is_ok());
/// assert!(check_backoff(90_000).is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Verdant Error: {}", _0)]
pub struct VerdantError(Box<VerdantErrorKind>);

impl VerdantError {
    /// Create a new error from a kind.
    pub fn new(kind: VerdantErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VerdantErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VerdantErrorKind
impl<T> From<T> for VerdantError
where
    T: Into<VerdantErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for verdant operations.
pub type VerdantResult<T> = std::result::Result<T, VerdantError>;
