//! Errors raised while loading or validating settings.
//!
//! Covers the layered `verdant.toml` sources, the `[posting]` checks and the
//! search-term lists that feed the query selector. Runs never start with an
//! invalid configuration, so these errors surface before the first attempt.

/// Invalid or unreadable setting, tagged with where it was rejected.
///
/// # Examples
///
/// ```
/// use verdant_error::ConfigError;
///
/// let err = ConfigError::new("posting.staging_path must not be empty");
/// assert!(err.to_string().starts_with("Configuration Error: posting.staging_path"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong, naming the offending key
    pub message: String,
    /// Line that rejected the setting
    pub line: u32,
    /// Source file that rejected the setting
    pub file: &'static str,
}

impl ConfigError {
    /// Reject a setting, recording the caller's location.
    ///
    /// ```
    /// use verdant_error::ConfigError;
    ///
    /// let err = ConfigError::new("query.terms has no usable search term");
    /// assert!(err.message.contains("query.terms"));
    /// assert_eq!(err.line, line!() - 2);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
