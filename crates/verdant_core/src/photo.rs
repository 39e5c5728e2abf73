//! Photo metadata and staged image types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A photo picked by the provider for one attempt.
///
/// Both URLs are guaranteed non-empty; use [`PhotoResult::new`] to build one.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PhotoResult {
    /// Provider-specific photo identifier
    id: String,
    /// Full-resolution image URL (downloaded and uploaded)
    full_url: String,
    /// Smaller rendition URL (shown to the caption model)
    preview_url: String,
    /// Photographer credit, when the provider supplies one
    photographer_name: Option<String>,
}

impl PhotoResult {
    /// Build a photo result, returning the name of the first unusable field on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdant_core::PhotoResult;
    ///
    /// let photo = PhotoResult::new("abc", "https://img/raw", "https://img/small", None).unwrap();
    /// assert_eq!(photo.preview_url(), "https://img/small");
    ///
    /// assert_eq!(PhotoResult::new("abc", "", "https://img/small", None), Err("full_url"));
    /// ```
    pub fn new(
        id: impl Into<String>,
        full_url: impl Into<String>,
        preview_url: impl Into<String>,
        photographer_name: Option<String>,
    ) -> Result<Self, &'static str> {
        let full_url = full_url.into();
        let preview_url = preview_url.into();
        if full_url.trim().is_empty() {
            return Err("full_url");
        }
        if preview_url.trim().is_empty() {
            return Err("preview_url");
        }
        Ok(Self {
            id: id.into(),
            full_url,
            preview_url,
            photographer_name,
        })
    }
}

/// Image bytes written to the staging path for the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StagedImage {
    /// Where the bytes were written
    path: PathBuf,
    /// Number of bytes written
    size_bytes: u64,
}

impl StagedImage {
    /// Describe a staged file.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            size_bytes,
        }
    }
}
