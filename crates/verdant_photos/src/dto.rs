//! Unsplash response payloads.
//!
//! The provider is untrusted, so every field is optional here and validated
//! when converted into a [`PhotoResult`].

use serde::Deserialize;
use verdant_core::PhotoResult;
use verdant_error::{ProviderError, ProviderErrorKind, ProviderResult};

/// Photo object returned by `GET /photos/random`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnsplashPhoto {
    /// Photo identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Renditions of the image
    #[serde(default)]
    pub urls: Option<UnsplashUrls>,
    /// Photographer
    #[serde(default)]
    pub user: Option<UnsplashUser>,
}

/// Image renditions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnsplashUrls {
    /// Original upload
    #[serde(default)]
    pub raw: Option<String>,
    /// 400px wide rendition
    #[serde(default)]
    pub small: Option<String>,
}

/// Photographer profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnsplashUser {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

impl UnsplashPhoto {
    /// Validate the payload into a [`PhotoResult`].
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingField`] when the id or either image
    /// URL is absent or empty.
    #[track_caller]
    pub fn into_photo_result(self) -> ProviderResult<PhotoResult> {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::MissingField("id")))?;

        let urls = self.urls.unwrap_or_default();
        let raw = urls.raw.unwrap_or_default();
        let small = urls.small.unwrap_or_default();
        let photographer = self.user.and_then(|user| user.name);

        PhotoResult::new(id, raw, small, photographer).map_err(|field| {
            let field = match field {
                "full_url" => "urls.raw",
                _ => "urls.small",
            };
            ProviderError::new(ProviderErrorKind::MissingField(field))
        })
    }
}
