//! Unsplash random-photo client.

use crate::UnsplashPhoto;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, instrument};
use verdant_core::{PhotoResult, SearchQuery};
use verdant_error::{ProviderError, ProviderErrorKind, ProviderResult};
use verdant_interface::PhotoProvider;

/// Production API root.
pub const UNSPLASH_API_URL: &str = "https://api.unsplash.com";

/// Environment variable holding the access key.
pub const UNSPLASH_ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Unsplash API client.
///
/// A missing access key is not an error at construction time; it is reported
/// as a provider error when a photo is requested.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: Client,
    access_key: Option<String>,
    base_url: String,
}

impl UnsplashClient {
    /// Creates a new Unsplash client.
    ///
    /// # Arguments
    ///
    /// * `access_key` - Unsplash access key, if configured
    pub fn new(access_key: Option<String>) -> Self {
        debug!("Creating new Unsplash client");
        Self {
            client: Client::new(),
            access_key,
            base_url: UNSPLASH_API_URL.to_string(),
        }
    }

    /// Creates a client with the key from `UNSPLASH_ACCESS_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(UNSPLASH_ACCESS_KEY_ENV).ok())
    }

    /// Points the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn access_key(&self) -> ProviderResult<&str> {
        self.access_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::MissingCredentials(format!(
                    "{} not set",
                    UNSPLASH_ACCESS_KEY_ENV
                )))
            })
    }
}

#[async_trait]
impl PhotoProvider for UnsplashClient {
    #[instrument(skip(self, query), fields(query = %query))]
    async fn fetch_random_photo(&self, query: &SearchQuery) -> ProviderResult<PhotoResult> {
        let access_key = self.access_key()?;
        let url = format!("{}/photos/random", self.base_url.trim_end_matches('/'));
        debug!(url = %url, "Requesting random photo");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query.as_str())])
            .header("Authorization", format!("Client-ID {}", access_key))
            .header("Accept-Version", "v1")
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Unsplash");
                ProviderError::new(ProviderErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Unsplash returned error");
            return Err(ProviderError::new(ProviderErrorKind::Status {
                status: status.as_u16(),
                message: body,
            }));
        }

        let photo: UnsplashPhoto = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Unsplash response");
            ProviderError::new(ProviderErrorKind::Parse(e.to_string()))
        })?;

        let photo = photo.into_photo_result()?;
        info!(
            photo_id = %photo.id(),
            raw_url = %photo.full_url(),
            small_url = %photo.preview_url(),
            photographer = photo.photographer_name().as_deref().unwrap_or("unknown"),
            "Got Unsplash photo"
        );
        Ok(photo)
    }

    fn provider_name(&self) -> &'static str {
        "unsplash"
    }
}
