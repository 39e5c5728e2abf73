//! Service traits for each pipeline stage.

use async_trait::async_trait;
use std::path::Path;
use verdant_core::{Caption, MediaHandle, PhotoResult, PostId, SearchQuery, StagedImage};
use verdant_error::{CaptionResult, DownloadResult, ProviderResult, PublishResult, UploadResult};

/// Photo-search provider returning a random photo for a query.
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Fetch one random photo matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider reports an error
    /// status, or the response lacks usable image URLs.
    async fn fetch_random_photo(&self, query: &SearchQuery) -> ProviderResult<PhotoResult>;

    /// Provider name (e.g., "unsplash").
    fn provider_name(&self) -> &'static str;
}

/// Downloads an image and stages it on the local filesystem.
#[async_trait]
pub trait ImageStager: Send + Sync {
    /// Download `url` and replace `dest` with its bytes.
    ///
    /// Readers of `dest` never observe a partially written file.
    async fn download_image(&self, url: &str, dest: &Path) -> DownloadResult<StagedImage>;
}

/// Vision-capable model that describes an image.
#[async_trait]
pub trait CaptionModel: Send + Sync {
    /// Generate a short caption for the image at `image_url`.
    ///
    /// An empty but successful completion yields the default caption; a failed
    /// call is returned as an error, never papered over.
    async fn generate_caption(&self, image_url: &str) -> CaptionResult<Caption>;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

/// Social platform that accepts media uploads and posts referencing them.
#[async_trait]
pub trait SocialPublisher: Send + Sync {
    /// Upload the file at `path`, returning a handle for a post in the same attempt.
    async fn upload_media(&self, path: &Path) -> UploadResult<MediaHandle>;

    /// Create a post with `caption` and the uploaded `media`.
    async fn publish_post(&self, caption: &Caption, media: &MediaHandle) -> PublishResult<PostId>;

    /// Platform name (e.g., "twitter").
    fn platform_name(&self) -> &'static str;
}
