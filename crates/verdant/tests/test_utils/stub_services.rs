//! Fixed-answer pipeline services for driving whole runs.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use verdant::{
    Caption, CaptionError, CaptionErrorKind, CaptionModel, DownloadError, ImageStager,
    MediaHandle, PhotoProvider, PhotoResult, PostId, ProviderError, ProviderErrorKind,
    PublishError, SearchQuery, Services, SocialPublisher, StagedImage, UploadError,
};

/// Photo search that always answers the same way.
pub struct StubPhotos(pub Result<(), ProviderErrorKind>);

#[async_trait]
impl PhotoProvider for StubPhotos {
    async fn fetch_random_photo(&self, _query: &SearchQuery) -> Result<PhotoResult, ProviderError> {
        self.0.clone().map_err(ProviderError::new)?;
        Ok(PhotoResult::new(
            "stub-photo",
            "https://images.example/stub/raw",
            "https://images.example/stub/small",
            None,
        )
        .unwrap())
    }

    fn provider_name(&self) -> &'static str {
        "stub-photos"
    }
}

/// Stager that reports a staged file without writing one.
pub struct StubStager;

#[async_trait]
impl ImageStager for StubStager {
    async fn download_image(&self, _url: &str, dest: &Path) -> Result<StagedImage, DownloadError> {
        Ok(StagedImage::new(dest, 2048))
    }
}

/// Caption model that always answers the same way.
pub struct StubCaptioner(pub Result<String, CaptionErrorKind>);

#[async_trait]
impl CaptionModel for StubCaptioner {
    async fn generate_caption(&self, _image_url: &str) -> Result<Caption, CaptionError> {
        self.0.clone().map(Caption).map_err(CaptionError::new)
    }

    fn model_name(&self) -> &str {
        "stub-vision"
    }
}

/// Publisher that accepts every upload and post.
pub struct StubPublisher;

#[async_trait]
impl SocialPublisher for StubPublisher {
    async fn upload_media(&self, _path: &Path) -> Result<MediaHandle, UploadError> {
        Ok(MediaHandle("stub-media".to_string()))
    }

    async fn publish_post(
        &self,
        _caption: &Caption,
        _media: &MediaHandle,
    ) -> Result<PostId, PublishError> {
        Ok(PostId("stub-post".to_string()))
    }

    fn platform_name(&self) -> &'static str {
        "stub-social"
    }
}

/// Wire a photo provider and caption model to the accepting stager and publisher.
pub fn services(photos: StubPhotos, captioner: StubCaptioner) -> Services {
    Services {
        photos: Arc::new(photos),
        stager: Arc::new(StubStager),
        captioner: Arc::new(captioner),
        publisher: Arc::new(StubPublisher),
    }
}
