//! Mock pipeline services with call recording.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use verdant_core::{Caption, MediaHandle, PhotoResult, PostId, SearchQuery, StagedImage};
use verdant_error::{
    CaptionError, CaptionErrorKind, CaptionResult, DownloadError, DownloadErrorKind,
    DownloadResult, ProviderError, ProviderErrorKind, ProviderResult, PublishError,
    PublishErrorKind, PublishResult, UploadError, UploadErrorKind, UploadResult,
};
use verdant_interface::{CaptionModel, ImageStager, PhotoProvider, SocialPublisher};

/// How a mock answers successive calls.
#[derive(Debug, Clone)]
pub enum MockBehavior<T, K> {
    /// Always succeed with the value
    Success(T),
    /// Always fail with the error kind
    Error(K),
    /// Fail N times with the error kind, then succeed with the value
    FailThenSucceed {
        fail_count: usize,
        error: K,
        value: T,
    },
}

impl<T: Clone, K: Clone> MockBehavior<T, K> {
    /// Answer for the call with zero-based index `call`.
    fn respond(&self, call: usize) -> Result<T, K> {
        match self {
            Self::Success(value) => Ok(value.clone()),
            Self::Error(kind) => Err(kind.clone()),
            Self::FailThenSucceed {
                fail_count,
                error,
                value,
            } => {
                if call < *fail_count {
                    Err(error.clone())
                } else {
                    Ok(value.clone())
                }
            }
        }
    }
}

/// Photo with distinct full and preview URLs.
pub fn sample_photo() -> PhotoResult {
    PhotoResult::new(
        "photo-1",
        "https://images.example/photo-1/raw",
        "https://images.example/photo-1/small",
        Some("Ansel".to_string()),
    )
    .unwrap()
}

/// Mock photo provider recording every query it receives.
#[derive(Clone)]
pub struct MockPhotoProvider {
    behavior: MockBehavior<PhotoResult, ProviderErrorKind>,
    queries: Arc<Mutex<Vec<SearchQuery>>>,
}

impl MockPhotoProvider {
    /// Always returns [`sample_photo`].
    pub fn new_success() -> Self {
        Self::with_behavior(MockBehavior::Success(sample_photo()))
    }

    /// Always fails with `kind`.
    pub fn new_error(kind: ProviderErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(kind))
    }

    pub fn with_behavior(behavior: MockBehavior<PhotoResult, ProviderErrorKind>) -> Self {
        Self {
            behavior,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoProvider for MockPhotoProvider {
    async fn fetch_random_photo(&self, query: &SearchQuery) -> ProviderResult<PhotoResult> {
        let call = {
            let mut queries = self.queries.lock().unwrap();
            queries.push(query.clone());
            queries.len() - 1
        };
        self.behavior.respond(call).map_err(ProviderError::new)
    }

    fn provider_name(&self) -> &'static str {
        "mock-photos"
    }
}

/// Mock caption model recording the image URLs it is shown.
#[derive(Clone)]
pub struct MockCaptionModel {
    behavior: MockBehavior<String, CaptionErrorKind>,
    image_urls: Arc<Mutex<Vec<String>>>,
}

impl MockCaptionModel {
    /// Always returns `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Success(text.into()))
    }

    /// Always fails with `kind`.
    pub fn new_error(kind: CaptionErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(kind))
    }

    /// Fails `fail_count` times, then returns `text`.
    pub fn new_fail_then_succeed(
        fail_count: usize,
        kind: CaptionErrorKind,
        text: impl Into<String>,
    ) -> Self {
        Self::with_behavior(MockBehavior::FailThenSucceed {
            fail_count,
            error: kind,
            value: text.into(),
        })
    }

    pub fn with_behavior(behavior: MockBehavior<String, CaptionErrorKind>) -> Self {
        Self {
            behavior,
            image_urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.image_urls.lock().unwrap().len()
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.image_urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptionModel for MockCaptionModel {
    async fn generate_caption(&self, image_url: &str) -> CaptionResult<Caption> {
        let call = {
            let mut urls = self.image_urls.lock().unwrap();
            urls.push(image_url.to_string());
            urls.len() - 1
        };
        self.behavior
            .respond(call)
            .map(Caption)
            .map_err(CaptionError::new)
    }

    fn model_name(&self) -> &str {
        "mock-vision"
    }
}

/// Mock stager that reports a staged file without touching the disk.
#[derive(Clone)]
pub struct MockStager {
    behavior: MockBehavior<u64, DownloadErrorKind>,
    downloads: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl MockStager {
    /// Always reports a 1 KiB image at the requested path.
    pub fn new_success() -> Self {
        Self::with_behavior(MockBehavior::Success(1024))
    }

    /// Always fails with `kind`.
    pub fn new_error(kind: DownloadErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(kind))
    }

    pub fn with_behavior(behavior: MockBehavior<u64, DownloadErrorKind>) -> Self {
        Self {
            behavior,
            downloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.downloads.lock().unwrap().len()
    }

    pub fn downloads(&self) -> Vec<(String, PathBuf)> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStager for MockStager {
    async fn download_image(&self, url: &str, dest: &Path) -> DownloadResult<StagedImage> {
        let call = {
            let mut downloads = self.downloads.lock().unwrap();
            downloads.push((url.to_string(), dest.to_path_buf()));
            downloads.len() - 1
        };
        self.behavior
            .respond(call)
            .map(|size| StagedImage::new(dest, size))
            .map_err(DownloadError::new)
    }
}

/// Mock publisher recording uploads and published posts.
#[derive(Clone)]
pub struct MockPublisher {
    upload: MockBehavior<String, UploadErrorKind>,
    publish: MockBehavior<String, PublishErrorKind>,
    uploads: Arc<Mutex<Vec<PathBuf>>>,
    posts: Arc<Mutex<Vec<(Caption, MediaHandle)>>>,
}

impl MockPublisher {
    /// Uploads return `media_id`, posts return `post_id`.
    pub fn new_success(media_id: impl Into<String>, post_id: impl Into<String>) -> Self {
        Self::with_behavior(
            MockBehavior::Success(media_id.into()),
            MockBehavior::Success(post_id.into()),
        )
    }

    /// Uploads succeed but every post fails with `kind`.
    pub fn new_publish_error(kind: PublishErrorKind) -> Self {
        Self::with_behavior(
            MockBehavior::Success("m-1".to_string()),
            MockBehavior::Error(kind),
        )
    }

    /// Every upload fails with `kind`.
    pub fn new_upload_error(kind: UploadErrorKind) -> Self {
        Self::with_behavior(
            MockBehavior::Error(kind),
            MockBehavior::Success("p-1".to_string()),
        )
    }

    pub fn with_behavior(
        upload: MockBehavior<String, UploadErrorKind>,
        publish: MockBehavior<String, PublishErrorKind>,
    ) -> Self {
        Self {
            upload,
            publish,
            uploads: Arc::new(Mutex::new(Vec::new())),
            posts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn publish_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn uploads(&self) -> Vec<PathBuf> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<(Caption, MediaHandle)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialPublisher for MockPublisher {
    async fn upload_media(&self, path: &Path) -> UploadResult<MediaHandle> {
        let call = {
            let mut uploads = self.uploads.lock().unwrap();
            uploads.push(path.to_path_buf());
            uploads.len() - 1
        };
        self.upload
            .respond(call)
            .map(MediaHandle)
            .map_err(UploadError::new)
    }

    async fn publish_post(&self, caption: &Caption, media: &MediaHandle) -> PublishResult<PostId> {
        let call = {
            let mut posts = self.posts.lock().unwrap();
            posts.push((caption.clone(), media.clone()));
            posts.len() - 1
        };
        self.publish
            .respond(call)
            .map(PostId)
            .map_err(PublishError::new)
    }

    fn platform_name(&self) -> &'static str {
        "mock-social"
    }
}
