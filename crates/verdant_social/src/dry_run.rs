//! Publisher that logs instead of posting.

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;
use verdant_core::{Caption, MediaHandle, PostId};
use verdant_error::{PublishResult, UploadError, UploadErrorKind, UploadResult};
use verdant_interface::SocialPublisher;

/// Publisher that never touches the network.
///
/// Uploads still check that the staged file exists so a dry run exercises the
/// whole pipeline up to the platform boundary.
#[derive(Debug, Default)]
pub struct DryRunPublisher {
    uploads: AtomicUsize,
    posts: AtomicUsize,
}

impl DryRunPublisher {
    /// Create a new dry-run publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of posts that would have been created.
    pub fn post_count(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SocialPublisher for DryRunPublisher {
    async fn upload_media(&self, path: &Path) -> UploadResult<MediaHandle> {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            UploadError::new(UploadErrorKind::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            path = %path.display(),
            size = metadata.len(),
            "DryRunPublisher: upload_media() called (no action taken)"
        );
        Ok(MediaHandle(format!("dry-run-media-{}", n)))
    }

    async fn publish_post(&self, caption: &Caption, media: &MediaHandle) -> PublishResult<PostId> {
        let n = self.posts.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            caption = %caption,
            media = %media,
            "DryRunPublisher: publish_post() called (no action taken)"
        );
        Ok(PostId(format!("dry-run-post-{}", n)))
    }

    fn platform_name(&self) -> &'static str {
        "dry-run"
    }
}
