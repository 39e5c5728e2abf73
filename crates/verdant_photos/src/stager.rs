//! Full-resolution download to the staging file.

use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info, instrument};
use verdant_core::StagedImage;
use verdant_error::{DownloadError, DownloadErrorKind, DownloadResult};
use verdant_interface::ImageStager;

/// Downloads images over HTTP and stages them on disk.
///
/// Bytes go to a `.tmp` sibling first and are renamed over the destination,
/// so the previous attempt's file is either fully replaced or left untouched.
#[derive(Debug, Clone, Default)]
pub struct HttpImageStager {
    client: Client,
}

impl HttpImageStager {
    /// Create a stager with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    async fn write_atomically(dest: &Path, bytes: &[u8]) -> DownloadResult<()> {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let temp_path = dest.with_extension("tmp");
        tokio::fs::write(&temp_path, bytes)
            .await
            .map_err(|e| io_error(&temp_path, e))?;

        if let Err(e) = tokio::fs::rename(&temp_path, dest).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(io_error(dest, e));
        }
        Ok(())
    }
}

#[track_caller]
fn io_error(path: &Path, e: std::io::Error) -> DownloadError {
    DownloadError::new(DownloadErrorKind::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl ImageStager for HttpImageStager {
    #[instrument(skip(self, dest), fields(dest = %dest.display()))]
    async fn download_image(&self, url: &str, dest: &Path) -> DownloadResult<StagedImage> {
        debug!("Downloading image");

        let response = self.client.get(url).send().await.map_err(|e| {
            DownloadError::new(DownloadErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            return Err(DownloadError::new(DownloadErrorKind::Status(
                response.status().as_u16(),
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::new(DownloadErrorKind::Body(e.to_string())))?;

        Self::write_atomically(dest, &bytes).await?;

        info!(size = bytes.len(), "Image downloaded successfully");
        Ok(StagedImage::new(dest, bytes.len() as u64))
    }
}
