//! Twitter/X client: v1.1 chunked media upload and v2 post creation.

use crate::{
    CreateTweetRequest, CreateTweetResponse, MediaUploadResponse, OAuthCredentials,
    ProcessingInfo, TweetMedia, authorization_header,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use verdant_core::{Caption, MediaHandle, PostId};
use verdant_error::{
    PublishError, PublishErrorKind, PublishResult, UploadError, UploadErrorKind, UploadResult,
};
use verdant_interface::SocialPublisher;

/// Production API root for post creation.
pub const TWITTER_API_URL: &str = "https://api.twitter.com";

/// Production API root for media upload.
pub const TWITTER_UPLOAD_URL: &str = "https://upload.twitter.com";

/// Environment variable holding the consumer key.
pub const TWITTER_APP_KEY_ENV: &str = "TWITTER_APP_KEY";
/// Environment variable holding the consumer secret.
pub const TWITTER_APP_SECRET_ENV: &str = "TWITTER_APP_SECRET";
/// Environment variable holding the access token.
pub const TWITTER_ACCESS_TOKEN_ENV: &str = "TWITTER_ACCESS_TOKEN";
/// Environment variable holding the access token secret.
pub const TWITTER_ACCESS_SECRET_ENV: &str = "TWITTER_ACCESS_SECRET";

/// The four user-context credentials, any of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwitterCredentials {
    /// Consumer key
    pub app_key: Option<String>,
    /// Consumer secret
    pub app_secret: Option<String>,
    /// Access token
    pub access_token: Option<String>,
    /// Access token secret
    pub access_secret: Option<String>,
}

impl TwitterCredentials {
    /// Read all four credentials from the environment.
    pub fn from_env() -> Self {
        Self {
            app_key: std::env::var(TWITTER_APP_KEY_ENV).ok(),
            app_secret: std::env::var(TWITTER_APP_SECRET_ENV).ok(),
            access_token: std::env::var(TWITTER_ACCESS_TOKEN_ENV).ok(),
            access_secret: std::env::var(TWITTER_ACCESS_SECRET_ENV).ok(),
        }
    }

    /// Resolve into signing credentials, or list the missing variables.
    pub fn resolve(&self) -> Result<OAuthCredentials, String> {
        let fields = [
            (TWITTER_APP_KEY_ENV, &self.app_key),
            (TWITTER_APP_SECRET_ENV, &self.app_secret),
            (TWITTER_ACCESS_TOKEN_ENV, &self.access_token),
            (TWITTER_ACCESS_SECRET_ENV, &self.access_secret),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(format!("{} not set", missing.join(", ")));
        }

        Ok(OAuthCredentials {
            consumer_key: self.app_key.clone().unwrap_or_default(),
            consumer_secret: self.app_secret.clone().unwrap_or_default(),
            access_token: self.access_token.clone().unwrap_or_default(),
            access_secret: self.access_secret.clone().unwrap_or_default(),
        })
    }
}

/// Bytes sent per `APPEND` request.
pub const UPLOAD_CHUNK_SIZE: usize = 1024 * 1024;

/// Upper bound on `STATUS` polls while the platform processes media.
const MAX_STATUS_POLLS: u32 = 30;

/// Twitter/X API client.
///
/// Media goes through the chunked `INIT`/`APPEND`/`FINALIZE` upload, so
/// full-resolution originals are not held to the simple-upload size limit.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    client: Client,
    credentials: TwitterCredentials,
    api_base: String,
    upload_base: String,
    chunk_size: usize,
}

impl TwitterClient {
    /// Creates a new client against the production endpoints.
    pub fn new(credentials: TwitterCredentials) -> Self {
        debug!("Creating new Twitter client");
        Self {
            client: Client::new(),
            credentials,
            api_base: TWITTER_API_URL.to_string(),
            upload_base: TWITTER_UPLOAD_URL.to_string(),
            chunk_size: UPLOAD_CHUNK_SIZE,
        }
    }

    /// Creates a client with credentials from the environment.
    pub fn from_env() -> Self {
        Self::new(TwitterCredentials::from_env())
    }

    /// Points post creation at a different API root.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Points media upload at a different API root.
    pub fn with_upload_base(mut self, upload_base: impl Into<String>) -> Self {
        self.upload_base = upload_base.into();
        self
    }

    /// Sets the `APPEND` segment size (at least one byte).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/1.1/media/upload.json",
            self.upload_base.trim_end_matches('/')
        )
    }

    fn tweets_url(&self) -> String {
        format!("{}/2/tweets", self.api_base.trim_end_matches('/'))
    }

    /// Signs a request; `params` are the form or query parameters it carries.
    fn sign(
        credentials: &OAuthCredentials,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, String> {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let timestamp = chrono::Utc::now().timestamp();
        authorization_header(credentials, method, url, params, &nonce, timestamp)
    }

    /// Sends a form-encoded upload command (`INIT` or `FINALIZE`).
    async fn media_command(
        &self,
        credentials: &OAuthCredentials,
        params: &[(&str, &str)],
    ) -> UploadResult<MediaUploadResponse> {
        let url = self.upload_url();
        let authorization = Self::sign(credentials, "POST", &url, params)
            .map_err(|e| UploadError::new(UploadErrorKind::Signing(e)))?;

        let response = self
            .client
            .post(&url)
            .header("Authorization", authorization)
            .form(params)
            .send()
            .await
            .map_err(upload_http_error)?;

        ensure_upload_success(response)
            .await?
            .json()
            .await
            .map_err(|e| UploadError::new(UploadErrorKind::Parse(e.to_string())))
    }

    /// Sends one multipart `APPEND` segment.
    async fn append_segment(
        &self,
        credentials: &OAuthCredentials,
        media_id: &str,
        segment_index: usize,
        chunk: &[u8],
        file_name: &str,
    ) -> UploadResult<()> {
        let url = self.upload_url();
        let authorization = Self::sign(credentials, "POST", &url, &[])
            .map_err(|e| UploadError::new(UploadErrorKind::Signing(e)))?;
        let form = Form::new()
            .text("command", "APPEND")
            .text("media_id", media_id.to_string())
            .text("segment_index", segment_index.to_string())
            .part(
                "media",
                Part::bytes(chunk.to_vec()).file_name(file_name.to_string()),
            );

        let response = self
            .client
            .post(&url)
            .header("Authorization", authorization)
            .multipart(form)
            .send()
            .await
            .map_err(upload_http_error)?;

        ensure_upload_success(response).await?;
        debug!(segment_index, size = chunk.len(), "Appended media segment");
        Ok(())
    }

    /// Polls `STATUS` until processing leaves the pending states.
    async fn await_processing(
        &self,
        credentials: &OAuthCredentials,
        media_id: &str,
        mut info: ProcessingInfo,
    ) -> UploadResult<()> {
        let url = self.upload_url();
        let params = [("command", "STATUS"), ("media_id", media_id)];

        for _ in 0..MAX_STATUS_POLLS {
            match info.state.as_str() {
                "pending" | "in_progress" => {}
                "failed" => {
                    let detail = info
                        .error
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "no detail".to_string());
                    return Err(UploadError::new(UploadErrorKind::Processing(detail)));
                }
                _ => return Ok(()),
            }

            let wait = info.check_after_secs.unwrap_or(1);
            debug!(state = %info.state, wait_secs = wait, "Media still processing");
            tokio::time::sleep(Duration::from_secs(wait)).await;

            let authorization = Self::sign(credentials, "GET", &url, &params)
                .map_err(|e| UploadError::new(UploadErrorKind::Signing(e)))?;
            let response = self
                .client
                .get(&url)
                .header("Authorization", authorization)
                .query(&params)
                .send()
                .await
                .map_err(upload_http_error)?;
            let status: MediaUploadResponse = ensure_upload_success(response)
                .await?
                .json()
                .await
                .map_err(|e| UploadError::new(UploadErrorKind::Parse(e.to_string())))?;

            match status.processing_info {
                Some(next) => info = next,
                None => return Ok(()),
            }
        }

        Err(UploadError::new(UploadErrorKind::Processing(format!(
            "still {} after {} status checks",
            info.state, MAX_STATUS_POLLS
        ))))
    }
}

fn upload_http_error(e: reqwest::Error) -> UploadError {
    error!(error = ?e, "Failed to send media upload request");
    UploadError::new(UploadErrorKind::Http(format!("Request failed: {}", e)))
}

async fn ensure_upload_success(response: Response) -> UploadResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!(status = %status, body = %body, "Media upload rejected");
    Err(UploadError::new(UploadErrorKind::Status {
        status: status.as_u16(),
        message: body,
    }))
}

/// MIME type declared in `INIT`, from the staged file's extension.
fn media_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

#[async_trait]
impl SocialPublisher for TwitterClient {
    #[instrument(skip(self, path), fields(path = %path.display()))]
    async fn upload_media(&self, path: &Path) -> UploadResult<MediaHandle> {
        let credentials = self
            .credentials
            .resolve()
            .map_err(|e| UploadError::new(UploadErrorKind::MissingCredentials(e)))?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            UploadError::new(UploadErrorKind::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        if bytes.is_empty() {
            return Err(UploadError::new(UploadErrorKind::Io {
                path: path.display().to_string(),
                message: "staged file is empty".to_string(),
            }));
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let total_bytes = bytes.len().to_string();
        let media_type = media_type_for(path);

        let init = self
            .media_command(
                &credentials,
                &[
                    ("command", "INIT"),
                    ("total_bytes", total_bytes.as_str()),
                    ("media_type", media_type),
                    ("media_category", "tweet_image"),
                ],
            )
            .await?;
        let media_id = init
            .media_id_string
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                UploadError::new(UploadErrorKind::Parse(
                    "INIT response is missing media_id_string".to_string(),
                ))
            })?;
        debug!(media_id = %media_id, total_bytes = bytes.len(), media_type, "Upload initialized");

        for (segment_index, chunk) in bytes.chunks(self.chunk_size).enumerate() {
            self.append_segment(&credentials, &media_id, segment_index, chunk, &file_name)
                .await?;
        }

        let finalized = self
            .media_command(
                &credentials,
                &[("command", "FINALIZE"), ("media_id", media_id.as_str())],
            )
            .await?;
        if let Some(info) = finalized.processing_info {
            self.await_processing(&credentials, &media_id, info).await?;
        }

        info!(media_id = %media_id, "Media uploaded");
        Ok(MediaHandle(media_id))
    }

    #[instrument(skip(self, caption), fields(media = %media))]
    async fn publish_post(&self, caption: &Caption, media: &MediaHandle) -> PublishResult<PostId> {
        let credentials = self
            .credentials
            .resolve()
            .map_err(|e| PublishError::new(PublishErrorKind::MissingCredentials(e)))?;

        let url = self.tweets_url();
        let authorization = Self::sign(&credentials, "POST", &url, &[])
            .map_err(|e| PublishError::new(PublishErrorKind::Signing(e)))?;
        let body = CreateTweetRequest {
            text: caption.as_str().to_string(),
            media: TweetMedia {
                media_ids: vec![media.0.clone()],
            },
        };
        debug!(chars = caption.char_count(), "Posting tweet");

        let response = self
            .client
            .post(&url)
            .header("Authorization", authorization)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send tweet");
                PublishError::new(PublishErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Tweet rejected");
            return Err(PublishError::new(PublishErrorKind::Status {
                status: status.as_u16(),
                message: body,
            }));
        }

        let created: CreateTweetResponse = response
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Parse(e.to_string())))?;

        match created.data {
            Some(tweet) => {
                info!(post_id = %tweet.id, caption = %caption, "Tweeted successfully");
                Ok(PostId(tweet.id))
            }
            None => {
                let errors = created
                    .errors
                    .map(|errors| errors.to_string())
                    .unwrap_or_else(|| "no data".to_string());
                Err(PublishError::new(PublishErrorKind::Parse(format!(
                    "response did not include the created post: {}",
                    errors
                ))))
            }
        }
    }

    fn platform_name(&self) -> &'static str {
        "twitter"
    }
}
