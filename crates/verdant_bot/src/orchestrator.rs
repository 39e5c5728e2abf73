//! Retry and fallback loop around the posting pipeline.

use crate::{AttemptKind, AttemptRecord, RetryPolicy, RunReport, RunState, VerdantConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use verdant_core::{
    AttemptOutcome, Caption, FALLBACK_CAPTION, PhotoResult, PipelineStage, PostId,
    QuerySelector, SearchQuery,
};
use verdant_error::{VerdantError, VerdantErrorKind, VerdantResult};
use verdant_interface::{CaptionModel, ImageStager, PhotoProvider, SocialPublisher};
use verdant_models::OpenAiVisionClient;
use verdant_photos::{HttpImageStager, UnsplashClient};
use verdant_social::{DryRunPublisher, TwitterClient};

/// External collaborators used by each attempt.
#[derive(Clone)]
pub struct Services {
    /// Photo search
    pub photos: Arc<dyn PhotoProvider>,
    /// Full-resolution download
    pub stager: Arc<dyn ImageStager>,
    /// Caption generation
    pub captioner: Arc<dyn CaptionModel>,
    /// Media upload and post creation
    pub publisher: Arc<dyn SocialPublisher>,
}

impl Services {
    /// Production clients configured from `config`, with credentials read from
    /// the environment.
    ///
    /// With `dry_run`, uploads and posts are logged instead of sent.
    pub fn from_config(config: &VerdantConfig, dry_run: bool) -> Self {
        let photos = UnsplashClient::from_env().with_base_url(&config.unsplash.base_url);
        let captioner = OpenAiVisionClient::from_env()
            .with_base_url(&config.caption.base_url)
            .with_model(&config.caption.model)
            .with_max_tokens(config.caption.max_tokens)
            .with_prompt(&config.caption.prompt)
            .with_default_caption(&config.caption.default_caption);
        let publisher: Arc<dyn SocialPublisher> = if dry_run {
            Arc::new(DryRunPublisher::new())
        } else {
            Arc::new(
                TwitterClient::from_env()
                    .with_api_base(&config.twitter.api_base)
                    .with_upload_base(&config.twitter.upload_base),
            )
        };

        Self {
            photos: Arc::new(photos),
            stager: Arc::new(HttpImageStager::new()),
            captioner: Arc::new(captioner),
            publisher,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("photos", &self.photos.provider_name())
            .field("captioner", &self.captioner.model_name())
            .field("publisher", &self.publisher.platform_name())
            .finish_non_exhaustive()
    }
}

/// Drives one run: up to `max_attempts` primary attempts, then a single
/// fallback attempt with a fixed caption.
///
/// Every attempt selects a fresh search term. A failure at any step ends that
/// attempt; later steps are not run.
#[derive(Debug)]
pub struct Orchestrator {
    selector: QuerySelector,
    services: Services,
    policy: RetryPolicy,
    staging_path: PathBuf,
    fallback_caption: Caption,
}

impl Orchestrator {
    /// Orchestrator staging to `image.png` with the default fallback caption.
    pub fn new(selector: QuerySelector, services: Services, policy: RetryPolicy) -> Self {
        Self {
            selector,
            services,
            policy,
            staging_path: PathBuf::from("image.png"),
            fallback_caption: Caption::from(FALLBACK_CAPTION),
        }
    }

    /// Orchestrator driven by the `[posting]` and `[query]` sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce a selector or policy.
    pub fn from_config(config: &VerdantConfig, services: Services) -> VerdantResult<Self> {
        Ok(Self::new(config.query_selector()?, services, config.retry_policy()?)
            .with_staging_path(&config.posting.staging_path)
            .with_fallback_caption(config.fallback_caption()))
    }

    /// Write downloads to `path`.
    pub fn with_staging_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.staging_path = path.into();
        self
    }

    /// Publish `caption` when every primary attempt fails.
    pub fn with_fallback_caption(mut self, caption: Caption) -> Self {
        self.fallback_caption = caption;
        self
    }

    /// Where downloads are written.
    pub fn staging_path(&self) -> &Path {
        &self.staging_path
    }

    /// Run until a post is published or the fallback has been tried.
    ///
    /// Never returns an error; every failure is recorded in the report.
    #[instrument(skip(self), fields(max_attempts = self.policy.max_attempts()))]
    pub async fn run(&self) -> RunReport {
        let max_attempts = self.policy.max_attempts();
        let mut delays = self.policy.delays();
        let mut state = RunState::Attempting(1);
        let mut report = RunReport::new(state);

        while !state.is_terminal() {
            state = match state {
                RunState::Attempting(attempt) => {
                    info!(attempt, "--- Attempt {} ---", attempt);
                    let query = self.selector.select();
                    info!(query = %query, "Using search query");

                    let outcome = match self.primary_pipeline(&query).await {
                        Ok((caption, post_id)) => {
                            info!(caption = %caption, post_id = %post_id, "Posted successfully");
                            AttemptOutcome::Success { caption, post_id }
                        }
                        Err(e) => failure(e),
                    };

                    let next = match &outcome {
                        AttemptOutcome::Success { .. } => RunState::Succeeded,
                        AttemptOutcome::Failure { stage, message } => {
                            warn!(attempt, stage = %stage, error = %message, "Attempt failed");
                            if attempt < max_attempts {
                                let delay = delays.next().unwrap_or_else(|| self.policy.backoff());
                                info!(delay_ms = delay.as_millis() as u64, "Waiting before retry");
                                tokio::time::sleep(delay).await;
                                RunState::Attempting(attempt + 1)
                            } else {
                                warn!("All attempts failed. Using fallback caption.");
                                RunState::FallbackAttempting
                            }
                        }
                    };

                    report.record(AttemptRecord {
                        kind: AttemptKind::Primary(attempt),
                        query,
                        outcome,
                    });
                    next
                }
                RunState::FallbackAttempting => {
                    let query = self.selector.select();
                    info!(query = %query, "Using fallback search query");

                    let outcome = match self.fallback_pipeline(&query).await {
                        Ok(post_id) => {
                            info!(post_id = %post_id, "Posted with fallback caption");
                            AttemptOutcome::Success {
                                caption: self.fallback_caption.clone(),
                                post_id,
                            }
                        }
                        Err(e) => failure(e),
                    };

                    let next = match &outcome {
                        AttemptOutcome::Success { .. } => RunState::FallbackSucceeded,
                        AttemptOutcome::Failure { stage, message } => {
                            error!(stage = %stage, error = %message, "Even fallback failed");
                            RunState::FallbackFailed
                        }
                    };

                    report.record(AttemptRecord {
                        kind: AttemptKind::Fallback,
                        query,
                        outcome,
                    });
                    next
                }
                terminal => terminal,
            };
            report.enter(state);
        }

        info!(final_state = %state, attempts = report.attempts().len(), "Run finished");
        report
    }

    /// Search, caption, download, upload, publish.
    async fn primary_pipeline(&self, query: &SearchQuery) -> VerdantResult<(Caption, PostId)> {
        let photo = self.services.photos.fetch_random_photo(query).await?;

        info!(image_url = %photo.preview_url(), "Requesting caption");
        let caption = self
            .services
            .captioner
            .generate_caption(photo.preview_url())
            .await?;
        info!(caption = %caption, "Generated caption");

        let post_id = self.stage_and_publish(&photo, &caption).await?;
        Ok((caption, post_id))
    }

    /// Search, download, upload, publish with the fallback caption.
    async fn fallback_pipeline(&self, query: &SearchQuery) -> VerdantResult<PostId> {
        let photo = self.services.photos.fetch_random_photo(query).await?;
        self.stage_and_publish(&photo, &self.fallback_caption).await
    }

    async fn stage_and_publish(&self, photo: &PhotoResult, caption: &Caption) -> VerdantResult<PostId> {
        info!("Downloading image");
        let staged = self
            .services
            .stager
            .download_image(photo.full_url(), &self.staging_path)
            .await?;
        info!(path = %staged.path().display(), size_bytes = staged.size_bytes(), "Image downloaded");

        info!(platform = self.services.publisher.platform_name(), "Uploading media");
        let media = self.services.publisher.upload_media(staged.path()).await?;
        info!(media_id = %media, "Media uploaded");

        info!("Publishing post");
        let post_id = self.services.publisher.publish_post(caption, &media).await?;
        Ok(post_id)
    }
}

/// Pipeline step that raised `error`.
pub fn stage_of(error: &VerdantError) -> PipelineStage {
    match error.kind() {
        VerdantErrorKind::Provider(_) => PipelineStage::Search,
        VerdantErrorKind::Caption(_) => PipelineStage::Caption,
        VerdantErrorKind::Download(_) => PipelineStage::Download,
        VerdantErrorKind::Upload(_) => PipelineStage::Upload,
        VerdantErrorKind::Publish(_) => PipelineStage::Publish,
        VerdantErrorKind::Config(_) => PipelineStage::Setup,
    }
}

fn failure(error: VerdantError) -> AttemptOutcome {
    AttemptOutcome::Failure {
        stage: stage_of(&error),
        message: error.to_string(),
    }
}
