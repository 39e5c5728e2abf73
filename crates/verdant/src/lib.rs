//! Verdant: post a captioned nature photo.
//!
//! Each run searches Unsplash for a nature photo, asks a vision model for a
//! caption, and publishes the image with that caption to Twitter/X. Failed
//! attempts are retried; if every attempt fails, one more runs with a fixed
//! caption.
//!
//! This crate re-exports the workspace crates and hosts the command-line
//! interface.
//!
//! # Example
//!
//! ```no_run
//! use verdant::{Orchestrator, Services, VerdantConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VerdantConfig::load()?;
//! let services = Services::from_config(&config, true);
//! let report = Orchestrator::from_config(&config, services)?.run().await;
//! println!("Finished in state {}", report.final_state());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;
mod observability;

pub use cli::{Cli, Commands, exit_code, print_queries, run_post};
pub use observability::init_tracing;

pub use verdant_bot::{
    AttemptKind, AttemptRecord, CaptionConfig, Orchestrator, PostingConfig, QueryConfig,
    RetryPolicy, RunReport, RunState, Services, TwitterConfig, UnsplashConfig, VerdantConfig,
    stage_of,
};
pub use verdant_core::{
    AttemptOutcome, Caption, DEFAULT_CAPTION, FALLBACK_CAPTION, MediaHandle, PhotoResult,
    PipelineStage, PostId, QuerySelector, QueryStrategy, SearchQuery, StagedImage, TERM_GROUPS,
    nature_queries,
};
pub use verdant_error::{
    CaptionError, CaptionErrorKind, ConfigError, DownloadError, DownloadErrorKind, ProviderError,
    ProviderErrorKind, PublishError, PublishErrorKind, UploadError, UploadErrorKind, VerdantError,
    VerdantErrorKind, VerdantResult,
};
pub use verdant_interface::{CaptionModel, ImageStager, PhotoProvider, SocialPublisher};
pub use verdant_models::OpenAiVisionClient;
pub use verdant_photos::{HttpImageStager, UnsplashClient};
pub use verdant_social::{DryRunPublisher, TwitterClient, TwitterCredentials};
