//! Layered configuration for the posting bot.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from verdant.toml)
//! - ~/.config/verdant/verdant.toml
//! - ./verdant.toml, or the file given on the command line
//! - Environment variables prefixed with `VERDANT__`

use crate::RetryPolicy;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use verdant_core::{
    Caption, DEFAULT_CAPTION, FALLBACK_CAPTION, QuerySelector, QueryStrategy,
};
use verdant_error::{ConfigError, VerdantError, VerdantResult};
use verdant_models::{CAPTION_PROMPT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, OPENAI_API_URL};
use verdant_photos::UNSPLASH_API_URL;
use verdant_social::{TWITTER_API_URL, TWITTER_UPLOAD_URL};

const DEFAULT_CONFIG: &str = include_str!("../../../verdant.toml");

/// Retry loop and staging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingConfig {
    /// Primary attempts before falling back
    pub max_attempts: u32,
    /// Pause between failed attempts, in milliseconds
    pub backoff_ms: u64,
    /// Randomize each pause
    pub jitter: bool,
    /// Where the full-resolution image is written
    pub staging_path: PathBuf,
    /// Text published when every primary attempt failed
    pub fallback_caption: String,
}

impl Default for PostingConfig {
    fn default() -> Self {
        Self {
            max_attempts: RetryPolicy::DEFAULT_MAX_ATTEMPTS,
            backoff_ms: RetryPolicy::DEFAULT_BACKOFF_MS,
            jitter: false,
            staging_path: PathBuf::from("image.png"),
            fallback_caption: FALLBACK_CAPTION.to_string(),
        }
    }
}

/// Search term selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Fixed or random
    pub strategy: QueryStrategy,
    /// Term used by the fixed strategy
    pub fixed_term: String,
    /// Replaces the curated nature terms for the random strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            strategy: QueryStrategy::Random,
            fixed_term: "nature".to_string(),
            terms: None,
        }
    }
}

/// Vision model settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    /// Model name sent to the chat completions endpoint
    pub model: String,
    /// Completion token ceiling
    pub max_tokens: u32,
    /// Instruction sent alongside the image
    pub prompt: String,
    /// Caption used when the model returns empty content
    pub default_caption: String,
    /// API base URL
    pub base_url: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            prompt: CAPTION_PROMPT.to_string(),
            default_caption: DEFAULT_CAPTION.to_string(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }
}

/// Photo search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsplashConfig {
    /// API base URL
    pub base_url: String,
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            base_url: UNSPLASH_API_URL.to_string(),
        }
    }
}

/// Publishing platform settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    /// Base URL for post creation
    pub api_base: String,
    /// Base URL for media upload
    pub upload_base: String,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            api_base: TWITTER_API_URL.to_string(),
            upload_base: TWITTER_UPLOAD_URL.to_string(),
        }
    }
}

/// Top-level verdant configuration.
///
/// Credentials never live here; they are read from the environment by each
/// client.
///
/// # Example
///
/// ```no_run
/// use verdant_bot::VerdantConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VerdantConfig::load()?;
/// println!("Up to {} attempts", config.posting.max_attempts);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdantConfig {
    /// Retry loop settings
    pub posting: PostingConfig,
    /// Search term settings
    pub query: QueryConfig,
    /// Vision model settings
    pub caption: CaptionConfig,
    /// Photo search settings
    pub unsplash: UnsplashConfig,
    /// Publishing platform settings
    pub twitter: TwitterConfig,
}

impl VerdantConfig {
    /// Load configuration with precedence: env > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    #[instrument]
    pub fn load() -> VerdantResult<Self> {
        Self::load_with(None)
    }

    /// Load configuration, replacing ./verdant.toml with `path` when given.
    ///
    /// An explicit path is required to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or parsed, or the result is invalid.
    #[instrument(skip(path), fields(path = ?path.map(Path::display)))]
    pub fn load_with(path: Option<&Path>) -> VerdantResult<Self> {
        debug!("Loading configuration with precedence: env > file > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/verdant/verdant.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("verdant").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("VERDANT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .map_err(|e| {
                VerdantError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VerdantError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load bundled defaults overlaid with a single file, ignoring the
    /// environment and user directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the result is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VerdantResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VerdantError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VerdantError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize cleanly but cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns an error for zero attempts, a blank fallback caption, an empty
    /// staging path, or a query section that yields no search term.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posting.max_attempts == 0 {
            return Err(ConfigError::new("posting.max_attempts must be at least 1"));
        }
        if self.posting.fallback_caption.trim().is_empty() {
            return Err(ConfigError::new("posting.fallback_caption must not be empty"));
        }
        if self.posting.staging_path.as_os_str().is_empty() {
            return Err(ConfigError::new("posting.staging_path must not be empty"));
        }
        self.query_selector().map(|_| ())
    }

    /// Build the selector described by the `[query]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen strategy has no usable term.
    pub fn query_selector(&self) -> Result<QuerySelector, ConfigError> {
        match self.query.strategy {
            QueryStrategy::Fixed => QuerySelector::fixed(self.query.fixed_term.as_str()),
            QueryStrategy::Random => match &self.query.terms {
                Some(terms) => QuerySelector::random(terms.iter().map(String::as_str)),
                None => Ok(QuerySelector::nature()),
            },
        }
    }

    /// Retry policy described by the `[posting]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero.
    pub fn retry_policy(&self) -> Result<RetryPolicy, ConfigError> {
        Ok(RetryPolicy::new(self.posting.max_attempts, self.posting.backoff_ms)?
            .with_jitter(self.posting.jitter))
    }

    /// Caption published by the fallback attempt.
    pub fn fallback_caption(&self) -> Caption {
        Caption::from(self.posting.fallback_caption.as_str())
    }
}
