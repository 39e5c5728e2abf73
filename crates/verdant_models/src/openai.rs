//! OpenAI chat completions client for image captions.

use crate::{ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use verdant_core::{Caption, DEFAULT_CAPTION};
use verdant_error::{CaptionError, CaptionErrorKind, CaptionResult};
use verdant_interface::CaptionModel;

/// Production API root.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Vision model used unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Completion budget used unless configured otherwise.
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Instruction sent alongside the image.
pub const CAPTION_PROMPT: &str = "Describe this image in a concise, engaging way that would make a good tweet caption. Keep it under 200 characters and make it interesting for social media.";

/// Vision-capable chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiVisionClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_tokens: u32,
    prompt: String,
    default_caption: String,
}

impl OpenAiVisionClient {
    /// Creates a new client with the default model, prompt and token budget.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key, if configured
    pub fn new(api_key: Option<String>) -> Self {
        debug!("Creating new OpenAI vision client");
        Self {
            client: Client::new(),
            api_key,
            base_url: OPENAI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            prompt: CAPTION_PROMPT.to_string(),
            default_caption: DEFAULT_CAPTION.to_string(),
        }
    }

    /// Creates a client with the key from `OPENAI_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(OPENAI_API_KEY_ENV).ok())
    }

    /// Points the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Uses a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the completion token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Replaces the caption instruction.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Replaces the caption used when the model returns no text.
    pub fn with_default_caption(mut self, caption: impl Into<String>) -> Self {
        self.default_caption = caption.into();
        self
    }

    /// Builds the single-message request for `image_url`.
    pub fn build_request(&self, image_url: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: self.prompt.clone(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_url.to_string(),
                        },
                    },
                ],
            }],
            max_tokens: self.max_tokens,
        }
    }

    /// Extracts the caption from a successful completion.
    ///
    /// Null, absent or empty text yields the default caption; any other
    /// non-string content is an error.
    fn extract_caption(&self, response: ChatResponse) -> CaptionResult<Caption> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CaptionError::new(CaptionErrorKind::NoChoices))?;

        match choice.message.content {
            None | Some(Value::Null) => Ok(Caption(self.default_caption.clone())),
            Some(Value::String(text)) if text.is_empty() => {
                Ok(Caption(self.default_caption.clone()))
            }
            Some(Value::String(text)) => Ok(Caption(text)),
            Some(other) => Err(CaptionError::new(CaptionErrorKind::NonTextContent(
                other.to_string(),
            ))),
        }
    }
}

#[async_trait]
impl CaptionModel for OpenAiVisionClient {
    #[instrument(skip(self), fields(model = %self.model))]
    async fn generate_caption(&self, image_url: &str) -> CaptionResult<Caption> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                CaptionError::new(CaptionErrorKind::MissingCredentials(format!(
                    "{} not set",
                    OPENAI_API_KEY_ENV
                )))
            })?;

        info!("Requesting caption from vision model");
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let request = self.build_request(image_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI");
                CaptionError::new(CaptionErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI returned error");
            return Err(CaptionError::new(CaptionErrorKind::Status {
                status: status.as_u16(),
                message: body,
            }));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            CaptionError::new(CaptionErrorKind::Parse(e.to_string()))
        })?;

        let caption = self.extract_caption(completion)?;
        info!(caption = %caption, "Generated caption");
        Ok(caption)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
