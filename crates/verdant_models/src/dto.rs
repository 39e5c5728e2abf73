//! Chat completions request and response payloads.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation; a single user message for captioning
    pub messages: Vec<ChatMessage>,
    /// Completion budget
    pub max_tokens: u32,
}

/// One multimodal chat message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    /// Sender role
    pub role: String,
    /// Text and image parts
    pub content: Vec<ContentPart>,
}

/// A part of a multimodal message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Instruction text
    Text {
        /// The text
        text: String,
    },
    /// Image reference
    ImageUrl {
        /// Where the model fetches the image
        image_url: ImageUrl,
    },
}

/// Image reference by URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageUrl {
    /// Publicly reachable image URL
    pub url: String,
}

/// Response body of a chat completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Generated message
    pub message: ResponseMessage,
}

/// Assistant message of a choice.
///
/// `content` is kept as raw JSON so that null, text and structured content can
/// be told apart.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Message content
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}
