//! Vision model captioning for the verdant posting bot.
//!
//! [`OpenAiVisionClient`] sends an image URL and a fixed instruction to an
//! OpenAI-compatible chat completions endpoint and returns the reply as a caption.
//!
//! ```no_run
//! use verdant_interface::CaptionModel;
//! use verdant_models::OpenAiVisionClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiVisionClient::from_env();
//! let caption = client.generate_caption("https://images.unsplash.com/photo-1?w=400").await?;
//! println!("{}", caption);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dto;
mod openai;

pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl, ResponseMessage};
pub use openai::{
    CAPTION_PROMPT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, OPENAI_API_KEY_ENV, OPENAI_API_URL,
    OpenAiVisionClient,
};
