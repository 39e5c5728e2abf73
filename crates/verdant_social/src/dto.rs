//! Twitter API payloads.

use serde::{Deserialize, Serialize};

/// Response of the v1.1 media upload `INIT` and `FINALIZE` commands.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaUploadResponse {
    /// Media id as a string (preferred; numeric ids overflow JSON doubles)
    #[serde(default)]
    pub media_id_string: Option<String>,
    /// Present when the platform processes the media after `FINALIZE`
    #[serde(default)]
    pub processing_info: Option<ProcessingInfo>,
}

/// Asynchronous processing status reported by `FINALIZE`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessingInfo {
    /// `pending`, `in_progress`, `succeeded` or `failed`
    #[serde(default)]
    pub state: String,
    /// Seconds to wait before the next `STATUS` check
    #[serde(default)]
    pub check_after_secs: Option<u64>,
    /// Failure detail when `state` is `failed`
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Body of `POST /2/tweets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTweetRequest {
    /// Post text
    pub text: String,
    /// Attached media
    pub media: TweetMedia,
}

/// Media attachment block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TweetMedia {
    /// Ids returned by the upload endpoint
    pub media_ids: Vec<String>,
}

/// Response of `POST /2/tweets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTweetResponse {
    /// Created post, absent when the platform only reports errors
    #[serde(default)]
    pub data: Option<TweetData>,
    /// Platform-reported problems
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

/// Created post.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetData {
    /// Post id
    pub id: String,
    /// Text as stored by the platform
    #[serde(default)]
    pub text: Option<String>,
}
