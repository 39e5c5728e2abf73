//! Caption text and platform handles.

use serde::{Deserialize, Serialize};

/// Caption the generator substitutes when the model answers with no text.
pub const DEFAULT_CAPTION: &str = "Beautiful Nature Image";

/// Caption used by the fallback attempt, which skips caption generation.
pub const FALLBACK_CAPTION: &str = "Stunning Nature Photography";

/// Post text.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[display("{}", _0)]
pub struct Caption(pub String);

impl Caption {
    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<&str> for Caption {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Opaque reference to uploaded media; valid for the attempt that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct MediaHandle(pub String);

/// Identifier of a created post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PostId(pub String);
