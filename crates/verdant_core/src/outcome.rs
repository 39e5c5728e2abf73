//! Result of a single pipeline attempt.

use crate::{Caption, PostId};
use serde::{Deserialize, Serialize};

/// Pipeline step, used to report where an attempt stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum PipelineStage {
    /// Photo search
    #[display("search")]
    Search,
    /// Caption generation
    #[display("caption")]
    Caption,
    /// Full-resolution download
    #[display("download")]
    Download,
    /// Media upload
    #[display("upload")]
    Upload,
    /// Post creation
    #[display("publish")]
    Publish,
    /// Local configuration or wiring
    #[display("setup")]
    Setup,
}

/// Tagged result of one loop iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// Every step succeeded
    Success {
        /// Text that was published
        caption: Caption,
        /// Identifier of the created post
        post_id: PostId,
    },
    /// A step failed
    Failure {
        /// Step that failed
        stage: PipelineStage,
        /// Human-readable reason
        message: String,
    },
}

impl AttemptOutcome {
    /// Whether the attempt published a post.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
