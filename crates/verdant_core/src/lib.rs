//! Core data types for the verdant posting bot.
//!
//! Everything here lives for a single run: search terms, the photo picked for
//! an attempt, the caption and the handles returned by the publishing platform.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod outcome;
mod photo;
mod post;
mod query;
mod terms;

pub use outcome::{AttemptOutcome, PipelineStage};
pub use photo::{PhotoResult, StagedImage};
pub use post::{Caption, DEFAULT_CAPTION, FALLBACK_CAPTION, MediaHandle, PostId};
pub use query::{QuerySelector, QueryStrategy, SearchQuery};
pub use terms::{
    HABITATS, LANDSCAPES, NATURAL_FEATURES, SEASONS, TERM_GROUPS, WEATHER_AND_SKY,
    nature_queries,
};
