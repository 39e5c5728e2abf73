//! Orchestration for the verdant posting bot.
//!
//! A run makes up to `max_attempts` passes through search, caption, download,
//! upload and publish, pausing between failures. If none publishes, one more
//! pass runs with a fixed caption and no caption request.
//!
//! - [`VerdantConfig`]: layered configuration
//! - [`RetryPolicy`]: attempt budget and pause schedule
//! - [`Orchestrator`]: the state machine driving a run
//! - [`RunReport`]: every state and attempt of a finished run

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod orchestrator;
mod policy;
mod state;

pub use config::{
    CaptionConfig, PostingConfig, QueryConfig, TwitterConfig, UnsplashConfig, VerdantConfig,
};
pub use orchestrator::{Orchestrator, Services, stage_of};
pub use policy::RetryPolicy;
pub use state::{AttemptKind, AttemptRecord, RunReport, RunState};
