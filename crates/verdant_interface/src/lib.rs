//! Trait definitions for the services the verdant posting bot depends on.
//!
//! Each external collaborator sits behind one trait so the orchestrator can be
//! driven by real HTTP clients in production and by mocks in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CaptionModel, ImageStager, PhotoProvider, SocialPublisher};
