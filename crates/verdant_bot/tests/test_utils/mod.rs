//! Test utilities for verdant orchestration tests.
//!
//! This module provides mock services and helpers for wiring them together.

pub mod mock_services;

#[allow(unused_imports)]
pub use mock_services::{
    MockBehavior, MockCaptionModel, MockPhotoProvider, MockPublisher, MockStager, sample_photo,
};
