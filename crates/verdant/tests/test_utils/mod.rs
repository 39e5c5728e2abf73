//! Test utilities for verdant binary tests.

pub mod stub_services;

#[allow(unused_imports)]
pub use stub_services::{StubCaptioner, StubPhotos, StubPublisher, StubStager, services};
