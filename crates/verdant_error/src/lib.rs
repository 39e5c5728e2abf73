//! Error types for the verdant posting bot.
//!
//! Every external collaborator has its own error type so the orchestrator can
//! tell which pipeline stage failed.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use verdant_error::{ProviderError, ProviderErrorKind, VerdantResult};
//!
//! fn fetch_photo() -> VerdantResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::Http("Connection refused".into())))?
//! }
//!
//! match fetch_photo() {
//!     Ok(url) => println!("Got: {}", url),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod caption;
mod config;
mod download;
mod error;
mod provider;
mod publish;
mod upload;

pub use caption::{CaptionError, CaptionErrorKind, CaptionResult};
pub use config::ConfigError;
pub use download::{DownloadError, DownloadErrorKind, DownloadResult};
pub use error::{VerdantError, VerdantErrorKind, VerdantResult};
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
pub use publish::{PublishError, PublishErrorKind, PublishResult};
pub use upload::{UploadError, UploadErrorKind, UploadResult};
