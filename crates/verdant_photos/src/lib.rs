//! Photo search and image staging for the verdant posting bot.
//!
//! - [`UnsplashClient`] picks a random photo for a search term.
//! - [`HttpImageStager`] downloads the full-resolution image to the staging file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dto;
mod stager;
mod unsplash;

pub use dto::{UnsplashPhoto, UnsplashUrls, UnsplashUser};
pub use stager::HttpImageStager;
pub use unsplash::{UNSPLASH_ACCESS_KEY_ENV, UNSPLASH_API_URL, UnsplashClient};
