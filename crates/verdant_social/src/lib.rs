//! Social platform publishing for the verdant posting bot.
//!
//! - [`TwitterClient`] uploads media and creates posts on Twitter/X, signing
//!   every request with OAuth 1.0a user credentials.
//! - [`DryRunPublisher`] logs what would be posted without touching the network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dry_run;
mod dto;
mod oauth;
mod twitter;

pub use dry_run::DryRunPublisher;
pub use dto::{
    CreateTweetRequest, CreateTweetResponse, MediaUploadResponse, ProcessingInfo, TweetData,
    TweetMedia,
};
pub use oauth::{OAuthCredentials, authorization_header, percent_encode};
pub use twitter::{
    TWITTER_ACCESS_SECRET_ENV, TWITTER_ACCESS_TOKEN_ENV, TWITTER_API_URL, TWITTER_APP_KEY_ENV,
    TWITTER_APP_SECRET_ENV, TWITTER_UPLOAD_URL, TwitterClient, TwitterCredentials,
    UPLOAD_CHUNK_SIZE,
};
