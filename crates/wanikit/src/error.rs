//! Error types for the wanikit crate.
//!
//! # Error Handling
//!
//! The errors you are most likely to see are:
//!
//! - [`Error::Api`]: WaniKani rejected the request and said why
//!   (bad token, validation failure, missing resource)
//! - [`Error::RateLimitExceeded`]: the request budget is spent;
//!   [`Client::paginate`](crate::Client::paginate) recovers from this
//!   automatically when backoff is enabled
//! - [`Error::Http`]: the network itself failed
//!
//! # Example
//!
//! ```no_run
//! use wanikit::{Client, Error};
//! use wanikit::resources::user;
//!
//! # async fn example() {
//! let client = Client::builder().token("api-token").build();
//!
//! match client.send(&user::Me, None).await {
//!     Ok(response) => println!("logged in as {}", response.data.data.username),
//!     Err(Error::Api { code: 401, .. }) => eprintln!("check your API token"),
//!     Err(Error::RateLimitExceeded(limits)) => {
//!         eprintln!("rate limited until {}", limits.reset);
//!     }
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! # }
//! ```

use thiserror::Error;

use crate::response::{RateLimit, StatusCode};

/// The error type for WaniKani operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Raised by the bundled transport and propagated verbatim; wanikit
    /// never retries transport failures.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    ///
    /// On the request side this fires before any network activity; on the
    /// response side it means the body did not match the expected schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response status code is not one WaniKani is known to return.
    ///
    /// Usually a proxy or captive portal answering in WaniKani's place.
    #[error("incompatible response with status {0}")]
    IncompatibleResponse(u16),

    /// The request budget is exhausted.
    ///
    /// Carries the parsed `Ratelimit-*` header triple so callers can decide
    /// how long to wait. [`Client::paginate`](crate::Client::paginate)
    /// handles this automatically when backoff is enabled.
    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(RateLimit),

    /// WaniKani returned a structured error payload.
    #[error("WaniKani reported error {code}: {}", .message.as_deref().unwrap_or("(no message)"))]
    Api {
        /// The status code WaniKani reported in the body.
        code: u16,
        /// Human-readable explanation, when the server provided one.
        message: Option<String>,
    },

    /// A known non-success status without a decodable error body.
    #[error("request failed with status {0}")]
    Status(StatusCode),

    /// A success status arrived with no body to decode.
    ///
    /// Seen on `304 Not Modified`, which tells the caller to use content it
    /// already has.
    #[error("response contained no body")]
    EmptyResponse,

    /// Invalid client configuration, such as a token or user agent that
    /// cannot be sent as a header value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// A specialized Result type for WaniKani operations.
pub type Result<T> = std::result::Result<T, Error>;
