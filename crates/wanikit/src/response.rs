//! Response classification.
//!
//! Raw HTTP exchanges go through [`classify`] before any decoding: unknown
//! statuses are rejected outright, `429` becomes a typed rate-limit error
//! carrying the server's budget headers, and known failures are mapped to
//! [`Error::Api`] or [`Error::Status`]. Only classified successes reach the
//! JSON decoder.

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// A decoded response: the typed content plus the classified status and the
/// response headers, kept for callers that want `Etag` or rate-limit data.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// The HTTP statuses WaniKani is known to return.
///
/// Anything outside this set is treated as not coming from WaniKani at all
/// and surfaces as [`Error::IncompatibleResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    NotModified,
    Unauthorized,
    Forbidden,
    NotFound,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
    ServiceUnavailable,
}

impl StatusCode {
    /// Map a wire status to the known set.
    pub fn from_u16(status: u16) -> Option<Self> {
        match status {
            200 => Some(Self::Ok),
            304 => Some(Self::NotModified),
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            422 => Some(Self::UnprocessableEntity),
            429 => Some(Self::TooManyRequests),
            500 => Some(Self::InternalServerError),
            503 => Some(Self::ServiceUnavailable),
            _ => None,
        }
    }

    pub fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotModified => 304,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::UnprocessableEntity => 422,
            Self::TooManyRequests => 429,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Whether this status indicates a usable response. `304 Not Modified`
    /// counts: it is the server's answer, not a failure.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::NotModified)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "OK",
            Self::NotModified => "Not Modified",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::TooManyRequests => "Too Many Requests",
            Self::InternalServerError => "Internal Server Error",
            Self::ServiceUnavailable => "Service Unavailable",
        };
        write!(f, "{} {}", self.as_u16(), name)
    }
}

/// The request budget reported alongside a `429`, parsed from the
/// `Ratelimit-Limit`, `Ratelimit-Remaining`, and `Ratelimit-Reset` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// When the window resets.
    pub reset: DateTime<Utc>,
}

impl RateLimit {
    /// Parse the budget triple. All three headers must be present and
    /// well-formed; a partial set means the `429` did not come with a usable
    /// budget and the caller should fall back to generic handling.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
            headers.get(name)?.to_str().ok()?.trim().parse().ok()
        }

        let limit = header_u64(headers, "Ratelimit-Limit")?;
        let remaining = header_u64(headers, "Ratelimit-Remaining")?;
        let reset = header_u64(headers, "Ratelimit-Reset")?;

        Some(Self {
            limit: u32::try_from(limit).ok()?,
            remaining: u32::try_from(remaining).ok()?,
            reset: DateTime::from_timestamp(i64::try_from(reset).ok()?, 0)?,
        })
    }
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} requests remaining, resets at {}",
            self.remaining, self.limit, self.reset
        )
    }
}

/// The structured error body WaniKani attaches to most failures.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: u16,
    error: Option<String>,
}

/// Classify a raw exchange.
///
/// Rules apply in order:
///
/// 1. a status outside the known set is [`Error::IncompatibleResponse`];
/// 2. a `429` with a complete budget triple is [`Error::RateLimitExceeded`]
///    (a `429` missing budget headers falls through);
/// 3. success statuses pass, returning the typed code;
/// 4. a decodable `{code, error}` body is [`Error::Api`];
/// 5. anything left is [`Error::Status`] with the known code.
pub(crate) fn classify(status: u16, headers: &HeaderMap, body: &[u8]) -> Result<StatusCode> {
    let Some(known) = StatusCode::from_u16(status) else {
        return Err(Error::IncompatibleResponse(status));
    };

    if known == StatusCode::TooManyRequests {
        if let Some(limits) = RateLimit::from_headers(headers) {
            return Err(Error::RateLimitExceeded(limits));
        }
    }

    if known.is_success() {
        return Ok(known);
    }

    if let Ok(api_error) = serde_json::from_slice::<ApiErrorBody>(body) {
        return Err(Error::Api {
            code: api_error.code,
            message: api_error.error,
        });
    }

    Err(Error::Status(known))
}
