//! Client configuration: API version, revision, base URL, and credentials.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderName, HeaderValue, USER_AGENT};
use url::Url;

use crate::error::{Error, Result};
use crate::request::{APPLICATION_JSON, ApiRequest};

/// Default user agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("wanikit/", env!("CARGO_PKG_VERSION"));

/// The revision header expected by the WaniKani API.
const REVISION_HEADER: HeaderName = HeaderName::from_static("wanikani-revision");

/// Configuration for general interaction with the WaniKani REST API,
/// including the access token and the supported API version.
///
/// Owned by [`Client`](crate::Client); everything except the token is fixed
/// for the lifetime of a client instance.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// The API version to speak.
    pub version: ApiVersion,
    pub(crate) user_agent: String,
    pub(crate) token: Option<String>,
}

impl Configuration {
    /// Configuration for API v2 with no access token.
    ///
    /// Unauthenticated clients are valid; most endpoints will answer them
    /// with a 401, which surfaces as [`Error::Api`].
    pub fn new(version: ApiVersion) -> Self {
        Self {
            version,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
        }
    }

    /// Apply the fixed per-request headers: user agent, JSON accept,
    /// revision, and the bearer credential when one is configured.
    pub(crate) fn apply_headers(&self, request: &mut ApiRequest) -> Result<()> {
        let headers = &mut request.headers;
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent)
                .map_err(|_| Error::Config(format!("invalid user agent: {}", self.user_agent)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(
            REVISION_HEADER,
            HeaderValue::from_str(&self.version.revision)
                .map_err(|_| Error::Config(format!("invalid revision: {}", self.version.revision)))?,
        );

        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| Error::Config("API token is not a valid header value".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(ApiVersion::v2())
    }
}

/// A supported version of the WaniKani API: base URL, version path segment,
/// and the revision tag sent in the `Wanikani-Revision` header.
#[derive(Debug, Clone)]
pub struct ApiVersion {
    pub(crate) base_url: String,
    pub(crate) version: String,
    pub(crate) revision: String,
}

impl ApiVersion {
    /// API version 2, revision 20170710.
    pub fn v2() -> Self {
        Self {
            base_url: "https://api.wanikani.com".to_string(),
            version: "v2".to_string(),
            revision: "20170710".to_string(),
        }
    }

    /// The revision tag for this version.
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Resolve a resource path against the versioned base location.
    ///
    /// An empty path targets the versioned base itself, with no trailing
    /// segment.
    pub(crate) fn url_for(&self, path: &str) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let raw = if path.is_empty() {
            format!("{base}/{}", self.version)
        } else {
            format!("{base}/{}/{path}", self.version)
        };

        Url::parse(&raw).map_err(|e| Error::Config(format!("invalid request URL {raw}: {e}")))
    }
}
