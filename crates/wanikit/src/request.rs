//! Request construction.
//!
//! [`ApiRequest`] is the fully formed request handed to the
//! [`Transport`](crate::transport::Transport): method, URL, headers, body
//! bytes, and a cache hint. Building one is pure; nothing here touches the
//! network.

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use crate::config::Configuration;
use crate::error::Result;
use crate::pagination::PageOptions;
use crate::resources::Resource;
use crate::timestamp;

/// The `Accept`/`Content-Type` value used for all JSON traffic.
pub const APPLICATION_JSON: &str = "application/json; charset=utf-8";

/// How aggressively a transport may reuse cached response data.
///
/// This is a hint carried on the request. The bundled reqwest transport has
/// no client-side cache and ignores it; custom transports that cache may
/// honor it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Follow the protocol's caching rules.
    #[default]
    ProtocolDefault,
    /// Prefer cached data when available, loading from the network
    /// otherwise. Used by read-heavy endpoints such as subjects.
    PreferCache,
}

/// A fully formed request, ready for a transport to execute.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
}

impl ApiRequest {
    /// Compose a request from a resource descriptor, the client
    /// configuration, and an optional pagination cursor.
    ///
    /// Steps, in order: resolve the versioned URL, adopt the descriptor's
    /// cache hint, append the cursor, apply the configuration's fixed
    /// headers, let the descriptor transform the request (query filters,
    /// method override), and finally serialize the body if one is declared.
    /// Body serialization failure aborts before any network activity.
    pub(crate) fn new<R: Resource>(
        resource: &R,
        configuration: &Configuration,
        page_options: Option<&PageOptions>,
    ) -> Result<Self> {
        let url = configuration.version.url_for(&resource.path())?;

        let mut request = ApiRequest {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: None,
            cache_policy: resource.cache_policy(),
        };

        if let Some(options) = page_options {
            request.append_query(PageOptions::QUERY_KEY, options.id);
        }

        configuration.apply_headers(&mut request)?;
        resource.transform_request(&mut request);

        if let Some(body) = resource.body() {
            request.body = Some(serde_json::to_vec(body)?);
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        Ok(request)
    }

    /// Override the HTTP method. Base construction always assumes `GET`;
    /// write resources call this from `transform_request`.
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Append a single query parameter.
    pub fn append_query(&mut self, key: &str, value: impl fmt::Display) {
        let value = value.to_string();
        self.url.query_pairs_mut().append_pair(key, &value);
    }

    /// Append a query parameter when the value is present.
    pub fn append_query_if<T: fmt::Display>(&mut self, key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.append_query(key, value);
        }
    }

    /// Append a comma-joined list parameter when present and non-empty.
    pub fn append_query_list<T: fmt::Display>(&mut self, key: &str, values: Option<&[T]>) {
        let Some(values) = values else { return };
        if values.is_empty() {
            return;
        }

        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.append_query(key, joined);
    }

    /// Append a value-less query parameter when enabled, such as
    /// `immediately_available_for_review`.
    pub fn append_query_flag(&mut self, key: &str, enabled: bool) {
        if enabled {
            self.url.query_pairs_mut().append_key_only(key);
        }
    }

    /// Append a timestamp parameter in the fixed wire format when present.
    pub fn append_query_time(&mut self, key: &str, value: Option<&DateTime<Utc>>) {
        if let Some(value) = value {
            self.append_query(key, timestamp::to_string(value));
        }
    }
}
