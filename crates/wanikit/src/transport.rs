//! The boundary between request construction and the network.
//!
//! [`Transport`] is the single seam for HTTP execution. The client depends
//! only on this trait, so tests can substitute a scripted transport and
//! exercise the full classify/decode pipeline without a server.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::error::Result;
use crate::request::ApiRequest;

/// A raw HTTP exchange result: status, headers, and body bytes, before any
/// classification or decoding.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Executes an [`ApiRequest`] and returns the raw exchange.
///
/// Implementations only move bytes. Status interpretation, error mapping,
/// and JSON decoding all happen in the client after this returns, so a
/// transport should hand back 4xx and 5xx responses as `Ok` values and
/// reserve `Err` for failures where no response exists at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// The default transport, backed by a shared [`reqwest::Client`].
///
/// reqwest keeps no client-side response cache, so the request's
/// [`CachePolicy`](crate::request::CachePolicy) hint is ignored here.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
