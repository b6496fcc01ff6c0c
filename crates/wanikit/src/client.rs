//! The WaniKani client: request dispatch and pagination.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::Stream;
use futures::stream;
use tracing::{debug, warn};

use crate::config::{ApiVersion, Configuration};
use crate::error::{Error, Result};
use crate::pagination::{PageOptions, PageState, Paginated};
use crate::request::ApiRequest;
use crate::resources::Resource;
use crate::response::{self, Response};
use crate::transport::{ReqwestTransport, Transport};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An asynchronous client for the WaniKani REST API.
///
/// Cheap to clone; clones share the underlying transport and connection
/// pool.
///
/// # Example
///
/// ```no_run
/// use wanikit::Client;
/// use wanikit::resources::subjects;
///
/// # async fn example() -> wanikit::Result<()> {
/// let client = Client::builder().token("api-token").build();
///
/// let response = client
///     .send(&subjects::List::new().levels(&[1, 2, 3]), None)
///     .await?;
/// println!("fetched {} subjects", response.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    configuration: Configuration,
}

impl Client {
    /// Create a builder for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with the default configuration and no access token.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// The configured access token, if any.
    pub fn token(&self) -> Option<&str> {
        self.configuration.token.as_deref()
    }

    /// Replace the access token used for subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.configuration.token = Some(token.into());
    }

    /// Send a single request described by a resource descriptor.
    ///
    /// `page_options` positions collection requests at a cursor; pass `None`
    /// for the first page or for singular resources.
    pub async fn send<R: Resource>(
        &self,
        resource: &R,
        page_options: Option<PageOptions>,
    ) -> Result<Response<R::Content>> {
        let request = ApiRequest::new(resource, &self.configuration, page_options.as_ref())?;
        debug!(method = %request.method, url = %request.url, "sending request");

        let raw = self.transport.send(request).await?;
        let status = response::classify(raw.status, &raw.headers, &raw.body)?;

        if raw.body.is_empty() {
            return Err(Error::EmptyResponse);
        }

        let data = serde_json::from_slice(&raw.body)?;
        Ok(Response {
            data,
            status,
            headers: raw.headers,
        })
    }

    /// Stream every page of a collection resource, following the server's
    /// cursor chain.
    ///
    /// Each stream item is one page response. `start` positions the stream
    /// mid-collection; `None` begins at the first page. When
    /// `wait_on_rate_limit` is set, a rate-limited request sleeps until the
    /// server's reported reset and retries the same page instead of
    /// surfacing the error; all other errors are yielded once and end the
    /// stream.
    pub fn paginate<R>(
        &self,
        resource: R,
        start: Option<PageOptions>,
        wait_on_rate_limit: bool,
    ) -> impl Stream<Item = Result<Response<R::Content>>> + use<R>
    where
        R: Resource + Send + Sync + 'static,
        R::Content: Paginated,
    {
        let client = self.clone();
        let resource = Arc::new(resource);

        stream::unfold(PageState::NotStarted(start), move |state| {
            let client = client.clone();
            let resource = Arc::clone(&resource);
            async move {
                let cursor = state.cursor()?;
                loop {
                    match client.send(resource.as_ref(), cursor).await {
                        Ok(page) => {
                            let next = match page.data.next_page() {
                                Some(cursor) => PageState::HasCursor(cursor),
                                None => PageState::Exhausted,
                            };
                            return Some((Ok(page), next));
                        }
                        Err(Error::RateLimitExceeded(limits)) if wait_on_rate_limit => {
                            let wait = (limits.reset - Utc::now()).to_std().unwrap_or_default();
                            warn!(
                                reset = %limits.reset,
                                wait_secs = wait.as_secs(),
                                "rate limited, waiting for budget reset"
                            );
                            tokio::time::sleep(wait).await;
                        }
                        Err(e) => return Some((Err(e), PageState::Exhausted)),
                    }
                }
            }
        })
    }

    /// Stream every page from the beginning, waiting out rate limits.
    ///
    /// Shorthand for [`paginate`](Self::paginate) with no start cursor and
    /// backoff enabled.
    pub fn pages<R>(&self, resource: R) -> impl Stream<Item = Result<Response<R::Content>>> + use<R>
    where
        R: Resource + Send + Sync + 'static,
        R::Content: Paginated,
    {
        self.paginate(resource, None, true)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use wanikit::Client;
///
/// let client = Client::builder()
///     .token("api-token")
///     .timeout(Duration::from_secs(10))
///     .build();
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Override the API base URL. Useful for pointing at a local mock
    /// server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the personal access token sent as a bearer credential.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the request timeout (default: 30 seconds). Ignored when a custom
    /// transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the HTTP layer entirely. The client then performs no network
    /// I/O of its own.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed, which
    /// only happens when the system TLS backend is unavailable.
    pub fn build(self) -> Client {
        let mut configuration = Configuration::new(ApiVersion::v2());
        if let Some(base_url) = self.base_url {
            configuration.version.base_url = base_url;
        }
        if let Some(user_agent) = self.user_agent {
            configuration.user_agent = user_agent;
        }
        configuration.token = self.token;

        let transport = self.transport.unwrap_or_else(|| {
            let http = reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .expect("failed to construct HTTP client");
            Arc::new(ReqwestTransport::new(http))
        });

        Client {
            transport,
            configuration,
        }
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
