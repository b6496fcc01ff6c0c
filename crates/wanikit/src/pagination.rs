//! Cursor-based pagination.
//!
//! Collections page forward with an id cursor: the server reports the next
//! page as a fully formed URL, and [`PageOptions::from_url`] recovers the
//! cursor from it. [`Client::paginate`](crate::Client::paginate) drives
//! [`Paginated`] content through the cursor chain as a stream.

use serde::Deserialize;
use url::Url;

/// Pagination metadata reported inside a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Maximum number of entries per page for this endpoint.
    pub per_page: u64,
    /// Location of the next page, absent on the last page.
    #[serde(default)]
    pub next_url: Option<Url>,
    /// Location of the previous page, absent on the first page.
    #[serde(default)]
    pub previous_url: Option<Url>,
}

impl Page {
    /// The cursor for the page after this one, if there is one.
    pub fn next(&self) -> Option<PageOptions> {
        self.next_url.as_ref().and_then(PageOptions::from_url)
    }

    /// The cursor for the page before this one, if there is one.
    pub fn previous(&self) -> Option<PageOptions> {
        self.previous_url.as_ref().and_then(PageOptions::from_url)
    }
}

/// A pagination cursor: fetch entries after this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// The id the next page starts after.
    pub id: u64,
}

impl PageOptions {
    pub(crate) const QUERY_KEY: &'static str = "page_after_id";

    /// Cursor for the page after the entry with the given id.
    pub fn after_id(id: u64) -> Self {
        Self { id }
    }

    /// Recover a cursor from a page URL's `page_after_id` parameter.
    pub fn from_url(url: &Url) -> Option<Self> {
        url.query_pairs()
            .find(|(key, _)| key == Self::QUERY_KEY)
            .and_then(|(_, value)| value.parse().ok())
            .map(Self::after_id)
    }
}

/// Content that knows how to continue itself. Implemented by
/// [`Collection`](crate::models::Collection); required by
/// [`Client::paginate`](crate::Client::paginate).
pub trait Paginated {
    /// The cursor for the page after this one, or `None` on the last page.
    fn next_page(&self) -> Option<PageOptions>;
}

/// Where a pagination stream is in the cursor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageState {
    /// No request made yet; the first send carries the optional start
    /// cursor.
    NotStarted(Option<PageOptions>),
    /// A page has been yielded and pointed at this cursor.
    HasCursor(PageOptions),
    /// The chain ended, either by a final page or an unrecoverable error.
    Exhausted,
}

impl PageState {
    /// The cursor to send for the next request, if the stream should
    /// continue.
    pub(crate) fn cursor(self) -> Option<Option<PageOptions>> {
        match self {
            Self::NotStarted(start) => Some(start),
            Self::HasCursor(cursor) => Some(Some(cursor)),
            Self::Exhausted => None,
        }
    }
}
