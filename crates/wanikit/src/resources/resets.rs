//! Reset operations.

use chrono::{DateTime, Utc};

use crate::models::{Collection, Model, Reset};
use crate::request::ApiRequest;
use crate::resources::Resource;

/// List resets, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct List {
    ids: Option<Vec<u64>>,
    updated_after: Option<DateTime<Utc>>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(mut self, ids: &[u64]) -> Self {
        self.ids = Some(ids.to_vec());
        self
    }

    pub fn updated_after(mut self, when: DateTime<Utc>) -> Self {
        self.updated_after = Some(when);
        self
    }
}

impl Resource for List {
    type Content = Collection<Model<Reset>>;
    type Body = ();

    fn path(&self) -> String {
        "resets".to_string()
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.append_query_list("ids", self.ids.as_deref());
        request.append_query_time("updated_after", self.updated_after.as_ref());
    }
}

/// Fetch a single reset by id.
#[derive(Debug, Clone, Copy)]
pub struct Get(pub u64);

impl Resource for Get {
    type Content = Model<Reset>;
    type Body = ();

    fn path(&self) -> String {
        format!("resets/{}", self.0)
    }
}
