//! Subject operations.
//!
//! Subjects change rarely, so both operations hint
//! [`CachePolicy::PreferCache`] to caching transports.

use chrono::{DateTime, Utc};

use crate::models::{Collection, Subject, SubjectKind};
use crate::request::{ApiRequest, CachePolicy};
use crate::resources::Resource;

/// List subjects of any kind, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct List {
    hidden: Option<bool>,
    ids: Option<Vec<u64>>,
    levels: Option<Vec<u32>>,
    slugs: Option<Vec<String>>,
    types: Option<Vec<SubjectKind>>,
    updated_after: Option<DateTime<Utc>>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn ids(mut self, ids: &[u64]) -> Self {
        self.ids = Some(ids.to_vec());
        self
    }

    pub fn levels(mut self, levels: &[u32]) -> Self {
        self.levels = Some(levels.to_vec());
        self
    }

    pub fn slugs(mut self, slugs: &[&str]) -> Self {
        self.slugs = Some(slugs.iter().map(ToString::to_string).collect());
        self
    }

    pub fn types(mut self, types: &[SubjectKind]) -> Self {
        self.types = Some(types.to_vec());
        self
    }

    pub fn updated_after(mut self, when: DateTime<Utc>) -> Self {
        self.updated_after = Some(when);
        self
    }
}

impl Resource for List {
    type Content = Collection<Subject>;
    type Body = ();

    fn path(&self) -> String {
        "subjects".to_string()
    }

    fn cache_policy(&self) -> CachePolicy {
        CachePolicy::PreferCache
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.append_query_if("hidden", self.hidden.as_ref());
        request.append_query_list("ids", self.ids.as_deref());
        request.append_query_list("levels", self.levels.as_deref());
        request.append_query_list("slugs", self.slugs.as_deref());
        request.append_query_list("types", self.types.as_deref());
        request.append_query_time("updated_after", self.updated_after.as_ref());
    }
}

/// Fetch a single subject by id.
#[derive(Debug, Clone, Copy)]
pub struct Get(pub u64);

impl Resource for Get {
    type Content = Subject;
    type Body = ();

    fn path(&self) -> String {
        format!("subjects/{}", self.0)
    }

    fn cache_policy(&self) -> CachePolicy {
        CachePolicy::PreferCache
    }
}
