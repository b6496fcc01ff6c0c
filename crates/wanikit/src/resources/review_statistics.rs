//! Review statistic operations.

use chrono::{DateTime, Utc};

use crate::models::{Collection, Model, ReviewStatistic, SubjectKind};
use crate::request::ApiRequest;
use crate::resources::Resource;

/// List review statistics, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct List {
    hidden: Option<bool>,
    ids: Option<Vec<u64>>,
    percentages_greater_than: Option<u32>,
    percentages_less_than: Option<u32>,
    subject_ids: Option<Vec<u64>>,
    subject_types: Option<Vec<SubjectKind>>,
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

    /// Only statistics with `percentage_correct` above this value.
    pub fn percentages_greater_than(mut self, percentage: u32) -> Self {
        self.percentages_greater_than = Some(percentage);
        self
    }

    /// Only statistics with `percentage_correct` below this value.
    pub fn percentages_less_than(mut self, percentage: u32) -> Self {
        self.percentages_less_than = Some(percentage);
        self
    }

    pub fn subject_ids(mut self, ids: &[u64]) -> Self {
        self.subject_ids = Some(ids.to_vec());
        self
    }

    pub fn subject_types(mut self, types: &[SubjectKind]) -> Self {
        self.subject_types = Some(types.to_vec());
        self
    }

    pub fn updated_after(mut self, when: DateTime<Utc>) -> Self {
        self.updated_after = Some(when);
        self
    }
}

impl Resource for List {
    type Content = Collection<Model<ReviewStatistic>>;
    type Body = ();

    fn path(&self) -> String {
        "review_statistics".to_string()
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.append_query_if("hidden", self.hidden.as_ref());
        request.append_query_list("ids", self.ids.as_deref());
        request.append_query_if(
            "percentages_greater_than",
            self.percentages_greater_than.as_ref(),
        );
        request.append_query_if(
            "percentages_less_than",
            self.percentages_less_than.as_ref(),
        );
        request.append_query_list("subject_ids", self.subject_ids.as_deref());
        request.append_query_list("subject_types", self.subject_types.as_deref());
        request.append_query_time("updated_after", self.updated_after.as_ref());
    }
}

/// Fetch a single review statistic by id.
#[derive(Debug, Clone, Copy)]
pub struct Get(pub u64);

impl Resource for Get {
    type Content = Model<ReviewStatistic>;
    type Body = ();

    fn path(&self) -> String {
        format!("review_statistics/{}", self.0)
    }
}
