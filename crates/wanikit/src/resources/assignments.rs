//! Assignment operations.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;

use crate::models::{Assignment, Collection, Model, SubjectKind};
use crate::request::ApiRequest;
use crate::resources::Resource;
use crate::timestamp;

/// List assignments, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct List {
    available_after: Option<DateTime<Utc>>,
    available_before: Option<DateTime<Utc>>,
    burned: Option<bool>,
    hidden: Option<bool>,
    ids: Option<Vec<u64>>,
    immediately_available_for_lessons: bool,
    immediately_available_for_review: bool,
    in_review: bool,
    levels: Option<Vec<u32>>,
    srs_stages: Option<Vec<u32>>,
    started: Option<bool>,
    subject_ids: Option<Vec<u64>>,
    subject_types: Option<Vec<SubjectKind>>,
    unlocked: Option<bool>,
    updated_after: Option<DateTime<Utc>>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only assignments whose reviews open after this time.
    pub fn available_after(mut self, when: DateTime<Utc>) -> Self {
        self.available_after = Some(when);
        self
    }

    /// Only assignments whose reviews open before this time.
    pub fn available_before(mut self, when: DateTime<Utc>) -> Self {
        self.available_before = Some(when);
        self
    }

    pub fn burned(mut self, burned: bool) -> Self {
        self.burned = Some(burned);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn ids(mut self, ids: &[u64]) -> Self {
        self.ids = Some(ids.to_vec());
        self
    }

    /// Only assignments ready for lessons right now.
    pub fn immediately_available_for_lessons(mut self) -> Self {
        self.immediately_available_for_lessons = true;
        self
    }

    /// Only assignments ready for review right now.
    pub fn immediately_available_for_review(mut self) -> Self {
        self.immediately_available_for_review = true;
        self
    }

    /// Only assignments currently in the review pool.
    pub fn in_review(mut self) -> Self {
        self.in_review = true;
        self
    }

    pub fn levels(mut self, levels: &[u32]) -> Self {
        self.levels = Some(levels.to_vec());
        self
    }

    pub fn srs_stages(mut self, stages: &[u32]) -> Self {
        self.srs_stages = Some(stages.to_vec());
        self
    }

    pub fn started(mut self, started: bool) -> Self {
        self.started = Some(started);
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

    pub fn unlocked(mut self, unlocked: bool) -> Self {
        self.unlocked = Some(unlocked);
        self
    }

    /// Only assignments updated after this time. The standard incremental
    /// sync filter.
    pub fn updated_after(mut self, when: DateTime<Utc>) -> Self {
        self.updated_after = Some(when);
        self
    }
}

impl Resource for List {
    type Content = Collection<Model<Assignment>>;
    type Body = ();

    fn path(&self) -> String {
        "assignments".to_string()
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.append_query_time("available_after", self.available_after.as_ref());
        request.append_query_time("available_before", self.available_before.as_ref());
        request.append_query_if("burned", self.burned.as_ref());
        request.append_query_if("hidden", self.hidden.as_ref());
        request.append_query_list("ids", self.ids.as_deref());
        request.append_query_flag(
            "immediately_available_for_lessons",
            self.immediately_available_for_lessons,
        );
        request.append_query_flag(
            "immediately_available_for_review",
            self.immediately_available_for_review,
        );
        request.append_query_flag("in_review", self.in_review);
        request.append_query_list("levels", self.levels.as_deref());
        request.append_query_list("srs_stages", self.srs_stages.as_deref());
        request.append_query_if("started", self.started.as_ref());
        request.append_query_list("subject_ids", self.subject_ids.as_deref());
        request.append_query_list("subject_types", self.subject_types.as_deref());
        request.append_query_if("unlocked", self.unlocked.as_ref());
        request.append_query_time("updated_after", self.updated_after.as_ref());
    }
}

/// Fetch a single assignment by id.
#[derive(Debug, Clone, Copy)]
pub struct Get(pub u64);

impl Resource for Get {
    type Content = Model<Assignment>;
    type Body = ();

    fn path(&self) -> String {
        format!("assignments/{}", self.0)
    }
}

/// Move an assignment from lessons into reviews.
///
/// The assignment must be unlocked and at its system's unlocking stage.
#[derive(Debug, Clone)]
pub struct Start {
    id: u64,
    body: StartBody,
}

impl Start {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            body: StartBody::default(),
        }
    }

    /// Backdate the start. Must fall between the assignment's unlock time
    /// and now; the server rejects anything else.
    pub fn started_at(mut self, when: DateTime<Utc>) -> Self {
        self.body.started_at = Some(when);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StartBody {
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
}

impl Resource for Start {
    type Content = Model<Assignment>;
    type Body = StartBody;

    fn path(&self) -> String {
        format!("assignments/{}/start", self.id)
    }

    fn body(&self) -> Option<&StartBody> {
        Some(&self.body)
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.set_method(Method::PUT);
    }
}
