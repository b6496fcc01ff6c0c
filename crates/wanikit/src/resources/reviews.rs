//! Review operations.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;

use crate::models::{Collection, Model, Review};
use crate::request::ApiRequest;
use crate::resources::Resource;
use crate::timestamp;

/// List reviews, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct List {
    assignment_ids: Option<Vec<u64>>,
    ids: Option<Vec<u64>>,
    subject_ids: Option<Vec<u64>>,
    updated_after: Option<DateTime<Utc>>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assignment_ids(mut self, ids: &[u64]) -> Self {
        self.assignment_ids = Some(ids.to_vec());
        self
    }

    pub fn ids(mut self, ids: &[u64]) -> Self {
        self.ids = Some(ids.to_vec());
        self
    }

    pub fn subject_ids(mut self, ids: &[u64]) -> Self {
        self.subject_ids = Some(ids.to_vec());
        self
    }

    pub fn updated_after(mut self, when: DateTime<Utc>) -> Self {
        self.updated_after = Some(when);
        self
    }
}

impl Resource for List {
    type Content = Collection<Model<Review>>;
    type Body = ();

    fn path(&self) -> String {
        "reviews".to_string()
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.append_query_list("assignment_ids", self.assignment_ids.as_deref());
        request.append_query_list("ids", self.ids.as_deref());
        request.append_query_list("subject_ids", self.subject_ids.as_deref());
        request.append_query_time("updated_after", self.updated_after.as_ref());
    }
}

/// Fetch a single review by id.
#[derive(Debug, Clone, Copy)]
pub struct Get(pub u64);

impl Resource for Get {
    type Content = Model<Review>;
    type Body = ();

    fn path(&self) -> String {
        format!("reviews/{}", self.0)
    }
}

/// Record a completed review, advancing the assignment's SRS stage.
///
/// Target either the assignment or its subject; the server resolves one
/// from the other.
///
/// ```no_run
/// use wanikit::resources::reviews;
///
/// let review = reviews::Create::for_assignment(1422)
///     .incorrect_meaning_answers(1)
///     .incorrect_reading_answers(0);
/// ```
#[derive(Debug, Clone)]
pub struct Create {
    body: CreateBody,
}

impl Create {
    /// Record a review against an assignment id.
    pub fn for_assignment(assignment_id: u64) -> Self {
        Self {
            body: CreateBody {
                review: NewReview {
                    assignment_id: Some(assignment_id),
                    ..NewReview::default()
                },
            },
        }
    }

    /// Record a review against a subject id.
    pub fn for_subject(subject_id: u64) -> Self {
        Self {
            body: CreateBody {
                review: NewReview {
                    subject_id: Some(subject_id),
                    ..NewReview::default()
                },
            },
        }
    }

    pub fn incorrect_meaning_answers(mut self, count: u32) -> Self {
        self.body.review.incorrect_meaning_answers = count;
        self
    }

    pub fn incorrect_reading_answers(mut self, count: u32) -> Self {
        self.body.review.incorrect_reading_answers = count;
        self
    }

    /// Backdate the review. Must not precede the assignment's
    /// `available_at`.
    pub fn created_at(mut self, when: DateTime<Utc>) -> Self {
        self.body.review.created_at = Some(when);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBody {
    review: NewReview,
}

#[derive(Debug, Clone, Default, Serialize)]
struct NewReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    assignment_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject_id: Option<u64>,
    incorrect_meaning_answers: u32,
    incorrect_reading_answers: u32,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl Resource for Create {
    type Content = Model<Review>;
    type Body = CreateBody;

    fn path(&self) -> String {
        "reviews".to_string()
    }

    fn body(&self) -> Option<&CreateBody> {
        Some(&self.body)
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.set_method(Method::POST);
    }
}
