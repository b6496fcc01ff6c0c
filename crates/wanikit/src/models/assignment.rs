use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::SubjectKind;
use crate::timestamp;

/// The relationship between a user and a subject: its current SRS stage and
/// the timestamps marking its progress through the system.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Assignment {
    /// When the subject becomes reviewable. `None` while still in lessons
    /// or once burned.
    #[serde(with = "timestamp::option", default)]
    pub available_at: Option<DateTime<Utc>>,
    /// When the subject was burned (retired from reviews).
    #[serde(with = "timestamp::option", default)]
    pub burned_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Hidden assignments track subjects that were retired from the site.
    pub hidden: bool,
    #[serde(with = "timestamp::option", default)]
    pub passed_at: Option<DateTime<Utc>>,
    /// When a burned subject was brought back into the review pool.
    #[serde(with = "timestamp::option", default)]
    pub resurrected_at: Option<DateTime<Utc>>,
    /// Current position in the spaced repetition system, from 0 (unstarted)
    /// through the system's burning stage.
    pub srs_stage: u32,
    #[serde(with = "timestamp::option", default)]
    pub started_at: Option<DateTime<Utc>>,
    pub subject_id: u64,
    pub subject_type: SubjectKind,
    #[serde(with = "timestamp::option", default)]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Whether the subject is in review (started and not burned).
    pub fn in_review(&self) -> bool {
        self.started_at.is_some() && self.burned_at.is_none()
    }
}
