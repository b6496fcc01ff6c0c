use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::SubjectKind;
use crate::timestamp;

/// User-supplied notes and extra answer synonyms attached to a subject.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudyMaterial {
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub hidden: bool,
    #[serde(default)]
    pub meaning_note: Option<String>,
    /// Extra meanings accepted as correct answers during reviews.
    pub meaning_synonyms: Vec<String>,
    #[serde(default)]
    pub reading_note: Option<String>,
    pub subject_id: u64,
    pub subject_type: SubjectKind,
}
