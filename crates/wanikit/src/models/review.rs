use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::timestamp;

/// A completed review session for one assignment: the answer counts and the
/// SRS stage movement they produced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub assignment_id: u64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// The stage the assignment moved to as a result of this review.
    pub ending_srs_stage: u32,
    pub incorrect_meaning_answers: u32,
    pub incorrect_reading_answers: u32,
    pub spaced_repetition_system_id: u64,
    /// The stage the assignment was at when the review started.
    pub starting_srs_stage: u32,
    pub subject_id: u64,
}
