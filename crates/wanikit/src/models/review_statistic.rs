use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::SubjectKind;
use crate::timestamp;

/// Aggregated answer history for one subject: correct and incorrect counts
/// per question type, plus streaks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewStatistic {
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub hidden: bool,
    pub meaning_correct: u32,
    pub meaning_current_streak: u32,
    pub meaning_incorrect: u32,
    pub meaning_max_streak: u32,
    /// Overall correctness as a whole percentage from 0 to 100.
    pub percentage_correct: u32,
    pub reading_correct: u32,
    pub reading_current_streak: u32,
    pub reading_incorrect: u32,
    pub reading_max_streak: u32,
    pub subject_id: u64,
    pub subject_type: SubjectKind,
}
