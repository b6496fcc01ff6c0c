use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::timestamp;

/// The stage ladder governing when assignments come up for review.
///
/// Stage positions index into [`stages`](Self::stages); the named positions
/// mark the transitions that matter to progression (unlocking, passing,
/// burning).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpacedRepetitionSystem {
    /// The stage at which the subject is retired from reviews.
    pub burning_stage_position: u32,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub name: String,
    /// The stage at which the subject counts as passed, unlocking
    /// dependent subjects.
    pub passing_stage_position: u32,
    pub stages: Vec<SrsStage>,
    /// The stage a just-started assignment begins at.
    pub starting_stage_position: u32,
    /// The stage of a not-yet-started assignment.
    pub unlocking_stage_position: u32,
}

/// One rung of the stage ladder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SrsStage {
    /// Time until the next review, in `interval_unit`s. Absent on the
    /// unlocking and burning stages, which have no next review.
    #[serde(default)]
    pub interval: Option<u64>,
    /// Unit for `interval`, such as `"seconds"`.
    #[serde(default)]
    pub interval_unit: Option<String>,
    pub position: u32,
}
