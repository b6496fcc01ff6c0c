use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::timestamp;

/// The user's journey through one level: when it unlocked, started, passed,
/// and completed. Timestamps accumulate as the user progresses; an
/// abandoned level (via reset) sets `abandoned_at` instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelProgression {
    #[serde(with = "timestamp::option", default)]
    pub abandoned_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// The level this progression tracks, from 1 to 60.
    pub level: u32,
    #[serde(with = "timestamp::option", default)]
    pub passed_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub unlocked_at: Option<DateTime<Utc>>,
}
