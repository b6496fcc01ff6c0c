use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::timestamp;

/// A level reset: the user moved back from `original_level` to
/// `target_level`, returning the affected assignments to lessons.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reset {
    /// When the reset was confirmed. Resets expire if unconfirmed.
    #[serde(with = "timestamp::option", default)]
    pub confirmed_at: Option<DateTime<Utc>>,
    /// When the reset was requested.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// The level the user was at when the reset was requested.
    pub original_level: u32,
    /// The level the user reset to. Always at or below the original level.
    pub target_level: u32,
}
