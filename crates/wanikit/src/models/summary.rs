use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::timestamp;

/// The summary report: which lessons and reviews are available now and over
/// the upcoming day. Uses its own envelope; the report has no id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub url: Url,
    #[serde(rename = "data_updated_at", with = "timestamp::option", default)]
    pub last_updated: Option<DateTime<Utc>>,
    pub data: SummaryData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryData {
    /// Lessons available now. At most one batch, timestamped now.
    pub lessons: Vec<AvailableSubjects>,
    /// When the next reviews after this report become available, if any
    /// are scheduled.
    #[serde(with = "timestamp::option", default)]
    pub next_reviews_at: Option<DateTime<Utc>>,
    /// Reviews available now and at each hour for the next 24 hours.
    pub reviews: Vec<AvailableSubjects>,
}

/// A batch of subjects that becomes available for study at one time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvailableSubjects {
    #[serde(with = "timestamp")]
    pub available_at: DateTime<Utc>,
    pub subject_ids: Vec<u64>,
}
