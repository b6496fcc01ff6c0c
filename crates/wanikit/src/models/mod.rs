//! Typed representations of WaniKani resources.
//!
//! Most endpoints wrap their payload in a common envelope: singular
//! resources arrive as a [`Model`] carrying an id and location, and listing
//! endpoints arrive as a [`Collection`] of models with pagination metadata.
//! The user and summary endpoints use their own envelopes without a numeric
//! id; see [`User`] and [`Summary`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::pagination::{Page, PageOptions, Paginated};
use crate::timestamp;

mod assignment;
mod level_progression;
mod reset;
mod review;
mod review_statistic;
mod spaced_repetition_system;
mod study_material;
mod subject;
mod summary;
mod user;
mod voice_actor;

pub use assignment::Assignment;
pub use level_progression::LevelProgression;
pub use reset::Reset;
pub use review::Review;
pub use review_statistic::ReviewStatistic;
pub use spaced_repetition_system::{SpacedRepetitionSystem, SrsStage};
pub use study_material::StudyMaterial;
pub use subject::{
    AuxiliaryMeaning, AuxiliaryMeaningKind, CharacterImage, CharacterImageMetadata,
    ContextSentence, Kanji, KanjiReading, KanjiReadingKind, Meaning, PronunciationAudio,
    PronunciationAudioMetadata, Radical, Subject, SubjectKind, Vocabulary, VocabularyReading,
};
pub use summary::{AvailableSubjects, Summary, SummaryData};
pub use user::{
    Preferences, PresentationOrder, Subscription, SubscriptionKind, User, UserData,
};
pub use voice_actor::{Gender, VoiceActor};

/// The standard envelope around a singular resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Model<T> {
    /// The resource's unique id.
    pub id: u64,
    /// The canonical location of the resource.
    pub url: Url,
    /// When the payload last changed, if it ever has.
    #[serde(rename = "data_updated_at", with = "timestamp::option", default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// The resource payload.
    pub data: T,
}

/// A page of resources with pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    /// The object tag reported by the server, `"collection"`.
    pub object: String,
    /// The location of this page, including any filters.
    pub url: Url,
    /// The most recent change among the returned resources.
    #[serde(rename = "data_updated_at", with = "timestamp::option", default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// Total entries across every page of the collection.
    pub total_count: u64,
    /// Pagination metadata.
    #[serde(rename = "pages")]
    pub page: Page,
    /// The entries on this page.
    pub data: Vec<T>,
}

impl<T> Collection<T> {
    /// Number of entries on this page. See
    /// [`total_count`](Self::total_count) for the whole collection.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Paginated for Collection<T> {
    fn next_page(&self) -> Option<PageOptions> {
        self.page.next()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_envelope_decodes() {
        let model: Model<Reset> = serde_json::from_str(
            r#"{
                "id": 234,
                "object": "reset",
                "url": "https://api.wanikani.com/v2/resets/234",
                "data_updated_at": "2017-12-20T00:24:47.048Z",
                "data": {
                    "created_at": "2017-12-20T00:03:56.642Z",
                    "original_level": 42,
                    "target_level": 8,
                    "confirmed_at": "2017-12-19T23:31:18.077Z"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(model.id, 234);
        assert_eq!(model.data.original_level, 42);
        assert_eq!(model.data.target_level, 8);
        assert!(model.last_updated.is_some());
    }

    #[test]
    fn collection_exposes_next_cursor() {
        let collection: Collection<Model<Reset>> = serde_json::from_str(
            r#"{
                "object": "collection",
                "url": "https://api.wanikani.com/v2/resets",
                "pages": {
                    "per_page": 500,
                    "next_url": "https://api.wanikani.com/v2/resets?page_after_id=234",
                    "previous_url": null
                },
                "total_count": 2,
                "data_updated_at": "2017-12-20T00:24:47.048Z",
                "data": []
            }"#,
        )
        .unwrap();

        assert!(collection.is_empty());
        assert_eq!(collection.total_count, 2);
        assert_eq!(collection.next_page(), Some(PageOptions::after_id(234)));
    }

    #[test]
    fn final_page_has_no_next_cursor() {
        let collection: Collection<Model<Reset>> = serde_json::from_str(
            r#"{
                "object": "collection",
                "url": "https://api.wanikani.com/v2/resets",
                "pages": {"per_page": 500, "next_url": null, "previous_url": null},
                "total_count": 0,
                "data_updated_at": null,
                "data": []
            }"#,
        )
        .unwrap();

        assert_eq!(collection.next_page(), None);
    }
}
