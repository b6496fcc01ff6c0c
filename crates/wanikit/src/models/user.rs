use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::timestamp;

/// The authenticated user. Uses its own envelope; the id inside the data
/// is an opaque string, not the numeric id other resources carry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub url: Url,
    #[serde(rename = "data_updated_at", with = "timestamp::option", default)]
    pub last_updated: Option<DateTime<Utc>>,
    pub data: UserData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserData {
    /// Set while the user has reviews paused from the app settings.
    #[serde(with = "timestamp::option", default)]
    pub current_vacation_started_at: Option<DateTime<Utc>>,
    /// Opaque user identifier.
    pub id: String,
    /// Current level, capped by the subscription's `max_level_granted`.
    pub level: u32,
    pub preferences: Preferences,
    /// Public profile page.
    pub profile_url: Url,
    #[serde(with = "timestamp")]
    pub started_at: DateTime<Utc>,
    pub subscription: Subscription,
    pub username: String,
}

/// Client-agnostic user settings, shared across WaniKani apps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preferences {
    /// Preferred narrator for vocabulary audio.
    pub default_voice_actor_id: u64,
    pub lessons_autoplay_audio: bool,
    pub lessons_batch_size: u32,
    pub lessons_presentation_order: PresentationOrder,
    pub reviews_autoplay_audio: bool,
    /// Show the SRS stage change after each review answer.
    pub reviews_display_srs_indicator: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationOrder {
    AscendingLevelThenSubject,
    Shuffled,
    AscendingLevelThenShuffled,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subscription {
    /// Whether the subscription currently grants paid content.
    pub active: bool,
    /// Highest level unlockable under this subscription.
    pub max_level_granted: u32,
    /// When a recurring subscription lapses. `None` for free and lifetime.
    #[serde(with = "timestamp::option", default)]
    pub period_ends_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: SubscriptionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionKind {
    Free,
    Recurring,
    Lifetime,
    /// A legacy state for accounts from before the current billing system.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_with_preferences_and_subscription() {
        let user: User = serde_json::from_str(
            r#"{
                "object": "user",
                "url": "https://api.wanikani.com/v2/user",
                "data_updated_at": "2018-04-06T14:26:53.022Z",
                "data": {
                    "id": "5a6a5234-a392-4a87-8f3f-33342afe8a42",
                    "username": "example_user",
                    "level": 5,
                    "profile_url": "https://www.wanikani.com/users/example_user",
                    "started_at": "2012-05-11T00:52:18.958Z",
                    "current_vacation_started_at": null,
                    "subscription": {
                        "active": true,
                        "type": "recurring",
                        "max_level_granted": 60,
                        "period_ends_at": "2018-12-11T13:32:19.485Z"
                    },
                    "preferences": {
                        "default_voice_actor_id": 1,
                        "lessons_autoplay_audio": false,
                        "lessons_batch_size": 10,
                        "lessons_presentation_order": "ascending_level_then_subject",
                        "reviews_autoplay_audio": false,
                        "reviews_display_srs_indicator": true
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(user.data.username, "example_user");
        assert_eq!(user.data.subscription.kind, SubscriptionKind::Recurring);
        assert_eq!(
            user.data.preferences.lessons_presentation_order,
            PresentationOrder::AscendingLevelThenSubject
        );
        assert!(user.data.current_vacation_started_at.is_none());
    }
}
