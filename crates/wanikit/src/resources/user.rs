//! User operations.

use reqwest::Method;
use serde::Serialize;

use crate::models::{PresentationOrder, User};
use crate::request::ApiRequest;
use crate::resources::Resource;

/// Fetch the authenticated user.
#[derive(Debug, Clone, Copy)]
pub struct Me;

impl Resource for Me {
    type Content = User;
    type Body = ();

    fn path(&self) -> String {
        "user".to_string()
    }
}

/// Update the authenticated user's preferences.
///
/// Only the set preferences are sent; everything else keeps its current
/// value.
///
/// ```no_run
/// use wanikit::resources::user;
///
/// let update = user::Update::new()
///     .lessons_batch_size(3)
///     .reviews_autoplay_audio(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Update {
    body: UpdateBody,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_voice_actor_id(mut self, id: u64) -> Self {
        self.body.user.preferences.default_voice_actor_id = Some(id);
        self
    }

    pub fn lessons_autoplay_audio(mut self, autoplay: bool) -> Self {
        self.body.user.preferences.lessons_autoplay_audio = Some(autoplay);
        self
    }

    pub fn lessons_batch_size(mut self, batch_size: u32) -> Self {
        self.body.user.preferences.lessons_batch_size = Some(batch_size);
        self
    }

    pub fn lessons_presentation_order(mut self, order: PresentationOrder) -> Self {
        self.body.user.preferences.lessons_presentation_order = Some(order);
        self
    }

    pub fn reviews_autoplay_audio(mut self, autoplay: bool) -> Self {
        self.body.user.preferences.reviews_autoplay_audio = Some(autoplay);
        self
    }

    pub fn reviews_display_srs_indicator(mut self, display: bool) -> Self {
        self.body.user.preferences.reviews_display_srs_indicator = Some(display);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBody {
    user: UserChanges,
}

#[derive(Debug, Clone, Default, Serialize)]
struct UserChanges {
    preferences: PreferenceChanges,
}

#[derive(Debug, Clone, Default, Serialize)]
struct PreferenceChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_voice_actor_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lessons_autoplay_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lessons_batch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lessons_presentation_order: Option<PresentationOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reviews_autoplay_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reviews_display_srs_indicator: Option<bool>,
}

impl Resource for Update {
    type Content = User;
    type Body = UpdateBody;

    fn path(&self) -> String {
        "user".to_string()
    }

    fn body(&self) -> Option<&UpdateBody> {
        Some(&self.body)
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.set_method(Method::PUT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;

    #[test]
    fn update_nests_preferences_twice() {
        let update = Update::new()
            .lessons_batch_size(3)
            .lessons_presentation_order(PresentationOrder::Shuffled);

        let request = ApiRequest::new(&update, &Configuration::default(), None).unwrap();
        assert_eq!(request.method, Method::PUT);

        let body: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "user": {
                    "preferences": {
                        "lessons_batch_size": 3,
                        "lessons_presentation_order": "shuffled"
                    }
                }
            })
        );
    }
}
