use serde::Deserialize;

/// A narrator for vocabulary pronunciation audio.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VoiceActor {
    /// Details about the voice, such as the accent spoken.
    pub description: String,
    pub gender: Gender,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}
