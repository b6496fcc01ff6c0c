//! Subjects: the radicals, kanji, and vocabulary being studied.
//!
//! Subject listings mix the three kinds in one collection, discriminated by
//! the envelope's `object` tag. [`Subject`] decodes that union and offers
//! accessors for the fields every kind shares; match on it to reach the
//! kind-specific data.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use url::Url;

use crate::models::Model;
use crate::timestamp;

/// One subject of any kind, tagged by the envelope's `object` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum Subject {
    Radical(Model<Radical>),
    Kanji(Model<Kanji>),
    Vocabulary(Model<Vocabulary>),
}

macro_rules! with_subject {
    ($self:expr, $model:pat => $body:expr) => {
        match $self {
            Subject::Radical($model) => $body,
            Subject::Kanji($model) => $body,
            Subject::Vocabulary($model) => $body,
        }
    };
}

impl Subject {
    pub fn kind(&self) -> SubjectKind {
        match self {
            Self::Radical(_) => SubjectKind::Radical,
            Self::Kanji(_) => SubjectKind::Kanji,
            Self::Vocabulary(_) => SubjectKind::Vocabulary,
        }
    }

    pub fn id(&self) -> u64 {
        with_subject!(self, model => model.id)
    }

    pub fn url(&self) -> &Url {
        with_subject!(self, model => &model.url)
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        with_subject!(self, model => model.last_updated)
    }

    pub fn level(&self) -> u32 {
        with_subject!(self, model => model.data.level)
    }

    pub fn slug(&self) -> &str {
        with_subject!(self, model => &model.data.slug)
    }

    /// The characters being studied. Some radicals have no character
    /// representation and use an image instead.
    pub fn characters(&self) -> Option<&str> {
        match self {
            Self::Radical(model) => model.data.characters.as_deref(),
            Self::Kanji(model) => Some(&model.data.characters),
            Self::Vocabulary(model) => Some(&model.data.characters),
        }
    }

    pub fn meanings(&self) -> &[Meaning] {
        with_subject!(self, model => &model.data.meanings)
    }

    pub fn auxiliary_meanings(&self) -> &[AuxiliaryMeaning] {
        with_subject!(self, model => &model.data.auxiliary_meanings)
    }

    pub fn meaning_mnemonic(&self) -> &str {
        with_subject!(self, model => &model.data.meaning_mnemonic)
    }

    pub fn document_url(&self) -> &Url {
        with_subject!(self, model => &model.data.document_url)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        with_subject!(self, model => model.data.created_at)
    }

    /// When the subject was retired from the site, if it has been.
    pub fn hidden_at(&self) -> Option<DateTime<Utc>> {
        with_subject!(self, model => model.data.hidden_at)
    }

    pub fn lesson_position(&self) -> u32 {
        with_subject!(self, model => model.data.lesson_position)
    }

    pub fn spaced_repetition_system_id(&self) -> u64 {
        with_subject!(self, model => model.data.spaced_repetition_system_id)
    }
}

/// The kind of a subject, as it appears in `subject_type` fields and the
/// `types` query filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Radical,
    Kanji,
    Vocabulary,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Radical => "radical",
            Self::Kanji => "kanji",
            Self::Vocabulary => "vocabulary",
        })
    }
}

/// A single character and its name, used as a component of kanji.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Radical {
    /// The kanji this radical is a component of.
    pub amalgamation_subject_ids: Vec<u64>,
    pub auxiliary_meanings: Vec<AuxiliaryMeaning>,
    /// Absent for radicals represented only by an image.
    #[serde(default)]
    pub characters: Option<String>,
    pub character_images: Vec<CharacterImage>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub document_url: Url,
    #[serde(with = "timestamp::option", default)]
    pub hidden_at: Option<DateTime<Utc>>,
    pub lesson_position: u32,
    pub level: u32,
    pub meaning_mnemonic: String,
    pub meanings: Vec<Meaning>,
    pub slug: String,
    pub spaced_repetition_system_id: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Kanji {
    /// The vocabulary this kanji appears in.
    pub amalgamation_subject_ids: Vec<u64>,
    pub auxiliary_meanings: Vec<AuxiliaryMeaning>,
    pub characters: String,
    /// The radicals this kanji is built from.
    pub component_subject_ids: Vec<u64>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub document_url: Url,
    #[serde(with = "timestamp::option", default)]
    pub hidden_at: Option<DateTime<Utc>>,
    pub lesson_position: u32,
    pub level: u32,
    #[serde(default)]
    pub meaning_hint: Option<String>,
    pub meaning_mnemonic: String,
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub reading_hint: Option<String>,
    pub reading_mnemonic: String,
    pub readings: Vec<KanjiReading>,
    pub slug: String,
    pub spaced_repetition_system_id: u64,
    pub visually_similar_subject_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vocabulary {
    pub auxiliary_meanings: Vec<AuxiliaryMeaning>,
    pub characters: String,
    /// The kanji this word is built from.
    pub component_subject_ids: Vec<u64>,
    pub context_sentences: Vec<ContextSentence>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub document_url: Url,
    #[serde(with = "timestamp::option", default)]
    pub hidden_at: Option<DateTime<Utc>>,
    pub lesson_position: u32,
    pub level: u32,
    pub meaning_mnemonic: String,
    pub meanings: Vec<Meaning>,
    pub parts_of_speech: Vec<String>,
    pub pronunciation_audios: Vec<PronunciationAudio>,
    pub reading_mnemonic: String,
    pub readings: Vec<VocabularyReading>,
    pub slug: String,
    pub spaced_repetition_system_id: u64,
}

/// A meaning attached to a subject.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meaning {
    /// Whether this answer is accepted during reviews.
    pub accepted_answer: bool,
    pub meaning: String,
    /// One meaning per subject is primary; the rest are alternatives.
    pub primary: bool,
}

/// A secondary meaning that adjusts answer checking without being shown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuxiliaryMeaning {
    pub meaning: String,
    #[serde(rename = "type")]
    pub kind: AuxiliaryMeaningKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AuxiliaryMeaningKind {
    /// Accepted as a correct answer, but never displayed.
    #[serde(rename = "whitelist")]
    Allowlist,
    /// Rejected as an answer even if close to a real meaning.
    #[serde(rename = "blacklist")]
    Blocklist,
}

/// An image representation of a radical.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterImage {
    pub content_type: String,
    pub metadata: CharacterImageMetadata,
    pub url: Url,
}

/// Rendering details for a character image, varying by content type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CharacterImageMetadata {
    Svg {
        /// Whether the SVG carries its styles inline.
        inline_styles: bool,
    },
    Png {
        /// Hex color of the rendered character.
        color: String,
        /// Pixel dimensions, such as `"1024x1024"`.
        dimensions: String,
        style_name: String,
    },
}

/// A reading of a kanji.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KanjiReading {
    /// Whether this answer is accepted during reviews.
    pub accepted_answer: bool,
    /// One reading per kanji is primary; the rest are alternatives.
    pub primary: bool,
    pub reading: String,
    #[serde(rename = "type")]
    pub kind: KanjiReadingKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KanjiReadingKind {
    Kunyomi,
    Nanori,
    Onyomi,
}

/// An example sentence using a vocabulary word.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContextSentence {
    /// English translation.
    pub en: String,
    /// The Japanese sentence.
    pub ja: String,
}

/// A recording of a vocabulary word's pronunciation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PronunciationAudio {
    /// MIME type, such as `"audio/mpeg"`.
    pub content_type: String,
    pub metadata: PronunciationAudioMetadata,
    pub url: Url,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PronunciationAudioMetadata {
    pub gender: super::Gender,
    /// The reading being pronounced.
    pub pronunciation: String,
    pub source_id: u64,
    pub voice_actor_id: u64,
    pub voice_actor_name: String,
    pub voice_description: String,
}

/// A reading of a vocabulary word.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VocabularyReading {
    /// Whether this answer is accepted during reviews.
    pub accepted_answer: bool,
    /// One reading per word is primary; the rest are alternatives.
    pub primary: bool,
    pub reading: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radical_decodes_from_tagged_envelope() {
        let subject: Subject = serde_json::from_str(
            r##"{
                "id": 1,
                "object": "radical",
                "url": "https://api.wanikani.com/v2/subjects/1",
                "data_updated_at": "2018-03-29T23:13:14.064Z",
                "data": {
                    "amalgamation_subject_ids": [440, 449, 450],
                    "auxiliary_meanings": [],
                    "characters": "一",
                    "character_images": [
                        {
                            "url": "https://cdn.wanikani.com/images/legacy/576-subject-1.svg",
                            "metadata": {"inline_styles": true},
                            "content_type": "image/svg+xml"
                        },
                        {
                            "url": "https://cdn.wanikani.com/images/legacy/576-subject-1-1024px.png",
                            "metadata": {
                                "color": "#000000",
                                "dimensions": "1024x1024",
                                "style_name": "original"
                            },
                            "content_type": "image/png"
                        }
                    ],
                    "created_at": "2012-02-27T18:08:16.000Z",
                    "document_url": "https://www.wanikani.com/radicals/ground",
                    "hidden_at": null,
                    "lesson_position": 0,
                    "level": 1,
                    "meanings": [
                        {"meaning": "Ground", "primary": true, "accepted_answer": true}
                    ],
                    "meaning_mnemonic": "This radical consists of a single, horizontal stroke.",
                    "slug": "ground",
                    "spaced_repetition_system_id": 2
                }
            }"##,
        )
        .unwrap();

        assert_eq!(subject.kind(), SubjectKind::Radical);
        assert_eq!(subject.id(), 1);
        assert_eq!(subject.characters(), Some("一"));
        assert_eq!(subject.slug(), "ground");
        assert_eq!(subject.level(), 1);

        let Subject::Radical(radical) = &subject else {
            panic!("expected a radical");
        };
        assert!(matches!(
            radical.data.character_images[0].metadata,
            CharacterImageMetadata::Svg { inline_styles: true }
        ));
        assert!(matches!(
            &radical.data.character_images[1].metadata,
            CharacterImageMetadata::Png { dimensions, .. } if dimensions == "1024x1024"
        ));
    }

    #[test]
    fn kanji_decodes_with_typed_readings() {
        let subject: Subject = serde_json::from_str(
            r#"{
                "id": 440,
                "object": "kanji",
                "url": "https://api.wanikani.com/v2/subjects/440",
                "data_updated_at": "2018-03-29T23:14:30.805Z",
                "data": {
                    "amalgamation_subject_ids": [2467, 2468],
                    "auxiliary_meanings": [
                        {"meaning": "1", "type": "whitelist"},
                        {"meaning": "first", "type": "blacklist"}
                    ],
                    "characters": "一",
                    "component_subject_ids": [1],
                    "created_at": "2012-02-27T19:55:19.000Z",
                    "document_url": "https://www.wanikani.com/kanji/%E4%B8%80",
                    "hidden_at": null,
                    "lesson_position": 2,
                    "level": 1,
                    "meanings": [
                        {"meaning": "One", "primary": true, "accepted_answer": true}
                    ],
                    "meaning_hint": "To remember the meaning of One, imagine yourself.",
                    "meaning_mnemonic": "Lying on the ground is something that looks just like the ground.",
                    "readings": [
                        {"type": "onyomi", "primary": true, "accepted_answer": true, "reading": "いち"},
                        {"type": "kunyomi", "primary": false, "accepted_answer": false, "reading": "ひと"},
                        {"type": "nanori", "primary": false, "accepted_answer": false, "reading": "かず"}
                    ],
                    "reading_hint": null,
                    "reading_mnemonic": "When you see the number one, think itchy.",
                    "slug": "%E4%B8%80",
                    "spaced_repetition_system_id": 2,
                    "visually_similar_subject_ids": []
                }
            }"#,
        )
        .unwrap();

        assert_eq!(subject.kind(), SubjectKind::Kanji);
        assert_eq!(subject.auxiliary_meanings().len(), 2);
        assert_eq!(
            subject.auxiliary_meanings()[0].kind,
            AuxiliaryMeaningKind::Allowlist
        );

        let Subject::Kanji(kanji) = &subject else {
            panic!("expected a kanji");
        };
        assert_eq!(kanji.data.readings[0].kind, KanjiReadingKind::Onyomi);
        assert!(kanji.data.reading_hint.is_none());
    }

    #[test]
    fn subject_kind_renders_wire_names() {
        assert_eq!(SubjectKind::Radical.to_string(), "radical");
        assert_eq!(SubjectKind::Vocabulary.to_string(), "vocabulary");
    }
}
