//! Study material operations.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;

use crate::models::{Collection, Model, StudyMaterial, SubjectKind};
use crate::request::ApiRequest;
use crate::resources::Resource;

/// List study materials, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct List {
    hidden: Option<bool>,
    ids: Option<Vec<u64>>,
    subject_ids: Option<Vec<u64>>,
    subject_types: Option<Vec<SubjectKind>>,
    updated_after: Option<DateTime<Utc>>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn ids(mut self, ids: &[u64]) -> Self {
        self.ids = Some(ids.to_vec());
        self
    }

    pub fn subject_ids(mut self, ids: &[u64]) -> Self {
        self.subject_ids = Some(ids.to_vec());
        self
    }

    pub fn subject_types(mut self, types: &[SubjectKind]) -> Self {
        self.subject_types = Some(types.to_vec());
        self
    }

    pub fn updated_after(mut self, when: DateTime<Utc>) -> Self {
        self.updated_after = Some(when);
        self
    }
}

impl Resource for List {
    type Content = Collection<Model<StudyMaterial>>;
    type Body = ();

    fn path(&self) -> String {
        "study_materials".to_string()
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.append_query_if("hidden", self.hidden.as_ref());
        request.append_query_list("ids", self.ids.as_deref());
        request.append_query_list("subject_ids", self.subject_ids.as_deref());
        request.append_query_list("subject_types", self.subject_types.as_deref());
        request.append_query_time("updated_after", self.updated_after.as_ref());
    }
}

/// Fetch a single study material by id.
#[derive(Debug, Clone, Copy)]
pub struct Get(pub u64);

impl Resource for Get {
    type Content = Model<StudyMaterial>;
    type Body = ();

    fn path(&self) -> String {
        format!("study_materials/{}", self.0)
    }
}

/// Attach notes and synonyms to a subject.
///
/// A subject can hold at most one study material; creating a second is a
/// validation error.
#[derive(Debug, Clone)]
pub struct Create {
    body: CreateBody,
}

impl Create {
    pub fn new(subject_id: u64) -> Self {
        Self {
            body: CreateBody {
                study_material: NewStudyMaterial {
                    subject_id,
                    meaning_note: None,
                    meaning_synonyms: None,
                    reading_note: None,
                },
            },
        }
    }

    pub fn meaning_note(mut self, note: impl Into<String>) -> Self {
        self.body.study_material.meaning_note = Some(note.into());
        self
    }

    pub fn meaning_synonyms(mut self, synonyms: &[&str]) -> Self {
        self.body.study_material.meaning_synonyms =
            Some(synonyms.iter().map(ToString::to_string).collect());
        self
    }

    pub fn reading_note(mut self, note: impl Into<String>) -> Self {
        self.body.study_material.reading_note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBody {
    study_material: NewStudyMaterial,
}

#[derive(Debug, Clone, Serialize)]
struct NewStudyMaterial {
    subject_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    meaning_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meaning_synonyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reading_note: Option<String>,
}

impl Resource for Create {
    type Content = Model<StudyMaterial>;
    type Body = CreateBody;

    fn path(&self) -> String {
        "study_materials".to_string()
    }

    fn body(&self) -> Option<&CreateBody> {
        Some(&self.body)
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.set_method(Method::POST);
    }
}

/// Update the notes or synonyms of an existing study material.
///
/// Only the set fields are sent; everything else keeps its current value.
#[derive(Debug, Clone)]
pub struct Update {
    id: u64,
    body: UpdateBody,
}

impl Update {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            body: UpdateBody::default(),
        }
    }

    pub fn meaning_note(mut self, note: impl Into<String>) -> Self {
        self.body.study_material.meaning_note = Some(note.into());
        self
    }

    pub fn meaning_synonyms(mut self, synonyms: &[&str]) -> Self {
        self.body.study_material.meaning_synonyms =
            Some(synonyms.iter().map(ToString::to_string).collect());
        self
    }

    pub fn reading_note(mut self, note: impl Into<String>) -> Self {
        self.body.study_material.reading_note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBody {
    study_material: StudyMaterialChanges,
}

#[derive(Debug, Clone, Default, Serialize)]
struct StudyMaterialChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    meaning_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meaning_synonyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reading_note: Option<String>,
}

impl Resource for Update {
    type Content = Model<StudyMaterial>;
    type Body = UpdateBody;

    fn path(&self) -> String {
        format!("study_materials/{}", self.id)
    }

    fn body(&self) -> Option<&UpdateBody> {
        Some(&self.body)
    }

    fn transform_request(&self, request: &mut ApiRequest) {
        request.set_method(Method::PUT);
    }
}
