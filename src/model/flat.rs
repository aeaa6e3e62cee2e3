//! Flat-by-table schema
//!
//! Every entity is a row in its own top-level list, addressed by integer
//! identity. Tags, progress and trackable-to-trackable links live in
//! separate join tables.

use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, RelationKind, TrackableProgress};

/// Root of a flat-by-table document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlatDocument {
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<FlatLanguage>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<FlatConcept>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<FlatExample>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub trackables: Vec<FlatTrackable>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub language_info: Vec<LanguageInfo>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<FlatTag>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub trackable_tags: Vec<TrackableTag>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub trackable_progress: Vec<TrackableProgress>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub trackable_relationships: Vec<TrackableRelationship>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub example_tags: Vec<ExampleTag>,
}

impl FlatDocument {
    /// Tags joined to a trackable through `trackable_tags`.
    ///
    /// Dangling tag ids are skipped; referential integrity is the caller's
    /// concern.
    pub fn tags_for(&self, trackable_id: i64) -> Vec<&FlatTag> {
        self.trackable_tags
            .iter()
            .filter(|link| link.trackable_id == trackable_id)
            .filter_map(|link| self.tags.iter().find(|tag| tag.id == link.tag_id))
            .collect()
    }

    /// Progress row for a trackable, if one exists
    pub fn progress_for(&self, trackable_id: i64) -> Option<&TrackableProgress> {
        self.trackable_progress
            .iter()
            .find(|p| p.trackable_id == Some(trackable_id))
    }

    /// Relationship rows leaving a trackable
    pub fn relationships_from(
        &self,
        source_id: i64,
    ) -> impl Iterator<Item = &TrackableRelationship> {
        self.trackable_relationships
            .iter()
            .filter(move |r| r.source_id == source_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatLanguage {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FlatLanguage {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            version: None,
            documentation_url: None,
            description: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatConcept {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FlatConcept {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }
}

/// An example row; both foreign keys are nullable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatExample {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_id: Option<i64>,
    pub code_snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatTrackable {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Language-specific columns keyed by trackable identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub trackable_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatTag {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FlatTag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackableTag {
    pub trackable_id: i64,
    pub tag_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleTag {
    pub example_id: i64,
    pub tag_id: i64,
}

/// A directed edge between two trackables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackableRelationship {
    pub source_id: i64,
    pub target_id: i64,
    pub relation: String,
}

impl TrackableRelationship {
    pub fn new(source_id: i64, target_id: i64, relation: RelationKind) -> Self {
        Self {
            source_id,
            target_id,
            relation: relation.as_str().to_string(),
        }
    }

    /// The relation, if it is one of the known kinds
    pub fn kind(&self) -> Option<RelationKind> {
        self.relation.parse().ok()
    }
}
