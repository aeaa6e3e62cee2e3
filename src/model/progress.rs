//! Grouped-by-progress schema
//!
//! A single `progress_summary` list pairing each trackable with its status
//! and an optional details block. Answers "where am I on everything"
//! rather than describing the full knowledge graph.

use serde::{Deserialize, Serialize};

use super::common::null_as_empty;

/// Root of a grouped-by-progress document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressDocument {
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub progress_summary: Vec<ProgressEntry>,
}

impl ProgressDocument {
    /// Entries whose status matches exactly
    pub fn by_status<'a>(&'a self, status: &'a str) -> impl Iterator<Item = &'a ProgressEntry> {
        self.progress_summary
            .iter()
            .filter(move |entry| entry.status == status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub trackable: TrackableSummary,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<TrackableDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackableSummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TrackableSummary {
    pub fn new(id: i64, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackableDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
