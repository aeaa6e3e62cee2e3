//! Records shared by more than one schema

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decode a list field that may be written as an explicit `null`.
///
/// Exporters emit `tags: null` for an entity with no tags; that reads the
/// same as an absent or empty list.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Progress recorded against a trackable item.
///
/// `trackable_id` is omitted in the nested schema, where the owning entity
/// is implicit, and carried in the flat schema's `trackable_progress` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackableProgress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trackable_id: Option<i64>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TrackableProgress {
    /// Progress with a status and no notes
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            trackable_id: None,
            status: status.into(),
            notes: None,
        }
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach the owning trackable's identity
    pub fn for_trackable(mut self, trackable_id: i64) -> Self {
        self.trackable_id = Some(trackable_id);
        self
    }
}

/// Target of a relationship edge, addressed by name rather than identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipTarget {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl RelationshipTarget {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// The fixed relation vocabulary between trackables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Uses,
    Includes,
    DependsOn,
    Implements,
}

impl RelationKind {
    pub const ALL: [RelationKind; 4] = [
        RelationKind::Uses,
        RelationKind::Includes,
        RelationKind::DependsOn,
        RelationKind::Implements,
    ];

    /// Serialized name of the relation
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Uses => "uses",
            RelationKind::Includes => "includes",
            RelationKind::DependsOn => "depends_on",
            RelationKind::Implements => "implements",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown relation: {}", s))
    }
}
