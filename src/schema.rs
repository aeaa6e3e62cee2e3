//! Schema identifiers and the tagged document type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;
use crate::model::{FlatDocument, NestedDocument, ProgressDocument};

/// One of the three known serialization schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFormat {
    /// Entities embed their children (languages → concepts → examples)
    #[serde(rename = "nested")]
    NestedByEntity,
    /// One top-level list per table, joined by integer identity
    Flat,
    /// A single progress summary list
    #[serde(rename = "progress")]
    ByProgress,
}

impl SchemaFormat {
    /// Order in which `detect` tries the schemas. The first confirmed match wins.
    pub const DETECTION_ORDER: [SchemaFormat; 3] = [
        SchemaFormat::NestedByEntity,
        SchemaFormat::ByProgress,
        SchemaFormat::Flat,
    ];

    /// Stable numeric identifier
    pub fn id(&self) -> u8 {
        match self {
            SchemaFormat::NestedByEntity => 1,
            SchemaFormat::Flat => 2,
            SchemaFormat::ByProgress => 3,
        }
    }

    /// Canonical short name
    pub fn name(&self) -> &'static str {
        match self {
            SchemaFormat::NestedByEntity => "nested",
            SchemaFormat::Flat => "flat",
            SchemaFormat::ByProgress => "progress",
        }
    }

    /// Top-level key markers that must all appear in the raw text
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            SchemaFormat::NestedByEntity => &["languages:"],
            SchemaFormat::ByProgress => &["progress_summary:"],
            SchemaFormat::Flat => &["languages:", "tags:", "trackable_progress:"],
        }
    }

    /// True when every marker appears in `text`
    pub fn markers_present(&self, text: &str) -> bool {
        self.markers().iter().all(|marker| text.contains(marker))
    }
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for SchemaFormat {
    type Error = FormatError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(SchemaFormat::NestedByEntity),
            2 => Ok(SchemaFormat::Flat),
            3 => Ok(SchemaFormat::ByProgress),
            other => Err(FormatError::UnsupportedSchema(other.to_string())),
        }
    }
}

impl FromStr for SchemaFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nested" | "nested-by-entity" | "1" => Ok(SchemaFormat::NestedByEntity),
            "flat" | "flat-by-table" | "2" => Ok(SchemaFormat::Flat),
            "progress" | "grouped-by-progress" | "3" => Ok(SchemaFormat::ByProgress),
            other => Err(FormatError::UnsupportedSchema(other.to_string())),
        }
    }
}

/// A decode attempt made during detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "format")]
pub enum Candidate {
    Schema(SchemaFormat),
    /// The untyped mapping parse used for diagnosis
    Generic,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Schema(format) => write!(f, "{}", format),
            Candidate::Generic => f.write_str("generic"),
        }
    }
}

/// A knowledge-base document in exactly one schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Nested(NestedDocument),
    Flat(FlatDocument),
    ByProgress(ProgressDocument),
}

impl Document {
    /// The schema this document's shape belongs to
    pub fn format(&self) -> SchemaFormat {
        match self {
            Document::Nested(_) => SchemaFormat::NestedByEntity,
            Document::Flat(_) => SchemaFormat::Flat,
            Document::ByProgress(_) => SchemaFormat::ByProgress,
        }
    }

    pub fn as_nested(&self) -> Option<&NestedDocument> {
        match self {
            Document::Nested(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_flat(&self) -> Option<&FlatDocument> {
        match self {
            Document::Flat(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_progress(&self) -> Option<&ProgressDocument> {
        match self {
            Document::ByProgress(doc) => Some(doc),
            _ => None,
        }
    }

    /// Entry counts, for reporting
    pub fn stats(&self) -> DocumentStats {
        match self {
            Document::Nested(doc) => DocumentStats {
                languages: doc.languages.len(),
                concepts: doc.all_concepts().count(),
                examples: doc.all_concepts().map(|c| c.examples.len()).sum(),
                trackables: doc.trackables.len(),
                ..Default::default()
            },
            Document::Flat(doc) => DocumentStats {
                languages: doc.languages.len(),
                concepts: doc.concepts.len(),
                examples: doc.examples.len(),
                trackables: doc.trackables.len(),
                tags: doc.tags.len(),
                progress: doc.trackable_progress.len(),
                relationships: doc.trackable_relationships.len(),
            },
            Document::ByProgress(doc) => DocumentStats {
                progress: doc.progress_summary.len(),
                ..Default::default()
            },
        }
    }
}

impl From<NestedDocument> for Document {
    fn from(doc: NestedDocument) -> Self {
        Document::Nested(doc)
    }
}

impl From<FlatDocument> for Document {
    fn from(doc: FlatDocument) -> Self {
        Document::Flat(doc)
    }
}

impl From<ProgressDocument> for Document {
    fn from(doc: ProgressDocument) -> Self {
        Document::ByProgress(doc)
    }
}

/// Statistics about a decoded document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub languages: usize,
    /// Includes concepts nested under languages
    pub concepts: usize,
    pub examples: usize,
    pub trackables: usize,
    pub tags: usize,
    pub progress: usize,
    pub relationships: usize,
}
