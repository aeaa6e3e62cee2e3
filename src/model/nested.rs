//! Nested-by-entity schema
//!
//! Entities embed their children directly: a language carries its concepts,
//! a concept carries its examples and relationships. Tags are inline strings
//! and there are no foreign keys.
//!
//! ```yaml
//! languages:
//!   - id: 1
//!     name: Python
//!     tags: [Scripting]
//!     concepts:
//!       - name: Decorators
//!         examples:
//!           - code_snippet: "@wraps(f)"
//! concepts: []
//! trackables: []
//! ```

use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, RelationKind, RelationshipTarget, TrackableProgress};

/// Root of a nested-by-entity document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NestedDocument {
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<NestedLanguage>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<NestedConcept>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub trackables: Vec<NestedTrackable>,
}

impl NestedDocument {
    /// True when none of the top-level entity lists hold anything
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.concepts.is_empty() && self.trackables.is_empty()
    }

    /// Every concept in the document, including those nested under languages
    pub fn all_concepts(&self) -> impl Iterator<Item = &NestedConcept> {
        self.languages
            .iter()
            .flat_map(|l| l.concepts.iter())
            .chain(self.concepts.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedLanguage {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trackable_info: Option<TrackableProgress>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<NestedConcept>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
}

impl NestedLanguage {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            version: None,
            documentation_url: None,
            description: None,
            trackable_info: None,
            tags: Vec::new(),
            concepts: Vec::new(),
            relationships: None,
        }
    }
}

/// A concept; `id` may be omitted when the concept is nested under a language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedConcept {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trackable_info: Option<TrackableProgress>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<NestedExample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
}

impl NestedConcept {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            trackable_info: None,
            tags: Vec::new(),
            examples: Vec::new(),
            relationships: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedExample {
    pub code_snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Originating language, for examples not nested under a language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl NestedExample {
    pub fn new(code_snippet: impl Into<String>) -> Self {
        Self {
            code_snippet: code_snippet.into(),
            explanation: None,
            language: None,
            tags: Vec::new(),
        }
    }
}

/// A top-level trackable that is neither a language nor a concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedTrackable {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trackable_info: Option<TrackableProgress>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
}

/// Outgoing relationship edges, grouped by relation kind
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationships {
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub uses: Vec<RelationshipTarget>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<RelationshipTarget>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<RelationshipTarget>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<RelationshipTarget>,
}

impl Relationships {
    /// Targets for one relation kind
    pub fn targets(&self, kind: RelationKind) -> &[RelationshipTarget] {
        match kind {
            RelationKind::Uses => &self.uses,
            RelationKind::Includes => &self.includes,
            RelationKind::DependsOn => &self.depends_on,
            RelationKind::Implements => &self.implements,
        }
    }

    /// All edges in vocabulary order
    pub fn iter(&self) -> impl Iterator<Item = (RelationKind, &RelationshipTarget)> {
        RelationKind::ALL
            .into_iter()
            .flat_map(move |kind| self.targets(kind).iter().map(move |t| (kind, t)))
    }

    pub fn len(&self) -> usize {
        RelationKind::ALL.iter().map(|k| self.targets(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_serializes_to_empty_mapping() {
        let yaml = serde_yaml::to_string(&NestedDocument::default()).unwrap();
        assert_eq!(yaml.trim(), "{}");
    }

    #[test]
    fn test_concept_id_is_optional() {
        let concept: NestedConcept = serde_yaml::from_str("name: Closures\n").unwrap();
        assert_eq!(concept.id, None);
        assert!(concept.examples.is_empty());
    }

    #[test]
    fn test_unknown_top_level_keys_are_rejected() {
        let result: Result<NestedDocument, _> =
            serde_yaml::from_str("languages: []\ntags: []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_relationships_iterate_in_vocabulary_order() {
        let rel = Relationships {
            uses: vec![RelationshipTarget::new("Django", "project")],
            implements: vec![RelationshipTarget::new("WSGI", "standard")],
            ..Default::default()
        };
        let kinds: Vec<_> = rel.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![RelationKind::Uses, RelationKind::Implements]);
        assert_eq!(rel.len(), 2);
    }

    #[test]
    fn test_all_concepts_includes_nested() {
        let mut lang = NestedLanguage::new(1, "Python");
        lang.concepts.push(NestedConcept::new("Decorators"));
        let doc = NestedDocument {
            languages: vec![lang],
            concepts: vec![NestedConcept::new("SQL Joins")],
            trackables: Vec::new(),
        };
        let names: Vec<_> = doc.all_concepts().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Decorators", "SQL Joins"]);
    }
}
