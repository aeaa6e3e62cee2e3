//! Demonstration documents for each schema

use crate::model::{
    FlatConcept, FlatDocument, FlatLanguage, FlatTag, NestedConcept, NestedDocument,
    NestedExample, NestedLanguage, ProgressDocument, ProgressEntry, RelationKind,
    RelationshipTarget, Relationships, TrackableDetails, TrackableProgress, TrackableRelationship,
    TrackableSummary, TrackableTag,
};
use crate::schema::{Document, SchemaFormat};

/// A small hand-written flat document, as a user would keep on disk
pub const FLAT_SAMPLE_YAML: &str = "\
languages:
  - id: 5
    name: Go
    version: \"1.20\"
concepts:
  - id: 201
    name: Concurrency
tags:
  - id: 1
    name: Programming
trackable_progress:
  - trackable_id: 5
    status: in progress
";

/// The demonstration document for `format`
pub fn document(format: SchemaFormat) -> Document {
    match format {
        SchemaFormat::NestedByEntity => nested_document().into(),
        SchemaFormat::Flat => flat_document().into(),
        SchemaFormat::ByProgress => progress_document().into(),
    }
}

pub fn nested_document() -> NestedDocument {
    let python = NestedLanguage {
        version: Some("3.10".to_string()),
        documentation_url: Some("https://docs.python.org/3/".to_string()),
        description: Some("A high-level, interpreted programming language.".to_string()),
        trackable_info: Some(TrackableProgress::new("mastered").with_notes("Used daily.")),
        tags: vec!["Programming Language".to_string(), "Scripting".to_string()],
        concepts: vec![NestedConcept {
            description: Some("Functions that modify others.".to_string()),
            examples: vec![NestedExample {
                explanation: Some("Simple decorator.".to_string()),
                ..NestedExample::new("def my_decorator():\n  pass")
            }],
            ..NestedConcept::new("Decorators")
        }],
        relationships: Some(Relationships {
            uses: vec![RelationshipTarget::new("Django", "project")],
            ..Default::default()
        }),
        ..NestedLanguage::new(1, "Python")
    };

    let joins = NestedConcept {
        id: Some(101),
        description: Some("Combining rows.".to_string()),
        trackable_info: Some(TrackableProgress::new("mastered").with_notes("Essential.")),
        tags: vec!["Databases".to_string(), "SQL".to_string()],
        examples: vec![NestedExample {
            explanation: Some("INNER JOIN example.".to_string()),
            language: Some("SQL".to_string()),
            ..NestedExample::new(
                "SELECT Orders.OrderID, Customers.CustomerName\nFROM Orders\nINNER JOIN Customers ON Orders.CustomerID = Customers.CustomerID;",
            )
        }],
        ..NestedConcept::new("SQL Joins")
    };

    NestedDocument {
        languages: vec![python],
        concepts: vec![joins],
        trackables: Vec::new(),
    }
}

pub fn flat_document() -> FlatDocument {
    FlatDocument {
        languages: vec![
            FlatLanguage::new(1, "Python").with_version("3.10"),
            FlatLanguage::new(2, "JavaScript").with_version("ES2023"),
        ],
        concepts: vec![FlatConcept::new(101, "Decorators"), FlatConcept::new(102, "Closures")],
        tags: vec![FlatTag::new(1, "Scripting"), FlatTag::new(2, "Frontend")],
        trackable_tags: vec![
            TrackableTag { trackable_id: 1, tag_id: 1 },
            TrackableTag { trackable_id: 2, tag_id: 2 },
        ],
        trackable_progress: vec![
            TrackableProgress::new("mastered")
                .with_notes("Used daily for scripting.")
                .for_trackable(1),
            TrackableProgress::new("in progress")
                .with_notes("Focusing on React.")
                .for_trackable(2),
        ],
        trackable_relationships: vec![TrackableRelationship::new(101, 1, RelationKind::DependsOn)],
        ..Default::default()
    }
}

pub fn progress_document() -> ProgressDocument {
    ProgressDocument {
        progress_summary: vec![ProgressEntry {
            trackable: TrackableSummary::new(1, "Python", "language"),
            status: "mastered".to_string(),
            notes: Some("Used daily for scripting and web development.".to_string()),
            details: Some(TrackableDetails {
                version: Some("3.10".to_string()),
                documentation_url: Some("https://docs.python.org/3/".to_string()),
                description: Some("A high-level, interpreted programming language.".to_string()),
                tags: vec![
                    "Programming Language".to_string(),
                    "Scripting".to_string(),
                    "Backend".to_string(),
                ],
            }),
        }],
    }
}
