//! Detection tests
//!
//! Covers schema priority, the content checks that back each candidate,
//! and the two failure diagnostics.

use std::io::Write;

use polyglot_schemas::detect::decode_as;
use polyglot_schemas::model::{NestedConcept, NestedDocument, NestedLanguage};
use polyglot_schemas::{demo, detect, encode, Candidate, Document, FormatError, SchemaFormat};
use rstest::rstest;

// =============================================================================
// Round trips
// =============================================================================

#[rstest]
#[case(SchemaFormat::NestedByEntity)]
#[case(SchemaFormat::Flat)]
#[case(SchemaFormat::ByProgress)]
fn test_demo_documents_round_trip(#[case] format: SchemaFormat) {
    let original = demo::document(format);
    let bytes = encode(&original, format).unwrap();

    let (document, detected) = detect(&bytes).unwrap().into_parts();
    assert_eq!(detected, format);
    assert_eq!(document, original);
}

#[test]
fn test_go_concurrency_scenario() {
    let mut go = NestedLanguage::new(5, "Go");
    go.version = Some("1.20".to_string());
    go.concepts.push(NestedConcept::new("Concurrency"));
    let original = Document::Nested(NestedDocument {
        languages: vec![go],
        ..Default::default()
    });

    let bytes = encode(&original, SchemaFormat::NestedByEntity).unwrap();
    let detection = detect(&bytes).unwrap();
    assert_eq!(detection.format.id(), 1);

    let nested = detection.document.as_nested().unwrap();
    assert_eq!(nested.languages.len(), 1);
    assert_eq!(nested.languages[0].name, "Go");
    assert_eq!(nested.languages[0].version.as_deref(), Some("1.20"));
    assert_eq!(nested.languages[0].concepts.len(), 1);
    assert_eq!(nested.languages[0].concepts[0].name, "Concurrency");
    assert!(nested.languages[0].concepts[0].examples.is_empty());
    assert_eq!(detection.document, original);
}

#[test]
fn test_absent_optionals_stay_absent() {
    let yaml = "progress_summary:\n  - trackable:\n      id: 3\n      name: Ownership\n      type: concept\n    status: ''\n";
    let detection = detect(yaml.as_bytes()).unwrap();
    let entry = &detection.document.as_progress().unwrap().progress_summary[0];
    assert_eq!(entry.status, "");
    assert_eq!(entry.notes, None);
    assert_eq!(entry.details, None);

    let bytes = encode(&detection.document, detection.format).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(!text.contains("notes"));
    assert!(!text.contains("details"));
}

// =============================================================================
// Priority and content checks
// =============================================================================

#[test]
fn test_nested_wins_over_flat() {
    // Decodes under both shapes and carries every flat marker in its text
    let yaml = "\
languages:
  - id: 1
    name: Go
    description: 'tags: trackable_progress: notes'
";
    assert!(matches!(
        decode_as(yaml.as_bytes(), SchemaFormat::Flat),
        Ok(Document::Flat(_))
    ));
    assert!(SchemaFormat::Flat.markers_present(yaml));

    for _ in 0..5 {
        let detection = detect(yaml.as_bytes()).unwrap();
        assert_eq!(detection.format, SchemaFormat::NestedByEntity);
    }
}

#[test]
fn test_empty_entity_lists_are_not_nested() {
    let yaml = "languages: []\nconcepts: []\ntrackables: []\n";
    assert!(decode_as(yaml.as_bytes(), SchemaFormat::NestedByEntity).is_ok());

    match detect(yaml.as_bytes()) {
        Err(FormatError::UnrecognizedSchema { keys }) => {
            assert_eq!(keys, vec!["languages", "concepts", "trackables"]);
        }
        other => panic!("Expected UnrecognizedSchema, got {:?}", other),
    }
}

#[test]
fn test_empty_nested_falls_through_to_flat() {
    let yaml = "languages: []\ntags: []\ntrackable_progress: []\n";
    let detection = detect(yaml.as_bytes()).unwrap();
    assert_eq!(detection.format, SchemaFormat::Flat);
    assert_eq!(detection.attempts.len(), 3);
}

#[test]
fn test_flat_needs_all_three_markers() {
    let yaml = "languages:\n  - id: 1\n    name: Go\ntags:\n  - id: 1\n    name: Systems\n";
    match detect(yaml.as_bytes()) {
        Err(FormatError::UnrecognizedSchema { keys }) => {
            assert_eq!(keys, vec!["languages", "tags"]);
        }
        other => panic!("Expected UnrecognizedSchema, got {:?}", other),
    }
}

#[test]
fn test_flat_sample_from_scratch_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(demo::FLAT_SAMPLE_YAML.as_bytes()).unwrap();

    let content = std::fs::read(file.path()).unwrap();
    let detection = detect(&content).unwrap();
    assert_eq!(detection.format, SchemaFormat::Flat);

    let flat = detection.document.as_flat().unwrap();
    assert_eq!(flat.languages[0].name, "Go");
    assert_eq!(flat.languages[0].version.as_deref(), Some("1.20"));
    assert_eq!(flat.progress_for(5).map(|p| p.status.as_str()), Some("in progress"));
}

// =============================================================================
// Exporter leniency
// =============================================================================

#[test]
fn test_null_lists_and_fields_decode_as_absent() {
    let yaml = "languages:\n  - id: 1\n    name: Go\n    description: null\n    tags: null\n";
    let detection = detect(yaml.as_bytes()).unwrap();
    assert_eq!(detection.format, SchemaFormat::NestedByEntity);

    let nested = detection.document.as_nested().unwrap();
    assert_eq!(nested.languages[0].description, None);
    assert!(nested.languages[0].tags.is_empty());
}

#[test]
fn test_null_root_list_in_flat_document() {
    let yaml = "languages:\n  - id: 1\n    name: Go\ntags:\n  - id: 1\n    name: Systems\ntrackable_progress: null\n";
    let detection = detect(yaml.as_bytes()).unwrap();
    assert_eq!(detection.format, SchemaFormat::Flat);
    assert!(detection.document.as_flat().unwrap().trackable_progress.is_empty());
}

#[test]
fn test_extra_row_keys_are_ignored() {
    let yaml = "\
languages:
  - id: 1
    name: Go
tags:
  - id: 1
    name: Systems
trackable_progress:
  - trackable_id: 1
    status: started
trackable_relationships:
  - source_id: 1
    target_id: 2
    relation: uses
    source_name: Go
    target_name: Rust
";
    let detection = detect(yaml.as_bytes()).unwrap();
    assert_eq!(detection.format, SchemaFormat::Flat);
    let flat = detection.document.as_flat().unwrap();
    assert_eq!(flat.trackable_relationships[0].target_id, 2);

    let yaml = "languages:\n  - id: 1\n    name: Go\n    created_at: 2024-01-01\n";
    assert_eq!(detect(yaml.as_bytes()).unwrap().format, SchemaFormat::NestedByEntity);
}

#[test]
fn test_extra_top_level_key_is_not_tolerated() {
    let yaml = "version: 1\nlanguages:\n  - id: 1\n    name: Go\n";
    match detect(yaml.as_bytes()) {
        Err(FormatError::UnrecognizedSchema { keys }) => {
            assert_eq!(keys, vec!["version", "languages"]);
        }
        other => panic!("Expected UnrecognizedSchema, got {:?}", other),
    }
}

// =============================================================================
// Failure diagnostics
// =============================================================================

#[test]
fn test_unknown_shape_lists_top_level_keys() {
    let yaml = "foo:\n  - 1\n  - 2\nbar:\n  baz: true\n";
    match detect(yaml.as_bytes()) {
        Err(FormatError::UnrecognizedSchema { mut keys }) => {
            keys.sort();
            assert_eq!(keys, vec!["bar", "foo"]);
        }
        other => panic!("Expected UnrecognizedSchema, got {:?}", other),
    }
}

#[test]
fn test_malformed_input_reports_every_attempt() {
    let yaml = "languages:\n  - id: 1\n    name: [Go, Rust\n";
    match detect(yaml.as_bytes()) {
        Err(FormatError::MalformedInput { failures }) => {
            let candidates: Vec<_> = failures.iter().map(|f| f.candidate).collect();
            assert_eq!(
                candidates,
                vec![
                    Candidate::Schema(SchemaFormat::NestedByEntity),
                    Candidate::Schema(SchemaFormat::ByProgress),
                    Candidate::Schema(SchemaFormat::Flat),
                    Candidate::Generic,
                ]
            );
            assert!(failures.iter().all(|f| !f.message.is_empty()));
        }
        other => panic!("Expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_concurrent_detection() {
    let inputs: Vec<_> = SchemaFormat::DETECTION_ORDER
        .into_iter()
        .map(|format| (format, encode(&demo::document(format), format).unwrap()))
        .collect();

    std::thread::scope(|scope| {
        for (format, bytes) in &inputs {
            scope.spawn(move || {
                for _ in 0..10 {
                    assert_eq!(detect(bytes).unwrap().format, *format);
                }
            });
        }
    });
}
