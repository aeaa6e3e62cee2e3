//! Schema detection
//!
//! The three schemas overlap structurally (a top-level `languages:` key is
//! valid in both the nested and flat shapes), so a successful decode alone
//! does not identify the schema. Each candidate is decoded and then
//! confirmed by a content check over the raw text:
//!
//! | Order | Schema   | Confirmed when                                              |
//! |-------|----------|-------------------------------------------------------------|
//! | 1     | nested   | `languages:` present and any entity list non-empty          |
//! | 2     | progress | `progress_summary:` present and the summary non-empty       |
//! | 3     | flat     | `languages:`, `tags:` and `trackable_progress:` all present |
//!
//! The first confirmed candidate wins. Input that would satisfy more than one
//! candidate always resolves to the earliest one in this order.

use serde::Serialize;
use serde_yaml::Value;
use tracing::{debug, info};

use crate::error::{FormatError, ParseFailure, Result};
use crate::model::{FlatDocument, NestedDocument, ProgressDocument};
use crate::schema::{Candidate, Document, SchemaFormat};

/// What happened to one candidate schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "error")]
pub enum AttemptOutcome {
    /// The text does not have this schema's shape
    DecodeFailed(String),
    /// Decoded, but the content check did not confirm it
    Rejected,
    Confirmed,
}

/// Diagnostic record of a single decode attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub format: SchemaFormat,
    pub outcome: AttemptOutcome,
}

/// A confirmed detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub document: Document,
    pub format: SchemaFormat,
    /// Every attempt made, in order, ending with the confirmed one
    pub attempts: Vec<Attempt>,
}

impl Detection {
    pub fn into_parts(self) -> (Document, SchemaFormat) {
        (self.document, self.format)
    }
}

/// Determine which schema `input` uses and decode it.
///
/// Each schema's root accepts only its own top-level keys, so one extra key
/// beside an otherwise valid body disqualifies every schema: `version: 1`
/// next to `languages:` yields [`FormatError::UnrecognizedSchema`] listing
/// both keys. Keys inside rows are ignored and `null` lists read as empty.
///
/// # Errors
///
/// - [`FormatError::UnrecognizedSchema`] when the input is a valid YAML
///   mapping that no schema confirms. Carries the top-level keys.
/// - [`FormatError::MalformedInput`] when not even the generic mapping parse
///   succeeds. Carries the failure of every attempt.
pub fn detect(input: &[u8]) -> Result<Detection> {
    let text = String::from_utf8_lossy(input);
    let mut attempts = Vec::with_capacity(SchemaFormat::DETECTION_ORDER.len());

    for format in SchemaFormat::DETECTION_ORDER {
        let outcome = match decode_as(input, format) {
            Ok(document) if confirms(&document, &text) => {
                debug!(format = %format, "candidate confirmed");
                attempts.push(Attempt {
                    format,
                    outcome: AttemptOutcome::Confirmed,
                });
                info!(format = %format, id = format.id(), "detected schema");
                return Ok(Detection {
                    document,
                    format,
                    attempts,
                });
            }
            Ok(_) => {
                debug!(format = %format, "decoded but content check failed");
                AttemptOutcome::Rejected
            }
            Err(err) => {
                debug!(format = %format, error = %err, "decode failed");
                AttemptOutcome::DecodeFailed(err.to_string())
            }
        };
        attempts.push(Attempt { format, outcome });
    }

    match top_level_keys(input) {
        Ok(keys) => {
            info!(?keys, "valid YAML but no schema matched");
            Err(FormatError::UnrecognizedSchema { keys })
        }
        Err(message) => {
            let mut failures: Vec<ParseFailure> = attempts
                .into_iter()
                .filter_map(|attempt| match attempt.outcome {
                    AttemptOutcome::DecodeFailed(message) => Some(ParseFailure {
                        candidate: Candidate::Schema(attempt.format),
                        message,
                    }),
                    _ => None,
                })
                .collect();
            failures.push(ParseFailure {
                candidate: Candidate::Generic,
                message,
            });
            info!(failures = failures.len(), "input is not a YAML mapping");
            Err(FormatError::MalformedInput { failures })
        }
    }
}

/// Structural decode against one schema, with no content check
pub fn decode_as(input: &[u8], format: SchemaFormat) -> std::result::Result<Document, serde_yaml::Error> {
    Ok(match format {
        SchemaFormat::NestedByEntity => {
            Document::Nested(serde_yaml::from_slice::<NestedDocument>(input)?)
        }
        SchemaFormat::Flat => Document::Flat(serde_yaml::from_slice::<FlatDocument>(input)?),
        SchemaFormat::ByProgress => {
            Document::ByProgress(serde_yaml::from_slice::<ProgressDocument>(input)?)
        }
    })
}

fn confirms(document: &Document, text: &str) -> bool {
    if !document.format().markers_present(text) {
        return false;
    }
    match document {
        Document::Nested(doc) => !doc.is_empty(),
        Document::ByProgress(doc) => !doc.progress_summary.is_empty(),
        Document::Flat(_) => true,
    }
}

/// Keys of the top-level mapping. An empty document has no keys.
fn top_level_keys(input: &[u8]) -> std::result::Result<Vec<String>, String> {
    match serde_yaml::from_slice::<Value>(input).map_err(|e| e.to_string())? {
        Value::Mapping(map) => Ok(map.keys().map(key_name).collect()),
        Value::Null => Ok(Vec::new()),
        other => Err(format!(
            "expected a mapping at the top level, found {}",
            value_kind(&other)
        )),
    }
}

fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
