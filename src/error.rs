//! Error types for schema detection and encoding

use thiserror::Error;

use crate::schema::{Candidate, SchemaFormat};

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// A parse failure recorded for one detection candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// Which decode attempt failed
    pub candidate: Candidate,
    /// The codec's error message
    pub message: String,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.candidate, self.message)
    }
}

/// Schema detection and encoding errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Document is {found}, not {expected}")]
    SchemaMismatch {
        expected: SchemaFormat,
        found: SchemaFormat,
    },

    #[error("Unsupported schema: {0}")]
    UnsupportedSchema(String),

    #[error("Could not determine schema, but input is valid YAML. Top level keys: {keys:?}")]
    UnrecognizedSchema { keys: Vec<String> },

    #[error("Could not parse input under any known schema: {}", join_failures(.failures))]
    MalformedInput { failures: Vec<ParseFailure> },

    #[error("YAML encode error: {0}")]
    Encode(#[from] serde_yaml::Error),
}

fn join_failures(failures: &[ParseFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
