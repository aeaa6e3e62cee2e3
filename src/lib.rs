//! Polyglot Knowledge-Base Schemas
//!
//! Detection and encoding for the three YAML layouts used to store the
//! polyglot learning knowledge base (languages, concepts, examples, and
//! trackables with progress).
//!
//! ## Schemas
//!
//! | Id | Name       | Shape                                                         |
//! |----|------------|---------------------------------------------------------------|
//! | 1  | `nested`   | entities embed their children, tags inline                    |
//! | 2  | `flat`     | one list per table, join tables keyed by integer identity     |
//! | 3  | `progress` | a single `progress_summary` list with optional details        |
//!
//! ## Usage
//!
//! ```no_run
//! use polyglot_schemas::{detect, encode, SchemaFormat};
//!
//! let input = std::fs::read("knowledge.yaml")?;
//! let detection = detect(&input)?;
//! println!("{} ({} languages)", detection.format, detection.document.stats().languages);
//!
//! let bytes = encode(&detection.document, detection.format)?;
//! std::fs::write("knowledge.normalized.yaml", bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Detection and encoding are pure functions over in-memory buffers and are
//! safe to call concurrently.

pub mod config;
pub mod demo;
pub mod detect;
pub mod encode;
pub mod error;
pub mod model;
pub mod schema;

pub use config::KbConfig;
pub use detect::{detect, Attempt, AttemptOutcome, Detection};
pub use encode::{encode, encode_as};
pub use error::{FormatError, ParseFailure, Result};
pub use schema::{Candidate, Document, DocumentStats, SchemaFormat};
