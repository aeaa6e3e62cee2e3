//! Record shapes for the three knowledge-base schemas
//!
//! The shapes describe the same domain (languages, concepts, examples,
//! trackables, tags, relationships, progress) from three perspectives and
//! share no base type. Each root document rejects top-level keys it does not
//! declare, so a successful decode means the text has that schema's layout.
//! Rows below the root ignore extra keys, and a list written as `null`
//! decodes as empty.

pub mod common;
pub mod flat;
pub mod nested;
pub mod progress;

pub use common::{RelationKind, RelationshipTarget, TrackableProgress};
pub use flat::{
    ExampleTag, FlatConcept, FlatDocument, FlatExample, FlatLanguage, FlatTag, FlatTrackable,
    LanguageInfo, TrackableRelationship, TrackableTag,
};
pub use nested::{
    NestedConcept, NestedDocument, NestedExample, NestedLanguage, NestedTrackable, Relationships,
};
pub use progress::{ProgressDocument, ProgressEntry, TrackableDetails, TrackableSummary};
