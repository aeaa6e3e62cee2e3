//! Encoding typed documents to YAML

use tracing::debug;

use crate::error::{FormatError, Result};
use crate::schema::{Document, SchemaFormat};

/// Serialize `document` as `format`.
///
/// Fails with [`FormatError::SchemaMismatch`] when the document's shape is
/// not the declared format. Field contents are not validated.
pub fn encode(document: &Document, format: SchemaFormat) -> Result<Vec<u8>> {
    let found = document.format();
    if found != format {
        return Err(FormatError::SchemaMismatch {
            expected: format,
            found,
        });
    }

    let text = match document {
        Document::Nested(doc) => serde_yaml::to_string(doc)?,
        Document::Flat(doc) => serde_yaml::to_string(doc)?,
        Document::ByProgress(doc) => serde_yaml::to_string(doc)?,
    };

    debug!(format = %format, bytes = text.len(), "encoded document");
    Ok(text.into_bytes())
}

/// Serialize `document` under a numeric schema identifier
pub fn encode_as(document: &Document, schema_id: u8) -> Result<Vec<u8>> {
    let format = SchemaFormat::try_from(schema_id)?;
    encode(document, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FlatDocument, NestedDocument, NestedLanguage, ProgressDocument};

    #[test]
    fn test_mismatch_produces_no_output() {
        let doc = Document::from(FlatDocument::default());
        let err = encode(&doc, SchemaFormat::NestedByEntity).unwrap_err();
        assert!(matches!(
            err,
            FormatError::SchemaMismatch {
                expected: SchemaFormat::NestedByEntity,
                found: SchemaFormat::Flat,
            }
        ));
    }

    #[test]
    fn test_unknown_id() {
        let doc = Document::from(ProgressDocument::default());
        assert!(matches!(
            encode_as(&doc, 9),
            Err(FormatError::UnsupportedSchema(id)) if id == "9"
        ));
    }

    #[test]
    fn test_keys_follow_declaration_order() {
        let mut lang = NestedLanguage::new(5, "Go");
        lang.version = Some("1.20".to_string());
        let doc = Document::from(NestedDocument {
            languages: vec![lang],
            ..Default::default()
        });
        let text = String::from_utf8(encode_as(&doc, 1).unwrap()).unwrap();
        let id_at = text.find("id:").unwrap();
        let name_at = text.find("name:").unwrap();
        let version_at = text.find("version:").unwrap();
        assert!(id_at < name_at && name_at < version_at);
        // A version that looks like a float stays a string
        assert!(text.contains("version: '1.20'") || text.contains("version: \"1.20\""));
    }
}
