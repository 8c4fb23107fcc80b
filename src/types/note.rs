//! Element and note types produced by the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::schema::{ElementKind, Value};

/// Metadata exactly as written in the source line.
pub type RawMetadata = serde_json::Map<String, serde_json::Value>;

/// Metadata after defaults are applied, keyed by attribute name.
pub type Metadata = BTreeMap<&'static str, Value>;

/// A single element line split into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// Line number in the source file (1-indexed)
    pub line: usize,
    pub identifier: String,
    pub metadata: RawMetadata,
    /// Content with `\"` already unescaped
    pub content: String,
}

/// An element whose metadata covers every attribute in its schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedElement {
    pub kind: ElementKind,
    pub metadata: Metadata,
    pub content: String,
}

/// A converted note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_json_shape() {
        let note = Note {
            title: "My Note".to_string(),
            html: "<div></div>".to_string(),
        };
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"title":"My Note","html":"<div></div>"}"#);
    }
}
