//! Merging raw metadata with schema defaults.

use crate::error::{BrevError, Result};
use crate::types::{ElementKind, Metadata, ParsedLine, RawMetadata, ResolvedElement, Value};

/// Build the complete metadata for an element.
///
/// Explicit values are kept as given; absent attributes take their default.
/// The metadata must already have passed validation.
pub fn resolve(identifier: &str, raw: &RawMetadata) -> Result<Metadata> {
    let kind = ElementKind::from_identifier(identifier).ok_or_else(|| BrevError::Internal {
        message: format!("cannot resolve metadata for unknown element '{}'", identifier),
    })?;

    Ok(resolve_kind(kind, raw))
}

/// Resolve a validated line into an element ready to render.
pub fn resolve_element(line: ParsedLine) -> Result<ResolvedElement> {
    let kind = ElementKind::from_identifier(&line.identifier).ok_or_else(|| BrevError::Internal {
        message: format!(
            "cannot resolve unknown element '{}' at line {}",
            line.identifier, line.line
        ),
    })?;

    Ok(ResolvedElement {
        kind,
        metadata: resolve_kind(kind, &line.metadata),
        content: line.content,
    })
}

/// Build the complete metadata for a known element kind.
pub fn resolve_kind(kind: ElementKind, raw: &RawMetadata) -> Metadata {
    let mut metadata = Metadata::new();

    for attr in kind.attributes() {
        let value = raw
            .get(attr.name)
            .and_then(Value::from_json)
            .or_else(|| attr.default.clone());

        if let Some(value) = value {
            metadata.insert(attr.name, value);
        }
    }

    metadata
}
