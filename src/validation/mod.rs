//! Metadata validation against the element schema.
//!
//! Validation is all-or-nothing: one bad attribute invalidates the element,
//! and an invalid element aborts the whole conversion.

mod warning;

pub use warning::{Diagnostic, Diagnostics, Severity};

use crate::types::{
    attributes_for, is_colour, is_colour_attribute, AttributeSpec, PrimitiveType, RawMetadata,
};

/// Why an element failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    UnknownElement,
    UnknownAttribute(String),
    WrongType {
        attribute: String,
        expected: PrimitiveType,
    },
    InvalidColour {
        attribute: String,
        value: String,
    },
    MissingAttribute(&'static str),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::UnknownElement => write!(f, "unknown element identifier"),
            Violation::UnknownAttribute(name) => write!(f, "attribute '{}' is not allowed", name),
            Violation::WrongType {
                attribute,
                expected,
            } => write!(f, "attribute '{}' must be a {}", attribute, expected),
            Violation::InvalidColour { attribute, value } => {
                write!(f, "attribute '{}' is not a valid colour: {:?}", attribute, value)
            }
            Violation::MissingAttribute(name) => {
                write!(f, "required attribute '{}' is missing", name)
            }
        }
    }
}

/// Check an element's raw metadata against its schema.
pub fn validate_element(identifier: &str, metadata: &RawMetadata) -> Result<(), Violation> {
    let Some(attributes) = attributes_for(identifier) else {
        return Err(Violation::UnknownElement);
    };

    check_attributes(attributes, metadata)
}

/// Check raw metadata against a list of attribute specs.
pub fn check_attributes(
    attributes: &[AttributeSpec],
    metadata: &RawMetadata,
) -> Result<(), Violation> {
    for (key, value) in metadata {
        let spec = attributes
            .iter()
            .find(|attr| attr.name == key.as_str())
            .ok_or_else(|| Violation::UnknownAttribute(key.clone()))?;

        if !spec.kind.matches(value) {
            return Err(Violation::WrongType {
                attribute: key.clone(),
                expected: spec.kind,
            });
        }

        if is_colour_attribute(key) {
            let valid = value.as_str().map(is_colour).unwrap_or(false);
            if !valid {
                return Err(Violation::InvalidColour {
                    attribute: key.clone(),
                    value: value.to_string(),
                });
            }
        }
    }

    if let Some(missing) = attributes
        .iter()
        .find(|attr| attr.is_required() && !metadata.contains_key(attr.name))
    {
        return Err(Violation::MissingAttribute(missing.name));
    }

    Ok(())
}

/// Whether an element's raw metadata is acceptable.
pub fn is_valid(identifier: &str, metadata: &RawMetadata) -> bool {
    validate_element(identifier, metadata).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta(value: serde_json::Value) -> RawMetadata {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_empty_metadata_is_valid() {
        for id in ["h1", "h2", "h3", "text", "img"] {
            assert!(is_valid(id, &RawMetadata::new()), "{id}");
        }
    }

    #[test]
    fn test_unknown_element() {
        assert_eq!(
            validate_element("p", &RawMetadata::new()),
            Err(Violation::UnknownElement)
        );
    }

    #[test]
    fn test_full_valid_metadata() {
        let m = meta(json!({"color": "#ff0000", "weight": 700, "font-size": 1.25}));
        assert!(is_valid("h1", &m));
        assert!(is_valid("text", &m));
    }

    #[test]
    fn test_unknown_attribute() {
        let m = meta(json!({"width": 10}));
        assert_eq!(
            validate_element("h1", &m),
            Err(Violation::UnknownAttribute("width".to_string()))
        );

        // background-color is a colour attribute but no element declares it
        let m = meta(json!({"background-color": "#000"}));
        assert!(!is_valid("text", &m));
    }

    #[test]
    fn test_wrong_type() {
        let m = meta(json!({"weight": "700"}));
        assert!(matches!(
            validate_element("h2", &m),
            Err(Violation::WrongType {
                expected: PrimitiveType::Number,
                ..
            })
        ));

        assert!(!is_valid("img", &meta(json!({"width": null}))));
        assert!(!is_valid("img", &meta(json!({"width": [1]}))));
        assert!(!is_valid("h1", &meta(json!({"color": 255}))));
    }

    #[test]
    fn test_one_bad_key_invalidates_element() {
        let m = meta(json!({"weight": 700, "color": "#fff", "bogus": true}));
        assert!(!is_valid("h1", &m));
    }

    #[test]
    fn test_missing_required_attribute() {
        let attributes = [
            AttributeSpec {
                name: "src",
                kind: PrimitiveType::String,
                default: None,
            },
            AttributeSpec {
                name: "visible",
                kind: PrimitiveType::Boolean,
                default: Some(crate::types::Value::Bool(true)),
            },
        ];

        assert_eq!(
            check_attributes(&attributes, &meta(json!({"visible": false}))),
            Err(Violation::MissingAttribute("src"))
        );
        assert!(check_attributes(&attributes, &meta(json!({"src": "a.png"}))).is_ok());
        assert!(check_attributes(&attributes, &meta(json!({"src": "a.png", "visible": "no"}))).is_err());
    }

    #[test]
    fn test_invalid_colour() {
        let m = meta(json!({"color": "javascript:alert(1)"}));
        assert!(matches!(
            validate_element("h1", &m),
            Err(Violation::InvalidColour { .. })
        ));

        let m = meta(json!({"color": "\"onload=\"x\""}));
        assert!(!is_valid("text", &m));
    }

    #[test]
    fn test_valid_colour_forms() {
        for colour in ["#abc", "#a1b2c3", "rgb(1, 2, 3)", "hsl(10, 20%, 30%)", "teal"] {
            let m = meta(json!({ "color": colour }));
            assert!(is_valid("h3", &m), "{colour}");
        }
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            Violation::MissingAttribute("src").to_string(),
            "required attribute 'src' is missing"
        );
        assert_eq!(
            Violation::UnknownAttribute("x".to_string()).to_string(),
            "attribute 'x' is not allowed"
        );
    }
}
