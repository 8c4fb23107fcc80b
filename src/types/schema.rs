//! The fixed element schema.
//!
//! Every element identifier maps to an ordered list of attributes it accepts.
//! An attribute without a default is required.

use std::borrow::Cow;
use std::fmt;

/// Attribute names whose values must parse as colours.
pub const COLOUR_ATTRIBUTES: &[&str] = &["color", "background-color"];

/// The declared type of a metadata attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Number,
    String,
    Boolean,
}

impl PrimitiveType {
    /// Check whether a raw JSON value has this type.
    pub fn matches(self, value: &serde_json::Value) -> bool {
        matches!(
            (self, value),
            (PrimitiveType::Number, serde_json::Value::Number(_))
                | (PrimitiveType::String, serde_json::Value::String(_))
                | (PrimitiveType::Boolean, serde_json::Value::Bool(_))
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Number => write!(f, "number"),
            PrimitiveType::String => write!(f, "string"),
            PrimitiveType::Boolean => write!(f, "boolean"),
        }
    }
}

/// A typed metadata value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(Cow<'static, str>),
    Bool(bool),
}

impl Value {
    /// The primitive type of this value.
    pub fn kind(&self) -> PrimitiveType {
        match self {
            Value::Number(_) => PrimitiveType::Number,
            Value::Text(_) => PrimitiveType::String,
            Value::Bool(_) => PrimitiveType::Boolean,
        }
    }

    /// Convert a raw JSON scalar. Returns `None` for null, arrays and objects.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
            serde_json::Value::String(s) => Some(Value::Text(Cow::Owned(s.clone()))),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write_number(f, *n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Write a number the way JavaScript stringifies it: `2` rather than `2.0`,
/// `0` for negative zero, and exponent form below `1e-6` or from `1e21` up.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent = format!("{:e}", n);
        return match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exponent),
        };
    }

    write!(f, "{}", n)
}

/// One allowed metadata attribute of an element.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: PrimitiveType,
    pub default: Option<Value>,
}

impl AttributeSpec {
    const fn optional(name: &'static str, kind: PrimitiveType, default: Value) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
        }
    }

    /// Whether the attribute must be given explicitly.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// The element kinds a note can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    H1,
    H2,
    H3,
    Text,
    Img,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::H1,
        ElementKind::H2,
        ElementKind::H3,
        ElementKind::Text,
        ElementKind::Img,
    ];

    /// Look up an element kind by its identifier in source.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "h1" => Some(ElementKind::H1),
            "h2" => Some(ElementKind::H2),
            "h3" => Some(ElementKind::H3),
            "text" => Some(ElementKind::Text),
            "img" => Some(ElementKind::Img),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::H1 => "h1",
            ElementKind::H2 => "h2",
            ElementKind::H3 => "h3",
            ElementKind::Text => "text",
            ElementKind::Img => "img",
        }
    }

    /// The attributes this element accepts, in declaration order.
    pub fn attributes(self) -> &'static [AttributeSpec] {
        match self {
            ElementKind::H1 => H1_ATTRIBUTES,
            ElementKind::H2 => H2_ATTRIBUTES,
            ElementKind::H3 => H3_ATTRIBUTES,
            ElementKind::Text => TEXT_ATTRIBUTES,
            ElementKind::Img => IMG_ATTRIBUTES,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const WHITE: Value = Value::Text(Cow::Borrowed("#ffffff"));

static H1_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::optional("weight", PrimitiveType::Number, Value::Number(700.0)),
    AttributeSpec::optional("font-size", PrimitiveType::Number, Value::Number(2.0)),
    AttributeSpec::optional("color", PrimitiveType::String, WHITE),
];

static H2_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::optional("weight", PrimitiveType::Number, Value::Number(600.0)),
    AttributeSpec::optional("font-size", PrimitiveType::Number, Value::Number(1.75)),
    AttributeSpec::optional("color", PrimitiveType::String, WHITE),
];

static H3_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::optional("weight", PrimitiveType::Number, Value::Number(600.0)),
    AttributeSpec::optional("font-size", PrimitiveType::Number, Value::Number(1.5)),
    AttributeSpec::optional("color", PrimitiveType::String, WHITE),
];

static TEXT_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::optional("weight", PrimitiveType::Number, Value::Number(400.0)),
    AttributeSpec::optional("font-size", PrimitiveType::Number, Value::Number(1.0)),
    AttributeSpec::optional("color", PrimitiveType::String, WHITE),
];

static IMG_ATTRIBUTES: &[AttributeSpec] = &[AttributeSpec::optional(
    "width",
    PrimitiveType::Number,
    Value::Number(5.0),
)];

/// Get the allowed attributes for an element identifier.
///
/// Returns `None` for unknown identifiers.
pub fn attributes_for(identifier: &str) -> Option<&'static [AttributeSpec]> {
    ElementKind::from_identifier(identifier).map(ElementKind::attributes)
}

/// Check whether an attribute name holds a colour.
pub fn is_colour_attribute(name: &str) -> bool {
    COLOUR_ATTRIBUTES.contains(&name)
}
