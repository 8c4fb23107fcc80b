//! Core domain types for brev.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - colour values and CSS colour parsing
//! - `AttributeSpec` / `ElementKind` - the fixed element schema
//! - `ParsedLine`, `ResolvedElement`, `Note` - pipeline stages

mod colour;
mod note;
mod schema;

pub use colour::{is_colour, Colour};
pub use note::{Metadata, Note, ParsedLine, RawMetadata, ResolvedElement};
pub use schema::{
    attributes_for, is_colour_attribute, AttributeSpec, ElementKind, PrimitiveType, Value,
    COLOUR_ATTRIBUTES,
};
