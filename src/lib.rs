//! brev - Brevity note converter
//!
//! A library for converting line-oriented `.brev` note files into HTML
//! fragments. Each note has a title line followed by element lines:
//!
//! ```text
//! My Note
//! h1 {"color":"#ff0000"} "Hello"
//! text "World"
//! img {"width":10} "https://x/y.png"
//! ```

pub mod cli;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod resolve;
pub mod types;
pub mod validation;

pub use convert::{brev_to_html, convert, convert_file, convert_with, Conversion};
pub use discovery::{discover, DiscoveryResult, Manifest, OutputFormat};
pub use error::{BrevError, Result};
pub use parser::{parse_note, ParsedNote};
pub use render::{render_fragment, HtmlRenderer, RenderOptions};
pub use resolve::{resolve, resolve_element};
pub use types::{
    attributes_for, is_colour, AttributeSpec, Colour, ElementKind, Metadata, Note, ParsedLine,
    PrimitiveType, RawMetadata, ResolvedElement, Value,
};
pub use validation::{is_valid, validate_element, Diagnostic, Diagnostics, Severity, Violation};
