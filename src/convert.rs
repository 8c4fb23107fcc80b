//! End-to-end note conversion.
//!
//! Lines are processed in order. A line that isn't an element is skipped
//! with a warning; malformed metadata or an invalid element stops the
//! conversion and no note is produced.

use std::fs;
use std::path::Path;

use crate::error::{BrevError, Result};
use crate::parser::{parse_element_line, split_note, syntax_warning};
use crate::render::{HtmlRenderer, RenderOptions};
use crate::resolve::resolve_element;
use crate::types::Note;
use crate::validation::{validate_element, Diagnostics};

/// A converted note and the warnings raised along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub note: Note,
    pub diagnostics: Diagnostics,
}

/// Convert note source with default options.
pub fn convert(source: &str) -> Result<Conversion> {
    convert_with(source, RenderOptions::default())
}

/// Convert note source.
pub fn convert_with(source: &str, options: RenderOptions) -> Result<Conversion> {
    let lines = split_note(source)?;
    let renderer = HtmlRenderer::new(options);

    let mut html = String::new();
    let mut diagnostics = Diagnostics::new();

    for (line_number, text) in lines.lines {
        let Some(line) = parse_element_line(text, line_number)? else {
            diagnostics.push(syntax_warning(line_number, text));
            continue;
        };

        validate_element(&line.identifier, &line.metadata).map_err(|violation| {
            BrevError::InvalidElement {
                line: line.line,
                identifier: line.identifier.clone(),
                reason: violation.to_string(),
            }
        })?;

        let element = resolve_element(line)?;
        html.push_str(&renderer.render(&element));
    }

    Ok(Conversion {
        note: Note {
            title: lines.title.to_string(),
            html,
        },
        diagnostics,
    })
}

/// Read and convert a `.brev` file.
pub fn convert_file(path: &Path, options: RenderOptions) -> Result<Conversion> {
    let source = fs::read_to_string(path).map_err(|e| BrevError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    convert_with(&source, options)
}

/// Read a `.brev` file and return its note, discarding warnings.
pub fn brev_to_html(path: impl AsRef<Path>) -> Result<Note> {
    convert_file(path.as_ref(), RenderOptions::default()).map(|conversion| conversion.note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_title_only() {
        let conversion = convert("  Just a title  \n").unwrap();
        assert_eq!(conversion.note.title, "Just a title");
        assert_eq!(conversion.note.html, "");
        assert!(conversion.diagnostics.is_empty());
    }

    #[test]
    fn test_convert_in_source_order() {
        let conversion = convert("T\ntext \"one\"\nh2 \"two\"\ntext \"three\"\n").unwrap();
        let html = &conversion.note.html;

        let one = html.find("one").unwrap();
        let two = html.find("two").unwrap();
        let three = html.find("three").unwrap();
        assert!(one < two && two < three);
        assert_eq!(html.matches("<div>").count(), 3);
    }

    #[test]
    fn test_skipped_line_does_not_stop_conversion() {
        let conversion = convert("T\n???\ntext \"after\"\n").unwrap();

        assert!(conversion.note.html.contains(">after</span>"));
        assert_eq!(conversion.diagnostics.warning_count(), 1);
        let warning = conversion.diagnostics.iter().next().unwrap();
        assert_eq!(warning.line, Some(2));
    }

    #[test]
    fn test_invalid_element_aborts() {
        let err = convert("T\ntext \"ok\"\nh1 {\"color\":\"javascript:alert(1)\"} \"x\"\n").unwrap_err();
        match err {
            BrevError::InvalidElement {
                line, identifier, ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(identifier, "h1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_element_aborts() {
        let err = convert("T\nparagraph \"x\"\n").unwrap_err();
        assert!(matches!(err, BrevError::InvalidElement { .. }));
    }

    #[test]
    fn test_first_fatal_line_wins() {
        // The invalid element on line 2 is reported before the bad JSON on line 3
        let err = convert("T\nh1 {\"size\":1} \"x\"\nh1 {oops} \"y\"\n").unwrap_err();
        assert!(matches!(err, BrevError::InvalidElement { line: 2, .. }));
    }

    #[test]
    fn test_escape_option() {
        let conversion = convert_with("T\ntext \"a < b\"\n", RenderOptions::escaped()).unwrap();
        assert!(conversion.note.html.contains(">a &lt; b</span>"));

        let conversion = convert("T\ntext \"a < b\"\n").unwrap();
        assert!(conversion.note.html.contains(">a < b</span>"));
    }

    #[test]
    fn test_convert_missing_file() {
        let err = brev_to_html("/nonexistent/note.brev").unwrap_err();
        assert!(matches!(err, BrevError::Io { .. }));
    }
}
