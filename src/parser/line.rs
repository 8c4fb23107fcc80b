//! Line splitting and element line matching.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BrevError, Result};
use crate::types::{ParsedLine, RawMetadata};
use crate::validation::{Diagnostic, Diagnostics};

/// Diagnostic code for lines that do not look like elements.
pub const SYNTAX_CODE: &str = "brev::syntax";

/// The title and element lines of a note, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNote {
    pub title: String,
    pub lines: Vec<ParsedLine>,
    /// One warning per skipped line
    pub diagnostics: Diagnostics,
}

/// `identifier [{json}] "content"`, where `\"` does not end the content.
fn element_regex() -> &'static Regex {
    static ELEMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    ELEMENT_REGEX.get_or_init(|| {
        Regex::new(r#"^([A-Za-z0-9_]+)(?:\s+(\{.*?\}))?\s+"((?:[^"\\]|\\.)*)"$"#).unwrap()
    })
}

/// A note split into its title and remaining non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLines<'a> {
    pub title: &'a str,
    /// (line number, trimmed text) for every later non-empty line
    pub lines: Vec<(usize, &'a str)>,
}

/// Split source into trimmed, non-empty lines and take the first as title.
pub fn split_note(source: &str) -> Result<NoteLines<'_>> {
    let mut lines = source
        .split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((_, title)) = lines.next() else {
        return Err(BrevError::Parse {
            message: "Note has no title line".to_string(),
            help: Some("The first non-empty line of a .brev file is its title".to_string()),
        });
    };

    Ok(NoteLines {
        title,
        lines: lines.collect(),
    })
}

/// Parse note source into a title and element lines.
///
/// Blank lines are ignored. The first remaining line is the title. Lines
/// that don't match the element syntax are skipped with a warning; malformed
/// metadata JSON aborts the parse.
///
/// Elements are not validated here, so malformed JSON on any line is reported
/// even when an earlier element is invalid. [`crate::convert::convert`]
/// validates line by line and reports whichever fatal line comes first.
pub fn parse_note(source: &str) -> Result<ParsedNote> {
    let note = split_note(source)?;

    let mut parsed = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for (line_number, line) in note.lines {
        match parse_element_line(line, line_number)? {
            Some(element) => parsed.push(element),
            None => diagnostics.push(syntax_warning(line_number, line)),
        }
    }

    Ok(ParsedNote {
        title: note.title.to_string(),
        lines: parsed,
        diagnostics,
    })
}

/// The warning reported for a line that isn't an element.
///
/// `line_number` is the physical 1-based line in the source, blank lines
/// included, so it points at the line an editor shows. Counting only
/// non-empty lines would drift after every blank line.
pub fn syntax_warning(line_number: usize, line: &str) -> Diagnostic {
    Diagnostic::warning(
        SYNTAX_CODE,
        format!("Syntax error at line {}: \"{}\"", line_number, line),
    )
    .at_line(line_number)
    .with_help("Expected: identifier {\"key\":value} \"content\"")
}

/// Match a single trimmed element line.
///
/// Returns `Ok(None)` when the line doesn't match the element syntax.
pub fn parse_element_line(line: &str, line_number: usize) -> Result<Option<ParsedLine>> {
    let Some(caps) = element_regex().captures(line) else {
        return Ok(None);
    };

    let identifier = caps[1].to_string();

    let metadata = match caps.get(2) {
        Some(json) => parse_metadata(json.as_str(), line_number)?,
        None => RawMetadata::new(),
    };

    let content = caps[3].replace("\\\"", "\"");

    Ok(Some(ParsedLine {
        line: line_number,
        identifier,
        metadata,
        content,
    }))
}

fn parse_metadata(json: &str, line_number: usize) -> Result<RawMetadata> {
    serde_json::from_str(json).map_err(|e| BrevError::MalformedMetadata {
        line: line_number,
        message: e.to_string(),
    })
}
