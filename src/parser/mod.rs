//! Parser for `.brev` note files.
//!
//! # File Structure
//!
//! - The first non-empty line is the note title
//! - Every later non-empty line is an element:
//!   `identifier {"optional":"json"} "content"`
//!
//! Lines that don't match the element syntax are skipped and reported as
//! warnings. Metadata that isn't valid JSON is a hard error.
//!
//! # Usage
//!
//! ```ignore
//! use brev::parser::parse_note;
//!
//! let note = parse_note("My Note\nh1 \"Hello\"\n")?;
//! assert_eq!(note.title, "My Note");
//! ```

mod line;

pub use line::{
    parse_element_line, parse_note, split_note, syntax_warning, NoteLines, ParsedNote, SYNTAX_CODE,
};
