use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brev operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrevError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(brev::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(brev::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed metadata at line {line}: {message}")]
    #[diagnostic(
        code(brev::metadata),
        help("Metadata must be a JSON object, e.g. {{\"color\":\"#ff0000\"}}")
    )]
    MalformedMetadata { line: usize, message: String },

    #[error("Element invalid at line {line} ({identifier}): {reason}")]
    #[diagnostic(code(brev::validate))]
    InvalidElement {
        line: usize,
        identifier: String,
        reason: String,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(brev::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Internal error: {message}")]
    #[diagnostic(code(brev::internal))]
    Internal { message: String },
}

pub type Result<T> = std::result::Result<T, BrevError>;
