//! Build command implementation.
//!
//! Converts note files and writes HTML or JSON output.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::convert::convert_file;
use crate::discovery::{discover, discover_paths, load_manifest, OutputFormat};
use crate::error::{BrevError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Note;

/// Convert notes to HTML or JSON
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Note files or directories (default: sources from brev.yaml)
    pub paths: Vec<PathBuf>,

    /// Output directory (default: from brev.yaml, or "dist")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Escape markup characters in element content
    #[arg(long)]
    pub escape: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    build(args, Path::new("."), printer)
}

/// Build notes for the project rooted at `project_root`.
///
/// Explicit paths still honour the project's `brev.yaml` for format,
/// output directory, excludes and escaping; command line flags win.
pub fn build(args: BuildArgs, project_root: &Path, printer: &Printer) -> Result<()> {
    let (manifest, notes, roots) = if args.paths.is_empty() {
        let discovery = discover(project_root)?;
        let roots = vec![discovery.root.clone()];
        (discovery.manifest, discovery.notes, roots)
    } else {
        let (manifest, _) = load_manifest(project_root)?;
        let notes = discover_paths(&args.paths, &manifest);
        let roots: Vec<PathBuf> = args.paths.iter().filter(|p| p.is_dir()).cloned().collect();
        (manifest, notes, roots)
    };

    if notes.is_empty() {
        return Err(BrevError::Build {
            message: "No .brev files found".to_string(),
            help: Some("Pass note files or directories, or list sources in brev.yaml".to_string()),
        });
    }

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| project_root.join(&manifest.output));
    let format = args.format.unwrap_or(manifest.format);
    let mut options = manifest.render_options();
    options.escape_content |= args.escape;

    let targets = plan_outputs(&notes, &roots, &output_dir, format)?;

    let mut warnings = 0;

    for (path, destination) in notes.iter().zip(&targets) {
        let display = display_path(path);
        printer.status("Converting", &display);

        let conversion = convert_file(path, options)?;
        for diagnostic in conversion.diagnostics.iter() {
            printer.diagnostic(&display, diagnostic);
        }
        warnings += conversion.diagnostics.warning_count();

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| BrevError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
        write_note(&conversion.note, destination, format)?;
    }

    let mut summary = format!(
        "{} to {}",
        plural(notes.len(), "note", "notes"),
        display_path(&output_dir)
    );
    if warnings > 0 {
        summary.push_str(&format!(" ({})", plural(warnings, "warning", "warnings")));
    }
    printer.success("Finished", &summary);

    Ok(())
}

/// Output file for every note, failing if two notes would share one.
fn plan_outputs(
    notes: &[PathBuf],
    roots: &[PathBuf],
    output_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(notes.len());

    for note in notes {
        let destination = output_path(&relative_note_path(note, roots), output_dir, format);

        if let Some(previous) = claimed.insert(destination.clone(), note.as_path()) {
            return Err(BrevError::Build {
                message: format!(
                    "{} and {} would both be written to {}",
                    display_path(previous),
                    display_path(note),
                    display_path(&destination)
                ),
                help: Some("Rename one of the notes or build them separately".to_string()),
            });
        }
        targets.push(destination);
    }

    Ok(targets)
}

/// A note's path below the closest root directory containing it, or just
/// its file name when no root contains it.
fn relative_note_path(note: &Path, roots: &[PathBuf]) -> PathBuf {
    roots
        .iter()
        .filter_map(|root| note.strip_prefix(root).ok())
        .min_by_key(|relative| relative.components().count())
        .map(Path::to_path_buf)
        .or_else(|| note.file_name().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("note"))
}

/// Output file for a note path relative to its source root.
pub fn output_path(relative: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    output_dir.join(relative).with_extension(format.extension())
}

/// Write a converted note in the given format.
pub fn write_note(note: &Note, path: &Path, format: OutputFormat) -> Result<()> {
    let content = match format {
        OutputFormat::Html => note.html.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(note).map_err(|e| BrevError::Build {
            message: format!("Failed to serialize note: {}", e),
            help: None,
        })?,
    };

    fs::write(path, content).map_err(|e| BrevError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write note: {}", e),
    })
}
