//! Check command implementation.
//!
//! Converts notes without writing output and reports what would fail.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::convert::convert_file;
use crate::discovery::{discover_paths, load_manifest};
use crate::error::{BrevError, Result};
use crate::output::{display_path, plural, Printer};

/// Check note files without writing output
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Note files or directories to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let (manifest, _) = load_manifest(Path::new("."))?;
    let notes = discover_paths(&args.paths, &manifest);
    let options = manifest.render_options();

    let mut failed = 0;
    let mut warnings = 0;

    for path in &notes {
        let display = display_path(path);

        match convert_file(path, options) {
            Ok(conversion) => {
                for diagnostic in conversion.diagnostics.iter() {
                    printer.diagnostic(&display, diagnostic);
                }
                warnings += conversion.diagnostics.warning_count();
                printer.status("Checked", &format!("{} \"{}\"", display, conversion.note.title));
            }
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display, e));
            }
        }
    }

    if failed > 0 {
        return Err(BrevError::Build {
            message: format!(
                "{} of {} failed to convert",
                failed,
                plural(notes.len(), "note", "notes")
            ),
            help: None,
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} ok ({})",
            plural(notes.len(), "note", "notes"),
            plural(warnings, "warning", "warnings")
        ),
    );

    Ok(())
}
