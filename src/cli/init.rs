//! Init command implementation.
//!
//! Generates a `brev.yaml` manifest from discovered notes.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{BrevError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a brev project by generating a brev.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing brev.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(BrevError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // No manifest yet (or it is being replaced), so scan everything
    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;
    let notes = &discovery.notes;

    // Unique parent directories relative to the project root
    let mut source_dirs = BTreeSet::new();
    for note in notes {
        if let Some(parent) = note.parent() {
            let relative = parent.strip_prefix(&discovery.root).unwrap_or(parent);

            let dir_str = if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            source_dirs.insert(dir_str);
        }
    }

    let mut yaml = String::new();

    if !(source_dirs.is_empty() || source_dirs.contains(".")) {
        yaml.push_str("sources:\n");
        for dir in &source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str("output: dist\n");
    yaml.push_str("format: html\n");
    yaml.push_str("escape_content: false\n");

    fs::write(&manifest_path, &yaml).map_err(|e| BrevError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(notes.len(), "note", "notes")
        ),
    );

    Ok(())
}
