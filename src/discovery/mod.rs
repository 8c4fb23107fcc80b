//! Note discovery for brev projects.
//!
//! Finds `.brev` files in a project directory, either by scanning the whole
//! directory or by following the sources listed in a `brev.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use brev::discovery::discover;
//!
//! let result = discover("./my-notes")?;
//! println!("Found {} notes", result.notes.len());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{Manifest, OutputFormat};
pub use scanner::{is_note_file, scan_directory, scan_sources, NOTE_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "brev.yaml";

/// Result of discovering notes in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no brev.yaml was found).
    pub manifest: Manifest,

    /// Whether a brev.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered note files, sorted per source.
    pub notes: Vec<PathBuf>,
}

/// Discover notes in a project directory.
///
/// Uses the source paths of `brev.yaml` in the root directory when present,
/// otherwise scans the entire directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let (manifest, has_manifest) = load_manifest(&root)?;

    let notes = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        notes,
    })
}

/// Load `brev.yaml` from a directory, falling back to the default manifest.
///
/// The flag reports whether the file existed.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Ok((Manifest::load(&manifest_path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

/// Collect notes from explicit paths. Directories are scanned recursively;
/// files are taken as given.
pub fn discover_paths(paths: &[PathBuf], manifest: &Manifest) -> Vec<PathBuf> {
    let mut notes = Vec::new();

    for path in paths {
        if path.is_dir() {
            notes.extend(scan_directory(path, manifest));
        } else {
            notes.push(path.clone());
        }
    }

    notes
}
