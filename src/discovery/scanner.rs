//! File system scanner for discovering `.brev` notes.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File extension of note files.
pub const NOTE_EXTENSION: &str = "brev";

/// Check whether a path names a note file.
pub fn is_note_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(NOTE_EXTENSION)
}

/// Recursively collect note files under a directory, sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut notes: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_note_file(path) && !manifest.is_excluded(path))
        .collect();

    notes.sort();
    notes
}

/// Scan multiple source paths relative to a base directory.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut notes = Vec::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        notes.extend(scan_directory(&source_path, manifest));
    }

    notes.dedup();
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_note_file() {
        assert!(is_note_file(Path::new("today.brev")));
        assert!(is_note_file(Path::new("notes/2024/today.brev")));
        assert!(!is_note_file(Path::new("readme.md")));
        assert!(!is_note_file(Path::new("brev")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(scan_directory(dir.path(), &Manifest::default()).is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan_directory(&missing, &Manifest::default()).is_empty());
    }

    #[test]
    fn test_scan_nested_notes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("journal")).unwrap();
        fs::write(dir.path().join("b.brev"), "B\n").unwrap();
        fs::write(dir.path().join("a.brev"), "A\n").unwrap();
        fs::write(dir.path().join("journal/c.brev"), "C\n").unwrap();
        fs::write(dir.path().join("readme.md"), "# Readme").unwrap();

        let notes = scan_directory(dir.path(), &Manifest::default());

        assert_eq!(notes.len(), 3);
        assert!(notes[0].ends_with("a.brev"));
        assert!(notes[1].ends_with("b.brev"));
        assert!(notes[2].ends_with("journal/c.brev"));
    }

    #[test]
    fn test_scan_respects_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("keep.brev"), "K\n").unwrap();
        fs::write(dir.path().join("drafts/skip.brev"), "S\n").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };
        let notes = scan_directory(dir.path(), &manifest);

        assert_eq!(notes.len(), 1);
        assert!(notes[0].ends_with("keep.brev"));
    }
}
