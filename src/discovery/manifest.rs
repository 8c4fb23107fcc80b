//! Project manifest (brev.yaml) parsing.
//!
//! The manifest defines where notes live, where converted output goes,
//! and the default output options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrevError, Result};
use crate::render::RenderOptions;

/// Output format for converted notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The HTML fragment only
    #[default]
    Html,
    /// `{"title": ..., "html": ...}`
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Project manifest loaded from brev.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for notes.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// Output directory for converted notes.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Output format.
    pub format: OutputFormat,

    /// Escape markup in element content.
    pub escape_content: bool,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            format: OutputFormat::default(),
            escape_content: false,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a brev.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrevError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| BrevError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check brev.yaml syntax".to_string()),
        })
    }

    /// Render options implied by the manifest.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            escape_content: self.escape_content,
        }
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert!(manifest.sources.is_empty());
        assert_eq!(manifest.format, OutputFormat::Html);
        assert!(!manifest.escape_content);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - notes/
  - journal/
output: site/notes
format: json
escape_content: true
excludes:
  - "*.bak.brev"
  - "**/drafts/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["notes/", "journal/"]);
        assert_eq!(manifest.output, PathBuf::from("site/notes"));
        assert_eq!(manifest.format, OutputFormat::Json);
        assert!(manifest.render_options().escape_content);
        assert_eq!(manifest.excludes, vec!["*.bak.brev", "**/drafts/*"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert_eq!(manifest.effective_sources(), vec!["."]);
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = Manifest::parse("format: pdf").unwrap_err();
        assert!(matches!(err, BrevError::Parse { .. }));
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak.brev".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("old.bak.brev")));
        assert!(manifest.is_excluded(Path::new("notes/old.bak.brev")));
        assert!(!manifest.is_excluded(Path::new("notes/today.brev")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string(), "archive/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("drafts/idea.brev")));
        assert!(manifest.is_excluded(Path::new("notes/drafts/idea.brev")));
        assert!(manifest.is_excluded(Path::new("archive/2023.brev")));
        assert!(!manifest.is_excluded(Path::new("notes/idea.brev")));
    }

    #[test]
    fn test_output_extension() {
        assert_eq!(OutputFormat::Html.extension(), "html");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
