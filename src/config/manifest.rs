//! Project manifest (atomcss.yaml) parsing.
//!
//! The manifest combines the build settings (input patterns, output file,
//! excludes) with the engine [`Config`], flattened into one document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Config;
use crate::error::{AtomError, Result};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "atomcss.yaml";

/// Project manifest loaded from atomcss.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Glob patterns (relative to the project root) of files to scan.
    #[serde(default = "default_input")]
    pub input: Vec<String>,

    /// Stylesheet written by `atomcss build`.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Glob patterns to exclude from scanning.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Engine vocabulary.
    #[serde(flatten)]
    pub config: Config,
}

fn default_input() -> Vec<String> {
    vec!["**/*.html".to_string()]
}

fn default_output() -> PathBuf {
    PathBuf::from("dist/styles.css")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            excludes: vec![],
            config: Config::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from an atomcss.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AtomError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AtomError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Output path resolved against the project root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            root.join(&self.output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertyEntry;

    #[test]
    fn test_parse_minimal_manifest() {
        let yaml = "output: build/app.css";
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("build/app.css"));
        assert_eq!(manifest.input, vec!["**/*.html"]);
        assert!(manifest.config.property.is_empty());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
input:
  - index.html
  - "src/**/*.{jsx,tsx}"
output: dist/styles.css
excludes:
  - "**/node_modules/**"
property:
  bg: background
values:
  primary: "#ccf654"
breakpoints:
  - name: md
    min: 768
reserveClass:
  - bg-primary
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.input, vec!["index.html", "src/**/*.{jsx,tsx}"]);
        assert_eq!(manifest.excludes, vec!["**/node_modules/**"]);
        assert_eq!(
            manifest.config.property["bg"],
            PropertyEntry::simple("background")
        );
        assert_eq!(manifest.config.value("primary"), Some("#ccf654"));
        assert_eq!(manifest.config.breakpoints.len(), 1);
        assert_eq!(manifest.config.reserve_class, vec!["bg-primary"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();

        assert_eq!(manifest.output, PathBuf::from("dist/styles.css"));
        assert_eq!(manifest.input, vec!["**/*.html"]);
    }

    #[test]
    fn test_output_path() {
        let manifest = Manifest::default();
        assert_eq!(
            manifest.output_path(Path::new("/project")),
            PathBuf::from("/project/dist/styles.css")
        );
    }
}
