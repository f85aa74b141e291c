//! File system scanner for source files that may contain class names.
//!
//! Recursively walks the project root and keeps files whose root-relative
//! path matches one of the manifest's `input` globs and none of its
//! `excludes`.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::config::Manifest;
use crate::error::{AtomError, Result};

/// Result of scanning a directory for source files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, in walk order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Compile glob patterns into a set.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| AtomError::Config {
            message: format!("Invalid glob '{}': {}", pattern, e),
            help: Some("Check the `input` and `excludes` patterns".to_string()),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| AtomError::Config {
        message: format!("Invalid glob set: {}", e),
        help: None,
    })
}

/// Scan `root` for files selected by the manifest.
pub fn scan_sources(root: &Path, manifest: &Manifest) -> Result<ScanResult> {
    let includes = build_globset(&manifest.input)?;
    let excludes = build_globset(&manifest.excludes)?;
    let output = manifest.output_path(root);

    let mut result = ScanResult::new();

    if !root.exists() {
        return Ok(result);
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || path == output {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);

        if excludes.is_match(relative) || !includes.is_match(relative) {
            continue;
        }

        result.files.push(path.to_path_buf());
    }

    tracing::debug!(root = %root.display(), files = result.total(), "scanned sources");
    Ok(result)
}
