//! Source discovery for atomcss projects.
//!
//! Finds the project's markup/JSX files using the `atomcss.yaml` manifest
//! (or its defaults) and harvests class names from them. The engine itself
//! never touches the file system; this module feeds it.
//!
//! # Example
//!
//! ```ignore
//! use atomcss::discovery::discover;
//!
//! let result = discover("./my-site")?;
//! let mut engine = result.engine()?;
//! for classes in result.class_names()? {
//!     engine.process(&classes);
//! }
//! ```

mod extract;
mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::engine::Engine;
use crate::error::{AtomError, Result};

pub use extract::extract_class_names;
pub use scanner::{build_globset, scan_sources, ScanResult};

/// Result of discovering sources in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no atomcss.yaml was found).
    pub manifest: Manifest,

    /// Whether an atomcss.yaml manifest was found.
    pub has_manifest: bool,

    /// Matching source files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Build an engine from the manifest's config.
    pub fn engine(&self) -> Result<Engine> {
        Engine::new(self.manifest.config.clone())
    }

    /// Read every scanned file and collect its class attribute values.
    pub fn class_names(&self) -> Result<Vec<String>> {
        let mut class_names = Vec::new();
        for path in &self.scan.files {
            let source = fs::read_to_string(path).map_err(|e| AtomError::Io {
                path: path.clone(),
                message: format!("Failed to read source: {}", e),
            })?;
            class_names.extend(extract_class_names(&source));
        }
        Ok(class_names)
    }

    /// Where the stylesheet should be written.
    pub fn output_path(&self) -> PathBuf {
        self.manifest.output_path(&self.root)
    }
}

/// Discover sources in a project directory.
///
/// Uses `atomcss.yaml` in `root` when present, defaults otherwise.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref();
    discover_with_manifest(root, &root.join(MANIFEST_FILENAME))
}

/// Discover sources using an explicit manifest path.
///
/// A missing manifest falls back to the default manifest.
pub fn discover_with_manifest(root: &Path, manifest_path: &Path) -> Result<DiscoveryResult> {
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(root, &manifest)?;

    Ok(DiscoveryResult {
        root: root.to_path_buf(),
        manifest,
        has_manifest,
        scan,
    })
}
