//! Init command implementation.
//!
//! Writes a starter `atomcss.yaml` with a small vocabulary.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::MANIFEST_FILENAME;
use crate::error::{AtomError, Result};
use crate::output::{display_path, Printer};

const STARTER_MANIFEST: &str = r##"input:
  - "**/*.html"
  - "src/**/*.{jsx,tsx}"
output: dist/styles.css
excludes:
  - "node_modules/**"

property:
  bg: background
  text: color
  p: padding
  m: margin
  w: width
  h: height
  rgb:
    property: [background, color]
    value: "rgb({0})"

values:
  primary: "#ccf654"
  full: 100%

classes:
  display:
    center: flex
    block: block
  justifyContent:
    center: center
  alignItems:
    center: center

aliases:
  btn: "bg-primary text-black p-8px"

breakpoints:
  - { name: sm, max: 639 }
  - { name: md, min: 640, max: 1023 }
  - { name: lg, min: 1024 }

reserveClass: []
"##;

/// Initialize an atomcss project by generating an atomcss.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing atomcss.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(AtomError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, STARTER_MANIFEST).map_err(|e| AtomError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));

    Ok(())
}
