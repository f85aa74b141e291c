//! Check command implementation.
//!
//! Runs class names given on the command line through the engine and prints
//! the resulting CSS to stdout.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::engine::Engine;
use crate::error::Result;
use crate::output::Printer;

/// Print the CSS generated for the given class names
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Class names to process
    #[arg(required = true)]
    pub classes: Vec<String>,

    /// Manifest to read the vocabulary from
    #[arg(long, short, default_value = MANIFEST_FILENAME)]
    pub config: PathBuf,
}

/// Generate CSS for the requested classes.
pub fn generate(args: &CheckArgs) -> Result<(String, Engine)> {
    let manifest = if args.config.exists() {
        Manifest::load(&args.config)?
    } else {
        Manifest::default()
    };

    let mut engine = Engine::new(manifest.config)?;
    engine.reset();
    engine.process(&args.classes.join(" "));

    Ok((engine.emit(), engine))
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let (css, engine) = generate(&args)?;

    print!("{}", css);
    printer.diagnostics(engine.diagnostics());

    if css.is_empty() {
        printer.warning("warning", "no class name produced a rule");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_uses_manifest() {
        let dir = tempdir().unwrap();
        let config = dir.path().join(MANIFEST_FILENAME);
        fs::write(
            &config,
            "property:\n  bg: background\nvalues:\n  primary: \"#ccf654\"\nreserveClass: [bg-red]\n",
        )
        .unwrap();

        let args = CheckArgs {
            classes: vec!["bg-primary".to_string(), "unknown".to_string()],
            config,
        };
        let (css, _) = generate(&args).unwrap();

        // reserved classes are left out so only the requested rules show
        assert_eq!(css, ".bg-primary { background: #ccf654; }\n");
    }

    #[test]
    fn test_check_without_manifest() {
        let dir = tempdir().unwrap();
        let args = CheckArgs {
            classes: vec!["[color]-red".to_string()],
            config: dir.path().join("missing.yaml"),
        };
        let (css, _) = generate(&args).unwrap();
        assert_eq!(css, ".\\[color\\]-red { color: red; }\n");
    }
}
