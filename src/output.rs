//! Terminal output for the atomcss CLI.
//!
//! Cargo-style status lines with a right-aligned coloured verb. Status
//! output goes to stderr; stdout is reserved for generated CSS.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::ValidationResult;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Green,
    Cyan,
    Yellow,
    Red,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Green => "\x1b[32m",
            Tone::Cyan => "\x1b[36m",
            Tone::Yellow => "\x1b[33m",
            Tone::Red => "\x1b[31m",
        }
    }
}

/// Terminal-aware status printer. Colour is enabled when stderr is a tty.
#[derive(Debug)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// e.g. "    Scanning ./site"
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Green, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Cyan, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Yellow, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Red, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Print each diagnostic as a warning or error line, with its help text.
    pub fn diagnostics(&self, result: &ValidationResult) {
        for d in result.iter() {
            let verb = d.severity.to_string();
            if d.is_error() {
                self.error(&verb, &d.message);
            } else {
                self.warning(&verb, &d.message);
            }
            if let Some(help) = &d.help {
                self.line(Tone::Cyan, "help", &self.dim(help));
            }
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = if self.color {
            writeln!(
                stderr,
                "{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}",
                tone.code()
            )
        } else {
            writeln!(stderr, "{verb:>VERB_WIDTH$} {message}")
        };
    }
}

/// Pluralize a count: `plural(1, "rule", "rules")` -> "1 rule".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()))
        .map(|s| if s.is_empty() { ".".to_string() } else { s })
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "rule", "rules"), "1 rule");
        assert_eq!(plural(0, "rule", "rules"), "0 rules");
        assert_eq!(plural(7, "file", "files"), "7 files");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/path/to/styles.css");
        assert_eq!(display_path(p), "/nonexistent/path/to/styles.css");
    }
}
