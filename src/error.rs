use miette::Diagnostic;
use thiserror::Error;

/// Main error type for atomcss operations
#[derive(Error, Diagnostic, Debug)]
pub enum AtomError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(atomcss::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(atomcss::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(atomcss::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown value '{name}' in bracket template")]
    #[diagnostic(
        code(atomcss::value),
        help("Register '{name}' under `values` or remove the placeholder")
    )]
    UnknownValue { name: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(atomcss::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AtomError>;
