//! atomcss - Atomic CSS generator
//!
//! A library for turning utility class names such as `bg-primary`,
//! `md:p-[4px_8px]` or `[marginTop,marginBottom]-1rem` into CSS rules,
//! driven by a declarative vocabulary of property shorthands, named values,
//! custom classes, aliases and breakpoints.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod resolve;
pub mod style;
pub mod validation;

pub use config::{Breakpoint, Config, Manifest, PropertyEntry};
pub use discovery::{discover, extract_class_names, DiscoveryResult};
pub use engine::Engine;
pub use error::{AtomError, Result};
pub use parser::{Grammar, ParsedToken};
pub use style::{emit_stylesheet, Declaration, StyleKey, StyleMap};
pub use validation::{validate_config, Diagnostic, Severity, ValidationResult};
