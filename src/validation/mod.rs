//! Validation of engine configs.
//!
//! Runs a suite of checks against a [`Config`] once, when an engine is
//! constructed. Errors make construction fail; warnings are logged and kept
//! on the engine. The same diagnostic types carry per-token problems found
//! while processing class names.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::config::Config;

/// Run all validation checks against the config.
pub fn validate_config(config: &Config) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_type_tokens(config));
    result.merge(checks::check_templates(config));
    result.merge(checks::check_breakpoints(config));
    result.merge(checks::check_aliases(config));

    result
}
