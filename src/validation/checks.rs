//! Validation checks for an engine config.
//!
//! Each check takes a `&Config` and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::config::{Config, PropertyEntry};

use super::diagnostic::{Diagnostic, ValidationResult};

/// Characters a registered type token may not contain.
const RESERVED_TYPE_CHARS: &[char] = &[':', '[', ']', '/'];

/// Check that type tokens can be matched by the grammar.
pub fn check_type_tokens(config: &Config) -> ValidationResult {
    let mut result = ValidationResult::new();

    for token in config.property.keys() {
        if token.is_empty() {
            result.push(
                Diagnostic::error("atomcss::config::empty-type", "Empty type token in `property`")
                    .with_help("Give every property entry a non-empty key"),
            );
        } else if token.contains(char::is_whitespace) || token.contains(RESERVED_TYPE_CHARS) {
            result.push(
                Diagnostic::error(
                    "atomcss::config::invalid-type",
                    format!("Type token '{}' contains whitespace or one of `: [ ] /`", token),
                )
                .with_help("Type tokens are matched literally at the start of a class name"),
            );
        }
    }

    result
}

/// Check templated property entries.
pub fn check_templates(config: &Config) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (token, entry) in &config.property {
        let PropertyEntry::Templated {
            properties,
            template,
        } = entry
        else {
            continue;
        };

        if properties.0.is_empty() {
            result.push(
                Diagnostic::error(
                    "atomcss::config::empty-template",
                    format!("Templated property '{}' lists no CSS properties", token),
                )
                .with_help("Add at least one name to `property`"),
            );
        }

        if !template.contains("{0}") {
            result.push(
                Diagnostic::warning(
                    "atomcss::config::constant-template",
                    format!("Template for '{}' never uses the class value", token),
                )
                .with_help("Use {0} for the value and {1} for the value after `/`"),
            );
        }
    }

    result
}

/// Check breakpoint bounds and names.
pub fn check_breakpoints(config: &Config) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for bp in &config.breakpoints {
        if !seen.insert(bp.name.as_str()) {
            result.push(Diagnostic::warning(
                "atomcss::config::duplicate-breakpoint",
                format!("Breakpoint '{}' is defined more than once; the first wins", bp.name),
            ));
        }

        match (bp.min, bp.max) {
            (None, None) => result.push(
                Diagnostic::error(
                    "atomcss::config::unbounded-breakpoint",
                    format!("Breakpoint '{}' has neither `min` nor `max`", bp.name),
                )
                .with_help("Set `min`, `max`, or both (in pixels)"),
            ),
            (Some(min), Some(max)) if min > max => result.push(Diagnostic::warning(
                "atomcss::config::empty-breakpoint",
                format!(
                    "Breakpoint '{}' has min {}px above max {}px and never matches",
                    bp.name, min, max
                ),
            )),
            _ => {}
        }
    }

    result
}

/// Check alias bodies for things that will not expand.
pub fn check_aliases(config: &Config) -> ValidationResult {
    let mut result = ValidationResult::new();
    let custom: HashSet<&str> = config
        .classes
        .values()
        .flat_map(|names| names.keys().map(|k| k.as_str()))
        .collect();

    for (alias, body) in &config.aliases {
        if body.trim().is_empty() {
            result.push(Diagnostic::warning(
                "atomcss::config::empty-alias",
                format!("Alias '{}' has an empty body", alias),
            ));
        }

        if custom.contains(alias.as_str()) {
            result.push(Diagnostic::warning(
                "atomcss::config::alias-shadows-class",
                format!("Alias '{}' shadows a custom class of the same name", alias),
            ));
        }

        for class_name in body.split_whitespace() {
            if config.aliases.contains_key(class_name) || custom.contains(class_name) {
                result.push(
                    Diagnostic::warning(
                        "atomcss::config::nested-alias",
                        format!(
                            "Alias '{}' references '{}', which is not expanded inside aliases",
                            alias, class_name
                        ),
                    )
                    .with_help("List the shorthand classes directly in the alias body"),
                );
            }
        }
    }

    result
}
