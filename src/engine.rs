//! The atomic-CSS engine.
//!
//! An [`Engine`] owns one config and one style accumulator. Class names go
//! in through [`Engine::process`]; the stylesheet comes out of
//! [`Engine::emit`].
//!
//! # Example
//!
//! ```
//! use atomcss::{Config, Engine, PropertyEntry};
//!
//! let config = Config::new()
//!     .with_property("bg", PropertyEntry::simple("background"))
//!     .with_value("primary", "#ccf654");
//!
//! let mut engine = Engine::new(config).unwrap();
//! engine.process("bg-primary");
//!
//! assert_eq!(engine.emit(), ".bg-primary { background: #ccf654; }\n");
//! ```

use crate::config::Config;
use crate::error::{AtomError, Result};
use crate::parser::{split_prefix, Grammar};
use crate::resolve::{resolve_alias, resolve_custom_class, resolve_shorthand};
use crate::style::{emit_stylesheet, Declaration, StyleKey, StyleMap};
use crate::validation::{validate_config, Diagnostic, ValidationResult};

/// Generates CSS rules from utility class names.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    grammar: Grammar,
    styles: StyleMap,
    /// Config warnings from construction.
    warnings: ValidationResult,
    /// Problems found while processing since the last reset.
    diagnostics: ValidationResult,
}

impl Engine {
    /// Build an engine, validating the config once.
    ///
    /// Fails when the config has validation errors. Reserved classes are
    /// processed immediately.
    pub fn new(config: Config) -> Result<Self> {
        let validation = validate_config(&config);

        if validation.has_errors() {
            let message = validation
                .errors()
                .map(|d| d.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            let help = validation.errors().find_map(|d| d.help.clone());
            return Err(AtomError::Config { message, help });
        }

        for warning in validation.iter() {
            tracing::warn!(code = %warning.code, "{}", warning.message);
        }

        let grammar = Grammar::new(&config.property);
        let mut engine = Self {
            config,
            grammar,
            styles: StyleMap::new(),
            warnings: validation,
            diagnostics: ValidationResult::new(),
        };
        engine.process_reserved();

        Ok(engine)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Process a whitespace-separated list of class names.
    ///
    /// Each name is tried as an alias, then as a custom class, then against
    /// the grammar. Names matching none of these are ignored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn process(&mut self, class_names: &str) {
        for class_name in class_names.split_whitespace() {
            self.process_class(class_name);
        }
    }

    /// Process the config's `reserveClass` list.
    pub fn process_reserved(&mut self) {
        let reserved = self.config.reserve_class.join(" ");
        self.process(&reserved);
    }

    fn process_class(&mut self, class_name: &str) {
        let (prefix, bare) = match split_prefix(class_name) {
            Some((prefix, bare)) => (Some(prefix), bare),
            None => (None, class_name),
        };

        if let Some(expansion) = resolve_alias(&self.config, &self.grammar, bare) {
            for (token, err) in expansion.skipped {
                self.skip(&format!("{} (in alias '{}')", token, bare), err);
            }
            tracing::debug!(class_name, "alias");
            self.add(class_name, prefix, expansion.declarations);
            return;
        }

        if let Some(declarations) = resolve_custom_class(&self.config, bare) {
            tracing::debug!(class_name, "custom class");
            self.add(class_name, prefix, declarations);
            return;
        }

        let Some(token) = self.grammar.parse(class_name) else {
            tracing::trace!(class_name, "no match");
            return;
        };

        match resolve_shorthand(&self.config, &token) {
            Ok(Some(shorthand)) => {
                tracing::debug!(class_name, kind = token.kind, value = %shorthand.value, "shorthand");
                self.add(class_name, token.prefix, shorthand.declarations);
            }
            Ok(None) => tracing::trace!(class_name, "unregistered type"),
            Err(err) => self.skip(class_name, err),
        }
    }

    /// Store declarations for `class_name`, scoped by its prefix.
    ///
    /// A prefix naming a breakpoint scopes the rule to that breakpoint's
    /// media query; any other prefix becomes a pseudo-class.
    fn add(&mut self, class_name: &str, prefix: Option<&str>, declarations: Vec<Declaration>) {
        let key = match prefix.and_then(|p| self.config.breakpoint(p)) {
            Some(breakpoint) => StyleKey::media(breakpoint.media_condition(), class_name),
            None => StyleKey::rule(class_name, prefix),
        };
        self.styles.add(key, declarations);
    }

    fn skip(&mut self, class_name: &str, err: AtomError) {
        tracing::warn!(class_name, error = %err, "skipping class");
        let mut diagnostic = Diagnostic::warning(
            "atomcss::value::unknown",
            format!("Skipped '{}': {}", class_name, err),
        );
        if let AtomError::UnknownValue { name } = &err {
            diagnostic = diagnostic.with_help(format!("Register '{}' under `values`", name));
        }
        self.diagnostics.push(diagnostic);
    }

    /// Render the accumulated stylesheet. Repeatable and read-only.
    pub fn emit(&self) -> String {
        emit_stylesheet(&self.styles)
    }

    /// Clear accumulated styles and processing diagnostics.
    ///
    /// Call before reprocessing a changed set of sources so rules for
    /// removed class names do not survive.
    pub fn reset(&mut self) {
        self.styles.reset();
        self.diagnostics.clear();
    }

    /// Problems found while processing since the last reset.
    pub fn diagnostics(&self) -> &ValidationResult {
        &self.diagnostics
    }

    /// Warnings found when the config was validated.
    pub fn config_warnings(&self) -> &ValidationResult {
        &self.warnings
    }

    /// Number of accumulated selectors, media-scoped ones included.
    pub fn rule_count(&self) -> usize {
        self.styles.len()
    }

    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Breakpoint, PropertyEntry};

    fn config() -> Config {
        Config::new()
            .with_property("bg", PropertyEntry::simple("background"))
            .with_property("text", PropertyEntry::simple("color"))
            .with_value("primary", "#ccf654")
            .with_class("display", "center", "flex")
            .with_class("justifyContent", "center", "center")
            .with_alias("btn", "bg-primary text-white")
            .with_breakpoint(Breakpoint::new("sm", None, Some(639)))
    }

    #[test]
    fn test_unmatched_tokens_ignored() {
        let mut engine = Engine::new(config()).unwrap();
        engine.process("nothing here !! bg-");
        assert_eq!(engine.emit(), "");
        assert!(engine.diagnostics().is_empty());
    }

    #[test]
    fn test_pseudo_prefix() {
        let mut engine = Engine::new(config()).unwrap();
        engine.process("hover:text-primary");
        assert_eq!(
            engine.emit(),
            ".hover\\:text-primary:hover { color: #ccf654; }\n"
        );
    }

    #[test]
    fn test_prefixed_custom_class_and_alias() {
        let mut engine = Engine::new(config()).unwrap();
        engine.process("sm:center focus:btn");
        assert_eq!(
            engine.emit(),
            ".focus\\:btn:focus { background: #ccf654; color: white; }\n\
             @media (max-width: 639px) {\n  \
             .sm\\:center { display: flex; justify-content: center; }\n\
             }\n"
        );
    }

    #[test]
    fn test_unknown_placeholder_skips_only_that_token() {
        let mut engine = Engine::new(config()).unwrap();
        engine.process("bg-[{nope}] text-red");

        assert_eq!(engine.emit(), ".text-red { color: red; }\n");
        assert_eq!(engine.diagnostics().warning_count(), 1);
        let diagnostic = engine.diagnostics().iter().next().unwrap();
        assert_eq!(diagnostic.code, "atomcss::value::unknown");
        assert!(diagnostic.message.contains("bg-[{nope}]"));
    }

    #[test]
    fn test_reserved_classes_processed_on_construction() {
        let mut engine = Engine::new(config().with_reserved("text-red")).unwrap();
        assert_eq!(engine.emit(), ".text-red { color: red; }\n");

        engine.reset();
        assert_eq!(engine.emit(), "");

        engine.process_reserved();
        assert_eq!(engine.rule_count(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = config().with_breakpoint(Breakpoint::new("bad", None, None));
        let err = Engine::new(config).unwrap_err();
        assert!(matches!(err, AtomError::Config { .. }));
    }

    #[test]
    fn test_config_warnings_kept() {
        let engine = Engine::new(config().with_alias("outer", "btn")).unwrap();
        assert_eq!(engine.config_warnings().warning_count(), 1);
    }
}
