//! Custom-class and alias resolution.

use crate::config::Config;
use crate::error::AtomError;
use crate::parser::Grammar;
use crate::style::Declaration;

use super::case::to_kebab_case;
use super::shorthand::resolve_shorthand;

/// Resolve a semantic class name defined in the `classes` registry.
///
/// Every property group containing `class_name` contributes one
/// declaration, in group registration order.
pub fn resolve_custom_class(config: &Config, class_name: &str) -> Option<Vec<Declaration>> {
    let declarations: Vec<Declaration> = config
        .classes
        .iter()
        .filter_map(|(group, names)| {
            names
                .get(class_name)
                .map(|value| Declaration::new(to_kebab_case(group), value.as_str()))
        })
        .collect();

    (!declarations.is_empty()).then_some(declarations)
}

/// The fused result of expanding an alias.
#[derive(Debug, Default)]
pub struct AliasExpansion {
    pub declarations: Vec<Declaration>,
    /// Body tokens that matched the grammar but failed to resolve.
    pub skipped: Vec<(String, AtomError)>,
}

/// Expand an alias into the declarations of all of its body tokens.
///
/// Body tokens go through the grammar only: other aliases and custom
/// classes are not expanded, and prefixes on body tokens are dropped.
/// Tokens that do not parse are ignored like any other unmatched class.
pub fn resolve_alias(config: &Config, grammar: &Grammar, alias: &str) -> Option<AliasExpansion> {
    let body = config.aliases.get(alias)?;
    let mut expansion = AliasExpansion::default();

    for class_name in body.split_whitespace() {
        let Some(token) = grammar.parse(class_name) else {
            continue;
        };
        match resolve_shorthand(config, &token) {
            Ok(Some(shorthand)) => expansion.declarations.extend(shorthand.declarations),
            Ok(None) => {}
            Err(err) => expansion.skipped.push((class_name.to_string(), err)),
        }
    }

    Some(expansion)
}
