//! Shorthand resolution: parsed token -> declarations.

use crate::config::{Config, PropertyEntry};
use crate::error::Result;
use crate::parser::ParsedToken;
use crate::style::Declaration;

use super::case::to_kebab_case;
use super::value::resolve_value;

/// Declarations produced for one shorthand class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shorthand {
    pub declarations: Vec<Declaration>,
    /// The resolved primary value, before any template was applied.
    pub value: String,
}

/// Resolve a parsed token into declarations.
///
/// Returns `Ok(None)` when the type token is neither registered nor a
/// bracketed property list.
pub fn resolve_shorthand(config: &Config, token: &ParsedToken<'_>) -> Result<Option<Shorthand>> {
    if token.is_bracket_kind() {
        let value = resolve_value(&config.values, token.value, token.unit)?;
        let declarations = bracket_declarations(config, token.kind, &value);
        return Ok(Some(Shorthand {
            declarations,
            value,
        }));
    }

    let Some(entry) = config.property.get(token.kind) else {
        return Ok(None);
    };

    let value = resolve_value(&config.values, token.value, token.unit)?;

    let declarations = match entry {
        PropertyEntry::Simple(property) => {
            vec![Declaration::new(property.as_str(), value.clone())]
        }
        PropertyEntry::Templated {
            properties,
            template,
        } => {
            let secondary = match token.secondary {
                Some(secondary) => {
                    resolve_value(&config.values, secondary.value, secondary.unit)?
                }
                None => String::new(),
            };
            let filled = template.replace("{0}", &value).replace("{1}", &secondary);

            properties
                .0
                .iter()
                .map(|property| Declaration::new(property.as_str(), filled.clone()))
                .collect()
        }
    };

    Ok(Some(Shorthand {
        declarations,
        value,
    }))
}

/// Declarations for a `[propA,propB]` type token, all sharing one value.
///
/// Each item is looked up in the property registry first and otherwise
/// used as a literal property name, kebab-cased. Registry names are
/// emitted as registered.
fn bracket_declarations(config: &Config, kind: &str, value: &str) -> Vec<Declaration> {
    kind[1..kind.len() - 1]
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .flat_map(|item| match config.property.get(item) {
            Some(entry) => entry.property_names().to_vec(),
            None => vec![to_kebab_case(item)],
        })
        .map(|property| Declaration::new(property, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtomError;
    use crate::parser::Grammar;

    fn config() -> Config {
        Config::new()
            .with_property("bg", PropertyEntry::simple("background"))
            .with_property("text", PropertyEntry::simple("color"))
            .with_property("jc", PropertyEntry::simple("justifyContent"))
            .with_property(
                "my-bg",
                PropertyEntry::templated(["background", "color"], "rgb({0})"),
            )
            .with_property(
                "shade",
                PropertyEntry::templated(["color"], "rgb({0} / {1})"),
            )
            .with_value("primary", "#ccf654")
    }

    fn resolve(config: &Config, class_name: &str) -> Option<Shorthand> {
        let grammar = Grammar::new(&config.property);
        let token = grammar.parse(class_name)?;
        resolve_shorthand(config, &token).unwrap()
    }

    #[test]
    fn test_simple_entry() {
        let shorthand = resolve(&config(), "bg-primary").unwrap();
        assert_eq!(
            shorthand.declarations,
            vec![Declaration::new("background", "#ccf654")]
        );
        assert_eq!(shorthand.value, "#ccf654");
    }

    #[test]
    fn test_registry_property_name_kept_as_registered() {
        let shorthand = resolve(&config(), "jc-center").unwrap();
        assert_eq!(
            shorthand.declarations,
            vec![Declaration::new("justifyContent", "center")]
        );

        let config = config().with_property(
            "edge",
            PropertyEntry::templated(["marginTop", "margin-bottom"], "{0}"),
        );
        let shorthand = resolve(&config, "edge-4px").unwrap();
        assert_eq!(
            shorthand.declarations,
            vec![
                Declaration::new("marginTop", "4px"),
                Declaration::new("margin-bottom", "4px"),
            ]
        );
    }

    #[test]
    fn test_templated_entry() {
        let shorthand = resolve(&config(), "my-bg-[255_0_0]").unwrap();
        assert_eq!(
            shorthand.declarations,
            vec![
                Declaration::new("background", "rgb(255 0 0)"),
                Declaration::new("color", "rgb(255 0 0)"),
            ]
        );
        assert_eq!(shorthand.value, "255 0 0");
    }

    #[test]
    fn test_templated_secondary() {
        let shorthand = resolve(&config(), "shade-[0_0_0]/50%").unwrap();
        assert_eq!(
            shorthand.declarations,
            vec![Declaration::new("color", "rgb(0 0 0 / 50%)")]
        );

        let shorthand = resolve(&config(), "shade-[0_0_0]").unwrap();
        assert_eq!(
            shorthand.declarations,
            vec![Declaration::new("color", "rgb(0 0 0 / )")]
        );
    }

    #[test]
    fn test_bracket_kind() {
        let shorthand = resolve(&config(), "[background,--red]-red").unwrap();
        assert_eq!(
            shorthand.declarations,
            vec![
                Declaration::new("background", "red"),
                Declaration::new("--red", "red"),
            ]
        );
    }

    #[test]
    fn test_bracket_kind_uses_registry() {
        let shorthand = resolve(&config(), "[bg,my-bg,fontSize]-primary").unwrap();
        assert_eq!(
            shorthand.declarations,
            vec![
                Declaration::new("background", "#ccf654"),
                Declaration::new("background", "#ccf654"),
                Declaration::new("color", "#ccf654"),
                Declaration::new("font-size", "#ccf654"),
            ]
        );
    }

    #[test]
    fn test_unknown_placeholder_fails_token() {
        let config = config();
        let grammar = Grammar::new(&config.property);
        let token = grammar.parse("bg-[{missing}]").unwrap();
        let result = resolve_shorthand(&config, &token);
        assert!(matches!(result, Err(AtomError::UnknownValue { .. })));
    }
}
