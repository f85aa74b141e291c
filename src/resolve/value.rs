//! Value resolution.
//!
//! Turns a raw value token plus unit into the final CSS value. The first
//! matching rule wins:
//!
//! 1. registered value name -> its literal (unit dropped)
//! 2. `$name` -> `var(--name)`
//! 3. `[literal]` -> underscores become spaces, `{name}` placeholders are
//!    replaced from the value registry, `--x` literals become `var(--x)`
//! 4. anything else -> value followed by unit

use crate::config::ValueRegistry;
use crate::error::{AtomError, Result};
use crate::parser::is_bracketed;

/// Resolve a raw value token against the value registry.
///
/// Fails only when a bracket literal references an unregistered `{name}`.
pub fn resolve_value(values: &ValueRegistry, raw: &str, unit: &str) -> Result<String> {
    if let Some(literal) = values.get(raw) {
        return Ok(literal.as_str().to_string());
    }

    if let Some(name) = raw.strip_prefix('$') {
        return Ok(format!("var(--{})", name));
    }

    if is_bracketed(raw) {
        let cleaned = raw[1..raw.len() - 1].replace('_', " ");
        let literal = if cleaned.contains('{') {
            substitute_placeholders(values, &cleaned)?
        } else {
            cleaned
        };

        return Ok(if literal.starts_with("--") {
            format!("var({})", literal)
        } else {
            literal
        });
    }

    Ok(format!("{}{}", raw, unit))
}

/// Replace each `{name}` with the registered value for `name`.
///
/// A `{` without a closing `}` (or with nothing between them) is kept as-is.
pub fn substitute_placeholders(values: &ValueRegistry, text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if close > 0 => {
                let name = &after[..close];
                let value = values.get(name).ok_or_else(|| AtomError::UnknownValue {
                    name: name.to_string(),
                })?;
                out.push_str(&rest[..open]);
                out.push_str(value.as_str());
                rest = &after[close + 1..];
            }
            _ => {
                out.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValueLiteral;

    fn values() -> ValueRegistry {
        [
            ("primary", "#ccf654"),
            ("red", "255 0 0"),
            ("size", "4px"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), ValueLiteral::from(v)))
        .collect()
    }

    #[test]
    fn test_registry_lookup_drops_unit() {
        assert_eq!(resolve_value(&values(), "primary", "").unwrap(), "#ccf654");
        assert_eq!(resolve_value(&values(), "size", "rem").unwrap(), "4px");
    }

    #[test]
    fn test_variable_reference() {
        assert_eq!(resolve_value(&values(), "$brand", "").unwrap(), "var(--brand)");
    }

    #[test]
    fn test_bracket_literal() {
        assert_eq!(
            resolve_value(&values(), "[255_0_0]", "").unwrap(),
            "255 0 0"
        );
        assert_eq!(
            resolve_value(&values(), "[calc(100%_-_2px)]", "px").unwrap(),
            "calc(100% - 2px)"
        );
    }

    #[test]
    fn test_bracket_custom_property() {
        assert_eq!(
            resolve_value(&values(), "[--accent]", "").unwrap(),
            "var(--accent)"
        );
    }

    #[test]
    fn test_bracket_placeholders() {
        assert_eq!(
            resolve_value(&values(), "[rgb({red})]", "").unwrap(),
            "rgb(255 0 0)"
        );
        assert_eq!(
            resolve_value(&values(), "[{size}_solid_{primary}]", "").unwrap(),
            "4px solid #ccf654"
        );
    }

    #[test]
    fn test_bracket_unknown_placeholder() {
        let err = resolve_value(&values(), "[rgb({nope})]", "").unwrap_err();
        assert!(matches!(err, AtomError::UnknownValue { ref name } if name == "nope"));
    }

    #[test]
    fn test_unclosed_placeholder_kept() {
        assert_eq!(
            substitute_placeholders(&values(), "a{b").unwrap(),
            "a{b"
        );
        assert_eq!(substitute_placeholders(&values(), "{}x").unwrap(), "{}x");
    }

    #[test]
    fn test_literal_with_unit() {
        assert_eq!(resolve_value(&values(), "10", "px").unwrap(), "10px");
        assert_eq!(resolve_value(&values(), "auto", "").unwrap(), "auto");
        assert_eq!(resolve_value(&values(), "#fff", "").unwrap(), "#fff");
    }

    #[test]
    fn test_registry_shadows_syntax() {
        let mut values = values();
        values.insert("$brand".to_string(), ValueLiteral::from("hotpink"));
        assert_eq!(resolve_value(&values, "$brand", "").unwrap(), "hotpink");
    }
}
