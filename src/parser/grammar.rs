//! Class-name grammar.
//!
//! ```text
//! token     := [ prefix ":" ] type "-" value [ "/" value ]
//! prefix    := [A-Za-z0-9-]+
//! type      := registered type token | "[" [^\]]+ "]"
//! value     := ( number | ident | "#" hex | "[" [^\]]+ "]" | "$" \S+ ) unit
//! number    := "-"? digit+ ( "." digit+ )?
//! ident     := word ( "-" word )*        word := [A-Za-z0-9_]+
//! unit      := [A-Za-z%]*
//! ```
//!
//! Registered type tokens are tried longest first, ties in registration
//! order, so `bg-image-none` reaches `bg-image` before `bg` can claim it.
//! A type token only wins when the remainder parses as a value; otherwise
//! the next candidate is tried. The whole class name must be consumed.

use super::token::{ParsedToken, Secondary};
use crate::config::PropertyRegistry;

/// Value alternatives in the order they are attempted.
const VALUE_FORMS: [fn(&[u8]) -> Option<usize>; 5] =
    [number_len, ident_len, hex_len, bracket_len, variable_len];

/// A matcher built from the type tokens of a property registry.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    types: Vec<String>,
}

impl Grammar {
    pub fn new(registry: &PropertyRegistry) -> Self {
        let mut types: Vec<String> = registry.keys().cloned().collect();
        // stable: equal lengths keep registration order
        types.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { types }
    }

    /// Type tokens in match priority order.
    pub fn type_tokens(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.as_str())
    }

    /// Parse a class name, returning `None` when it does not fit the grammar.
    pub fn parse<'a>(&self, class_name: &'a str) -> Option<ParsedToken<'a>> {
        if let Some((prefix, rest)) = split_prefix(class_name) {
            if let Some(token) = self.parse_unprefixed(rest) {
                return Some(ParsedToken {
                    prefix: Some(prefix),
                    ..token
                });
            }
        }
        self.parse_unprefixed(class_name)
    }

    fn parse_unprefixed<'a>(&self, input: &'a str) -> Option<ParsedToken<'a>> {
        for kind in &self.types {
            let Some(rest) = input
                .strip_prefix(kind.as_str())
                .and_then(|r| r.strip_prefix('-'))
            else {
                continue;
            };
            if let Some(token) = parse_values(&input[..kind.len()], rest) {
                return Some(token);
            }
        }

        if input.starts_with('[') {
            let close = input.find(']')?;
            if close < 2 {
                return None;
            }
            let rest = input[close + 1..].strip_prefix('-')?;
            return parse_values(&input[..=close], rest);
        }

        None
    }
}

/// Split `prefix:rest` when the text before the first colon is a valid prefix.
pub fn split_prefix(class_name: &str) -> Option<(&str, &str)> {
    let colon = class_name.find(':')?;
    let prefix = &class_name[..colon];
    let valid = !prefix.is_empty()
        && prefix
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-');
    valid.then(|| (prefix, &class_name[colon + 1..]))
}

fn parse_values<'a>(kind: &'a str, input: &'a str) -> Option<ParsedToken<'a>> {
    for form in VALUE_FORMS {
        let Some((value, unit, tail)) = split_value(input, form) else {
            continue;
        };
        if tail.is_empty() {
            return Some(ParsedToken {
                prefix: None,
                kind,
                value,
                unit,
                secondary: None,
            });
        }
        if let Some(secondary) = tail.strip_prefix('/').and_then(parse_secondary) {
            return Some(ParsedToken {
                prefix: None,
                kind,
                value,
                unit,
                secondary: Some(secondary),
            });
        }
    }
    None
}

fn parse_secondary(input: &str) -> Option<Secondary<'_>> {
    VALUE_FORMS.iter().find_map(|form| match split_value(input, *form) {
        Some((value, unit, "")) => Some(Secondary { value, unit }),
        _ => None,
    })
}

/// Split `input` into (value, unit, tail) using one value form.
fn split_value<'a>(
    input: &'a str,
    form: fn(&[u8]) -> Option<usize>,
) -> Option<(&'a str, &'a str, &'a str)> {
    let value_len = form(input.as_bytes())?;
    let (value, after) = input.split_at(value_len);
    let unit_len = after
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic() || *b == b'%')
        .count();
    let (unit, tail) = after.split_at(unit_len);
    Some((value, unit, tail))
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn digits_len(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn number_len(s: &[u8]) -> Option<usize> {
    let mut pos = usize::from(s.first() == Some(&b'-'));
    let int = digits_len(&s[pos..]);
    if int == 0 {
        return None;
    }
    pos += int;
    if s.get(pos) == Some(&b'.') {
        let frac = digits_len(&s[pos + 1..]);
        if frac > 0 {
            pos += 1 + frac;
        }
    }
    Some(pos)
}

fn ident_len(s: &[u8]) -> Option<usize> {
    let mut pos = s.iter().take_while(|b| is_word(**b)).count();
    if pos == 0 {
        return None;
    }
    while s.get(pos) == Some(&b'-') {
        let segment = s[pos + 1..].iter().take_while(|b| is_word(**b)).count();
        if segment == 0 {
            break;
        }
        pos += 1 + segment;
    }
    Some(pos)
}

fn hex_len(s: &[u8]) -> Option<usize> {
    if s.first() != Some(&b'#') {
        return None;
    }
    let digits = s[1..].iter().take_while(|b| b.is_ascii_hexdigit()).count();
    (digits > 0).then_some(1 + digits)
}

fn bracket_len(s: &[u8]) -> Option<usize> {
    if s.first() != Some(&b'[') {
        return None;
    }
    let inner = s[1..].iter().take_while(|b| **b != b']').count();
    (inner > 0 && s.get(1 + inner) == Some(&b']')).then_some(inner + 2)
}

fn variable_len(s: &[u8]) -> Option<usize> {
    if s.first() != Some(&b'$') {
        return None;
    }
    let name = s[1..]
        .iter()
        .take_while(|b| !b.is_ascii_whitespace())
        .count();
    (name > 0).then_some(1 + name)
}
