//! Parsed class-name tokens.

/// The pieces of a utility class name such as `hover:my-bg-[255_0_0]/50%`.
///
/// Borrowed from the class name it was parsed from; produced per token and
/// consumed immediately by the resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    /// Text before the first `:`, either a breakpoint name or a pseudo-class.
    pub prefix: Option<&'a str>,
    /// Registered type token, or a bracketed property list like `[color,--x]`.
    pub kind: &'a str,
    pub value: &'a str,
    pub unit: &'a str,
    pub secondary: Option<Secondary<'a>>,
}

/// The optional value after `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secondary<'a> {
    pub value: &'a str,
    pub unit: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Whether the type token is a bracketed property list.
    pub fn is_bracket_kind(&self) -> bool {
        is_bracketed(self.kind)
    }

    /// The class name without its prefix.
    pub fn class_name(&self, full: &'a str) -> &'a str {
        match self.prefix {
            Some(prefix) => &full[prefix.len() + 1..],
            None => full,
        }
    }
}

pub(crate) fn is_bracketed(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('[') && s.ends_with(']')
}
