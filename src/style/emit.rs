//! Stylesheet emission.
//!
//! Plain rules come first in accumulation order, then one `@media` block
//! per distinct condition (in order of first use) holding every rule
//! scoped to it:
//!
//! ```css
//! .bg-primary { background: #ccf654; }
//! @media (max-width: 639px) {
//!   .sm\:bg-primary { background: #ccf654; }
//! }
//! ```

use indexmap::{IndexMap, IndexSet};

use super::accumulator::{StyleKey, StyleMap};
use super::declaration::Declaration;

/// Serialize accumulated styles. Never mutates `styles`.
pub fn emit_stylesheet(styles: &StyleMap) -> String {
    let mut out = String::new();
    let mut media: IndexMap<&str, Vec<(&str, &IndexSet<Declaration>)>> = IndexMap::new();

    for (key, declarations) in styles.iter() {
        match key {
            StyleKey::Rule(selector) => write_rule(&mut out, "", selector, declarations),
            StyleKey::Media {
                condition,
                selector,
            } => media
                .entry(condition.as_str())
                .or_default()
                .push((selector.as_str(), declarations)),
        }
    }

    for (condition, rules) in media {
        out.push_str(&format!("@media {} {{\n", condition));
        for (selector, declarations) in rules {
            write_rule(&mut out, "  ", selector, declarations);
        }
        out.push_str("}\n");
    }

    out
}

fn write_rule(out: &mut String, indent: &str, selector: &str, declarations: &IndexSet<Declaration>) {
    let body = declarations
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    out.push_str(&format!("{}.{} {{ {}; }}\n", indent, selector, body));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_empty() {
        assert_eq!(emit_stylesheet(&StyleMap::new()), "");
    }

    #[test]
    fn test_emit_plain_rules() {
        let mut styles = StyleMap::new();
        styles.add(
            StyleKey::rule("center", None),
            [
                Declaration::new("display", "flex"),
                Declaration::new("justify-content", "center"),
            ],
        );
        styles.add(
            StyleKey::rule("hover:text-red", Some("hover")),
            [Declaration::new("color", "red")],
        );

        assert_eq!(
            emit_stylesheet(&styles),
            ".center { display: flex; justify-content: center; }\n\
             .hover\\:text-red:hover { color: red; }\n"
        );
    }

    #[test]
    fn test_media_blocks_follow_rules_and_group() {
        let mut styles = StyleMap::new();
        styles.add(
            StyleKey::media("(max-width: 639px)", "sm:bg-red"),
            [Declaration::new("background", "red")],
        );
        styles.add(StyleKey::rule("p-4px", None), [Declaration::new("padding", "4px")]);
        styles.add(
            StyleKey::media("(min-width: 1024px)", "lg:p-0"),
            [Declaration::new("padding", "0")],
        );
        styles.add(
            StyleKey::media("(max-width: 639px)", "sm:p-0"),
            [Declaration::new("padding", "0")],
        );

        let expected = "\
.p-4px { padding: 4px; }
@media (max-width: 639px) {
  .sm\\:bg-red { background: red; }
  .sm\\:p-0 { padding: 0; }
}
@media (min-width: 1024px) {
  .lg\\:p-0 { padding: 0; }
}
";
        assert_eq!(emit_stylesheet(&styles), expected);
    }

    #[test]
    fn test_emit_is_repeatable() {
        let mut styles = StyleMap::new();
        styles.add(StyleKey::rule("a", None), [Declaration::new("x", "1")]);
        assert_eq!(emit_stylesheet(&styles), emit_stylesheet(&styles));
    }
}
