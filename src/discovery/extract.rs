//! Class-name extraction from markup and JSX.

use std::sync::OnceLock;

use regex::Regex;

fn class_attribute() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"(?:^|[^\w-])class(?:Name)?\s*=\s*(?:"([^"]*)"|'([^']*)'|\{\s*(?:"([^"]*)"|'([^']*)'|`([^`]*)`)\s*\})"#,
        )
        .expect("class attribute pattern is valid")
    })
}

/// Collect the contents of every `class` / `className` attribute.
///
/// Handles double- and single-quoted attributes plus JSX expressions that
/// wrap a single string or template literal. Each returned string is a
/// whitespace-separated class list, ready for `Engine::process`.
pub fn extract_class_names(source: &str) -> Vec<String> {
    class_attribute()
        .captures_iter(source)
        .filter_map(|caps| caps.iter().skip(1).flatten().next())
        .map(|m| m.as_str().trim().to_string())
        .filter(|classes| !classes.is_empty())
        .collect()
}
