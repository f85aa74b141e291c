//! Deduplicating, insertion-ordered store of selector -> declarations.

use indexmap::{IndexMap, IndexSet};

use super::declaration::Declaration;
use super::escape::escape_selector;

/// Where a group of declarations is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// A top-level rule. Holds the escaped selector without the leading `.`.
    Rule(String),
    /// A rule nested inside `@media <condition>`.
    Media { condition: String, selector: String },
}

impl StyleKey {
    /// Key for a plain class, optionally with a pseudo-class suffix.
    pub fn rule(class_name: &str, pseudo: Option<&str>) -> Self {
        StyleKey::Rule(selector(class_name, pseudo))
    }

    /// Key for a class scoped to a media condition.
    pub fn media(condition: impl Into<String>, class_name: &str) -> Self {
        StyleKey::Media {
            condition: condition.into(),
            selector: escape_selector(class_name),
        }
    }

    pub fn selector(&self) -> &str {
        match self {
            StyleKey::Rule(selector) => selector,
            StyleKey::Media { selector, .. } => selector,
        }
    }
}

fn selector(class_name: &str, pseudo: Option<&str>) -> String {
    let mut selector = escape_selector(class_name);
    if let Some(pseudo) = pseudo {
        selector.push(':');
        selector.push_str(&escape_selector(pseudo));
    }
    selector
}

/// Accumulated styles for one engine.
///
/// Each key keeps the first-insertion order of its unique declarations,
/// and keys keep the order in which they were first written.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    entries: IndexMap<StyleKey, IndexSet<Declaration>>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add declarations under `key`. Duplicates are ignored and an empty
    /// list creates no entry.
    pub fn add(&mut self, key: StyleKey, declarations: impl IntoIterator<Item = Declaration>) {
        let mut declarations = declarations.into_iter().peekable();
        if declarations.peek().is_none() {
            return;
        }
        self.entries.entry(key).or_default().extend(declarations);
    }

    /// Drop all accumulated styles.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, key: &StyleKey) -> Option<&IndexSet<Declaration>> {
        self.entries.get(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &IndexSet<Declaration>)> {
        self.entries.iter()
    }
}
