//! Engine configuration: the vocabularies the engine understands.
//!
//! A [`Config`] holds four registries plus the breakpoint list:
//!
//! - `property`: type token -> CSS property (or templated property group)
//! - `values`: symbolic value name -> literal CSS value
//! - `classes`: CSS property group -> (semantic class name -> value)
//! - `aliases`: alias name -> space-separated utility class names
//! - `breakpoints`: ordered list of named min/max widths
//!
//! Every mapping keeps its insertion order. Registration order breaks ties
//! between same-length type tokens and decides declaration order for
//! custom classes, so it is part of the observable behaviour.
//!
//! # Example
//!
//! ```yaml
//! property:
//!   bg: background
//!   my-bg:
//!     property: [background, color]
//!     value: "rgb({0})"
//! values:
//!   primary: "#ccf654"
//! breakpoints:
//!   - { name: sm, max: 639 }
//! ```

mod manifest;

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AtomError, Result};

pub use manifest::{Manifest, MANIFEST_FILENAME};

/// Type token -> property entry.
pub type PropertyRegistry = IndexMap<String, PropertyEntry>;
/// Value name -> literal CSS value.
pub type ValueRegistry = IndexMap<String, ValueLiteral>;
/// Property group -> (class name -> literal value).
pub type ClassRegistry = IndexMap<String, IndexMap<String, ValueLiteral>>;
/// Alias name -> space-separated class names.
pub type AliasRegistry = IndexMap<String, String>;

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub property: PropertyRegistry,
    pub values: ValueRegistry,
    pub classes: ClassRegistry,
    pub aliases: AliasRegistry,
    pub breakpoints: Vec<Breakpoint>,
    /// Class names processed regardless of what the scanned sources contain.
    #[serde(rename = "reserveClass")]
    pub reserve_class: Vec<String>,
}

/// What a type token maps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyEntry {
    /// `bg: background`
    Simple(String),

    /// `my-bg: { property: [background, color], value: "rgb({0})" }`
    ///
    /// `{0}` receives the primary value and `{1}` the secondary value.
    Templated {
        #[serde(rename = "property")]
        properties: PropertyNames,
        #[serde(rename = "value")]
        template: String,
    },
}

impl PropertyEntry {
    pub fn simple(property: impl Into<String>) -> Self {
        PropertyEntry::Simple(property.into())
    }

    pub fn templated<I, S>(properties: I, template: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyEntry::Templated {
            properties: PropertyNames(properties.into_iter().map(Into::into).collect()),
            template: template.into(),
        }
    }

    /// All CSS property names this entry writes to.
    pub fn property_names(&self) -> &[String] {
        match self {
            PropertyEntry::Simple(name) => std::slice::from_ref(name),
            PropertyEntry::Templated { properties, .. } => &properties.0,
        }
    }
}

/// One or more property names. Accepts either a string or a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct PropertyNames(pub Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for PropertyNames {
    fn from(raw: OneOrMany) -> Self {
        match raw {
            OneOrMany::One(name) => PropertyNames(vec![name]),
            OneOrMany::Many(names) => PropertyNames(names),
        }
    }
}

/// A literal CSS value. Numbers in the config are kept in textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLiteral", into = "String")]
pub struct ValueLiteral(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLiteral {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawLiteral> for ValueLiteral {
    fn from(raw: RawLiteral) -> Self {
        match raw {
            RawLiteral::Text(s) => ValueLiteral(s),
            RawLiteral::Int(n) => ValueLiteral(n.to_string()),
            RawLiteral::Float(n) => ValueLiteral(n.to_string()),
        }
    }
}

impl From<ValueLiteral> for String {
    fn from(value: ValueLiteral) -> Self {
        value.0
    }
}

impl From<&str> for ValueLiteral {
    fn from(s: &str) -> Self {
        ValueLiteral(s.to_string())
    }
}

impl ValueLiteral {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named responsive condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min: Option<u32>, max: Option<u32>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// The media condition for this breakpoint.
    ///
    /// Empty when neither bound is set; config validation rejects such
    /// breakpoints before an engine is built.
    pub fn media_condition(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                format!("(min-width: {}px) and (max-width: {}px)", min, max)
            }
            (Some(min), None) => format!("(min-width: {}px)", min),
            (None, Some(max)) => format!("(max-width: {}px)", max),
            (None, None) => String::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file, picking JSON or YAML from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AtomError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_yaml(&content),
        }
    }

    /// Parse config from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AtomError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check the YAML syntax of the config file".to_string()),
        })
    }

    /// Parse config from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| AtomError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check the JSON syntax of the config file".to_string()),
        })
    }

    /// Look up a breakpoint by name. The first match wins.
    pub fn breakpoint(&self, name: &str) -> Option<&Breakpoint> {
        self.breakpoints.iter().find(|bp| bp.name == name)
    }

    /// Look up a registered value literal.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(ValueLiteral::as_str)
    }

    pub fn with_property(mut self, token: impl Into<String>, entry: PropertyEntry) -> Self {
        self.property.insert(token.into(), entry);
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: &str) -> Self {
        self.values.insert(name.into(), ValueLiteral::from(value));
        self
    }

    pub fn with_class(
        mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        value: &str,
    ) -> Self {
        self.classes
            .entry(group.into())
            .or_default()
            .insert(name.into(), ValueLiteral::from(value));
        self
    }

    pub fn with_alias(mut self, name: impl Into<String>, classes: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), classes.into());
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoints.push(breakpoint);
        self
    }

    pub fn with_reserved(mut self, class_name: impl Into<String>) -> Self {
        self.reserve_class.push(class_name.into());
        self
    }
}
