//! Annotations attached to declarations.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::short_name;

/// An annotation instance on a declaration, e.g. `@Function(erstesArgument = "greet")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Fully-qualified annotation name (e.g., "org.example.Function").
    pub name: String,
    /// Named arguments in source order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub arguments: IndexMap<String, ArgumentValue>,
}

impl Annotation {
    /// Create an annotation without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: IndexMap::new(),
        }
    }

    /// Add a named argument.
    pub fn argument(mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// The annotation's simple name (e.g., "Function").
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }

    /// Look up a named argument.
    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.arguments.get(name)
    }
}

/// A constant annotation argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl ArgumentValue {
    /// The string payload, if this is a string argument.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the value's type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgumentValue::Bool(_) => "boolean",
            ArgumentValue::Integer(_) => "integer",
            ArgumentValue::Float(_) => "float",
            ArgumentValue::String(_) => "string",
        }
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Bool(b) => write!(f, "{}", b),
            ArgumentValue::Integer(i) => write!(f, "{}", i),
            ArgumentValue::Float(x) => write!(f, "{}", x),
            ArgumentValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::String(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::String(value)
    }
}

impl From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        ArgumentValue::Integer(value)
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        ArgumentValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        let annotation = Annotation::new("org.example.Function");
        assert_eq!(annotation.short_name(), "Function");
    }

    #[test]
    fn test_arguments_keep_order() {
        let annotation = Annotation::new("org.example.Function")
            .argument("b", 1)
            .argument("a", "x");
        let keys: Vec<_> = annotation.arguments.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_argument_value_as_str() {
        assert_eq!(ArgumentValue::from("greet").as_str(), Some("greet"));
        assert_eq!(ArgumentValue::from(42).as_str(), None);
        assert_eq!(ArgumentValue::from(true).type_name(), "boolean");
    }

    #[test]
    fn test_deserialize_untagged_values() {
        let annotation: Annotation = serde_json::from_str(
            r#"{ "name": "org.example.Function", "arguments": { "erstesArgument": "greet", "count": 3, "flag": false } }"#,
        )
        .unwrap();

        assert_eq!(
            annotation.get("erstesArgument"),
            Some(&ArgumentValue::String("greet".into()))
        );
        assert_eq!(annotation.get("count"), Some(&ArgumentValue::Integer(3)));
        assert_eq!(annotation.get("flag"), Some(&ArgumentValue::Bool(false)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ArgumentValue::from("greet").to_string(), "\"greet\"");
        assert_eq!(ArgumentValue::from(7).to_string(), "7");
    }
}
