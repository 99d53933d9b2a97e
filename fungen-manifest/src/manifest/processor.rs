//! Processor options.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What to do with a declaration whose property type cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidTypePolicy {
    /// Drop everything rendered for the declaration.
    #[default]
    Discard,
    /// Leave the unresolvable parts out and write the rest of the function.
    KeepPartial,
}

impl InvalidTypePolicy {
    /// Returns the policy identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidTypePolicy::Discard => "discard",
            InvalidTypePolicy::KeepPartial => "keep-partial",
        }
    }
}

impl fmt::Display for InvalidTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvalidTypePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discard" => Ok(InvalidTypePolicy::Discard),
            "keep-partial" | "keep_partial" | "partial" => Ok(InvalidTypePolicy::KeepPartial),
            _ => Err(format!(
                "unknown policy '{}', expected 'discard' or 'keep-partial'",
                s
            )),
        }
    }
}

/// The `[processor]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessorConfig {
    /// Qualified name of the marker annotation
    pub marker: String,

    /// Marker argument holding the generated function's name
    pub name_argument: String,

    /// Package of the generated file
    pub package: String,

    /// Generated file name, without extension
    pub file_name: String,

    pub on_invalid_type: InvalidTypePolicy,
}

impl ProcessorConfig {
    /// Simple name of the marker annotation (e.g., "Function").
    pub fn marker_short_name(&self) -> &str {
        fungen_ir::short_name(&self.marker)
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            marker: "org.example.Function".to_string(),
            name_argument: "erstesArgument".to_string(),
            package: "org.example".to_string(),
            file_name: "GeneratedFunctions".to_string(),
            on_invalid_type: InvalidTypePolicy::default(),
        }
    }
}
