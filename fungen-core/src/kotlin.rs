//! Kotlin naming rules.

use std::path::PathBuf;

/// Kotlin hard keywords. These can never be used as identifiers without backticks.
/// Source: https://kotlinlang.org/docs/keyword-reference.html#hard-keywords
pub const KOTLIN_HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Check if a name is a Kotlin hard keyword
pub fn is_kotlin_keyword(name: &str) -> bool {
    KOTLIN_HARD_KEYWORDS.contains(&name)
}

/// Validate that a name is a plain Kotlin identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    if is_kotlin_keyword(name) {
        return Some("name is a Kotlin hard keyword");
    }

    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Directory path for a package (e.g., "org.example" -> "org/example").
///
/// The empty (default) package maps to an empty path.
pub fn package_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}
