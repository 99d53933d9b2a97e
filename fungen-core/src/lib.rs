//! Core utilities and types for the fungen code generator.
//!
//! This crate provides file writing and Kotlin naming rules shared by the
//! manifest parser and the code generators.

mod file;
mod kotlin;

// File operations
pub use file::{GeneratedFile, write_file};
// Kotlin naming rules
pub use kotlin::{KOTLIN_HARD_KEYWORDS, is_kotlin_keyword, package_path, validate_identifier};
