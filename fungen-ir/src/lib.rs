//! Resolved symbol model for the fungen code generator.
//!
//! These types are read-only snapshots of what a host resolver knows about
//! annotated declarations: their kind, annotations, properties, and the fully
//! resolved type of every property (including nested generic arguments).
//!
//! # Architecture
//!
//! ```text
//! fungen.toml (TOML) → fungen-manifest (parsing) → fungen-ir (symbols) → codegen
//! ```
//!
//! The model carries names, nullability and variance, never target-language
//! text.

mod annotation;
mod declaration;
mod types;

pub use annotation::{Annotation, ArgumentValue};
pub use declaration::{Declaration, DeclarationKind, Property};
pub use types::{TypeArgument, TypeRef, Variance};

/// Last segment of a dot-separated qualified name.
///
/// `org.example.Function` becomes `Function`; names without a dot are
/// returned unchanged.
pub fn short_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

pub(crate) fn default_true() -> bool {
    true
}
