//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use fungen_core::{is_kotlin_keyword, validate_identifier};
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested tables.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "fungen.toml");
/// let processor = ctx.push("processor");
/// processor.validate_name("GeneratedFunctions", "file name")?;
/// processor.validate_qualified_name("org.example", "package")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["processor"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "file name in 'processor'" or just "file name" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that a value is a plain Kotlin identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        let span = find_value_span(self.source.src(), name);
        self.validate_segment(name, kind, span)
    }

    /// Validate a dot-separated qualified name segment by segment.
    pub fn validate_qualified_name(&self, name: &str, kind: &str) -> Result<()> {
        let value_span = find_value_span(self.source.src(), name);
        let mut offset = 0;

        for segment in name.split('.') {
            let span = value_span
                .map(|span| SourceSpan::from((span.offset() + offset, segment.len())));
            self.validate_segment(segment, &format!("{} segment", kind), span)?;
            offset += segment.len() + 1;
        }

        Ok(())
    }

    fn validate_segment(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if is_kotlin_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }
}

/// Find the span of a string value in the TOML source.
///
/// Looks for the value as a quoted string (`"value"` or `'value'`) and returns
/// the span of its contents.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}
