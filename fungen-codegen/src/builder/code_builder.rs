//! Code builder utility for generating properly indented code.

use super::Indent;

/// Append-only buffer for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental rendering.
///
/// # Example (Consuming API)
///
/// ```
/// use fungen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::kotlin()
///     .line("fun main() {")
///     .indent()
///     .line("println(\"Hello, world!\")")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "fun main() {\n    println(\"Hello, world!\")\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use fungen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::kotlin();
/// builder
///     .push_line("fun greet(")
///     .push_indent()
///     .start_line("x: ")
///     .push_raw("kotlin.Int")
///     .end_line(",")
///     .push_dedent()
///     .push_line(") {");
/// assert_eq!(builder.build(), "fun greet(\n    x: kotlin.Int,\n) {\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Kotlin default).
    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    // =========================================================================
    // Mutable API
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Start a line: current indentation followed by `s`, no newline.
    pub fn start_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self
    }

    /// Finish a line started with [`start_line`](Self::start_line).
    pub fn end_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::kotlin()
    }
}
