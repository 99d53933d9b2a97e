//! Check command report data structures.

use std::path::PathBuf;

use fungen_codegen::Diagnostic;
use serde::Serialize;

use super::output::{Output, Report, render_diagnostics, render_names};

/// Report data from a check pass.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Functions the pass would generate.
    pub functions: Vec<String>,
    /// Declarations that reported a diagnostic.
    pub failed: Vec<String>,
    /// Declarations the resolver marked invalid.
    pub deferred: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        render_names(out, "Failed", &self.failed);
        render_names(out, "Deferred", &self.deferred);

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} function{})",
                self.config_path.display(),
                self.functions.len(),
                if self.functions.len() == 1 { "" } else { "s" }
            ));
        }
    }
}
