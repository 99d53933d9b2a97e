//! Generate command report data structures.

use std::path::PathBuf;

use fungen_codegen::Diagnostic;

use super::output::{Output, Report, render_diagnostics, render_names};

/// Report data from a generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Qualified name of the marker annotation.
    pub marker: String,

    /// Generated function names, in output order.
    pub functions: Vec<String>,

    /// Declarations that reported a diagnostic instead of a clean function.
    pub failed: Vec<String>,

    /// Declarations the resolver marked invalid.
    pub deferred: Vec<String>,

    /// Diagnostics reported during the pass.
    pub diagnostics: Vec<Diagnostic>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

impl GenerateReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Paths of the written files.
    pub files: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        render_diagnostics(out, &self.diagnostics);

        if written.files.is_empty() {
            out.preformatted(&format!("No declarations annotated with @{}", self.marker));
            return;
        }

        out.section(&format!("Functions ({})", self.functions.len()));
        for name in &self.functions {
            out.added_item(name);
        }
        out.newline();

        render_names(out, "Failed", &self.failed);
        render_names(out, "Deferred", &self.deferred);

        for file in &written.files {
            out.key_value("Generated", &file.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        render_diagnostics(out, &self.diagnostics);

        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        render_names(out, "Failed", &self.failed);
        render_names(out, "Deferred", &self.deferred);

        out.divider("Summary");
        out.preformatted(&format!(
            "{} functions would be generated",
            self.functions.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::tests::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            marker: "org.example.Function".into(),
            functions: vec!["greet".into()],
            failed: Vec::new(),
            deferred: Vec::new(),
            diagnostics: Vec::new(),
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            files: vec![PathBuf::from("out/org/example/GeneratedFunctions.kt")],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Functions (1):",
                "+ greet",
                "",
                "Generated: out/org/example/GeneratedFunctions.kt",
            ]
        );
        assert!(!report.has_errors());
    }

    #[test]
    fn test_render_written_lists_failed_before_deferred() {
        let mut report = report(GenerationResult::Written(WrittenResult {
            files: vec![PathBuf::from("out/org/example/GeneratedFunctions.kt")],
        }));
        report.failed = vec!["org.example.Broken".into()];
        report.deferred = vec!["org.example.Later".into()];

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Functions (1):",
                "+ greet",
                "",
                "Failed (1):",
                "- org.example.Broken",
                "",
                "Deferred (1):",
                "- org.example.Later",
                "",
                "Generated: out/org/example/GeneratedFunctions.kt",
            ]
        );
    }

    #[test]
    fn test_render_nothing_selected() {
        let mut report = report(GenerationResult::Written(WrittenResult { files: Vec::new() }));
        report.functions.clear();

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            ["No declarations annotated with @org.example.Function"]
        );
    }

    #[test]
    fn test_render_preview_lists_failed() {
        let mut report = report(GenerationResult::Preview(PreviewResult { files: Vec::new() }));
        report.failed = vec!["org.example.Broken".into()];

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Failed (1):",
                "- org.example.Broken",
                "",
                "-- Summary --",
                "1 functions would be generated",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "out/org/example/GeneratedFunctions.kt".into(),
                content: "package org.example\n".into(),
            }],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "-- out/org/example/GeneratedFunctions.kt --",
                "package org.example\n",
                "-- Summary --",
                "1 functions would be generated",
            ]
        );
    }
}
