//! Generate operation - one processing pass over the manifest corpus.

use std::path::Path;

use eyre::{Context, Result};
use fungen_codegen::{DiagnosticCollector, FileSink, KotlinSource, MemorySink};
use fungen_codegen_kotlin::FunctionProcessor;
use fungen_core::GeneratedFile;
use fungen_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Source root for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let processor = FunctionProcessor::new(manifest.processor.clone());
    let mut logger = DiagnosticCollector::new();

    let (pass, result) = if opts.dry_run {
        let mut sink = MemorySink::new();
        let pass = processor
            .process(&manifest.declarations, &mut sink, &mut logger)
            .wrap_err("Failed to generate code")?;

        let files = sink
            .into_files()
            .into_iter()
            .map(|file| {
                let source = KotlinSource {
                    package: file.package,
                    file_name: file.file_name,
                    content: file.content,
                };
                PreviewFile {
                    path: source.path(opts.output_dir).display().to_string(),
                    content: source.content,
                }
            })
            .collect();
        (pass, GenerationResult::Preview(PreviewResult { files }))
    } else {
        let mut sink = FileSink::new(opts.output_dir);
        let pass = processor
            .process(&manifest.declarations, &mut sink, &mut logger)
            .wrap_err("Failed to generate code")?;

        let written = WrittenResult {
            files: sink.written().to_vec(),
        };
        (pass, GenerationResult::Written(written))
    };

    Ok(GenerateReport {
        marker: manifest.processor.marker.clone(),
        functions: pass.functions,
        failed: pass.failed,
        deferred: pass.deferred.iter().map(|d| d.name.clone()).collect(),
        diagnostics: logger.into_diagnostics(),
        result,
    })
}
