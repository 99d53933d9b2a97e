//! Check operation - a pass that writes nothing.

use std::path::Path;

use eyre::{Context, Result};
use fungen_codegen::{DiagnosticCollector, MemorySink};
use fungen_codegen_kotlin::FunctionProcessor;
use fungen_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs a pass into memory and returns its diagnostics.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let processor = FunctionProcessor::new(manifest.processor.clone());
    let mut sink = MemorySink::new();
    let mut logger = DiagnosticCollector::new();

    let pass = processor
        .process(&manifest.declarations, &mut sink, &mut logger)
        .wrap_err("Validation failed")?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        functions: pass.functions,
        failed: pass.failed,
        deferred: pass.deferred.iter().map(|d| d.name.clone()).collect(),
        diagnostics: logger.into_diagnostics(),
    })
}
