//! The processing pass.

use eyre::{Result, WrapErr};
use fungen_codegen::{CodeBuilder, CodeSink, Logger, OutputUnit, Resolver};
use fungen_ir::Declaration;
use fungen_manifest::ProcessorConfig;

use crate::signature::SignatureRenderer;

/// Result of one pass.
#[derive(Debug, Default)]
pub struct PassOutput<'r> {
    /// Selected declarations the resolver flagged as invalid, in selection
    /// order. The host should offer them again in a later round.
    pub deferred: Vec<&'r Declaration>,
    /// Names of the generated functions, in output order.
    pub functions: Vec<String>,
    /// Declarations that reported a diagnostic. Nothing is written for
    /// them, except under keep-partial.
    pub failed: Vec<String>,
}

impl PassOutput<'_> {
    /// Returns true if nothing was selected for the marker.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.failed.is_empty()
    }
}

/// Generates one Kotlin function per declaration annotated with the marker.
#[derive(Debug, Clone, Default)]
pub struct FunctionProcessor {
    config: ProcessorConfig,
}

impl FunctionProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Run one pass.
    ///
    /// All functions go to a single `<package>.<file_name>` unit, opened only
    /// when at least one declaration is selected. Per-declaration failures
    /// are reported to `logger` and never stop the pass. Sink failures do.
    pub fn process<'r, R>(
        &self,
        resolver: &'r R,
        sink: &mut dyn CodeSink,
        logger: &mut dyn Logger,
    ) -> Result<PassOutput<'r>>
    where
        R: Resolver + ?Sized,
    {
        let selected = resolver.select_annotated(&self.config.marker);
        let mut output = PassOutput::default();
        if selected.is_empty() {
            return Ok(output);
        }

        let package = &self.config.package;
        let file_name = &self.config.file_name;
        let mut unit = OutputUnit::open(sink, package, file_name)
            .wrap_err_with(|| format!("failed to open {package}.{file_name}"))?;
        unit.append(&format!("package {package}\n"))?;

        let renderer = SignatureRenderer::new(&self.config);
        for decl in &selected {
            let mut code = CodeBuilder::kotlin();
            match renderer.render(decl, &mut code) {
                Ok(function) => {
                    unit.append(code.as_str())?;
                    if function.is_clean() {
                        output.functions.push(function.name);
                    } else {
                        for err in &function.errors {
                            logger.report(err.to_diagnostic());
                        }
                        output.failed.push(decl.name.clone());
                    }
                }
                Err(err) => {
                    logger.report(err.to_diagnostic());
                    output.failed.push(decl.name.clone());
                }
            }
        }

        unit.close()
            .wrap_err_with(|| format!("failed to close {package}.{file_name}"))?;

        output.deferred = selected.into_iter().filter(|decl| !decl.valid).collect();
        Ok(output)
    }
}
