//! Manifest types and parsing for fungen.toml files.

mod file;
mod parse;
mod processor;
mod validate;

pub use file::FungenToml;
use fungen_ir::Declaration;
pub use processor::{InvalidTypePolicy, ProcessorConfig};
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for fungen.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Processor options
    #[serde(default)]
    pub processor: ProcessorConfig,

    /// Resolved declarations, in source order
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}
