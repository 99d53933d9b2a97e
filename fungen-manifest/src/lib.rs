//! `fungen.toml` parsing and validation.
//!
//! A manifest carries the processor options and the snapshot of resolved
//! declarations the generator runs over.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{FungenToml, InvalidTypePolicy, Manifest, ParseContext, ProcessorConfig};
