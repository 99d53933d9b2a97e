//! Shared code generation utilities for the fungen code generator.
//!
//! This crate provides the language-agnostic building blocks a generator
//! needs, and the three collaborator seams it is driven through.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`diagnostic`] - Diagnostic values (Diagnostic, Severity)
//! - [`logger`] - Diagnostic reporting (Logger, DiagnosticCollector)
//! - [`resolver`] - Declaration selection (Resolver)
//! - [`sink`] - Output destinations (CodeSink, OutputUnit, MemorySink, FileSink)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod diagnostic;
pub mod logger;
pub mod resolver;
pub mod sink;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, Indent};
pub use diagnostic::{Diagnostic, Severity};
pub use logger::{DiagnosticCollector, Logger};
pub use resolver::Resolver;
pub use sink::{
    CodeSink, FileSink, KotlinSource, MemoryFile, MemorySink, OutputStream, OutputUnit,
};
