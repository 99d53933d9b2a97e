//! Kotlin function generation.
//!
//! For every `object` declaration annotated with the configured marker, the
//! [`FunctionProcessor`] emits a function whose parameters mirror the
//! declaration's properties:
//!
//! ```
//! use fungen_codegen::{DiagnosticCollector, MemorySink};
//! use fungen_codegen_kotlin::FunctionProcessor;
//! use fungen_ir::{Annotation, Declaration, Property, TypeRef};
//!
//! let corpus = vec![
//!     Declaration::object("org.example.Greeter")
//!         .annotated(Annotation::new("org.example.Function").argument("erstesArgument", "greet"))
//!         .property(Property::new("x", TypeRef::named("Int"))),
//! ];
//!
//! let mut sink = MemorySink::new();
//! let mut logger = DiagnosticCollector::new();
//! let output = FunctionProcessor::default()
//!     .process(&corpus, &mut sink, &mut logger)
//!     .unwrap();
//!
//! assert_eq!(output.functions, ["greet"]);
//! assert_eq!(
//!     sink.content("org.example", "GeneratedFunctions").unwrap(),
//!     "package org.example\nfun greet(\n    x: Int,\n) {\n    println(\"Hallo aus Funktion -> greet\")\n}\n",
//! );
//! ```

mod error;
mod processor;
mod signature;
mod type_renderer;

pub use error::{RenderError, TypePosition};
pub use processor::{FunctionProcessor, PassOutput};
pub use signature::{RenderedFunction, SignatureRenderer};
pub use type_renderer::{render_type, render_type_recovering, type_to_string};
