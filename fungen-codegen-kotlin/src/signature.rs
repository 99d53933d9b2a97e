//! Function rendering for a single annotated declaration.

use fungen_codegen::CodeBuilder;
use fungen_ir::{Declaration, Property};
use fungen_manifest::{InvalidTypePolicy, ProcessorConfig};

use crate::{
    error::RenderError,
    type_renderer::{render_type, render_type_recovering},
};

/// A function written by [`SignatureRenderer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFunction {
    pub name: String,
    /// Unresolvable types rendered around under
    /// [`InvalidTypePolicy::KeepPartial`]. Always empty under `Discard`.
    pub errors: Vec<RenderError>,
}

impl RenderedFunction {
    /// Returns true if the function text is complete and well-formed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Renders one declaration as a Kotlin function.
///
/// ```text
/// fun greet(
///     x: kotlin.Int,
/// ) {
///     println("Hallo aus Funktion -> greet")
/// }
/// ```
///
/// A declaration without valid properties renders as `fun greet() { ... }`.
#[derive(Debug, Clone, Copy)]
pub struct SignatureRenderer<'a> {
    config: &'a ProcessorConfig,
}

impl<'a> SignatureRenderer<'a> {
    pub fn new(config: &'a ProcessorConfig) -> Self {
        Self { config }
    }

    /// Render `decl` into `out`.
    ///
    /// Validation errors are returned before anything is written. What an
    /// unresolvable property type does depends on `on_invalid_type`:
    ///
    /// - `discard`: rendering stops with an error and `out` keeps the text
    ///   written so far.
    /// - `keep-partial`: the failing part is left out, the rest of the
    ///   function is rendered and the error is returned in
    ///   [`RenderedFunction::errors`].
    pub fn render(
        &self,
        decl: &Declaration,
        out: &mut CodeBuilder,
    ) -> Result<RenderedFunction, RenderError> {
        self.validate(decl)?;
        let name = self.function_name(decl)?;
        let properties: Vec<&Property> = decl.valid_properties().collect();
        let mut errors = Vec::new();

        if properties.is_empty() {
            out.push_line(&format!("fun {name}() {{"));
        } else {
            out.push_line(&format!("fun {name}(")).push_indent();
            for property in properties {
                let symbol = format!("{}.{}", decl.name, property.name);
                out.start_line(&format!("{}: ", property.name));
                match self.config.on_invalid_type {
                    InvalidTypePolicy::Discard => render_type(out, &property.ty, &symbol)?,
                    InvalidTypePolicy::KeepPartial => {
                        errors.extend(render_type_recovering(out, &property.ty, &symbol));
                        // An unresolvable property type also drops the separator
                        if !property.ty.is_resolved() {
                            continue;
                        }
                    }
                }
                out.end_line(",");
            }
            out.push_dedent().push_line(") {");
        }

        out.push_indent()
            .push_line(&format!("println(\"Hallo aus Funktion -> {name}\")"))
            .push_dedent()
            .push_line("}");

        Ok(RenderedFunction { name, errors })
    }

    fn validate(&self, decl: &Declaration) -> Result<(), RenderError> {
        if !decl.kind.is_object() {
            return Err(RenderError::WrongDeclarationKind {
                declaration: decl.name.clone(),
                kind: decl.kind,
                marker: self.config.marker_short_name().to_string(),
            });
        }
        Ok(())
    }

    fn function_name(&self, decl: &Declaration) -> Result<String, RenderError> {
        let marker = self.config.marker_short_name();
        let argument = &self.config.name_argument;

        let value = decl
            .annotation_by_short_name(marker)
            .and_then(|annotation| annotation.get(argument))
            .ok_or_else(|| RenderError::MissingMarkerArgument {
                declaration: decl.name.clone(),
                marker: marker.to_string(),
                argument: argument.clone(),
            })?;

        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| RenderError::MissingNameValue {
                declaration: decl.name.clone(),
                marker: marker.to_string(),
                argument: argument.clone(),
                found: value.type_name(),
            })
    }
}
