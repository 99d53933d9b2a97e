//! Kotlin type rendering.
//!
//! Renders a resolved [`TypeRef`] as Kotlin source text:
//!
//! - `kotlin.String?` for a nullable simple type
//! - `kotlin.collections.Map<kotlin.String, out kotlin.Int>` for projections
//! - `kotlin.collections.List<*>` for star projections
//!
//! Generic arguments are rendered with the same rules at every depth.

use fungen_codegen::CodeBuilder;
use fungen_ir::{TypeArgument, TypeRef, Variance};

use crate::error::{RenderError, TypePosition};

/// Append `ty` to `out`, stopping at the first unresolvable part.
///
/// `symbol` names the property being rendered and is only used for errors.
/// On error, `out` keeps whatever was written before the unresolvable part.
pub fn render_type(out: &mut CodeBuilder, ty: &TypeRef, symbol: &str) -> Result<(), RenderError> {
    render_at(out, ty, TypePosition::Property, symbol, &mut |err| Err(err))
}

/// Append `ty` to `out`, rendering around unresolvable parts.
///
/// An unresolvable argument keeps its projection keyword and the enclosing
/// type carries on with its remaining arguments. An unresolvable top-level
/// type writes nothing. Every unresolvable part is returned in the order it
/// appears in the text.
pub fn render_type_recovering(
    out: &mut CodeBuilder,
    ty: &TypeRef,
    symbol: &str,
) -> Vec<RenderError> {
    let mut errors = Vec::new();
    let result = render_at(out, ty, TypePosition::Property, symbol, &mut |err| {
        errors.push(err);
        Ok(())
    });
    if let Err(err) = result {
        errors.push(err);
    }
    errors
}

/// Render `ty` into a fresh string.
pub fn type_to_string(ty: &TypeRef) -> Result<String, RenderError> {
    let mut out = CodeBuilder::kotlin();
    render_type(&mut out, ty, "")?;
    Ok(out.build())
}

/// Decides whether an unresolvable part ends rendering (`Err`) or is skipped (`Ok`).
type Recover<'a> = dyn FnMut(RenderError) -> Result<(), RenderError> + 'a;

fn render_at(
    out: &mut CodeBuilder,
    ty: &TypeRef,
    position: TypePosition,
    symbol: &str,
    recover: &mut Recover<'_>,
) -> Result<(), RenderError> {
    let Some(name) = ty.qualified_name.as_deref() else {
        return recover(unresolvable(position, symbol));
    };
    out.push_raw(name);

    if ty.is_generic() {
        out.push_raw("<");
        for (i, argument) in ty.arguments.iter().enumerate() {
            if i > 0 {
                out.push_raw(", ");
            }
            render_argument(out, argument, symbol, recover)?;
        }
        out.push_raw(">");
    }

    if ty.nullable {
        out.push_raw("?");
    }

    Ok(())
}

fn render_argument(
    out: &mut CodeBuilder,
    argument: &TypeArgument,
    symbol: &str,
    recover: &mut Recover<'_>,
) -> Result<(), RenderError> {
    match argument.variance {
        // A star projection has no type and no nullability of its own
        Variance::Star => {
            out.push_raw("*");
            return Ok(());
        }
        Variance::Covariant | Variance::Contravariant => {
            out.push_raw(argument.variance.label()).push_raw(" ");
        }
        Variance::Invariant => {}
    }

    let Some(ty) = argument.ty.as_ref() else {
        return recover(unresolvable(TypePosition::Argument, symbol));
    };
    render_at(out, ty, TypePosition::Argument, symbol, recover)
}

fn unresolvable(position: TypePosition, symbol: &str) -> RenderError {
    RenderError::UnresolvableType {
        symbol: symbol.to_string(),
        position,
    }
}
