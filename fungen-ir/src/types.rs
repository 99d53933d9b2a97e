//! Resolved type references.

use serde::{Deserialize, Serialize};

/// A resolved type reference.
///
/// `qualified_name` is `None` when the resolver could not resolve the
/// referenced declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(default, rename = "name", skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub nullable: bool,
    /// Generic arguments in order; empty for non-generic types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeArgument>,
}

impl TypeRef {
    /// A non-null, non-generic reference to a named type.
    pub fn named(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: Some(qualified_name.into()),
            nullable: false,
            arguments: Vec::new(),
        }
    }

    /// A reference the resolver could not resolve.
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// Mark this reference as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Append a generic argument.
    pub fn arg(mut self, argument: TypeArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.qualified_name.is_some()
    }

    pub fn is_generic(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// Use-site variance of a generic argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variance {
    /// Exact type, no projection.
    #[default]
    #[serde(rename = "invariant")]
    Invariant,
    /// Producer position (`out T`).
    #[serde(rename = "out", alias = "covariant")]
    Covariant,
    /// Consumer position (`in T`).
    #[serde(rename = "in", alias = "contravariant")]
    Contravariant,
    /// Star projection (`*`), carries no type.
    #[serde(rename = "star", alias = "*")]
    Star,
}

impl Variance {
    /// Projection keyword, empty for invariant arguments.
    pub fn label(&self) -> &'static str {
        match self {
            Variance::Invariant => "",
            Variance::Covariant => "out",
            Variance::Contravariant => "in",
            Variance::Star => "*",
        }
    }
}

/// One generic argument slot.
///
/// `ty` is ignored for star projections. For any other variance a missing
/// `ty` means the argument could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeArgument {
    #[serde(default)]
    pub variance: Variance,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
}

impl TypeArgument {
    pub fn star() -> Self {
        Self {
            variance: Variance::Star,
            ty: None,
        }
    }

    pub fn invariant(ty: TypeRef) -> Self {
        Self::projected(Variance::Invariant, ty)
    }

    pub fn covariant(ty: TypeRef) -> Self {
        Self::projected(Variance::Covariant, ty)
    }

    pub fn contravariant(ty: TypeRef) -> Self {
        Self::projected(Variance::Contravariant, ty)
    }

    fn projected(variance: Variance, ty: TypeRef) -> Self {
        Self {
            variance,
            ty: Some(ty),
        }
    }
}
