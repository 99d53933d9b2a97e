//! Per-declaration rendering errors.

use std::fmt;

use fungen_codegen::Diagnostic;
use fungen_ir::DeclarationKind;
use thiserror::Error;

/// Where an unresolvable type was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePosition {
    /// The property's own type.
    Property,
    /// A generic argument at any nesting depth.
    Argument,
}

impl fmt::Display for TypePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePosition::Property => write!(f, "property type"),
            TypePosition::Argument => write!(f, "type argument"),
        }
    }
}

/// Reasons a single declaration cannot be rendered.
///
/// None of these stop the pass. The orchestrator reports them and moves on
/// to the next declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("only objects can be annotated with @{marker}")]
    WrongDeclarationKind {
        declaration: String,
        kind: DeclarationKind,
        marker: String,
    },

    #[error("@{marker} is missing the '{argument}' argument")]
    MissingMarkerArgument {
        declaration: String,
        marker: String,
        argument: String,
    },

    #[error("'{argument}' of @{marker} must be a string, found {found}")]
    MissingNameValue {
        declaration: String,
        marker: String,
        argument: String,
        found: &'static str,
    },

    #[error("invalid {position}")]
    UnresolvableType {
        /// The property, as `<declaration>.<property>`.
        symbol: String,
        position: TypePosition,
    },
}

impl RenderError {
    /// The declaration or property the error is attached to.
    pub fn symbol(&self) -> &str {
        match self {
            RenderError::WrongDeclarationKind { declaration, .. }
            | RenderError::MissingMarkerArgument { declaration, .. }
            | RenderError::MissingNameValue { declaration, .. } => declaration,
            RenderError::UnresolvableType { symbol, .. } => symbol,
        }
    }

    /// The state the renderer was in when it gave up.
    pub fn phase(&self) -> &'static str {
        match self {
            RenderError::UnresolvableType { .. } => "render",
            _ => "validate",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.phase(), self.to_string()).at(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use fungen_codegen::Severity;

    use super::*;

    #[test]
    fn test_wrong_kind_diagnostic() {
        let err = RenderError::WrongDeclarationKind {
            declaration: "org.example.Greeter".into(),
            kind: DeclarationKind::Class,
            marker: "Function".into(),
        };

        let diag = err.to_diagnostic();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.phase, "validate");
        assert_eq!(diag.message, "only objects can be annotated with @Function");
        assert_eq!(diag.location.as_deref(), Some("org.example.Greeter"));
    }

    #[test]
    fn test_unresolvable_messages() {
        let property = RenderError::UnresolvableType {
            symbol: "org.example.Greeter.x".into(),
            position: TypePosition::Property,
        };
        let argument = RenderError::UnresolvableType {
            symbol: "org.example.Greeter.x".into(),
            position: TypePosition::Argument,
        };

        assert_eq!(property.to_string(), "invalid property type");
        assert_eq!(argument.to_string(), "invalid type argument");
        assert_eq!(property.phase(), "render");
        assert_eq!(argument.phase(), "render");
    }

    #[test]
    fn test_name_argument_messages() {
        let missing = RenderError::MissingMarkerArgument {
            declaration: "org.example.Greeter".into(),
            marker: "Function".into(),
            argument: "erstesArgument".into(),
        };
        let wrong_type = RenderError::MissingNameValue {
            declaration: "org.example.Greeter".into(),
            marker: "Function".into(),
            argument: "erstesArgument".into(),
            found: "integer",
        };

        assert_eq!(
            missing.to_string(),
            "@Function is missing the 'erstesArgument' argument"
        );
        assert_eq!(
            wrong_type.to_string(),
            "'erstesArgument' of @Function must be a string, found integer"
        );
    }
}
