//! Class-like declarations and their properties.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Annotation, TypeRef, default_true, short_name};

/// The form of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Interface,
    /// A singleton: exactly one implicit instance.
    Object,
    EnumClass,
    EnumEntry,
    AnnotationClass,
}

impl DeclarationKind {
    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Object => "object",
            DeclarationKind::EnumClass => "enum_class",
            DeclarationKind::EnumEntry => "enum_entry",
            DeclarationKind::AnnotationClass => "annotation_class",
        }
    }

    /// Returns true for the singleton-object kind.
    pub fn is_object(&self) -> bool {
        matches!(self, DeclarationKind::Object)
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An annotated declaration as reported by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Fully-qualified declaration name (e.g., "org.example.Greeter").
    pub name: String,
    pub kind: DeclarationKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Properties in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    /// Resolver validity signal. Invalid declarations are deferred to a later round.
    #[serde(default = "default_true")]
    pub valid: bool,
}

impl Declaration {
    /// Create a valid declaration without annotations or properties.
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            annotations: Vec::new(),
            properties: Vec::new(),
            valid: true,
        }
    }

    /// Create a valid singleton-object declaration.
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Object)
    }

    /// Attach an annotation.
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a property.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Set the resolver validity signal.
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// The declaration's simple name.
    pub fn simple_name(&self) -> &str {
        short_name(&self.name)
    }

    /// Returns true if an annotation with this qualified name is present.
    pub fn has_annotation(&self, qualified: &str) -> bool {
        self.annotations.iter().any(|a| a.name == qualified)
    }

    /// First annotation whose simple name matches.
    pub fn annotation_by_short_name(&self, short: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.short_name() == short)
    }

    /// Properties that passed the resolver's validity check, in order.
    pub fn valid_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.valid)
    }
}

/// A named property of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default = "default_true")]
    pub valid: bool,
}

impl Property {
    /// Create a valid property.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            valid: true,
        }
    }

    /// Set the resolver validity signal.
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_object() {
        assert!(DeclarationKind::Object.is_object());
        assert!(!DeclarationKind::Class.is_object());
        assert!(!DeclarationKind::Interface.is_object());
        assert!(!DeclarationKind::EnumEntry.is_object());
    }

    #[test]
    fn test_kind_deserialize() {
        let kind: DeclarationKind = serde_json::from_str(r#""enum_class""#).unwrap();
        assert_eq!(kind, DeclarationKind::EnumClass);
        assert_eq!(kind.to_string(), "enum_class");
    }

    #[test]
    fn test_valid_properties_filters_and_keeps_order() {
        let decl = Declaration::object("org.example.Greeter")
            .property(Property::new("a", TypeRef::named("kotlin.Int")))
            .property(Property::new("b", TypeRef::named("kotlin.Int")).with_valid(false))
            .property(Property::new("c", TypeRef::named("kotlin.Int")));

        let names: Vec<_> = decl.valid_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_annotation_lookup() {
        let decl = Declaration::object("org.example.Greeter")
            .annotated(Annotation::new("org.example.Function"));

        assert!(decl.has_annotation("org.example.Function"));
        assert!(!decl.has_annotation("Function"));
        assert!(decl.annotation_by_short_name("Function").is_some());
        assert_eq!(decl.simple_name(), "Greeter");
    }

    #[test]
    fn test_deserialize_defaults() {
        let decl: Declaration =
            serde_json::from_str(r#"{ "name": "org.example.Empty", "kind": "object" }"#).unwrap();

        assert!(decl.valid);
        assert!(decl.annotations.is_empty());
        assert!(decl.properties.is_empty());
    }
}
