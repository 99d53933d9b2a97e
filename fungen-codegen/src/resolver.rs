//! Declaration selection.

use fungen_ir::Declaration;

/// Source of resolved declarations.
pub trait Resolver {
    /// Declarations carrying the annotation with the given qualified name,
    /// in corpus order.
    fn select_annotated(&self, marker: &str) -> Vec<&Declaration>;
}

impl Resolver for [Declaration] {
    fn select_annotated(&self, marker: &str) -> Vec<&Declaration> {
        self.iter().filter(|decl| decl.has_annotation(marker)).collect()
    }
}

impl Resolver for Vec<Declaration> {
    fn select_annotated(&self, marker: &str) -> Vec<&Declaration> {
        self.as_slice().select_annotated(marker)
    }
}
