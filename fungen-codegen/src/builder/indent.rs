//! Indentation configuration for code generation.

const SPACES: &str = "    ";

/// Indentation for generated code: four spaces per level, the Kotlin
/// official style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: u8,
}

impl Indent {
    pub const KOTLIN: Self = Self { width: 4 };

    /// Number of spaces per indent level.
    pub fn width(&self) -> usize {
        usize::from(self.width)
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        &SPACES[..self.width().min(SPACES.len())]
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::KOTLIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kotlin_indent() {
        assert_eq!(Indent::KOTLIN.as_str(), "    ");
        assert_eq!(Indent::KOTLIN.width(), 4);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::KOTLIN);
    }
}
