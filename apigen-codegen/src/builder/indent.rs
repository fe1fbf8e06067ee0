//! Indentation configuration for code generation.

const SPACES: &str = "        ";

/// Space indentation for generated code.
///
/// Comment blocks pad with spaces too, so every indented line of a unit
/// shares one whitespace character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// 4-space indentation (Java).
    pub const JAVA: Self = Self::spaces(4);

    /// 4-space indentation (C#).
    pub const CSHARP: Self = Self::spaces(4);

    /// Indentation of `width` spaces per level, capped at eight.
    pub const fn spaces(width: usize) -> Self {
        let width = if width > SPACES.len() { SPACES.len() } else { width };
        Self { width }
    }

    /// One indent level.
    pub fn as_str(&self) -> &'static str {
        &SPACES[..self.width]
    }

    /// Columns occupied by one indent level.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
