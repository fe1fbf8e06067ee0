//! Identifier casing and reserved-word handling.

use apigen_core::{first_char_lower, first_char_upper};

/// First-character transform applied when deriving an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingRule {
    FirstCharUpper,
    FirstCharLower,
    AsDeclared,
}

/// Apply a casing rule. Only the first character ever changes.
pub fn map_identifier(raw: &str, rule: CasingRule) -> String {
    match rule {
        CasingRule::FirstCharUpper => first_char_upper(raw),
        CasingRule::FirstCharLower => first_char_lower(raw),
        CasingRule::AsDeclared => raw.to_string(),
    }
}

/// Language-specific naming conventions.
///
/// Defines the reserved words of a language and how to escape them.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "@class" in C#)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Apply a casing rule, then make the result safe.
    pub fn identifier(&self, raw: &str, rule: CasingRule) -> String {
        self.safe_name(&map_identifier(raw, rule))
    }
}
