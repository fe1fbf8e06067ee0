use std::path::PathBuf;

use super::{Syntax, UnitSyntax};
use crate::{
    UnitKind, builder::Indent, comment::CommentStyle, naming::NamingConvention, types::TypeTable,
};

/// Everything the renderer needs to know about one target language.
#[derive(Debug, Clone)]
pub struct TargetLanguage {
    /// Language identifier (e.g., "java")
    pub name: &'static str,
    /// File extension without the dot
    pub extension: &'static str,
    pub indent: Indent,
    pub types: TypeTable,
    pub naming: NamingConvention,
    pub comments: CommentStyle,
    pub syntax: &'static Syntax,
}

impl TargetLanguage {
    /// Unit framing for a kind of unit.
    pub fn unit_syntax(&self, kind: UnitKind) -> &'static UnitSyntax {
        match kind {
            UnitKind::Client => &self.syntax.client,
            UnitKind::Schema => &self.syntax.schema,
            UnitKind::Enum => &self.syntax.enumeration,
        }
    }

    /// Relative output path of a unit (e.g., `models/Address.java`).
    pub fn file_name(&self, kind: UnitKind, unit: &str) -> PathBuf {
        let file = format!("{}.{}", unit, self.extension);
        match self.unit_syntax(kind).directory {
            Some(dir) => PathBuf::from(dir).join(file),
            None => PathBuf::from(file),
        }
    }
}
