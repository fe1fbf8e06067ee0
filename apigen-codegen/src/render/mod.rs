//! Member rendering.
//!
//! A [`MemberRenderer`] turns one model member (a method, a property, or an
//! enum value) into declarations written through a [`RenderBuffer`]. It is
//! driven entirely by the [`TargetLanguage`] data and holds no
//! language-specific logic of its own.

mod enumeration;
mod method;
mod path;
mod property;

pub use enumeration::EnumTable;
pub use path::placeholders;

use crate::{
    builder::RenderBuffer,
    comment::{CommentFormatter, DocBlock},
    language::TargetLanguage,
    types::TypeMapper,
};

/// Renders individual members for one language and model.
#[derive(Debug)]
pub struct MemberRenderer<'a> {
    language: &'a TargetLanguage,
    types: &'a TypeMapper<'a>,
    comments: CommentFormatter,
}

impl<'a> MemberRenderer<'a> {
    pub fn new(
        language: &'a TargetLanguage,
        types: &'a TypeMapper<'a>,
        wrap_width: usize,
    ) -> Self {
        Self {
            language,
            types,
            comments: CommentFormatter::new(language.comments, wrap_width),
        }
    }

    /// Write a doc comment at the buffer's current indentation.
    pub fn render_doc(&self, buf: &mut RenderBuffer, doc: &DocBlock) {
        for line in self.comments.format_doc(doc, buf.indent_columns()) {
            buf.write_line(&line);
        }
    }
}
