//! Append-only render buffer.

use super::{Indent, Template, substitute};
use crate::RenderError;

/// Append-only text buffer owned by one rendering pass.
///
/// Text is only ever appended, apart from [`backtrack`](Self::backtrack),
/// which removes trailing characters. Loops that emit lists write a
/// separator after every item and backtrack once at the end instead of
/// special-casing the last item.
///
/// ```
/// use apigen_codegen::builder::{Indent, RenderBuffer};
///
/// let mut buf = RenderBuffer::new(Indent::JAVA);
/// buf.write("call(");
/// for arg in ["a", "b"] {
///     buf.write(arg).write(", ");
/// }
/// buf.backtrack(2).unwrap();
/// buf.write_line(");");
///
/// assert_eq!(buf.finish(), "call(a, b);\n");
/// ```
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl RenderBuffer {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Append text verbatim, without a line break.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Append text verbatim followed by a line break.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Substitute positional placeholders, then append as a line.
    pub fn write_line_with(
        &mut self,
        template: &str,
        args: &[&str],
    ) -> Result<&mut Self, RenderError> {
        let text = substitute(template, args)?;
        Ok(self.write_line(&text))
    }

    /// Append a line at the current indentation. Empty text gives a blank line.
    pub fn line(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.write_indent();
        }
        self.write_line(text)
    }

    /// Substitute positional placeholders, then append as an indented line.
    pub fn line_with(&mut self, template: &str, args: &[&str]) -> Result<&mut Self, RenderError> {
        let text = substitute(template, args)?;
        Ok(self.line(&text))
    }

    /// Append a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append the indentation for the current level.
    pub fn write_indent(&mut self) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self
    }

    /// Emit every line of a template, each at the current level plus its depth.
    pub fn emit(&mut self, template: Template, args: &[&str]) -> Result<&mut Self, RenderError> {
        let base = self.indent_level;
        for (depth, text) in template {
            self.indent_level = base + depth;
            let result = self.line_with(text, args).map(|_| ());
            if result.is_err() {
                self.indent_level = base;
                result?;
            }
        }
        self.indent_level = base;
        Ok(self)
    }

    /// Remove the last `n` characters.
    ///
    /// Fails with [`RenderError::BacktrackUnderflow`] and leaves the buffer
    /// untouched when fewer than `n` characters have been written.
    pub fn backtrack(&mut self, n: usize) -> Result<&mut Self, RenderError> {
        if n == 0 {
            return Ok(self);
        }

        match self.buffer.char_indices().rev().nth(n - 1) {
            Some((index, _)) => {
                self.buffer.truncate(index);
                Ok(self)
            }
            None => Err(RenderError::BacktrackUnderflow {
                requested: n,
                available: self.char_len(),
            }),
        }
    }

    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn set_indent_level(&mut self, level: usize) -> &mut Self {
        self.indent_level = level;
        self
    }

    /// Columns taken by the current indentation.
    pub fn indent_columns(&self) -> usize {
        self.indent_level * self.indent.width()
    }

    /// Number of characters written so far.
    pub fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the buffer and return the rendered text.
    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_write_line() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.write("a").write("b").write_line("c").write_line("");
        assert_eq!(buf.as_str(), "abc\n\n");
    }

    #[test]
    fn test_write_line_with_placeholders() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.write_line_with("{0} {1}({2});", &["Item", "getById", "id"]).unwrap();
        assert_eq!(buf.as_str(), "Item getById(id);\n");
    }

    #[test]
    fn test_line_uses_indentation() {
        let mut buf = RenderBuffer::new(Indent::spaces(2));
        buf.line("a {").indent().line("b;").line("").dedent().line("}");
        assert_eq!(buf.finish(), "a {\n  b;\n\n}\n");
    }

    #[test]
    fn test_emit_relative_depths() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.indent();
        buf.emit(
            &[(0, "class {0}"), (0, "{"), (1, "x;"), (0, ""), (0, "}")],
            &["A"],
        )
        .unwrap();
        assert_eq!(buf.as_str(), "    class A\n    {\n        x;\n\n    }\n");
        assert_eq!(buf.indent_level(), 1);
    }

    #[test]
    fn test_emit_restores_level_on_error() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.indent();
        let result = buf.emit(&[(2, "{0}")], &[]);
        assert!(result.is_err());
        assert_eq!(buf.indent_level(), 1);
    }

    #[test]
    fn test_backtrack_removes_trailing_separator() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.write("f(");
        for param in ["int a", "int b", "int c"] {
            buf.write(param).write(", ");
        }
        buf.backtrack(2).unwrap().write(")");
        assert_eq!(buf.as_str(), "f(int a, int b, int c)");
    }

    #[test]
    fn test_backtrack_spans_previous_writes() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.write_line("Active(1),").write_line("");
        buf.backtrack(3).unwrap().write_line(";");
        assert_eq!(buf.as_str(), "Active(1);\n");
    }

    #[test]
    fn test_backtrack_counts_characters() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.write("naïve, ");
        buf.backtrack(3).unwrap();
        assert_eq!(buf.as_str(), "naïv");
        assert_eq!(buf.char_len(), 4);
    }

    #[test]
    fn test_backtrack_whole_buffer() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.write("ab");
        buf.backtrack(2).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_backtrack_underflow_leaves_buffer_intact() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.write("ab");
        let err = buf.backtrack(3).unwrap_err();
        assert_eq!(
            err,
            RenderError::BacktrackUnderflow {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(buf.as_str(), "ab");
    }

    #[test]
    fn test_backtrack_zero_is_noop() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.backtrack(0).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_indent_columns() {
        let mut buf = RenderBuffer::new(Indent::JAVA);
        buf.indent().indent();
        assert_eq!(buf.indent_columns(), 8);
        buf.set_indent_level(0).dedent();
        assert_eq!(buf.indent_columns(), 0);
    }
}
