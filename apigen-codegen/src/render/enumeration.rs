//! Enum rendering: named constants and the reverse lookup table.

use apigen_ir::{EnumDescriptor, EnumValue};
use indexmap::IndexMap;

use super::MemberRenderer;
use crate::{
    RenderError,
    builder::{RenderBuffer, substitute},
    comment::DocBlock,
    naming::CasingRule,
};

/// Forward and reverse lookup over one enum's declared values.
///
/// When a name or value is declared twice the first declaration wins.
#[derive(Debug)]
pub struct EnumTable<'a> {
    by_name: IndexMap<&'a str, &'a EnumValue>,
    by_value: IndexMap<i64, &'a EnumValue>,
}

impl<'a> EnumTable<'a> {
    pub fn new(descriptor: &'a EnumDescriptor) -> Self {
        let mut by_name = IndexMap::new();
        let mut by_value = IndexMap::new();
        for value in &descriptor.values {
            by_name.entry(value.name.as_str()).or_insert(value);
            by_value.entry(value.value).or_insert(value);
        }
        Self { by_name, by_value }
    }

    /// Integer value of a named constant.
    pub fn ordinal(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).map(|value| value.value)
    }

    /// Constant declared with an integer value, `None` when there is none.
    pub fn constant(&self, value: i64) -> Option<&'a EnumValue> {
        self.by_value.get(&value).copied()
    }

    /// Distinct values in declared order.
    pub fn entries(&self) -> impl Iterator<Item = &'a EnumValue> + '_ {
        self.by_value.values().copied()
    }

    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }
}

impl MemberRenderer<'_> {
    /// Render one constant followed by the separator.
    pub fn render_enum_value(
        &self,
        buf: &mut RenderBuffer,
        value: &EnumValue,
    ) -> Result<(), RenderError> {
        let ordinal = i32::try_from(value.value)
            .map_err(|_| RenderError::EnumValueOutOfRange { value: value.value })?;
        let syntax = &self.language.syntax.enum_values;
        let name = self
            .language
            .naming
            .identifier(&value.name, CasingRule::AsDeclared);

        self.render_doc(buf, &DocBlock::new(value.comment.as_str()));
        buf.write_indent();
        buf.write(&substitute(
            syntax.constant,
            &[name.as_str(), ordinal.to_string().as_str()],
        )?);
        buf.write(syntax.separator);
        Ok(())
    }

    /// Replace the trailing separator after `count` constants with the terminator.
    pub fn finish_enum_values(
        &self,
        buf: &mut RenderBuffer,
        count: usize,
    ) -> Result<(), RenderError> {
        let syntax = &self.language.syntax.enum_values;

        if count == 0 {
            if !syntax.empty_terminator.is_empty() {
                buf.line(syntax.empty_terminator);
            }
            return Ok(());
        }

        buf.backtrack(syntax.separator.chars().count())?;
        buf.write_line(syntax.terminator);
        Ok(())
    }

    /// Render the reverse lookup from integer value to constant.
    pub fn render_enum_lookup(
        &self,
        buf: &mut RenderBuffer,
        descriptor: &EnumDescriptor,
    ) -> Result<(), RenderError> {
        let syntax = &self.language.syntax.enum_values;
        let enum_name = [descriptor.name.as_str()];
        let level = buf.indent_level();

        buf.set_indent_level(0);
        buf.emit(syntax.lookup_open, &enum_name)?;

        if let Some(entry) = syntax.lookup_entry {
            let table = EnumTable::new(descriptor);
            buf.set_indent_level(syntax.entry_depth);
            for value in table.entries() {
                let constant = self
                    .language
                    .naming
                    .identifier(&value.name, CasingRule::AsDeclared);
                buf.write_indent();
                buf.write(&substitute(
                    entry,
                    &[
                        value.value.to_string().as_str(),
                        descriptor.name.as_str(),
                        constant.as_str(),
                    ],
                )?);
                buf.write(syntax.entry_separator);
            }
            if !table.is_empty() {
                buf.backtrack(syntax.entry_separator.chars().count())?;
                buf.blank();
            }
            buf.set_indent_level(0);
        }

        buf.emit(syntax.lookup_close, &enum_name)?;
        buf.set_indent_level(level);
        Ok(())
    }
}
