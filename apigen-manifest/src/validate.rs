//! Model-construction validation.
//!
//! Rendering trusts the model's names; this pass rejects the defects that
//! would otherwise surface as broken source text: duplicate type names,
//! colliding or out-of-range enum values, and names that cannot become
//! identifiers in any target language. Per-method binding defects (body
//! count, path placeholders) are left to the renderer, which reports them
//! per unit.

use std::collections::{HashMap, HashSet};

use apigen_ir::ApiModel;
use miette::SourceSpan;

use crate::{Error, Result, SourceContext};

/// Validation context that carries source information for diagnostics.
#[derive(Debug, Clone)]
pub struct ModelContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ModelContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn source(&self) -> SourceContext {
        SourceContext::new(self.src, self.filename)
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src, name)
    }

    /// Validate that a name can become an identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            Some(reason) => Err(self.source().invalid_identifier_error(
                name,
                kind,
                reason,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }

    fn duplicate_name_error(&self, kind: &str, name: &str) -> Box<Error> {
        let spans = find_name_spans(self.src, name);
        Box::new(Error::DuplicateName {
            src: self.source().named_source(),
            first_span: spans.first().copied(),
            second_span: spans.get(1).copied(),
            kind: kind.to_string(),
            name: name.to_string(),
        })
    }

    fn value_range_error(&self, enum_name: &str, name: &str, value: i64) -> Box<Error> {
        Box::new(Error::EnumValueOutOfRange {
            src: self.source().named_source(),
            span: self.find_span(name),
            enum_name: enum_name.to_string(),
            name: name.to_string(),
            value,
        })
    }

    fn duplicate_value_error(
        &self,
        enum_name: &str,
        value: i64,
        first: &str,
        second: &str,
    ) -> Box<Error> {
        Box::new(Error::DuplicateEnumValue {
            src: self.source().named_source(),
            span: self.find_span(second),
            enum_name: enum_name.to_string(),
            value,
            first: first.to_string(),
            second: second.to_string(),
        })
    }
}

/// Validate a parsed model.
pub fn validate_model(model: &ApiModel, ctx: &ModelContext<'_>) -> Result<()> {
    let mut type_names: HashMap<&str, &str> = HashMap::new();

    for schema in &model.schemas {
        ctx.validate_name(&schema.name, "schema")?;
        if type_names.insert(&schema.name, "schema").is_some() {
            return Err(ctx.duplicate_name_error("type", &schema.name));
        }

        for property in &schema.properties {
            // Dotted qualifiers are stripped before rendering, so each
            // segment has to be valid on its own.
            for segment in property.name.split('.') {
                ctx.validate_name(segment, &format!("property in '{}'", schema.name))?;
            }
        }
    }

    for descriptor in &model.enums {
        ctx.validate_name(&descriptor.name, "enum")?;
        if type_names.insert(&descriptor.name, "enum").is_some() {
            return Err(ctx.duplicate_name_error("type", &descriptor.name));
        }

        let mut seen: HashMap<i64, &str> = HashMap::new();
        let mut value_names: HashSet<&str> = HashSet::new();
        for value in &descriptor.values {
            ctx.validate_name(&value.name, &format!("value in '{}'", descriptor.name))?;
            if !value_names.insert(&value.name) {
                return Err(ctx.duplicate_name_error(
                    &format!("value in enum '{}'", descriptor.name),
                    &value.name,
                ));
            }
            if i32::try_from(value.value).is_err() {
                return Err(ctx.value_range_error(&descriptor.name, &value.name, value.value));
            }
            if let Some(first) = seen.insert(value.value, &value.name) {
                return Err(ctx.duplicate_value_error(
                    &descriptor.name,
                    value.value,
                    first,
                    &value.name,
                ));
            }
        }
    }

    let mut method_names: HashSet<&str> = HashSet::new();
    for method in &model.methods {
        ctx.validate_name(&method.name, "method")?;
        if !method_names.insert(&method.name) {
            return Err(ctx.duplicate_name_error("method", &method.name));
        }

        for param in &method.params {
            ctx.validate_name(&param.name, &format!("parameter in '{}'", method.name))?;
        }
    }

    Ok(())
}

/// Find the span of a name in JSON or TOML source.
///
/// Names are string values in both formats, so the quoted form is searched
/// first. The span covers the name without its quotes.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    find_name_spans(src, name).into_iter().next()
}

/// Find every quoted occurrence of a name, falling back to the first bare one.
pub(crate) fn find_name_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    if name.is_empty() {
        return Vec::new();
    }

    let quoted = format!("\"{}\"", name);
    let spans: Vec<SourceSpan> = src
        .match_indices(&quoted)
        .map(|(pos, _)| SourceSpan::from((pos + 1, name.len())))
        .collect();

    if !spans.is_empty() {
        return spans;
    }

    src.find(name)
        .map(|pos| vec![SourceSpan::from((pos, name.len()))])
        .unwrap_or_default()
}

/// Validate that a name is a plain identifier.
/// Returns None if valid, Some(reason) if invalid
///
/// Reserved words are not rejected here: each target language escapes its
/// own keywords when rendering.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
