//! Template driver.
//!
//! Walks the model's top-level collections and produces one source unit per
//! schema, one per enum, and one client unit aggregating every method. Each
//! unit gets a fresh [`RenderBuffer`]; units share nothing mutable, so they
//! render in parallel and a failure in one never touches another.

use std::{
    fmt, iter,
    path::{Path, PathBuf},
};

use apigen_core::GeneratedFile;
use apigen_ir::{ApiModel, EnumDescriptor, SchemaDescriptor};
use rayon::prelude::*;
use tracing::{debug, debug_span, info, warn};

use crate::{
    RenderError, UnitFailure,
    builder::RenderBuffer,
    comment::{DEFAULT_WRAP_WIDTH, DocBlock},
    language::TargetLanguage,
    render::MemberRenderer,
    types::TypeMapper,
};

/// Kind of source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// The aggregate client holding every method
    Client,
    Schema,
    Enum,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Client => "client",
            UnitKind::Schema => "schema",
            UnitKind::Enum => "enum",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finished source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub name: String,
    pub kind: UnitKind,
    /// Target language identifier
    pub language: &'static str,
    /// Path relative to the output directory
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile for SourceUnit {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Options shared by every unit of a run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Package or namespace of the generated sources
    pub namespace: String,
    pub client_name: String,
    pub wrap_width: usize,
}

impl RenderOptions {
    pub fn new(namespace: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            client_name: client_name.into(),
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }

    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }
}

/// Per-unit outcome of a run, in declared order: client, schemas, enums.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub units: Vec<Result<SourceUnit, UnitFailure>>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &SourceUnit> {
        self.units.iter().filter_map(|unit| unit.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &UnitFailure> {
        self.units.iter().filter_map(|unit| unit.as_ref().err())
    }

    pub fn is_success(&self) -> bool {
        self.units.iter().all(Result::is_ok)
    }
}

/// An error raised while rendering a unit, before the unit is attached.
#[derive(Debug)]
struct MemberError {
    member: Option<String>,
    error: RenderError,
}

impl From<RenderError> for MemberError {
    fn from(error: RenderError) -> Self {
        Self {
            member: None,
            error,
        }
    }
}

fn at(member: &str) -> impl FnOnce(RenderError) -> MemberError + '_ {
    move |error| MemberError {
        member: Some(member.to_string()),
        error,
    }
}

enum Job<'m> {
    Client,
    Schema(&'m SchemaDescriptor),
    Enum(&'m EnumDescriptor),
}

/// Drives rendering of a whole model for one target language.
pub struct TemplateDriver<'a> {
    language: &'a TargetLanguage,
    model: &'a ApiModel,
    options: &'a RenderOptions,
    types: TypeMapper<'a>,
}

impl<'a> TemplateDriver<'a> {
    pub fn new(
        language: &'a TargetLanguage,
        model: &'a ApiModel,
        options: &'a RenderOptions,
    ) -> Self {
        Self {
            language,
            model,
            options,
            types: TypeMapper::for_model(&language.types, model),
        }
    }

    /// Render the client unit holding both forms of every method.
    pub fn render_client(&self) -> Result<SourceUnit, UnitFailure> {
        self.render_unit(UnitKind::Client, &self.options.client_name, "", |renderer, buf| {
            for (index, method) in self.model.methods.iter().enumerate() {
                if index > 0 {
                    buf.blank();
                }
                renderer.render_method(buf, method).map_err(at(&method.name))?;
            }
            Ok(())
        })
    }

    /// Render one schema: every field, then every accessor pair.
    pub fn render_schema(&self, schema: &SchemaDescriptor) -> Result<SourceUnit, UnitFailure> {
        self.render_unit(UnitKind::Schema, &schema.name, &schema.comment, |renderer, buf| {
            for property in &schema.properties {
                renderer
                    .render_field(buf, property)
                    .map_err(at(&property.name))?;
            }
            for property in &schema.properties {
                renderer
                    .render_accessors(buf, property)
                    .map_err(at(&property.name))?;
            }
            Ok(())
        })
    }

    /// Render one enum: constants, then the reverse lookup.
    pub fn render_enum(&self, descriptor: &EnumDescriptor) -> Result<SourceUnit, UnitFailure> {
        self.render_unit(UnitKind::Enum, &descriptor.name, &descriptor.summary, |renderer, buf| {
            for value in &descriptor.values {
                renderer
                    .render_enum_value(buf, value)
                    .map_err(at(&value.name))?;
            }
            renderer.finish_enum_values(buf, descriptor.values.len())?;
            renderer.render_enum_lookup(buf, descriptor)?;
            Ok(())
        })
    }

    /// Render every unit of the model concurrently.
    ///
    /// The report keeps declared order regardless of completion order.
    pub fn render_all(&self) -> GenerationReport {
        let jobs: Vec<Job<'_>> = iter::once(Job::Client)
            .chain(self.model.schemas.iter().map(Job::Schema))
            .chain(self.model.enums.iter().map(Job::Enum))
            .collect();

        let units: Vec<_> = jobs
            .par_iter()
            .map(|job| match job {
                Job::Client => self.render_client(),
                Job::Schema(schema) => self.render_schema(schema),
                Job::Enum(descriptor) => self.render_enum(descriptor),
            })
            .collect();

        let failed = units.iter().filter(|unit| unit.is_err()).count();
        info!(
            language = self.language.name,
            rendered = units.len() - failed,
            failed,
            "generation finished"
        );

        GenerationReport { units }
    }

    fn render_unit<F>(
        &self,
        kind: UnitKind,
        name: &str,
        doc: &str,
        members: F,
    ) -> Result<SourceUnit, UnitFailure>
    where
        F: FnOnce(&MemberRenderer<'_>, &mut RenderBuffer) -> Result<(), MemberError>,
    {
        let _span = debug_span!("unit", %kind, name).entered();
        let renderer = MemberRenderer::new(self.language, &self.types, self.options.wrap_width);

        match self.frame(&renderer, kind, name, doc, members) {
            Ok(content) => {
                debug!(bytes = content.len(), "rendered");
                Ok(SourceUnit {
                    name: name.to_string(),
                    kind,
                    language: self.language.name,
                    path: self.language.file_name(kind, name),
                    content,
                })
            }
            Err(MemberError { member, error }) => {
                warn!(
                    member = member.as_deref().unwrap_or("-"),
                    %error,
                    "unit failed to render, skipping"
                );
                Err(UnitFailure {
                    unit: name.to_string(),
                    kind,
                    member,
                    error,
                })
            }
        }
    }

    /// Open a fresh buffer, write the unit framing around the members and
    /// return the finished text.
    fn frame<F>(
        &self,
        renderer: &MemberRenderer<'_>,
        kind: UnitKind,
        name: &str,
        doc: &str,
        members: F,
    ) -> Result<String, MemberError>
    where
        F: FnOnce(&MemberRenderer<'_>, &mut RenderBuffer) -> Result<(), MemberError>,
    {
        let syntax = self.language.unit_syntax(kind);
        let args = [self.options.namespace.as_str(), name];
        let mut buf = RenderBuffer::new(self.language.indent);

        buf.emit(syntax.preamble, &args)?;
        buf.set_indent_level(syntax.doc_depth);
        renderer.render_doc(&mut buf, &DocBlock::new(doc));
        buf.set_indent_level(0);
        buf.emit(syntax.open, &args)?;

        buf.set_indent_level(syntax.member_depth);
        members(renderer, &mut buf)?;

        buf.set_indent_level(0);
        buf.emit(syntax.close, &args)?;
        Ok(buf.finish())
    }
}

#[cfg(test)]
mod tests {
    use apigen_ir::{HttpVerb, MethodDescriptor, ParameterDescriptor, PropertyDescriptor};

    use super::*;
    use crate::testing;

    fn options() -> RenderOptions {
        RenderOptions::new("com.example", "ExampleClient")
    }

    #[test]
    fn test_render_client() {
        let language = testing::language();
        let model = testing::item_model();
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let unit = driver.render_client().unwrap();
        assert_eq!(unit.name, "ExampleClient");
        assert_eq!(unit.kind, UnitKind::Client);
        assert_eq!(unit.path, PathBuf::from("ExampleClient.txt"));
        assert!(unit.content.starts_with("package com.example;\n\nclass ExampleClient {\n"));
        assert!(unit.content.contains("    Item getById(int id) {\n"));
        assert!(unit.content.contains("    Future<Item> getByIdAsync(int id) {\n"));
        assert!(unit.content.contains("        path.applyField(\"id\", id);\n"));
        assert!(unit.content.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_render_schema() {
        let language = testing::language();
        let model = testing::item_model();
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let unit = driver.render_schema(&model.schemas[0]).unwrap();
        assert_eq!(unit.path, PathBuf::from("models/Item.txt"));
        assert_eq!(
            unit.content,
            r#"package com.example.models;

class Item {
    private int id;
    private String name;

    /**
     * Getter for id
     */
    int getId() { return id; }
    /**
     * Setter for id
     */
    void setId(int value) { id = value; }

    /**
     * Getter for name
     */
    String getName() { return name; }
    /**
     * Setter for name
     */
    void setName(String value) { name = value; }
}
"#
        );
    }

    #[test]
    fn test_render_enum() {
        let language = testing::language();
        let model = testing::item_model();
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let unit = driver.render_enum(&model.enums[0]).unwrap();
        assert_eq!(unit.path, PathBuf::from("enums/Status.txt"));
        assert_eq!(
            unit.content,
            r#"package com.example.enums;

enum Status {
    Active(1),
    Inactive(2);

    static Status fromValue(int value) {
        switch (value) {
            case 1: return Status.Active;
            case 2: return Status.Inactive;
        }
        return null;
    }
}
"#
        );
    }

    #[test]
    fn test_render_empty_enum() {
        let language = testing::language();
        let model = ApiModel::new().with_enum(EnumDescriptor::new("Empty"));
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let unit = driver.render_enum(&model.enums[0]).unwrap();
        assert!(unit.content.contains("enum Empty {\n    ;\n\n    static Empty fromValue"));
        assert!(unit.content.contains("        switch (value) {\n        }\n"));
    }

    #[test]
    fn test_unit_doc_comment() {
        let language = testing::language();
        let model = ApiModel::new()
            .with_schema(SchemaDescriptor::new("Address").with_comment("A postal address"));
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let unit = driver.render_schema(&model.schemas[0]).unwrap();
        assert!(unit.content.contains("\n/**\n * A postal address\n */\nclass Address {\n"));
    }

    #[test]
    fn test_render_all_keeps_declared_order() {
        let language = testing::language();
        let model = testing::item_model()
            .with_schema(SchemaDescriptor::new("Address"))
            .with_enum(EnumDescriptor::new("Kind").with_value("A", 1));
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let report = driver.render_all();
        assert!(report.is_success());
        let names: Vec<&str> = report.succeeded().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["ExampleClient", "Item", "Address", "Status", "Kind"]);
    }

    #[test]
    fn test_failure_is_isolated_to_its_unit() {
        let language = testing::language();
        let model = testing::item_model()
            .with_method(
                MethodDescriptor::new("Upload", HttpVerb::Post, "/files", "string")
                    .with_param(ParameterDescriptor::body("first", "binary"))
                    .with_param(ParameterDescriptor::body("second", "binary")),
            )
            .with_schema(
                SchemaDescriptor::new("Broken")
                    .with_property(PropertyDescriptor::new("widget", "Widget")),
            );
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let report = driver.render_all();
        assert!(!report.is_success());

        let failures: Vec<&UnitFailure> = report.failures().collect();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].unit, "ExampleClient");
        assert_eq!(failures[0].member.as_deref(), Some("Upload"));
        assert!(matches!(
            failures[0].error,
            RenderError::AmbiguousBodyBinding { .. }
        ));
        assert_eq!(failures[1].unit, "Broken");
        assert_eq!(failures[1].kind, UnitKind::Schema);
        assert_eq!(failures[1].member.as_deref(), Some("widget"));

        let rendered: Vec<&str> = report.succeeded().map(|u| u.name.as_str()).collect();
        assert_eq!(rendered, vec!["Item", "Status"]);
    }

    #[test]
    fn test_enum_value_outside_i32_fails_unit() {
        let language = testing::language();
        let model = testing::item_model().with_enum(
            EnumDescriptor::new("Big")
                .with_value("Small", i64::from(i32::MIN))
                .with_value("Huge", 3_000_000_000),
        );
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let report = driver.render_all();
        let failures: Vec<&UnitFailure> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].unit, "Big");
        assert_eq!(failures[0].kind, UnitKind::Enum);
        assert_eq!(failures[0].member.as_deref(), Some("Huge"));
        assert_eq!(
            failures[0].error,
            RenderError::EnumValueOutOfRange {
                value: 3_000_000_000
            }
        );
        assert!(report.succeeded().any(|u| u.name == "Status"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let language = testing::language();
        let model = testing::item_model();
        let options = options();
        let driver = TemplateDriver::new(&language, &model, &options);

        let contents = |report: GenerationReport| -> Vec<String> {
            report.succeeded().map(|u| u.content.clone()).collect()
        };
        assert_eq!(contents(driver.render_all()), contents(driver.render_all()));
    }

    #[test]
    fn test_source_unit_is_generated_file() {
        let unit = SourceUnit {
            name: "Item".into(),
            kind: UnitKind::Schema,
            language: "test",
            path: PathBuf::from("models/Item.txt"),
            content: "class Item {}\n".into(),
        };
        let temp = tempfile::TempDir::new().unwrap();

        assert_eq!(
            GeneratedFile::path(&unit, temp.path()),
            temp.path().join("models/Item.txt")
        );
        assert_eq!(
            unit.write(temp.path()).unwrap(),
            apigen_core::WriteResult::Written
        );
        assert_eq!(
            unit.write(temp.path()).unwrap(),
            apigen_core::WriteResult::Unchanged
        );
    }
}
