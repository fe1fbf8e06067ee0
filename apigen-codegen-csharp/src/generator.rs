use apigen_codegen::{
    GenerationReport, LanguageCodegen, RenderOptions, TemplateDriver, builder::Indent,
    language::TargetLanguage,
};
use apigen_ir::ApiModel;

use crate::{CSHARP_NAMING, CSHARP_SYNTAX, XML_DOC, csharp_type_table};

/// The C# language definition.
pub fn csharp_language() -> TargetLanguage {
    TargetLanguage {
        name: "csharp",
        extension: "cs",
        indent: Indent::CSHARP,
        types: csharp_type_table(),
        naming: CSHARP_NAMING,
        comments: XML_DOC,
        syntax: &CSHARP_SYNTAX,
    }
}

/// C# SDK generator.
///
/// Produces one partial client class holding a blocking and a `Task` form of
/// every method, one model class per schema and one enum plus lookup class
/// per enumeration.
pub struct Generator<'a> {
    model: &'a ApiModel,
    options: RenderOptions,
    language: TargetLanguage,
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a ApiModel, options: RenderOptions) -> Self {
        Self {
            model,
            options,
            language: csharp_language(),
        }
    }
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        self.language.name
    }

    fn render(&self) -> GenerationReport {
        TemplateDriver::new(&self.language, self.model, &self.options).render_all()
    }
}
