use apigen_codegen::{
    GenerationReport, LanguageCodegen, RenderOptions, TemplateDriver, builder::Indent,
    language::TargetLanguage,
};
use apigen_ir::ApiModel;

use crate::{JAVA_NAMING, JAVADOC, JAVA_SYNTAX, java_type_table};

/// The Java language definition.
pub fn java_language() -> TargetLanguage {
    TargetLanguage {
        name: "java",
        extension: "java",
        indent: Indent::JAVA,
        types: java_type_table(),
        naming: JAVA_NAMING,
        comments: JAVADOC,
        syntax: &JAVA_SYNTAX,
    }
}

/// Java SDK generator.
///
/// Produces one client class holding a blocking and a `Future` form of
/// every method, one model class per schema and one enum per enumeration.
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
            language: java_language(),
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
