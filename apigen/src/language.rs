//! Unified language dispatch.
//!
//! Centralizes language-specific generator creation.

use apigen_codegen::{LanguageCodegen, RenderOptions};
use apigen_codegen_csharp::Generator as CSharpGenerator;
use apigen_codegen_java::Generator as JavaGenerator;
use apigen_ir::ApiModel;
use apigen_manifest::Language;

/// Language-specific support for code generation.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Create a generator for this language.
    pub fn generator<'a>(
        &self,
        model: &'a ApiModel,
        options: RenderOptions,
    ) -> Box<dyn LanguageCodegen + 'a> {
        match self.language {
            Language::Java => Box::new(JavaGenerator::new(model, options)),
            Language::CSharp => Box::new(CSharpGenerator::new(model, options)),
        }
    }
}
