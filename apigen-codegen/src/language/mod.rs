//! Language definitions.
//!
//! A target language is data, not code:
//! - [`TargetLanguage`] - Type table, naming, comment style and syntax bundle
//! - [`Syntax`] - Positional templates for every construct the renderer emits
//! - [`LanguageCodegen`] - Trait implemented by each language crate's generator
//! - [`GenerateResult`] - Result of writing a generation run to disk
//! - [`PreviewResult`] - Files and failures of a dry run

mod syntax;
mod target;
mod traits;

pub use syntax::{
    EnumSyntax, MethodSyntax, PropertyDocs, PropertySyntax, Syntax, UnitSyntax, VerbStyle,
};
pub use target::TargetLanguage;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, PreviewResult};
