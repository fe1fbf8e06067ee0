mod generator;
mod naming;
mod syntax;
mod type_table;

pub use apigen_codegen::{
    GenerateResult, LanguageCodegen, PreviewFile, PreviewResult, RenderOptions,
};
pub use generator::{Generator, csharp_language};
pub use naming::CSHARP_NAMING;
pub use syntax::{CSHARP_SYNTAX, XML_DOC};
pub use type_table::csharp_type_table;
