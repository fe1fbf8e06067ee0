mod generator;
mod naming;
mod syntax;
mod type_table;

pub use apigen_codegen::{
    GenerateResult, LanguageCodegen, PreviewFile, PreviewResult, RenderOptions,
};
pub use generator::{Generator, java_language};
pub use naming::JAVA_NAMING;
pub use syntax::{JAVADOC, JAVA_SYNTAX};
pub use type_table::java_type_table;
