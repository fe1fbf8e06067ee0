//! Template rendering engine for the apigen SDK generator.
//!
//! This crate turns an [`apigen_ir::ApiModel`] into source units for any
//! target language described as data. Language crates (e.g.
//! `apigen-codegen-java`) supply a [`language::TargetLanguage`] and
//! implement [`language::LanguageCodegen`].
//!
//! # Module Organization
//!
//! - [`builder`] - Text buffer with backtrack, templates, indentation
//! - [`comment`] - Documentation comment reflow and framing
//! - [`types`] - Abstract type names and target type tables
//! - [`naming`] - Casing rules and reserved-word escaping
//! - [`language`] - Language definitions and the `LanguageCodegen` trait
//! - [`render`] - Per-member rendering (methods, properties, enum values)
//!
//! The [`TemplateDriver`] ties these together, producing one
//! [`SourceUnit`] per schema, per enum, and one for the client.

pub mod builder;
pub mod comment;
mod driver;
mod error;
pub mod language;
pub mod naming;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use driver::{GenerationReport, RenderOptions, SourceUnit, TemplateDriver, UnitKind};
pub use error::{PathDefect, RenderError, UnitFailure};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, PreviewResult};
