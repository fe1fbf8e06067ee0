//! Model loading and configuration for the apigen SDK generator.
//!
//! Two kinds of files are handled here:
//! - `apigen.toml`: which model to read, which language to emit, where to put it
//! - the API model itself (JSON or TOML), deserialized into [`apigen_ir::ApiModel`]
//!   and validated before any rendering happens

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod language;
mod model_file;
mod validate;

pub use config::{ApigenToml, Config, GeneratorConfig};
pub use error::{Error, Result, SourceContext};
pub use language::Language;
pub use model_file::{ModelFile, ModelFormat, parse_model_str};
pub use validate::{ModelContext, validate_model};
