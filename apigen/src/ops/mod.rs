//! Core operations.
//!
//! This module contains the business logic for apigen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::PathBuf;

use apigen_codegen::RenderOptions;
use apigen_manifest::Language;

pub use check::check;
pub use generate::{GenerateOptions, generate};

/// A fully resolved generation target: config values with flag overrides applied.
#[derive(Debug, Clone)]
pub struct Target {
    pub model: PathBuf,
    pub language: Language,
    pub namespace: String,
    pub client_name: String,
    pub output: PathBuf,
    pub wrap_width: Option<usize>,
}

impl Target {
    pub fn render_options(&self) -> RenderOptions {
        let options = RenderOptions::new(&self.namespace, &self.client_name);
        match self.wrap_width {
            Some(width) => options.with_wrap_width(width),
            None => options,
        }
    }
}
