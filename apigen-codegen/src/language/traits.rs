//! Language-agnostic code generation traits.

use std::path::Path;

use apigen_core::{GeneratedFile, WriteResult};
use eyre::Result;

use crate::{GenerationReport, UnitFailure};

/// Trait for language-specific SDK generators.
///
/// Implement this trait to add support for generating an SDK in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java", "csharp")
    fn language(&self) -> &'static str;

    /// Render every unit without touching the filesystem
    fn render(&self) -> GenerationReport;

    /// Render all units for a dry run, without writing to disk
    fn preview(&self) -> PreviewResult {
        let mut result = PreviewResult::default();

        for unit in self.render().units {
            match unit {
                Ok(unit) => result.files.push(PreviewFile {
                    path: unit.path.display().to_string(),
                    content: unit.content,
                }),
                Err(failure) => result.failed.push(failure),
            }
        }

        result
    }

    /// Render all units and write the successful ones into `output_dir`.
    ///
    /// Failed units are returned in the result rather than as an error, so a
    /// single bad model entry never prevents the other files from being written.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for unit in self.render().units {
            match unit {
                Ok(unit) => {
                    let path = unit.path.display().to_string();
                    match unit.write(output_dir)? {
                        WriteResult::Written => result.written.push(path),
                        WriteResult::Unchanged => result.unchanged.push(path),
                    }
                }
                Err(failure) => result.failed.push(failure),
            }
        }

        Ok(result)
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<String>,
    /// Files whose content on disk was already up to date
    pub unchanged: Vec<String>,
    /// Units that failed to render
    pub failed: Vec<UnitFailure>,
}

impl GenerateResult {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Result of a dry run
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Files that would be written
    pub files: Vec<PreviewFile>,
    /// Units that failed to render
    pub failed: Vec<UnitFailure>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
