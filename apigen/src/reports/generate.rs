//! Generate command report data structures.

use std::path::PathBuf;

use apigen_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Target language identifier.
    pub language: String,
    pub client_name: String,
    pub method_count: usize,
    pub schema_count: usize,
    pub enum_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
    /// One line per failed unit.
    pub failures: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
    /// One line per failed unit.
    pub failures: Vec<String>,
}

impl GenerateReport {
    pub fn failures(&self) -> &[String] {
        match &self.result {
            GenerationResult::Written(written) => &written.failures,
            GenerationResult::Preview(preview) => &preview.failures,
        }
    }

    /// Whether every unit rendered.
    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
        self.render_failures(out);
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!("{} ({})", self.client_name, self.language));
        out.preformatted(&format!(
            "{} methods, {} schemas, {} enums",
            self.method_count, self.schema_count, self.enum_count
        ));
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }
        if !written.unchanged.is_empty() {
            out.newline();
            out.preformatted(&format!("{} files unchanged", written.unchanged.len()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }

    fn render_failures(&self, out: &mut dyn Output) {
        let failures = self.failures();
        if failures.is_empty() {
            return;
        }

        out.newline();
        for failure in failures {
            out.error(failure);
        }
        out.error(&format!(
            "{} unit{} failed to render",
            failures.len(),
            if failures.len() == 1 { "" } else { "s" }
        ));
    }
}
