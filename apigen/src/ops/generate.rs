//! Generate operation - render the model and persist the units.

use apigen_ir::ApiModel;
use eyre::{Context, Result};

use super::Target;
use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Failed units never abort the operation; they are collected in the report.
pub fn generate(
    model: &ApiModel,
    target: &Target,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator =
        LanguageSupport::get(target.language).generator(model, target.render_options());

    let result = if opts.dry_run {
        let preview = generator.preview();
        GenerationResult::Preview(PreviewResult {
            files: preview.files,
            failures: preview.failed.iter().map(ToString::to_string).collect(),
        })
    } else {
        let gen_result = generator
            .generate(&target.output)
            .wrap_err_with(|| format!("Failed to write to {}", target.output.display()))?;

        GenerationResult::Written(WrittenResult {
            output_dir: target.output.clone(),
            written: gen_result.written,
            unchanged: gen_result.unchanged,
            failures: gen_result.failed.iter().map(ToString::to_string).collect(),
        })
    };

    Ok(GenerateReport {
        language: generator.language().to_string(),
        client_name: target.client_name.clone(),
        method_count: model.methods.len(),
        schema_count: model.schemas.len(),
        enum_count: model.enums.len(),
        result,
    })
}
