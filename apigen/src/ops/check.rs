//! Check operation - render every unit without writing anything.

use apigen_ir::ApiModel;

use super::Target;
use crate::{
    language::LanguageSupport,
    reports::{CheckReport, UnitStatus},
};

/// Execute the check operation.
pub fn check(model: &ApiModel, target: &Target) -> CheckReport {
    let generator =
        LanguageSupport::get(target.language).generator(model, target.render_options());
    let report = generator.render();

    let units = report
        .units
        .iter()
        .map(|unit| match unit {
            Ok(unit) => UnitStatus::Rendered {
                path: unit.path.display().to_string(),
            },
            Err(failure) => UnitStatus::Failed {
                message: failure.to_string(),
            },
        })
        .collect();

    CheckReport {
        model_path: target.model.clone(),
        language: generator.language().to_string(),
        units,
    }
}
