//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Outcome of one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    Rendered { path: String },
    Failed { message: String },
}

/// Report data from a render-only run.
#[derive(Debug)]
pub struct CheckReport {
    pub model_path: PathBuf,
    pub language: String,
    /// Per-unit status in declared order.
    pub units: Vec<UnitStatus>,
}

impl CheckReport {
    /// Whether every unit rendered.
    pub fn is_valid(&self) -> bool {
        self.units
            .iter()
            .all(|unit| matches!(unit, UnitStatus::Rendered { .. }))
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let mut failed = 0;
        for unit in &self.units {
            match unit {
                UnitStatus::Rendered { path } => out.list_item(&format!("ok    {}", path)),
                UnitStatus::Failed { message } => {
                    failed += 1;
                    out.error(message);
                }
            }
        }
        out.newline();

        if failed == 0 {
            out.preformatted(&format!(
                "✓ {} renders cleanly as {} ({} units)",
                self.model_path.display(),
                self.language,
                self.units.len()
            ));
        } else {
            out.preformatted(&format!(
                "✗ {} of {} units failed to render",
                failed,
                self.units.len()
            ));
        }
    }
}
