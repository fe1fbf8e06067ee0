use apigen_manifest::ModelFile;
use clap::Args;
use eyre::Result;

use super::{TargetArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let target = self.target.load(None);
        let model = ModelFile::open(&target.model).unwrap_or_exit();

        let report = ops::check(model.model(), &target);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
