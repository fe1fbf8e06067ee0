use std::path::PathBuf;

use apigen_manifest::ModelFile;
use clap::Args;
use eyre::Result;

use super::{TargetArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output directory (overrides apigen.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the rendered files instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let target = self.target.load(self.output.as_ref());
        let model = ModelFile::open(&target.model).unwrap_or_exit();

        let report = ops::generate(
            model.model(),
            &target,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
