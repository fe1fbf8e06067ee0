mod check;
mod generate;

use std::path::PathBuf;

use apigen_manifest::{ApigenToml, Language};
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

use crate::ops::Target;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for apigen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "apigen")]
#[command(version)]
#[command(about = "Generate API client SDKs from a declarative API model")]
pub(crate) struct Cli {
    /// Log rendering progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the SDK and write it to the output directory
    Generate(GenerateCommand),

    /// Render the SDK without writing anything and report per-unit status
    Check(CheckCommand),
}

/// Options shared by every command that reads apigen.toml.
#[derive(Args)]
pub(crate) struct TargetArgs {
    /// Path to apigen.toml
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,

    /// API model file (overrides apigen.toml setting)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Target language (overrides apigen.toml setting)
    #[arg(short, long)]
    pub language: Option<Language>,
}

impl TargetArgs {
    /// Load apigen.toml and apply command line overrides.
    pub fn load(&self, output: Option<&PathBuf>) -> Target {
        let apigen_toml = ApigenToml::open(&self.config).unwrap_or_exit();
        let generator = &apigen_toml.config().generator;

        // Flags are relative to the working directory, config values to the config file
        let model = match &self.model {
            Some(model) => model.clone(),
            None => apigen_toml.resolve(&generator.model),
        };
        let output = match output {
            Some(output) => output.clone(),
            None => apigen_toml.resolve(&generator.output),
        };

        Target {
            model,
            language: self.language.unwrap_or(generator.language),
            namespace: generator.namespace.clone(),
            client_name: generator.client_name.clone(),
            output,
            wrap_width: generator.wrap_width,
        }
    }
}
