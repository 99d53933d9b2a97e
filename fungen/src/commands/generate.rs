use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fungen_manifest::FungenToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to fungen.toml (defaults to ./fungen.toml)
    #[arg(short, long, default_value = "fungen.toml")]
    pub config: PathBuf,

    /// Source root the generated file is written under
    #[arg(short, long, default_value = "build/generated/fungen")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let fungen_toml = FungenToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            fungen_toml.manifest(),
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }

        Ok(())
    }
}
