use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use fungen_manifest::FungenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to fungen.toml (defaults to ./fungen.toml)
    #[arg(short, long, default_value = "fungen.toml")]
    pub config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let fungen_toml = FungenToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(fungen_toml.manifest(), fungen_toml.path())?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
