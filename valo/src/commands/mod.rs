mod check;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for valo_manifest::Result<T> {
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
#[command(name = "valo")]
#[command(version)]
#[command(about = "Generate wrapper value types from TOML definitions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate valo.toml without writing code
    Check(CheckCommand),

    /// Generate wrapper source files from valo.toml
    Generate(GenerateCommand),
}
