use anyhow::Result;
use clap::Parser;
use mockif_core::config::{DEFAULT_GOIMPORTS, DEFAULT_OUTPUT_FILENAME, GenerateConfig, PrunerKind};
use std::path::PathBuf;

use crate::commands::{generate_command, inspect_command};

/// Generate function-field mocks for every interface in a Go package
#[derive(Parser, Debug)]
#[command(name = "mockif")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Directory holding the Go package to scan (not recursive)
    pub input_dir: PathBuf,

    /// File name to write inside the input directory
    #[arg(default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output_filename: String,

    /// Print the generated file instead of writing it
    #[arg(short, long)]
    pub dry_run: bool,

    /// Print the parsed interfaces as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// How unused imports are removed: builtin, goimports or none
    #[arg(long, default_value_t = PrunerKind::Builtin)]
    pub pruner: PrunerKind,

    /// goimports executable used by `--pruner goimports`
    #[arg(long, default_value = DEFAULT_GOIMPORTS)]
    pub goimports_path: PathBuf,
}

impl Cli {
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig {
            output_filename: self.output_filename.clone(),
            pruner: self.pruner,
            goimports_path: self.goimports_path.clone(),
            dry_run: self.dry_run,
        }
    }

    /// Execute the command
    pub fn execute(self) -> Result<()> {
        if self.json {
            inspect_command(&self.input_dir)
        } else {
            generate_command(&self.input_dir, &self.config())
        }
    }
}
