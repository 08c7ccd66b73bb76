use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Print the parsed package descriptor as pretty JSON
pub fn inspect_command(input_dir: &Path) -> Result<()> {
    debug!("Inspecting Go package in {}", input_dir.display());

    let package = mockif_core::parse_dir(input_dir)
        .with_context(|| format!("Failed to parse Go package in {}", input_dir.display()))?;

    println!("{}", package.to_json_pretty()?);
    Ok(())
}
