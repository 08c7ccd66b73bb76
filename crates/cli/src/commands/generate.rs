use anyhow::{Context, Result};
use mockif_core::GenerateConfig;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::utils::write_generated;

pub fn generate_command(input_dir: &Path, config: &GenerateConfig) -> Result<()> {
    debug!("Scanning Go package in {}", input_dir.display());

    let package = mockif_core::parse_dir(input_dir)
        .with_context(|| format!("Failed to parse Go package in {}", input_dir.display()))?;

    if package.interfaces.is_empty() {
        info!("no interfaces found in package provided, exiting.");
        return Ok(());
    }

    info!(
        "{} interface declarations found, generating mocks...",
        package.interfaces.len()
    );

    for interface in &package.interfaces {
        for method in interface
            .methods
            .iter()
            .filter(|method| method.has_unrecognised_types())
        {
            warn!(
                "{}.{} uses an unsupported type; the generated method will not compile",
                interface.name, method.name
            );
        }
    }

    let output = mockif_core::generate(&package).context("Failed to generate mocks")?;

    let output_path = config.output_path(input_dir);
    let pruner = config.build_pruner();
    debug!("Pruning imports with {}", pruner.name());
    let pruned = pruner
        .prune(&output_path, output.as_bytes())
        .with_context(|| format!("Failed to prune imports of {}", output_path.display()))?;

    if config.dry_run {
        std::io::stdout()
            .write_all(&pruned)
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    write_generated(&output_path, &pruned)?;
    info!("Done! Wrote {}", output_path.display());

    Ok(())
}
