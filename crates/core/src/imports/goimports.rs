use super::ImportPruner;
use crate::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs the external `goimports` tool, which also adds missing imports
#[derive(Debug, Clone)]
pub struct GoImportsPruner {
    program: PathBuf,
}

impl Default for GoImportsPruner {
    fn default() -> Self {
        Self::new("goimports")
    }
}

impl GoImportsPruner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ImportPruner for GoImportsPruner {
    fn name(&self) -> &str {
        "goimports"
    }

    fn prune(&self, filename: &Path, source: &[u8]) -> Result<Vec<u8>> {
        debug!(
            "Running {} -srcdir {}",
            self.program.display(),
            filename.display()
        );

        let mut child = Command::new(&self.program)
            .arg("-srcdir")
            .arg(filename)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::PrunerError(format!("failed to run {}: {e}", self.program.display()))
            })?;

        // goimports reads all of stdin before writing anything
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source)?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::PrunerError(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(output.stdout)
    }
}
