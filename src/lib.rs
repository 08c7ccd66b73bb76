//! Shared fixtures for the end-to-end scenario tests.
//!
//! A [`GoPackageFixture`] is a throwaway directory of Go files that the
//! tests run the full parse, generate and prune pipeline against.

use mockif_core::{
    Package, Result,
    imports::{BuiltinPruner, ImportPruner},
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct GoPackageFixture {
    dir: TempDir,
}

impl GoPackageFixture {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Add (or replace) a file in the package directory
    pub fn with_file(self, name: &str, contents: &str) -> std::io::Result<Self> {
        fs::write(self.file_path(name), contents)?;
        Ok(self)
    }

    pub fn parse(&self) -> Result<Package> {
        mockif_core::parse_dir(self.path())
    }

    /// Parse the package and return the formatted mocks, before pruning
    pub fn generate(&self) -> Result<String> {
        mockif_core::generate(&self.parse()?)
    }

    /// Full pipeline as the command line runs it, with the builtin pruner
    pub fn generate_pruned(&self, output_filename: &str) -> Result<String> {
        let output = self.generate()?;
        let pruned =
            BuiltinPruner::new().prune(&self.file_path(output_filename), output.as_bytes())?;
        Ok(String::from_utf8_lossy(&pruned).into_owned())
    }
}
