//! Removal of imports the generated file does not use
//!
//! The emitter copies every import of every file that declared an
//! interface, so most generated files carry imports they never reference.
//! A pruner takes the target file name and its contents and returns the
//! cleaned contents.

pub mod builtin;
pub mod goimports;

use crate::error::Result;
use std::path::Path;

pub use builtin::{BuiltinPruner, assumed_package_name};
pub use goimports::GoImportsPruner;

/// Trait for import pruning strategies
pub trait ImportPruner {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Return `source` with unused imports removed. `filename` is where the
    /// result will be written; tools may use it to resolve imports.
    fn prune(&self, filename: &Path, source: &[u8]) -> Result<Vec<u8>>;
}

/// Leaves the source untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPruner;

impl ImportPruner for NoopPruner {
    fn name(&self) -> &str {
        "none"
    }

    fn prune(&self, _filename: &Path, source: &[u8]) -> Result<Vec<u8>> {
        Ok(source.to_vec())
    }
}
