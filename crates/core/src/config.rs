//! Generation settings shared by the library and the command line

use crate::imports::{BuiltinPruner, GoImportsPruner, ImportPruner, NoopPruner};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_OUTPUT_FILENAME: &str = "mocks.go";
pub const DEFAULT_GOIMPORTS: &str = "goimports";

/// Which unused-import pruner runs on the generated file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrunerKind {
    #[default]
    Builtin,
    GoImports,
    None,
}

impl FromStr for PrunerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "builtin" => Ok(PrunerKind::Builtin),
            "goimports" => Ok(PrunerKind::GoImports),
            "none" | "off" => Ok(PrunerKind::None),
            other => Err(format!(
                "unknown pruner `{other}` (expected builtin, goimports or none)"
            )),
        }
    }
}

impl fmt::Display for PrunerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrunerKind::Builtin => "builtin",
            PrunerKind::GoImports => "goimports",
            PrunerKind::None => "none",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// File name written inside the input directory
    pub output_filename: String,
    pub pruner: PrunerKind,
    /// `goimports` executable, used when `pruner` is `goimports`
    pub goimports_path: PathBuf,
    /// Print instead of writing
    pub dry_run: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            pruner: PrunerKind::default(),
            goimports_path: PathBuf::from(DEFAULT_GOIMPORTS),
            dry_run: false,
        }
    }
}

impl GenerateConfig {
    /// Where the mocks for `input_dir` are written
    pub fn output_path(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(&self.output_filename)
    }

    pub fn build_pruner(&self) -> Box<dyn ImportPruner> {
        match self.pruner {
            PrunerKind::Builtin => Box::new(BuiltinPruner::new()),
            PrunerKind::GoImports => Box::new(GoImportsPruner::new(&self.goimports_path)),
            PrunerKind::None => Box::new(NoopPruner),
        }
    }
}
