//! mockif - generate function-field mocks for Go interfaces
//!
//! This crate provides functionality to:
//! - Parse the Go files of one package directory and extract every interface
//! - Reconstruct method signatures into textual type expressions
//! - Emit a formatted `mocks.go` with one delegating struct per interface
//! - Prune the imports the generated file does not use
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod imports;
pub mod parser;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{GenerateConfig, PrunerKind};
pub use generator::generate;
pub use imports::ImportPruner;
pub use parser::parse_dir;
