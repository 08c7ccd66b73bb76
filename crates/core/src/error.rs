use std::io;
use std::path::PathBuf;

/// Errors that can occur while extracting interfaces or generating mocks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Cannot read directory {path}: {source}")]
    ReadDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No Go source files found in {0}")]
    NoGoFiles(PathBuf),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Syntax error in {file}:{line}:{column} near `{snippet}`")]
    SyntaxError {
        file: String,
        line: u32,
        column: u32,
        snippet: String,
    },

    #[error("Generated source could not be formatted: {0}")]
    FormatError(String),

    #[error("Import pruning failed: {0}")]
    PrunerError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for mockif operations
pub type Result<T> = std::result::Result<T, Error>;
