//! Go source parsing and interface extraction using tree-sitter

pub mod go_parser;
pub mod interface_extractor;
pub mod package_loader;
pub mod type_expr;
pub mod utils;

// Re-export commonly used items
pub use go_parser::GoParser;
pub use interface_extractor::{InterfaceExtractor, ParsedFile};
pub use package_loader::{is_test_file, parse_dir, parse_source};
pub use type_expr::reconstruct_type;
pub use utils::{node_text, node_to_position};
