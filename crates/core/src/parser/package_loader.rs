use super::{
    go_parser::GoParser,
    interface_extractor::{InterfaceExtractor, ParsedFile},
    utils::{node_text, node_to_position},
};
use crate::{
    error::{Error, Result},
    types::Package,
};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};
use tree_sitter::Tree;

static TEST_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*_test\.go$").expect("test file pattern is valid"));

/// Whether `file_name` names a Go test file, which never contributes to mocks
pub fn is_test_file(file_name: &str) -> bool {
    TEST_FILE.is_match(file_name)
}

/// Parse a single in-memory Go file
pub fn parse_source(file_name: &str, source: &str) -> Result<ParsedFile> {
    let mut parser = GoParser::new()?;
    parse_file(&mut parser, &InterfaceExtractor::new(), file_name, source)
}

fn parse_file(
    parser: &mut GoParser,
    extractor: &InterfaceExtractor,
    file_name: &str,
    source: &str,
) -> Result<ParsedFile> {
    let tree = parser.parse_strict(file_name, source)?;
    let parsed = extractor.extract(&tree, source);
    if parsed.package.is_empty() {
        return Err(missing_package_clause(&tree, file_name, source));
    }
    Ok(parsed)
}

/// A file that parses but never declares its package, e.g. an empty file
fn missing_package_clause(tree: &Tree, file_name: &str, source: &str) -> Error {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let first = root
        .named_children(&mut cursor)
        .find(|node| node.kind() != "comment");

    let (line, column, snippet) = match first {
        Some(node) => {
            let position = node_to_position(&node, true);
            let snippet = node_text(&node, source)
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            (position.line + 1, position.character + 1, snippet)
        }
        None => (1, 1, "EOF".to_string()),
    };

    Error::SyntaxError {
        file: file_name.to_string(),
        line,
        column,
        snippet: format!("expected 'package', found {snippet}"),
    }
}

/// Parse every non-test Go file directly inside `dir` into one [`Package`].
///
/// Files are visited in name order. The package declared by the first file
/// wins; files belonging to any other package are skipped with a warning.
pub fn parse_dir(dir: impl AsRef<Path>) -> Result<Package> {
    let dir = dir.as_ref();
    let files = go_files(dir)?;
    if files.is_empty() {
        return Err(Error::NoGoFiles(dir.to_path_buf()));
    }

    let mut parser = GoParser::new()?;
    let extractor = InterfaceExtractor::new();
    let mut package: Option<Package> = None;

    for path in files {
        let file_name = path.display().to_string();
        debug!("Parsing {}", file_name);

        let source = fs::read_to_string(&path)?;
        let parsed = parse_file(&mut parser, &extractor, &file_name, &source)?;

        let selected = package.get_or_insert_with(|| Package {
            name: parsed.package.clone(),
            ..Package::default()
        });

        if parsed.package != selected.name {
            warn!(
                "Skipping {}: it belongs to package `{}`, not `{}`",
                file_name, parsed.package, selected.name
            );
            continue;
        }

        selected.imports.extend(parsed.imports);
        selected.interfaces.extend(parsed.interfaces);
    }

    Ok(package.unwrap_or_default())
}

/// Non-test `.go` files directly inside `dir`, sorted by name
fn go_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::ReadDirError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(".go") || is_test_file(name) {
            continue;
        }
        files.push(entry.path());
    }

    files.sort();
    Ok(files)
}
