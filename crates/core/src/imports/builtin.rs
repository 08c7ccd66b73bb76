use super::ImportPruner;
use crate::{
    error::{Error, Result},
    format::{self, Sentinel},
    parser::{
        GoParser,
        utils::{named_children_of_kind, node_text},
    },
};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use tree_sitter::Node;

/// Syntactic pruner: an import is kept when its local name is used as a
/// package qualifier somewhere in the file. Blank (`_`) and dot (`.`)
/// imports are always kept. Missing imports are never added.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinPruner;

impl BuiltinPruner {
    pub fn new() -> Self {
        Self
    }
}

impl ImportPruner for BuiltinPruner {
    fn name(&self) -> &str {
        "builtin"
    }

    fn prune(&self, filename: &Path, source: &[u8]) -> Result<Vec<u8>> {
        let source = std::str::from_utf8(source)
            .map_err(|e| Error::PrunerError(format!("{} is not UTF-8: {e}", filename.display())))?;
        let sentinel = Sentinel::for_source(source);
        let protected = sentinel.protect(source);

        let mut parser = GoParser::new()?;
        let tree = parser
            .parse_strict(&filename.display().to_string(), &protected)
            .map_err(|e| Error::PrunerError(e.to_string()))?;
        let root = tree.root_node();

        let mut used = HashSet::new();
        collect_qualifiers(&root, &protected, &mut used);

        // (byte range, replacement), applied back to front
        let mut edits = Vec::new();
        for decl in named_children_of_kind(&root, "import_declaration") {
            let mut specs = named_children_of_kind(&decl, "import_spec");
            for list in named_children_of_kind(&decl, "import_spec_list") {
                specs.extend(named_children_of_kind(&list, "import_spec"));
            }

            let kept: Vec<&str> = specs
                .iter()
                .filter(|spec| {
                    let keep = is_used(spec, &protected, &used);
                    if !keep {
                        debug!("Dropping unused import {}", node_text(spec, &protected));
                    }
                    keep
                })
                .map(|spec| node_text(spec, &protected))
                .collect();

            if kept.len() == specs.len() && !specs.is_empty() {
                continue;
            }

            let replacement = if kept.is_empty() {
                String::new()
            } else {
                let lines: String = kept.iter().map(|spec| format!("\t{spec}\n")).collect();
                format!("import (\n{lines})")
            };
            edits.push((decl.byte_range(), replacement));
        }

        let mut pruned = protected;
        for (range, replacement) in edits.into_iter().rev() {
            pruned.replace_range(range, &replacement);
        }

        Ok(format::source(&sentinel.restore(&pruned))?.into_bytes())
    }
}

fn is_used(spec: &Node, source: &str, used: &HashSet<String>) -> bool {
    let path = spec
        .child_by_field_name("path")
        .map(|path| node_text(&path, source).trim_matches(|c| c == '"' || c == '`'))
        .unwrap_or_default();

    let local = match spec.child_by_field_name("name") {
        Some(name) => match node_text(&name, source) {
            "_" | "." => return true,
            alias => alias.to_string(),
        },
        None => assumed_package_name(path),
    };
    used.contains(&local)
}

/// Identifiers used as `pkg.Name` in types or as the operand of a selector
fn collect_qualifiers(node: &Node, source: &str, used: &mut HashSet<String>) {
    match node.kind() {
        "qualified_type" => {
            if let Some(package) = node.child_by_field_name("package") {
                used.insert(node_text(&package, source).to_string());
            }
        }
        "selector_expression" => {
            if let Some(operand) = node.child_by_field_name("operand") {
                if operand.kind() == "identifier" {
                    used.insert(node_text(&operand, source).to_string());
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_qualifiers(&child, source, used);
    }
}

/// Package name Go tooling assumes for an import path without loading it:
/// the last path element, skipping a trailing `vN` major version, without a
/// `go-` prefix, cut at the first character that cannot appear in an
/// identifier.
pub fn assumed_package_name(path: &str) -> String {
    let mut elements = path.rsplit('/');
    let mut base = elements.next().unwrap_or(path);

    let is_major_version = base
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
    if is_major_version {
        if let Some(parent) = elements.next() {
            base = parent;
        }
    }

    let base = base.strip_prefix("go-").unwrap_or(base);
    base.chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
