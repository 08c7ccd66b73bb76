use super::{
    type_expr::reconstruct_type,
    utils::{named_children_of_kind, node_text},
};
use crate::types::{Interface, Method, Param, TypeExpr};
use std::collections::BTreeMap;
use tracing::debug;
use tree_sitter::{Node, Tree};

/// What a single Go file contributes to its package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    pub package: String,
    pub interfaces: Vec<Interface>,
    /// Imports of the file; left empty when the file declares no interface
    pub imports: BTreeMap<String, String>,
}

pub struct InterfaceExtractor;

impl Default for InterfaceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, tree: &Tree, source: &str) -> ParsedFile {
        let root = tree.root_node();
        let mut parsed = ParsedFile::default();
        let mut imports = BTreeMap::new();

        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            match decl.kind() {
                "package_clause" => {
                    if let Some(name) = named_children_of_kind(&decl, "package_identifier").first()
                    {
                        parsed.package = node_text(name, source).to_string();
                    }
                }
                "import_declaration" => {
                    for (path, alias) in self.import_specs(&decl, source) {
                        imports.insert(path, alias);
                    }
                }
                "type_declaration" => {
                    for spec in named_children_of_kind(&decl, "type_spec") {
                        if let Some(interface) = self.interface_from_spec(&spec, source) {
                            debug!(
                                "Found interface {} with {} method(s)",
                                interface.name,
                                interface.methods.len()
                            );
                            parsed.interfaces.push(interface);
                        }
                    }
                }
                _ => {}
            }
        }

        if !parsed.interfaces.is_empty() {
            parsed.imports = imports;
        }

        parsed
    }

    /// `(path, alias)` pairs of one import declaration, single or grouped
    fn import_specs(&self, decl: &Node, source: &str) -> Vec<(String, String)> {
        let mut specs = named_children_of_kind(decl, "import_spec");
        for list in named_children_of_kind(decl, "import_spec_list") {
            specs.extend(named_children_of_kind(&list, "import_spec"));
        }

        specs
            .iter()
            .filter_map(|spec| {
                let path = spec.child_by_field_name("path")?;
                let path = node_text(&path, source)
                    .trim_matches(|c| c == '"' || c == '`')
                    .to_string();
                let alias = spec
                    .child_by_field_name("name")
                    .map(|name| node_text(&name, source).to_string())
                    .unwrap_or_default();
                Some((path, alias))
            })
            .collect()
    }

    fn interface_from_spec(&self, spec: &Node, source: &str) -> Option<Interface> {
        let ty = spec.child_by_field_name("type")?;
        if ty.kind() != "interface_type" {
            return None;
        }
        let name = spec.child_by_field_name("name")?;

        let mut methods = Vec::new();
        let mut cursor = ty.walk();
        for elem in ty.named_children(&mut cursor) {
            match elem.kind() {
                "method_elem" | "method_spec" => {
                    if let Some(method) = self.method_from_elem(&elem, source) {
                        methods.push(method);
                    }
                }
                "comment" => {}
                _ => debug!(
                    "Skipping embedded element `{}` of interface {}",
                    node_text(&elem, source),
                    node_text(&name, source)
                ),
            }
        }

        Some(Interface {
            name: node_text(&name, source).to_string(),
            methods,
        })
    }

    fn method_from_elem(&self, elem: &Node, source: &str) -> Option<Method> {
        let name = elem.child_by_field_name("name")?;

        let args = elem
            .child_by_field_name("parameters")
            .map(|params| self.params(&params, source))
            .unwrap_or_default();

        let returns = match elem.child_by_field_name("result") {
            Some(result) if result.kind() == "parameter_list" => self.params(&result, source),
            Some(result) => vec![Param::unnamed(reconstruct_type(&result, source))],
            None => Vec::new(),
        };

        Some(Method {
            name: node_text(&name, source).to_string(),
            args,
            returns,
        })
    }

    /// One descriptor per declared name, or one unnamed descriptor when the
    /// declaration lists only a type.
    fn params(&self, list: &Node, source: &str) -> Vec<Param> {
        let mut params = Vec::new();
        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            let ty = match decl.kind() {
                "parameter_declaration" => decl
                    .child_by_field_name("type")
                    .map(|ty| reconstruct_type(&ty, source))
                    .unwrap_or(TypeExpr::Unrecognised),
                // Variadic parameters are outside the supported grammar
                "variadic_parameter_declaration" => TypeExpr::Unrecognised,
                _ => continue,
            };

            let mut name_cursor = decl.walk();
            let names: Vec<String> = decl
                .children_by_field_name("name", &mut name_cursor)
                .map(|name| node_text(&name, source).to_string())
                .collect();

            if names.is_empty() {
                params.push(Param::unnamed(ty));
            } else {
                params.extend(names.into_iter().map(|name| Param::new(name, ty.clone())));
            }
        }
        params
    }
}
