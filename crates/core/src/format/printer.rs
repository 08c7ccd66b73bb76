use crate::parser::utils::{named_children_of_kind, node_text};
use tree_sitter::Node;

/// Most line breaks kept between two top-level declarations
const MAX_NEWLINES: usize = 2;

/// Keyword that opens the declaration at the head of `decls`.
///
/// A comment takes the keyword of the declaration it documents, so a doc
/// comment and its declaration separate from their neighbours as one unit.
/// Consecutive declarations with the same keyword are printed without a
/// blank line unless the source had one.
fn declaration_token(decls: &[Node]) -> &'static str {
    let mut rest = decls;
    while let [comment, next, ..] = rest {
        if comment.kind() != "comment"
            || next.start_position().row != comment.end_position().row + 1
        {
            break;
        }
        rest = &rest[1..];
    }
    match rest.first().map(|decl| decl.kind()) {
        Some("package_clause") => "package",
        Some("import_declaration") => "import",
        Some("type_declaration") => "type",
        Some("function_declaration" | "method_declaration") => "func",
        Some("var_declaration") => "var",
        Some("const_declaration") => "const",
        Some("comment") => "comment",
        _ => "other",
    }
}

/// Canonical printer for the subset of Go the generator emits.
///
/// Declarations, signatures, struct fields and forwarding statements are
/// re-laid out; any other construct is printed from its source text with
/// whitespace runs collapsed to one space.
pub struct Printer<'s> {
    source: &'s str,
}

impl<'s> Printer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    pub fn print(&self, root: &Node) -> String {
        let mut cursor = root.walk();
        let decls: Vec<Node> = root.named_children(&mut cursor).collect();

        let mut out = String::new();
        let mut previous: Option<(Node, &str)> = None;
        for (i, decl) in decls.iter().enumerate() {
            let token = declaration_token(&decls[i..]);
            if let Some((prev, prev_token)) = previous {
                let gap = decl
                    .start_position()
                    .row
                    .saturating_sub(prev.end_position().row);
                // A doc comment stays attached to the declaration right below it
                let newlines = if prev.kind() == "comment" && gap == 1 {
                    1
                } else {
                    let min = if prev_token != token || decl.kind() == "comment" {
                        2
                    } else {
                        1
                    };
                    gap.clamp(min, MAX_NEWLINES)
                };
                out.push_str(&"\n".repeat(newlines));
            }
            out.push_str(&self.top_level(decl));
            previous = Some((*decl, token));
        }

        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn top_level(&self, node: &Node) -> String {
        match node.kind() {
            "package_clause" => match named_children_of_kind(node, "package_identifier").first() {
                Some(name) => format!("package {}", self.text(name)),
                None => self.collapsed(node),
            },
            "import_declaration" => self.import_declaration(node),
            "type_declaration" => self.type_declaration(node),
            "function_declaration" | "method_declaration" => self.func_declaration(node),
            "comment" => self.text(node).trim_end().to_string(),
            _ => self.collapsed(node),
        }
    }

    fn import_declaration(&self, node: &Node) -> String {
        let lists = named_children_of_kind(node, "import_spec_list");
        if lists.is_empty() {
            if let Some(spec) = named_children_of_kind(node, "import_spec").first() {
                return format!("import {}", self.import_spec(spec));
            }
        }

        let specs: Vec<String> = lists
            .iter()
            .flat_map(|list| named_children_of_kind(list, "import_spec"))
            .map(|spec| format!("\t{}\n", self.import_spec(&spec)))
            .collect();

        if specs.is_empty() {
            "import ()".to_string()
        } else {
            format!("import (\n{})", specs.concat())
        }
    }

    fn import_spec(&self, spec: &Node) -> String {
        let path = spec
            .child_by_field_name("path")
            .map(|path| self.text(&path).to_string())
            .unwrap_or_default();
        match spec.child_by_field_name("name") {
            Some(name) => format!("{} {}", self.text(&name), path),
            None => path,
        }
    }

    fn type_declaration(&self, node: &Node) -> String {
        let mut specs = Vec::new();
        let mut cursor = node.walk();
        for spec in node.named_children(&mut cursor) {
            match spec.kind() {
                "type_spec" | "type_alias" => specs.push(spec),
                _ => return self.collapsed(node),
            }
        }

        let mut cursor = node.walk();
        let grouped = node.children(&mut cursor).any(|child| child.kind() == "(");
        if grouped {
            let body: String = specs
                .iter()
                .map(|spec| format!("\t{}\n", self.type_spec(spec, 1)))
                .collect();
            format!("type (\n{body})")
        } else {
            match specs.first() {
                Some(spec) => format!("type {}", self.type_spec(spec, 0)),
                None => self.collapsed(node),
            }
        }
    }

    fn type_spec(&self, spec: &Node, indent: usize) -> String {
        let (Some(name), Some(ty)) = (
            spec.child_by_field_name("name"),
            spec.child_by_field_name("type"),
        ) else {
            return self.collapsed(spec);
        };
        if spec.child_by_field_name("type_parameters").is_some() {
            return self.collapsed(spec);
        }

        let separator = if spec.kind() == "type_alias" { " = " } else { " " };
        format!(
            "{}{}{}",
            self.text(&name),
            separator,
            self.print_type(&ty, indent)
        )
    }

    fn print_type(&self, node: &Node, indent: usize) -> String {
        match node.kind() {
            "type_identifier" | "identifier" | "package_identifier" | "field_identifier" => {
                self.text(node).to_string()
            }
            "qualified_type" => match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    format!("{}.{}", self.text(&package), self.text(&name))
                }
                _ => self.collapsed(node),
            },
            "pointer_type" => match node.named_child(0) {
                Some(inner) => format!("*{}", self.print_type(&inner, indent)),
                None => self.collapsed(node),
            },
            "slice_type" => match node.child_by_field_name("element") {
                Some(elem) => format!("[]{}", self.print_type(&elem, indent)),
                None => self.collapsed(node),
            },
            "array_type" => match (
                node.child_by_field_name("length"),
                node.child_by_field_name("element"),
            ) {
                (Some(len), Some(elem)) => format!(
                    "[{}]{}",
                    self.expression(&len),
                    self.print_type(&elem, indent)
                ),
                _ => self.collapsed(node),
            },
            "function_type" => format!(
                "func{}",
                self.signature(
                    node.child_by_field_name("parameters"),
                    node.child_by_field_name("result"),
                    indent
                )
            ),
            "struct_type" => match named_children_of_kind(node, "field_declaration_list").first() {
                Some(fields) => self.struct_body(fields, indent),
                None => self.collapsed(node),
            },
            "interface_type" if node.named_child_count() == 0 => "interface{}".to_string(),
            "parenthesized_type" => match node.named_child(0) {
                Some(inner) => format!("({})", self.print_type(&inner, indent)),
                None => self.collapsed(node),
            },
            _ => self.collapsed(node),
        }
    }

    /// Struct fields one per line, types aligned on a common column
    fn struct_body(&self, list: &Node, indent: usize) -> String {
        let fields = named_children_of_kind(list, "field_declaration");
        if fields.is_empty() {
            return "struct{}".to_string();
        }

        let rows: Vec<(String, String)> = fields
            .iter()
            .map(|field| {
                let mut cursor = field.walk();
                let names: Vec<&str> = field
                    .children_by_field_name("name", &mut cursor)
                    .map(|name| self.text(&name))
                    .collect();
                let mut ty = field
                    .child_by_field_name("type")
                    .map(|ty| self.print_type(&ty, indent + 1))
                    .unwrap_or_else(|| self.collapsed(field));
                if let Some(tag) = field.child_by_field_name("tag") {
                    ty.push(' ');
                    ty.push_str(self.text(&tag));
                }
                (names.join(", "), ty)
            })
            .collect();

        let width = rows
            .iter()
            .map(|(names, _)| names.chars().count())
            .max()
            .unwrap_or(0);
        let field_indent = "\t".repeat(indent + 1);

        let mut out = String::from("struct {\n");
        for (names, ty) in rows {
            out.push_str(&field_indent);
            if names.is_empty() {
                out.push_str(&ty);
            } else {
                let padding = width - names.chars().count();
                out.push_str(&format!("{names}{} {ty}", " ".repeat(padding)));
            }
            out.push('\n');
        }
        out.push_str(&"\t".repeat(indent));
        out.push('}');
        out
    }

    /// `(params) results`; a lone unnamed result loses its parentheses and
    /// an empty result list disappears.
    fn signature(&self, params: Option<Node>, result: Option<Node>, indent: usize) -> String {
        let params = params
            .map(|list| self.parameter_list(&list, indent))
            .unwrap_or_default();

        let result = match result {
            None => String::new(),
            Some(list) if list.kind() == "parameter_list" => {
                let decls = self.parameter_declarations(&list);
                match decls.as_slice() {
                    [] => String::new(),
                    [single]
                        if single.kind() == "parameter_declaration"
                            && single.child_by_field_name("name").is_none() =>
                    {
                        match single.child_by_field_name("type") {
                            Some(ty) => format!(" {}", self.print_type(&ty, indent)),
                            None => format!(" ({})", self.parameter_list(&list, indent)),
                        }
                    }
                    _ => format!(" ({})", self.parameter_list(&list, indent)),
                }
            }
            Some(ty) => format!(" {}", self.print_type(&ty, indent)),
        };

        format!("({params}){result}")
    }

    fn parameter_declarations<'t>(&self, list: &Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|decl| {
                matches!(
                    decl.kind(),
                    "parameter_declaration" | "variadic_parameter_declaration"
                )
            })
            .collect()
    }

    fn parameter_list(&self, list: &Node, indent: usize) -> String {
        self.parameter_declarations(list)
            .iter()
            .map(|decl| {
                let mut cursor = decl.walk();
                let names: Vec<&str> = decl
                    .children_by_field_name("name", &mut cursor)
                    .map(|name| self.text(&name))
                    .collect();
                let ty = decl
                    .child_by_field_name("type")
                    .map(|ty| self.print_type(&ty, indent))
                    .unwrap_or_default();
                let ty = if decl.kind() == "variadic_parameter_declaration" {
                    format!("...{ty}")
                } else {
                    ty
                };
                if names.is_empty() {
                    ty
                } else {
                    format!("{} {}", names.join(", "), ty)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn func_declaration(&self, node: &Node) -> String {
        let Some(name) = node.child_by_field_name("name") else {
            return self.collapsed(node);
        };
        if node.child_by_field_name("type_parameters").is_some() {
            return self.collapsed(node);
        }

        let mut out = String::from("func ");
        if let Some(receiver) = node.child_by_field_name("receiver") {
            out.push_str(&format!("({}) ", self.parameter_list(&receiver, 0)));
        }
        out.push_str(self.text(&name));
        out.push_str(&self.signature(
            node.child_by_field_name("parameters"),
            node.child_by_field_name("result"),
            0,
        ));
        if let Some(body) = node.child_by_field_name("body") {
            out.push(' ');
            out.push_str(&self.block(&body, 0));
        }
        out
    }

    fn block(&self, body: &Node, indent: usize) -> String {
        let mut statements = Vec::new();
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            if child.kind() == "statement_list" {
                let mut inner = child.walk();
                statements.extend(child.named_children(&mut inner));
            } else {
                statements.push(child);
            }
        }

        let closing = "\t".repeat(indent);
        if statements.is_empty() {
            return format!("{{\n{closing}}}");
        }

        let statement_indent = "\t".repeat(indent + 1);
        let mut out = String::from("{\n");
        for statement in statements {
            out.push_str(&statement_indent);
            out.push_str(&self.statement(&statement));
            out.push('\n');
        }
        out.push_str(&closing);
        out.push('}');
        out
    }

    fn statement(&self, node: &Node) -> String {
        match node.kind() {
            "return_statement" => match named_children_of_kind(node, "expression_list").first() {
                Some(list) => format!("return {}", self.expression_list(list)),
                None => "return".to_string(),
            },
            "expression_statement" => match node.named_child(0) {
                Some(expr) => self.expression(&expr),
                None => self.collapsed(node),
            },
            "comment" => self.text(node).trim_end().to_string(),
            _ => self.collapsed(node),
        }
    }

    fn expression_list(&self, list: &Node) -> String {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .map(|expr| self.expression(&expr))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn expression(&self, node: &Node) -> String {
        match node.kind() {
            "identifier" | "field_identifier" | "int_literal" | "float_literal"
            | "imaginary_literal" | "rune_literal" | "interpreted_string_literal"
            | "raw_string_literal" | "nil" | "true" | "false" => self.text(node).to_string(),
            "selector_expression" => match (
                node.child_by_field_name("operand"),
                node.child_by_field_name("field"),
            ) {
                (Some(operand), Some(field)) => {
                    format!("{}.{}", self.expression(&operand), self.text(&field))
                }
                _ => self.collapsed(node),
            },
            "call_expression" => {
                let (Some(function), Some(arguments)) = (
                    node.child_by_field_name("function"),
                    node.child_by_field_name("arguments"),
                ) else {
                    return self.collapsed(node);
                };
                let mut cursor = arguments.walk();
                let spread = arguments
                    .children(&mut cursor)
                    .any(|child| child.kind() == "...");
                if spread {
                    return self.collapsed(node);
                }
                format!(
                    "{}({})",
                    self.expression(&function),
                    self.expression_list(&arguments)
                )
            }
            "parenthesized_expression" => match node.named_child(0) {
                Some(inner) => format!("({})", self.expression(&inner)),
                None => self.collapsed(node),
            },
            _ => self.collapsed(node),
        }
    }

    fn text(&self, node: &Node) -> &'s str {
        node_text(node, self.source)
    }

    fn collapsed(&self, node: &Node) -> String {
        self.text(node).split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
