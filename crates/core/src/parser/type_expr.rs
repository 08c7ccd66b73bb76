//! Reconstruction of Go type expressions from syntax-tree nodes

use super::utils::node_text;
use crate::types::TypeExpr;
use tracing::debug;
use tree_sitter::Node;

/// Node kinds Go calls basic literals; only these are kept as array lengths
const BASIC_LITERALS: &[&str] = &[
    "int_literal",
    "float_literal",
    "imaginary_literal",
    "rune_literal",
    "interpreted_string_literal",
    "raw_string_literal",
];

/// Rebuild the type written at `node`.
///
/// Anything outside identifiers, qualified identifiers, pointers, slices
/// and arrays becomes [`TypeExpr::Unrecognised`].
pub fn reconstruct_type(node: &Node, source: &str) -> TypeExpr {
    match node.kind() {
        "type_identifier" | "identifier" => TypeExpr::ident(node_text(node, source)),
        "qualified_type" => {
            match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    TypeExpr::qualified(node_text(&package, source), node_text(&name, source))
                }
                _ => TypeExpr::Unrecognised,
            }
        }
        "pointer_type" => match node.named_child(0) {
            Some(inner) => TypeExpr::pointer(reconstruct_type(&inner, source)),
            None => TypeExpr::Unrecognised,
        },
        "slice_type" => match node.child_by_field_name("element") {
            Some(elem) => TypeExpr::slice(reconstruct_type(&elem, source)),
            None => TypeExpr::Unrecognised,
        },
        "array_type" => {
            let Some(elem) = node.child_by_field_name("element") else {
                return TypeExpr::Unrecognised;
            };
            // A non-literal length such as `[N]T` collapses to the slice form
            let len = node
                .child_by_field_name("length")
                .filter(|len| BASIC_LITERALS.contains(&len.kind()))
                .map(|len| node_text(&len, source).to_string());
            TypeExpr::ArrayOrSlice {
                len,
                elem: Box::new(reconstruct_type(&elem, source)),
            }
        }
        other => {
            debug!(
                "Unsupported type form `{}` ({})",
                node_text(node, source),
                other
            );
            TypeExpr::Unrecognised
        }
    }
}
